//! The electronic energy of a molecular problem.

use crate::{ElectronicBasis, ElectronicBasisTransform, ElectronicIntegrals, Property, PropertyError};
use nalgebra::DVector;
use std::any::Any;
use tracing::info;

/// Electronic integrals plus the scalar data of a mean-field reference.
///
/// Integrals are keyed by their basis and number of body terms; adding a
/// second set with the same key replaces the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElectronicEnergy {
    integrals: Vec<ElectronicIntegrals>,
    nuclear_repulsion_energy: Option<f64>,
    reference_energy: Option<f64>,
    orbital_energies: Option<DVector<f64>>,
}

impl ElectronicEnergy {
    pub fn new(integrals: Vec<ElectronicIntegrals>) -> Self {
        let mut energy = ElectronicEnergy::default();
        for integral in integrals {
            energy.add_electronic_integral(integral);
        }
        energy
    }

    pub fn with_reference_energy(mut self, reference_energy: f64) -> Self {
        self.reference_energy = Some(reference_energy);
        self
    }

    pub fn with_nuclear_repulsion_energy(mut self, nuclear_repulsion_energy: f64) -> Self {
        self.nuclear_repulsion_energy = Some(nuclear_repulsion_energy);
        self
    }

    pub fn with_orbital_energies(mut self, orbital_energies: DVector<f64>) -> Self {
        self.orbital_energies = Some(orbital_energies);
        self
    }

    pub fn add_electronic_integral(&mut self, integral: ElectronicIntegrals) {
        let key = (integral.basis(), integral.num_body_terms());
        match self
            .integrals
            .iter_mut()
            .find(|existing| (existing.basis(), existing.num_body_terms()) == key)
        {
            Some(existing) => *existing = integral,
            None => self.integrals.push(integral),
        }
    }

    pub fn get_electronic_integral(
        &self,
        basis: ElectronicBasis,
        num_body_terms: usize,
    ) -> Option<&ElectronicIntegrals> {
        self.integrals
            .iter()
            .find(|integral| integral.basis() == basis && integral.num_body_terms() == num_body_terms)
    }

    pub fn electronic_integrals(&self) -> &[ElectronicIntegrals] {
        &self.integrals
    }

    /// Add the transformed counterpart of every integral that lives in the
    /// initial basis of `transform`.
    pub fn transform_basis(
        &mut self,
        transform: &ElectronicBasisTransform,
    ) -> Result<(), PropertyError> {
        let transformed = self
            .integrals
            .iter()
            .filter(|integral| integral.basis() == transform.initial_basis)
            .map(|integral| integral.transform_basis(transform))
            .collect::<Result<Vec<_>, _>>()?;

        for integral in transformed {
            self.add_electronic_integral(integral);
        }
        Ok(())
    }

    pub fn nuclear_repulsion_energy(&self) -> Option<f64> {
        self.nuclear_repulsion_energy
    }

    /// Total energy of the mean-field reference, typically Hartree-Fock.
    pub fn reference_energy(&self) -> Option<f64> {
        self.reference_energy
    }

    pub fn orbital_energies(&self) -> Option<&DVector<f64>> {
        self.orbital_energies.as_ref()
    }
}

impl Property for ElectronicEnergy {
    fn name(&self) -> &str {
        "ElectronicEnergy"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn log(&self) {
        info!("{}:", self.name());
        for integral in &self.integrals {
            info!(
                "  {}-body integrals in the {} basis over {} orbitals",
                integral.num_body_terms(),
                integral.basis(),
                integral.num_orbitals()
            );
        }
        if let Some(energy) = self.nuclear_repulsion_energy {
            info!("  Nuclear repulsion energy: {:.10} au", energy);
        }
        if let Some(energy) = self.reference_energy {
            info!("  Reference energy: {:.10} au", energy);
        }
        if let Some(energies) = &self.orbital_energies {
            info!("  Orbital energies: {:?}", energies.as_slice());
        }
    }
}
