//! Property bundle construction from the system section of a configuration

use crate::config::{CoefficientsInput, SystemInput, TensorInput, TwoBodyInput};
use color_eyre::eyre::{eyre, Result, WrapErr};
use nalgebra::{DMatrix, DVector};
use ndarray::ArrayD;
use properties::{
    tensor_from_vec, ElectronicBasis, ElectronicBasisTransform, ElectronicEnergy,
    ElectronicIntegrals, GroupedProperty, ParticleNumber,
};
use tracing::{debug, info};

/// Build the property bundle of `system`.
///
/// Two-body integrals are read in the MO basis, or transformed from the AO
/// basis when `two_body_ao` and `mo_coefficients` are given instead. Data
/// absent from `system` stays absent from the bundle.
pub fn build_grouped_property(system: &SystemInput) -> Result<GroupedProperty> {
    let mut grouped_property = GroupedProperty::new(system.name());

    if let Some(electronic_energy) = build_electronic_energy(system)? {
        grouped_property.add_property(electronic_energy);
    }

    if let Some(num_particles) = system.num_particles() {
        let num_orbitals = num_spatial_orbitals(system)
            .ok_or_else(|| eyre!("Number of orbitals unknown: give orbital energies or integrals"))?;
        let particle_number = ParticleNumber::new(num_orbitals, num_particles)
            .wrap_err("Invalid particle numbers")?;
        grouped_property.add_property(particle_number);
    }

    grouped_property.log();
    Ok(grouped_property)
}

fn build_electronic_energy(system: &SystemInput) -> Result<Option<ElectronicEnergy>> {
    let has_data = system.two_body_mo.is_some()
        || system.two_body_ao.is_some()
        || system.orbital_energies.is_some()
        || system.reference_energy.is_some()
        || system.nuclear_repulsion_energy.is_some();
    if !has_data {
        return Ok(None);
    }

    let mut electronic_energy = ElectronicEnergy::default();

    if let Some(two_body) = &system.two_body_ao {
        let integrals = two_body_integrals(ElectronicBasis::AO, two_body)
            .wrap_err("Invalid AO two-body integrals")?;
        electronic_energy.add_electronic_integral(integrals);
    }

    match (&system.two_body_mo, &system.mo_coefficients) {
        (Some(two_body), _) => {
            let integrals = two_body_integrals(ElectronicBasis::MO, two_body)
                .wrap_err("Invalid MO two-body integrals")?;
            electronic_energy.add_electronic_integral(integrals);
        }
        (None, Some(coefficients)) => {
            let transform = basis_transform(coefficients)?;
            info!(
                "Transforming integrals from the {} to the {} basis",
                transform.initial_basis, transform.final_basis
            );
            electronic_energy
                .transform_basis(&transform)
                .wrap_err("Failed to transform the integrals to the MO basis")?;
        }
        (None, None) => debug!("No MO two-body integrals given"),
    }

    if let Some(energy) = system.reference_energy {
        electronic_energy = electronic_energy.with_reference_energy(energy);
    }
    if let Some(energy) = system.nuclear_repulsion_energy {
        electronic_energy = electronic_energy.with_nuclear_repulsion_energy(energy);
    }
    if let Some(energies) = &system.orbital_energies {
        electronic_energy =
            electronic_energy.with_orbital_energies(DVector::from_column_slice(energies));
    }

    Ok(Some(electronic_energy))
}

fn tensor(input: &TensorInput) -> Result<ArrayD<f64>> {
    Ok(tensor_from_vec(&input.shape, input.data.clone())?)
}

fn two_body_integrals(basis: ElectronicBasis, input: &TwoBodyInput) -> Result<ElectronicIntegrals> {
    let spin = [&input.beta_alpha, &input.beta, &input.alpha_beta]
        .into_iter()
        .map(|channel| channel.as_ref().map(tensor).transpose())
        .collect::<Result<Vec<_>>>()?;

    Ok(ElectronicIntegrals::new(basis, 2, tensor(&input.alpha)?, spin)?)
}

fn matrix(input: &TensorInput) -> Result<DMatrix<f64>> {
    match input.shape.as_slice() {
        &[rows, cols] if rows * cols == input.data.len() => {
            Ok(DMatrix::from_row_slice(rows, cols, &input.data))
        }
        shape => Err(eyre!(
            "Expected a matrix, got shape {:?} with {} elements",
            shape,
            input.data.len()
        )),
    }
}

fn basis_transform(input: &CoefficientsInput) -> Result<ElectronicBasisTransform> {
    let coeff_alpha = matrix(&input.alpha).wrap_err("Invalid alpha MO coefficients")?;
    let coeff_beta = input
        .beta
        .as_ref()
        .map(matrix)
        .transpose()
        .wrap_err("Invalid beta MO coefficients")?;

    Ok(ElectronicBasisTransform::new(
        ElectronicBasis::AO,
        ElectronicBasis::MO,
        coeff_alpha,
        coeff_beta,
    ))
}

fn num_spatial_orbitals(system: &SystemInput) -> Option<usize> {
    system
        .orbital_energies
        .as_ref()
        .map(Vec::len)
        .or_else(|| {
            system
                .two_body_mo
                .as_ref()
                .and_then(|two_body| two_body.alpha.shape.first().copied())
        })
        .or_else(|| {
            system
                .mo_coefficients
                .as_ref()
                .and_then(|coefficients| coefficients.alpha.shape.get(1).copied())
        })
}
