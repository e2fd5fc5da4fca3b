use super::cache::{CacheSlot, InputChange, SlotState};
use super::InitialPoint;
use crate::ansatz::{Excitation, ExcitationAnsatz};
use crate::error::{InitialPointError, Result};
use nalgebra::DVector;
use properties::{ElectronicEnergy, GroupedProperty};
use std::sync::Arc;
use tracing::{debug, warn};

/// Hartree-Fock initial point: every excitation starts at zero, so the
/// ansatz prepares the reference determinant.
#[derive(Debug, Default)]
pub struct HfInitialPoint {
    ansatz: Option<Box<dyn ExcitationAnsatz>>,
    excitation_list: Option<Vec<Excitation>>,
    grouped_property: Option<Arc<GroupedProperty>>,
    reference_energy: f64,
    parameters: CacheSlot<DVector<f64>>,
}

impl HfInitialPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter_state(&self) -> SlotState {
        self.parameters.state()
    }

    fn invalidate(&mut self, change: InputChange) {
        if change.invalidates().parameters {
            self.parameters.invalidate();
        }
    }
}

impl InitialPoint for HfInitialPoint {
    fn ansatz(&self) -> Option<&dyn ExcitationAnsatz> {
        self.ansatz.as_deref()
    }

    fn set_ansatz(&mut self, mut ansatz: Box<dyn ExcitationAnsatz>) {
        ansatz.build_operators();
        self.invalidate(InputChange::Ansatz);
        self.excitation_list = ansatz.excitation_list().map(<[Excitation]>::to_vec);
        self.ansatz = Some(ansatz);
    }

    fn excitation_list(&self) -> Option<&[Excitation]> {
        self.excitation_list.as_deref()
    }

    fn set_excitation_list(&mut self, excitation_list: Vec<Excitation>) {
        self.invalidate(InputChange::ExcitationList);
        self.excitation_list = Some(excitation_list);
    }

    fn grouped_property(&self) -> Option<&Arc<GroupedProperty>> {
        self.grouped_property.as_ref()
    }

    /// Only the reference energy is read; a bundle without one is accepted
    /// and gives a total energy of zero.
    fn set_grouped_property(&mut self, grouped_property: Arc<GroupedProperty>) -> Result<()> {
        let reference_energy = grouped_property
            .get_property::<ElectronicEnergy>()
            .and_then(ElectronicEnergy::reference_energy);
        if reference_energy.is_none() {
            warn!(
                "No reference energy in `{}`, the HF total energy is set to 0",
                grouped_property.name()
            );
        }

        self.invalidate(InputChange::GroupedProperty);
        self.reference_energy = reference_energy.unwrap_or(0.0);
        self.grouped_property = Some(grouped_property);
        Ok(())
    }

    fn compute(
        &mut self,
        ansatz: Option<Box<dyn ExcitationAnsatz>>,
        grouped_property: Option<Arc<GroupedProperty>>,
    ) -> Result<()> {
        if let Some(ansatz) = ansatz {
            self.set_ansatz(ansatz);
        }
        if let Some(grouped_property) = grouped_property {
            self.set_grouped_property(grouped_property)?;
        }

        let parameters = zero_parameters(self.excitation_list.as_deref())?;
        self.parameters.store(parameters);
        Ok(())
    }

    fn to_array(&mut self) -> Result<&DVector<f64>> {
        let excitation_list = self.excitation_list.as_deref();
        self.parameters
            .get_or_try_insert_with(|| zero_parameters(excitation_list))
    }

    fn total_energy(&self) -> f64 {
        self.reference_energy
    }
}

fn zero_parameters(excitation_list: Option<&[Excitation]>) -> Result<DVector<f64>> {
    let excitation_list = excitation_list.ok_or(InitialPointError::ExcitationListUnavailable)?;
    debug!("HF initial point with {} parameters", excitation_list.len());
    Ok(DVector::zeros(excitation_list.len()))
}
