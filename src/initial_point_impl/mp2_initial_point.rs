use super::cache::{CacheSlot, InputChange, SlotState};
use super::convention::IndexConvention;
use super::InitialPoint;
use crate::ansatz::{Excitation, ExcitationAnsatz};
use crate::error::{InitialPointError, Result};
use crate::mp2_impl::compute_mp2;
use nalgebra::DVector;
use ndarray::{Array4, Ix4};
use properties::{allclose, ElectronicBasis, ElectronicEnergy, GroupedProperty, ParticleNumber};
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_THRESHOLD: f64 = 1e-12;

/// T2 amplitudes of one property bundle and the energies derived from them.
#[derive(Debug, Clone, PartialEq)]
struct Mp2Amplitudes {
    t2: Array4<f64>,
    num_occ: usize,
    num_vir: usize,
    energy_correction: f64,
    total_energy: f64,
}

impl Mp2Amplitudes {
    /// Extract the MP2 inputs from `grouped_property` and run the kernel.
    fn from_grouped_property(grouped_property: &GroupedProperty) -> Result<Self> {
        let electronic_energy = grouped_property
            .get_property::<ElectronicEnergy>()
            .ok_or(InitialPointError::MissingProperty("ElectronicEnergy"))?;

        let two_body = electronic_energy
            .get_electronic_integral(ElectronicBasis::MO, 2)
            .ok_or(InitialPointError::MissingTwoBodyIntegrals)?;

        let integral_matrix = two_body.get_matrix(0);
        if !allclose(&integral_matrix, &two_body.get_matrix(2)) {
            return Err(InitialPointError::UnrestrictedSpin);
        }

        let orbital_energies = electronic_energy
            .orbital_energies()
            .ok_or(InitialPointError::MissingOrbitalEnergies)?;

        let reference_energy = electronic_energy.reference_energy().unwrap_or(0.0);

        let particle_number = grouped_property
            .get_property::<ParticleNumber>()
            .ok_or(InitialPointError::MissingProperty("ParticleNumber"))?;
        let num_occ = particle_number.num_particles().0;

        let num_orbitals = orbital_energies.len();
        let shape_mismatch = || InitialPointError::ShapeMismatch {
            found: integral_matrix.shape().to_vec(),
            num_orbitals,
        };
        let integral_matrix = integral_matrix
            .view()
            .into_dimensionality::<Ix4>()
            .map_err(|_| shape_mismatch())?;
        if integral_matrix.shape().iter().any(|&dim| dim != num_orbitals) {
            return Err(shape_mismatch());
        }
        if num_occ > num_orbitals {
            return Err(InitialPointError::TooManyOccupied {
                num_occ,
                num_orbitals,
            });
        }

        let (t2, energy_correction) = compute_mp2(num_occ, integral_matrix, orbital_energies);

        Ok(Mp2Amplitudes {
            t2,
            num_occ,
            num_vir: num_orbitals - num_occ,
            energy_correction,
            total_energy: reference_energy + energy_correction,
        })
    }

    fn num_orbitals(&self) -> usize {
        self.num_occ + self.num_vir
    }
}

/// Initial point for an excitation-operator ansatz from MP2 double amplitudes.
///
/// Inputs are replaced through setters; every setter invalidates exactly the
/// cached results that depend on it (see [`InputChange::invalidates`]). The
/// amplitudes are recomputed eagerly when the grouped property changes, the
/// parameter vector lazily on [`to_array`](InitialPoint::to_array).
#[derive(Debug)]
pub struct Mp2InitialPoint {
    threshold: f64,
    index_convention: IndexConvention,
    ansatz: Option<Box<dyn ExcitationAnsatz>>,
    excitation_list: Option<Vec<Excitation>>,
    grouped_property: Option<Arc<GroupedProperty>>,
    amplitudes: Option<Mp2Amplitudes>,
    parameters: CacheSlot<DVector<f64>>,
}

impl Default for Mp2InitialPoint {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Mp2InitialPoint {
    pub fn new(threshold: f64) -> Self {
        Mp2InitialPoint {
            threshold: normalize_threshold(threshold),
            index_convention: IndexConvention::default(),
            ansatz: None,
            excitation_list: None,
            grouped_property: None,
            amplitudes: None,
            parameters: CacheSlot::Absent,
        }
    }

    pub fn with_index_convention(mut self, index_convention: IndexConvention) -> Self {
        self.index_convention = index_convention;
        self
    }

    /// Amplitudes with an absolute value not above the threshold are zeroed.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Store `|threshold|`; NaN becomes `0.0`.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.invalidate(InputChange::Threshold);
        self.threshold = normalize_threshold(threshold);
    }

    pub fn index_convention(&self) -> IndexConvention {
        self.index_convention
    }

    pub fn set_index_convention(&mut self, index_convention: IndexConvention) {
        self.invalidate(InputChange::IndexConvention);
        self.index_convention = index_convention;
    }

    /// `None` before a grouped property has been set.
    pub fn t2_amplitudes(&self) -> Option<&Array4<f64>> {
        self.amplitudes.as_ref().map(|amplitudes| &amplitudes.t2)
    }

    pub fn num_occupied(&self) -> Option<usize> {
        self.amplitudes.as_ref().map(|amplitudes| amplitudes.num_occ)
    }

    /// MP2 energy correction, `0.0` before a grouped property has been set.
    pub fn energy_correction(&self) -> f64 {
        self.amplitudes
            .as_ref()
            .map_or(0.0, |amplitudes| amplitudes.energy_correction)
    }

    pub fn parameter_state(&self) -> SlotState {
        self.parameters.state()
    }

    fn invalidate(&mut self, change: InputChange) {
        let invalidation = change.invalidates();
        if invalidation.parameters {
            self.parameters.invalidate();
        }
        if invalidation.amplitudes {
            self.amplitudes = None;
        }
        debug!(
            "{:?} changed, parameters now {:?}",
            change,
            self.parameters.state()
        );
    }
}

impl InitialPoint for Mp2InitialPoint {
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

    fn set_grouped_property(&mut self, grouped_property: Arc<GroupedProperty>) -> Result<()> {
        let amplitudes = Mp2Amplitudes::from_grouped_property(&grouped_property)?;

        self.invalidate(InputChange::GroupedProperty);
        info!(
            "MP2 amplitudes of `{}`: {} occupied, {} virtual orbitals",
            grouped_property.name(),
            amplitudes.num_occ,
            amplitudes.num_vir
        );
        info!("  Energy correction: {:.12} Eh", amplitudes.energy_correction);
        info!("  Total energy:      {:.12} Eh", amplitudes.total_energy);

        self.amplitudes = Some(amplitudes);
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

        let parameters = project_amplitudes(
            self.excitation_list.as_deref(),
            self.amplitudes.as_ref(),
            self.threshold,
            self.index_convention,
        )?;
        self.parameters.store(parameters);
        Ok(())
    }

    fn to_array(&mut self) -> Result<&DVector<f64>> {
        let excitation_list = self.excitation_list.as_deref();
        let amplitudes = self.amplitudes.as_ref();
        let threshold = self.threshold;
        let index_convention = self.index_convention;

        self.parameters.get_or_try_insert_with(|| {
            project_amplitudes(excitation_list, amplitudes, threshold, index_convention)
        })
    }

    fn total_energy(&self) -> f64 {
        self.amplitudes
            .as_ref()
            .map_or(0.0, |amplitudes| amplitudes.total_energy)
    }
}

fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.abs()
    }
}

/// One parameter per excitation: the T2 amplitude a double excitation
/// addresses if it exceeds `threshold` in magnitude, `0.0` otherwise.
fn project_amplitudes(
    excitation_list: Option<&[Excitation]>,
    amplitudes: Option<&Mp2Amplitudes>,
    threshold: f64,
    index_convention: IndexConvention,
) -> Result<DVector<f64>> {
    let excitation_list = excitation_list.ok_or(InitialPointError::ExcitationListUnavailable)?;
    let amplitudes = amplitudes.ok_or(InitialPointError::PropertyUnavailable)?;

    let positions = locate_amplitudes(excitation_list, amplitudes, index_convention)?;

    let parameters = positions.iter().map(|position| match position {
        Some(index) => {
            let amplitude = amplitudes.t2[*index];
            if amplitude.abs() > threshold {
                amplitude
            } else {
                0.0
            }
        }
        None => 0.0,
    });
    let parameters = DVector::from_iterator(positions.len(), parameters);

    debug!(
        "{} of {} parameters above threshold {:e}",
        parameters.iter().filter(|&&p| p != 0.0).count(),
        parameters.len(),
        threshold
    );
    Ok(parameters)
}

/// T2 position of every double excitation, `None` for the other orders.
fn locate_amplitudes(
    excitation_list: &[Excitation],
    amplitudes: &Mp2Amplitudes,
    index_convention: IndexConvention,
) -> Result<Vec<Option<[usize; 4]>>> {
    let num_spin_orbitals = 2 * amplitudes.num_orbitals();

    excitation_list
        .iter()
        .enumerate()
        .map(|(position, excitation)| {
            let out_of_range = || InitialPointError::ExcitationOutOfRange {
                position,
                excitation: excitation.clone(),
                num_occ: amplitudes.num_occ,
                num_vir: amplitudes.num_vir,
            };

            if excitation.indices().any(|index| index >= num_spin_orbitals) {
                return Err(out_of_range());
            }
            if !excitation.is_double() {
                return Ok(None);
            }
            index_convention
                .locate(excitation, amplitudes.num_occ, amplitudes.num_vir)
                .map(Some)
                .ok_or_else(out_of_range)
        })
        .collect()
}
