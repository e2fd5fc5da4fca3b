use super::MethodSelection;
use color_eyre::eyre::{eyre, Result, WrapErr};
use initial_point::ansatz::{Excitation, ExcitationKinds, Ucc};
use initial_point::config::Config;
use initial_point::{HfInitialPoint, InitialPoint, Mp2InitialPoint};
use nalgebra::DVector;
use properties::{GroupedProperty, ParticleNumber};
use std::sync::Arc;
use tracing::info;

pub struct InitialPointOutcome {
    pub method: &'static str,
    pub excitations: Vec<Excitation>,
    pub parameters: DVector<f64>,
    pub total_energy: f64,
    pub energy_correction: Option<f64>,
    pub threshold: Option<f64>,
}

pub fn run_initial_point(
    method: MethodSelection,
    config: &Config,
    grouped_property: Arc<GroupedProperty>,
) -> Result<InitialPointOutcome> {
    match method {
        MethodSelection::Mp2 {
            threshold,
            index_convention,
        } => {
            info!("\n===========================================");
            info!("       Starting MP2 Initial Point");
            info!("===========================================");
            info!("Amplitude threshold: {:e}", threshold);
            info!("Index convention: {}", index_convention);

            let mut initial_point =
                Mp2InitialPoint::new(threshold).with_index_convention(index_convention);
            compute_initial_point(&mut initial_point, config, grouped_property)?;

            Ok(InitialPointOutcome {
                method: "mp2",
                excitations: excitations_of(&initial_point),
                parameters: initial_point.to_array()?.clone(),
                total_energy: initial_point.total_energy(),
                energy_correction: Some(initial_point.energy_correction()),
                threshold: Some(initial_point.threshold()),
            })
        }
        MethodSelection::Hf => {
            info!("\n===========================================");
            info!("       Starting HF Initial Point");
            info!("===========================================");

            let mut initial_point = HfInitialPoint::new();
            compute_initial_point(&mut initial_point, config, grouped_property)?;

            Ok(InitialPointOutcome {
                method: "hf",
                excitations: excitations_of(&initial_point),
                parameters: initial_point.to_array()?.clone(),
                total_energy: initial_point.total_energy(),
                energy_correction: None,
                threshold: None,
            })
        }
    }
}

/// Use the explicit excitation list of the configuration, or a UCC ansatz
/// matching the particle number of the system.
fn compute_initial_point<P: InitialPoint>(
    initial_point: &mut P,
    config: &Config,
    grouped_property: Arc<GroupedProperty>,
) -> Result<()> {
    let result = match config.excitation_list() {
        Some(excitation_list) => {
            info!("Using {} configured excitations", excitation_list.len());
            initial_point.set_excitation_list(excitation_list.to_vec());
            initial_point.compute(None, Some(grouped_property))
        }
        None => {
            let ansatz = build_ansatz(config, &grouped_property)?;
            initial_point.compute(Some(Box::new(ansatz)), Some(grouped_property))
        }
    };
    result.wrap_err("Initial point calculation failed")
}

fn build_ansatz(config: &Config, grouped_property: &GroupedProperty) -> Result<Ucc> {
    let particle_number = grouped_property
        .get_property::<ParticleNumber>()
        .ok_or_else(|| eyre!("The UCC ansatz needs the particle numbers of the system"))?;
    let excitations: ExcitationKinds = config.excitations().parse()?;

    Ok(Ucc::new(
        particle_number.num_spatial_orbitals(),
        particle_number.num_particles(),
        excitations,
    )
    .with_max_spin_excitation(config.max_spin_excitation()))
}

fn excitations_of<P: InitialPoint>(initial_point: &P) -> Vec<Excitation> {
    initial_point
        .excitation_list()
        .map(<[Excitation]>::to_vec)
        .unwrap_or_default()
}
