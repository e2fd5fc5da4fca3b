use super::InitialPointOutcome;
use initial_point::ansatz::Excitation;
use serde::Serialize;
use tracing::info;

/// Result file contents.
#[derive(Debug, Serialize)]
pub struct InitialPointReport {
    pub method: String,
    pub total_energy: f64,
    pub energy_correction: Option<f64>,
    pub threshold: Option<f64>,
    pub parameters: Vec<ParameterEntry>,
}

#[derive(Debug, Serialize)]
pub struct ParameterEntry {
    pub excitation: Excitation,
    pub value: f64,
}

impl From<&InitialPointOutcome> for InitialPointReport {
    fn from(outcome: &InitialPointOutcome) -> Self {
        InitialPointReport {
            method: outcome.method.to_string(),
            total_energy: outcome.total_energy,
            energy_correction: outcome.energy_correction,
            threshold: outcome.threshold,
            parameters: outcome
                .excitations
                .iter()
                .zip(outcome.parameters.iter())
                .map(|(excitation, &value)| ParameterEntry {
                    excitation: excitation.clone(),
                    value,
                })
                .collect(),
        }
    }
}

pub fn report_summary(outcome: &InitialPointOutcome) {
    info!("\n===========================================");
    info!("        Initial Point Summary ({})", outcome.method.to_uppercase());
    info!("===========================================");
    info!("Parameters:");
    for (k, (excitation, value)) in outcome
        .excitations
        .iter()
        .zip(outcome.parameters.iter())
        .enumerate()
    {
        info!("  {:>3} {:<24} {:+.10}", k, excitation.to_string(), value);
    }
    let nonzero = outcome.parameters.iter().filter(|&&p| p != 0.0).count();
    info!("Non-zero parameters:       {} of {}", nonzero, outcome.parameters.len());
    if let Some(correction) = outcome.energy_correction {
        info!("MP2 correlation energy:    {:.10} au", correction);
    }
    info!("Total energy:              {:.10} au", outcome.total_energy);
    info!("===========================================\n");
}
