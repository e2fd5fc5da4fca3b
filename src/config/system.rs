//! Molecular system section of the configuration file

use serde::{Deserialize, Serialize};

/// Data of one molecular system, as produced by an electronic structure
/// driver. Every field is optional; what is missing stays missing in the
/// property bundle built from it.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SystemInput {
    pub name: Option<String>,
    /// `[alpha, beta]` electron counts.
    pub num_particles: Option<[usize; 2]>,
    pub reference_energy: Option<f64>,
    pub nuclear_repulsion_energy: Option<f64>,
    pub orbital_energies: Option<Vec<f64>>,
    pub two_body_mo: Option<TwoBodyInput>,
    pub two_body_ao: Option<TwoBodyInput>,
    pub mo_coefficients: Option<CoefficientsInput>,
}

/// A dense tensor in row-major order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TensorInput {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

/// Two-body integrals in chemists' notation, one tensor per spin channel.
/// Only `alpha` (alpha-alpha) is required.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TwoBodyInput {
    pub alpha: TensorInput,
    pub beta_alpha: Option<TensorInput>,
    /// beta-beta
    pub beta: Option<TensorInput>,
    pub alpha_beta: Option<TensorInput>,
}

/// MO coefficients `C[μ, p]`, AO rows and MO columns.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CoefficientsInput {
    pub alpha: TensorInput,
    pub beta: Option<TensorInput>,
}

impl SystemInput {
    pub fn name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "system".to_string())
    }

    pub fn num_particles(&self) -> Option<(usize, usize)> {
        self.num_particles.map(|[alpha, beta]| (alpha, beta))
    }
}
