//! Configuration management for initial point calculations
//!
//! This module handles the YAML configuration structures and their defaults.

mod args;
mod system;

pub use args::Args;
pub use system::{CoefficientsInput, SystemInput, TensorInput, TwoBodyInput};

use crate::ansatz::Excitation;
use crate::initial_point_impl::{IndexConvention, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub system: SystemInput,
    pub ansatz: Option<AnsatzParams>,
    pub initial_point: Option<InitialPointParams>,
}

/// UCC ansatz parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnsatzParams {
    pub excitations: Option<String>, // "s", "d", "sd", "t", "q"
    pub max_spin_excitation: Option<usize>,
    /// Used instead of the generated excitations when given.
    pub excitation_list: Option<Vec<Excitation>>,
}

impl Default for AnsatzParams {
    fn default() -> Self {
        AnsatzParams {
            excitations: Some("sd".to_string()),
            max_spin_excitation: None,
            excitation_list: None,
        }
    }
}

impl AnsatzParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.excitations.is_none() {
            self.excitations = defaults.excitations;
        }
        self
    }
}

/// Initial point parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InitialPointParams {
    pub method: Option<String>, // "mp2" or "hf"
    pub threshold: Option<f64>,
    pub index_convention: Option<IndexConvention>,
}

impl Default for InitialPointParams {
    fn default() -> Self {
        InitialPointParams {
            method: Some("mp2".to_string()),
            threshold: Some(DEFAULT_THRESHOLD),
            index_convention: Some(IndexConvention::default()),
        }
    }
}

impl InitialPointParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.method.is_none() {
            self.method = defaults.method;
        }
        if self.threshold.is_none() {
            self.threshold = defaults.threshold;
        }
        if self.index_convention.is_none() {
            self.index_convention = defaults.index_convention;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.ansatz = Some(self.ansatz.take().unwrap_or_default().with_defaults());
        self.initial_point = Some(self.initial_point.take().unwrap_or_default().with_defaults());
        self
    }

    /// Get the requested excitation kinds of the UCC ansatz
    pub fn excitations(&self) -> String {
        self.ansatz
            .as_ref()
            .and_then(|a| a.excitations.clone())
            .unwrap_or_else(|| "sd".to_string())
    }

    pub fn max_spin_excitation(&self) -> Option<usize> {
        self.ansatz.as_ref().and_then(|a| a.max_spin_excitation)
    }

    /// Get the explicit excitation list, if any
    pub fn excitation_list(&self) -> Option<&[Excitation]> {
        self.ansatz
            .as_ref()
            .and_then(|a| a.excitation_list.as_deref())
    }

    /// Get the initial point method
    pub fn method(&self) -> String {
        self.initial_point
            .as_ref()
            .and_then(|p| p.method.clone())
            .unwrap_or_else(|| "mp2".to_string())
    }

    /// Get the amplitude threshold
    pub fn threshold(&self) -> f64 {
        self.initial_point
            .as_ref()
            .and_then(|p| p.threshold)
            .unwrap_or(DEFAULT_THRESHOLD)
    }

    pub fn index_convention(&self) -> IndexConvention {
        self.initial_point
            .as_ref()
            .and_then(|p| p.index_convention)
            .unwrap_or_default()
    }
}
