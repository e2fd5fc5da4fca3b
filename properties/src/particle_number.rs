use crate::{Property, PropertyError};
use std::any::Any;
use tracing::info;

/// Particle counts and orbital occupations of the reference determinant.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleNumber {
    num_spatial_orbitals: usize,
    num_particles: (usize, usize),
    occupation_alpha: Vec<f64>,
    occupation_beta: Vec<f64>,
}

impl ParticleNumber {
    /// Aufbau occupations: the lowest `num_alpha` (`num_beta`) orbitals are filled.
    pub fn new(
        num_spatial_orbitals: usize,
        num_particles: (usize, usize),
    ) -> Result<Self, PropertyError> {
        let (num_alpha, num_beta) = num_particles;
        for count in [num_alpha, num_beta] {
            if count > num_spatial_orbitals {
                return Err(PropertyError::TooManyParticles {
                    num_particles: count,
                    num_orbitals: num_spatial_orbitals,
                });
            }
        }

        let occupations = |count: usize| {
            (0..num_spatial_orbitals)
                .map(|orbital| if orbital < count { 1.0 } else { 0.0 })
                .collect::<Vec<f64>>()
        };

        Ok(ParticleNumber {
            num_spatial_orbitals,
            num_particles,
            occupation_alpha: occupations(num_alpha),
            occupation_beta: occupations(num_beta),
        })
    }

    pub fn num_spatial_orbitals(&self) -> usize {
        self.num_spatial_orbitals
    }

    pub fn num_spin_orbitals(&self) -> usize {
        2 * self.num_spatial_orbitals
    }

    /// `(alpha, beta)` particle counts.
    pub fn num_particles(&self) -> (usize, usize) {
        self.num_particles
    }

    pub fn num_alpha(&self) -> usize {
        self.num_particles.0
    }

    pub fn num_beta(&self) -> usize {
        self.num_particles.1
    }

    pub fn occupation_alpha(&self) -> &[f64] {
        &self.occupation_alpha
    }

    pub fn occupation_beta(&self) -> &[f64] {
        &self.occupation_beta
    }
}

impl Property for ParticleNumber {
    fn name(&self) -> &str {
        "ParticleNumber"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn log(&self) {
        info!("{}:", self.name());
        info!("  {} spin orbitals", self.num_spin_orbitals());
        info!(
            "  {} alpha electrons, {} beta electrons",
            self.num_alpha(),
            self.num_beta()
        );
    }
}
