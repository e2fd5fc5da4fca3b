//! Shared fixtures for unit tests

use crate::ansatz::Excitation;
use nalgebra::DVector;
use ndarray::Array4;
use properties::{ElectronicBasis, ElectronicEnergy, ElectronicIntegrals, GroupedProperty, ParticleNumber};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Random two-electron integrals with the 8-fold permutational symmetry of
/// real orbitals: (pq|rs) = (qp|rs) = (pq|sr) = (rs|pq) = ...
pub fn random_eri(seed: u64, n: usize) -> Array4<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let raw = Array4::from_shape_fn((n, n, n, n), |_| rng.gen_range(-0.3..0.3));
    Array4::from_shape_fn((n, n, n, n), |(p, q, r, s)| {
        (raw[[p, q, r, s]]
            + raw[[q, p, r, s]]
            + raw[[p, q, s, r]]
            + raw[[q, p, s, r]]
            + raw[[r, s, p, q]]
            + raw[[s, r, p, q]]
            + raw[[r, s, q, p]]
            + raw[[s, r, q, p]])
            / 8.0
    })
}

/// Occupied energies in [-2, -0.5), virtual ones in [0.2, 1.5): never degenerate
/// across the occupied/virtual boundary.
pub fn random_orbital_energies(seed: u64, num_occ: usize, n: usize) -> DVector<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut energies: Vec<f64> = (0..n)
        .map(|p| {
            if p < num_occ {
                rng.gen_range(-2.0..-0.5)
            } else {
                rng.gen_range(0.2..1.5)
            }
        })
        .collect();
    energies[..num_occ].sort_by(|a, b| a.total_cmp(b));
    energies[num_occ..].sort_by(|a, b| a.total_cmp(b));
    DVector::from_vec(energies)
}

/// H2 in a minimal basis at 0.735 Å, MO integrals in chemists' notation.
pub fn h2_eri() -> Array4<f64> {
    let mut eri = Array4::zeros((2, 2, 2, 2));
    eri[[0, 0, 0, 0]] = 0.6757;
    eri[[1, 1, 1, 1]] = 0.6986;
    eri[[0, 0, 1, 1]] = 0.6645;
    eri[[1, 1, 0, 0]] = 0.6645;
    for (p, q, r, s) in [
        (0, 1, 0, 1),
        (0, 1, 1, 0),
        (1, 0, 0, 1),
        (1, 0, 1, 0),
    ] {
        eri[[p, q, r, s]] = 0.1813;
    }
    eri
}

pub fn h2_orbital_energies() -> DVector<f64> {
    DVector::from_vec(vec![-0.5782, 0.6703])
}

pub const H2_REFERENCE_ENERGY: f64 = -1.1167;

/// A complete restricted-spin property bundle.
pub fn grouped_property(
    eri: Array4<f64>,
    orbital_energies: DVector<f64>,
    num_particles: (usize, usize),
    reference_energy: Option<f64>,
) -> Arc<GroupedProperty> {
    let num_orbitals = orbital_energies.len();
    let integrals =
        ElectronicIntegrals::two_body(ElectronicBasis::MO, eri, None, None, None).unwrap();
    let mut energy = ElectronicEnergy::new(vec![integrals]).with_orbital_energies(orbital_energies);
    if let Some(reference_energy) = reference_energy {
        energy = energy.with_reference_energy(reference_energy);
    }

    Arc::new(
        GroupedProperty::new("test system")
            .with_property(energy)
            .with_property(ParticleNumber::new(num_orbitals, num_particles).unwrap()),
    )
}

pub fn h2_grouped_property() -> Arc<GroupedProperty> {
    grouped_property(
        h2_eri(),
        h2_orbital_energies(),
        (1, 1),
        Some(H2_REFERENCE_ENERGY),
    )
}

pub fn h2_excitations() -> Vec<Excitation> {
    vec![
        Excitation::single(0, 1),
        Excitation::single(2, 3),
        Excitation::double([0, 2], [1, 3]),
    ]
}
