//! Core MP2 amplitude kernel

use nalgebra::{DMatrix, DVector};
use ndarray::{s, Array4, ArrayView4};
use rayon::prelude::*;
use tracing::{debug, info};

/// Compute the T2 amplitudes and the MP2 energy correction.
///
/// # Arguments
///
/// * `num_occ` - Number of occupied molecular orbitals
/// * `integral_matrix` - Two-body MO integrals `(pq|rs)`, shape `(N, N, N, N)`
/// * `orbital_energies` - One energy per molecular orbital, length `N`
///
/// # Returns
///
/// `t2[i, j, a, b]` (i, j occupied, a, b virtual, shape
/// `(num_occ, num_occ, num_vir, num_vir)`) and the energy correction.
///
/// Degenerate occupied and virtual orbital energies give zero denominators;
/// the resulting non-finite amplitudes are returned as they are.
///
/// # Panics
///
/// If `num_occ` exceeds `N` or the integrals are smaller than `(N, N, N, N)`.
pub fn compute_mp2(
    num_occ: usize,
    integral_matrix: ArrayView4<'_, f64>,
    orbital_energies: &DVector<f64>,
) -> (Array4<f64>, f64) {
    let num_orbitals = orbital_energies.len();
    let num_vir = num_orbitals - num_occ;

    debug!(
        "MP2 amplitudes for {} occupied and {} virtual orbitals ({} terms)",
        num_occ,
        num_vir,
        num_occ * num_occ * num_vir * num_vir
    );

    // energy_deltas[(i, a)] = ε_i - ε_a
    let energy_deltas = DMatrix::from_fn(num_occ, num_vir, |i, a| {
        orbital_energies[i] - orbital_energies[num_occ + a]
    });

    // double_deltas[[i, a, j, b]] = ε_i + ε_j - ε_a - ε_b
    let double_deltas =
        Array4::from_shape_fn((num_occ, num_vir, num_occ, num_vir), |(i, a, j, b)| {
            energy_deltas[(i, a)] + energy_deltas[(j, b)]
        });

    // Integrals over occupied and virtual indices instead of MO indices.
    let integral_ovov = integral_matrix.slice(s![
        ..num_occ,
        num_occ..num_orbitals,
        ..num_occ,
        num_occ..num_orbitals
    ]);

    let t2_amplitudes = (&integral_ovov / &double_deltas)
        .permuted_axes([0, 2, 1, 3])
        .as_standard_layout()
        .into_owned();

    let (direct, exchange) = (0..num_occ)
        .into_par_iter()
        .map(|i| {
            let mut direct = 0.0;
            let mut exchange = 0.0;
            for j in 0..num_occ {
                for a in 0..num_vir {
                    for b in 0..num_vir {
                        let t = t2_amplitudes[[i, j, a, b]];
                        direct += t * integral_ovov[[i, a, j, b]];
                        exchange += t * integral_ovov[[i, b, j, a]];
                    }
                }
            }
            (direct, exchange)
        })
        .reduce(|| (0.0, 0.0), |(d1, x1), (d2, x2)| (d1 + d2, x1 + x2));

    let energy_correction = 2.0 * direct - exchange;

    debug!("  direct term:   {:.12} Eh", direct);
    debug!("  exchange term: {:.12} Eh", exchange);
    info!("MP2 energy correction: {:.12} Eh", energy_correction);

    (t2_amplitudes, energy_correction)
}
