//! Tests for the MP2 amplitude kernel

use super::compute_mp2;
use crate::test_utils::{h2_eri, h2_orbital_energies, random_eri, random_orbital_energies};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::DVector;
use ndarray::Array4;

/// E_MP2 = Σ_{ijab} (ia|jb) [2 (ia|jb) - (ib|ja)] / (ε_i + ε_j - ε_a - ε_b), term by term
fn explicit_mp2_energy(num_occ: usize, eri: &Array4<f64>, energies: &DVector<f64>) -> f64 {
    let n = energies.len();
    let mut energy = 0.0;
    for i in 0..num_occ {
        for j in 0..num_occ {
            for a in num_occ..n {
                for b in num_occ..n {
                    let ia_jb = eri[[i, a, j, b]];
                    let ib_ja = eri[[i, b, j, a]];
                    let denominator = energies[i] + energies[j] - energies[a] - energies[b];
                    energy += ia_jb * (2.0 * ia_jb - ib_ja) / denominator;
                }
            }
        }
    }
    energy
}

#[test]
fn test_amplitude_shape() {
    for (num_occ, n) in [(1, 2), (2, 4), (1, 4), (3, 5), (2, 2), (0, 3)] {
        let eri = random_eri(n as u64, n);
        let energies = random_orbital_energies(17, num_occ, n);
        let (t2, _) = compute_mp2(num_occ, eri.view(), &energies);
        assert_eq!(t2.dim(), (num_occ, num_occ, n - num_occ, n - num_occ));
        assert!(t2.is_standard_layout());
    }
}

#[test]
fn test_single_pair_golden_values() {
    // One occupied, one virtual orbital: t = (01|01) / (2 (ε_0 - ε_1))
    let mut eri = Array4::from_elem((2, 2, 2, 2), 0.1);
    eri[[0, 1, 0, 1]] = 0.18;
    let energies = DVector::from_vec(vec![-1.0, 0.5]);

    let (t2, energy_correction) = compute_mp2(1, eri.view(), &energies);

    assert_relative_eq!(t2[[0, 0, 0, 0]], -0.06, max_relative = 1e-12);
    assert_relative_eq!(energy_correction, -0.0108, max_relative = 1e-12);
}

#[test]
fn test_h2_minimal_basis() {
    let (t2, energy_correction) = compute_mp2(1, h2_eri().view(), &h2_orbital_energies());

    assert_relative_eq!(t2[[0, 0, 0, 0]], -0.07260712855426511, max_relative = 1e-12);
    assert_relative_eq!(energy_correction, -0.013163672406888264, max_relative = 1e-12);
}

#[test]
fn test_energy_matches_explicit_summation() {
    for (seed, num_occ, n) in [(1, 2, 4), (2, 1, 3), (3, 3, 6), (4, 2, 5)] {
        let eri = random_eri(seed, n);
        let energies = random_orbital_energies(seed + 100, num_occ, n);

        let (t2, energy_correction) = compute_mp2(num_occ, eri.view(), &energies);

        assert_relative_eq!(
            energy_correction,
            explicit_mp2_energy(num_occ, &eri, &energies),
            max_relative = 1e-10
        );

        // t2 is indexed (i, j, a, b) while the integrals are (ia|jb)
        let (i, j, a, b) = (num_occ - 1, 0, n - num_occ - 1, 0);
        let expected = eri[[i, num_occ + a, j, num_occ + b]]
            / (energies[i] + energies[j] - energies[num_occ + a] - energies[num_occ + b]);
        assert_relative_eq!(t2[[i, j, a, b]], expected, max_relative = 1e-12);
    }
}

#[test]
fn test_amplitudes_are_pair_symmetric() {
    // (ia|jb) = (jb|ia) makes t_ij^ab = t_ji^ba
    let eri = random_eri(21, 5);
    let energies = random_orbital_energies(22, 2, 5);
    let (t2, _) = compute_mp2(2, eri.view(), &energies);

    for ((i, j, a, b), &t) in t2.indexed_iter() {
        assert_abs_diff_eq!(t, t2[[j, i, b, a]], epsilon = 1e-14);
    }
}

#[test]
fn test_energy_invariant_under_orbital_relabeling() {
    let (num_occ, n) = (2, 5);
    let eri = random_eri(31, n);
    let energies = random_orbital_energies(32, num_occ, n);
    let (_, reference) = compute_mp2(num_occ, eri.view(), &energies);

    // Swap the two occupied orbitals and reverse the virtual block.
    let relabel = [1, 0, 4, 3, 2];
    let relabeled_eri = Array4::from_shape_fn((n, n, n, n), |(p, q, r, s)| {
        eri[[relabel[p], relabel[q], relabel[r], relabel[s]]]
    });
    let relabeled_energies = DVector::from_fn(n, |p, _| energies[relabel[p]]);

    let (_, energy_correction) = compute_mp2(num_occ, relabeled_eri.view(), &relabeled_energies);
    assert_relative_eq!(energy_correction, reference, max_relative = 1e-12);
}

#[test]
fn test_no_correlation_without_virtual_or_occupied_orbitals() {
    let eri = random_eri(41, 3);
    let energies = random_orbital_energies(42, 3, 3);
    let (t2, energy_correction) = compute_mp2(3, eri.view(), &energies);
    assert_eq!(t2.len(), 0);
    assert_eq!(energy_correction, 0.0);

    let (t2, energy_correction) = compute_mp2(0, eri.view(), &energies);
    assert_eq!(t2.len(), 0);
    assert_eq!(energy_correction, 0.0);
}

#[test]
fn test_degenerate_orbitals_give_non_finite_amplitudes() {
    let mut eri = Array4::zeros((2, 2, 2, 2));
    eri[[0, 1, 0, 1]] = 0.2;
    let energies = DVector::from_vec(vec![0.3, 0.3]);

    let (t2, energy_correction) = compute_mp2(1, eri.view(), &energies);

    assert!(!t2[[0, 0, 0, 0]].is_finite());
    assert!(!energy_correction.is_finite());
}
