use super::Excitation;
use itertools::{iproduct, Itertools};
use std::collections::HashSet;

/// Spin-preserving fermionic excitations of a given order.
///
/// Spin orbitals are in block order: alpha orbitals occupy `[0, N)` and beta
/// orbitals `[N, 2N)`, each block filled from the bottom. Excitations of order
/// `num_excitations` are built from every combination of that many distinct
/// single excitations; the occupied and unoccupied indices of each excitation
/// are sorted and duplicates are dropped. With `max_spin_excitation` set,
/// excitations moving more than that many particles of either spin are
/// skipped.
pub fn generate_fermionic_excitations(
    num_excitations: usize,
    num_spatial_orbitals: usize,
    num_particles: (usize, usize),
    max_spin_excitation: Option<usize>,
) -> Vec<Excitation> {
    if num_excitations == 0 {
        return Vec::new();
    }

    let (num_alpha, num_beta) = num_particles;
    let n = num_spatial_orbitals;

    let singles: Vec<(usize, usize)> = iproduct!(0..num_alpha, num_alpha..n)
        .chain(iproduct!(n..n + num_beta, n + num_beta..2 * n))
        .collect();

    let mut visited = HashSet::new();
    let mut excitations = Vec::new();

    for combination in singles.iter().combinations(num_excitations) {
        let (mut occupied, mut unoccupied): (Vec<usize>, Vec<usize>) =
            combination.into_iter().copied().unzip();

        let distinct: HashSet<usize> = occupied.iter().chain(unoccupied.iter()).copied().collect();
        if distinct.len() != 2 * num_excitations {
            continue;
        }

        if let Some(max) = max_spin_excitation {
            let num_alpha_moved = occupied.iter().filter(|&&index| index < n).count();
            let num_beta_moved = num_excitations - num_alpha_moved;
            if num_alpha_moved > max || num_beta_moved > max {
                continue;
            }
        }

        occupied.sort_unstable();
        unoccupied.sort_unstable();
        let excitation = Excitation::new(occupied, unoccupied);
        if visited.insert(excitation.clone()) {
            excitations.push(excitation);
        }
    }

    excitations
}
