//! Excitation-operator ansatz capability
//!
//! The initial point calculators only need two things from an ansatz: a way
//! to make it generate its excitations, and read access to the resulting
//! ordered excitation list. Anything implementing [`ExcitationAnsatz`] can be
//! used, the [`Ucc`] generator shipped here included.

mod generation;
mod ucc;
#[cfg(test)]
mod tests;

pub use generation::generate_fermionic_excitations;
pub use ucc::{ExcitationKinds, Ucc};

use serde::{Deserialize, Serialize};
use std::fmt;

/// An excitation moving particles out of `occupied` into `unoccupied`
/// spin orbitals.
///
/// Serialized as the pair `[occupied, unoccupied]`, e.g. `[[0, 2], [1, 3]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    from = "(Vec<usize>, Vec<usize>)",
    into = "(Vec<usize>, Vec<usize>)"
)]
pub struct Excitation {
    pub occupied: Vec<usize>,
    pub unoccupied: Vec<usize>,
}

impl Excitation {
    pub fn new(occupied: Vec<usize>, unoccupied: Vec<usize>) -> Self {
        Excitation {
            occupied,
            unoccupied,
        }
    }

    pub fn single(occupied: usize, unoccupied: usize) -> Self {
        Excitation::new(vec![occupied], vec![unoccupied])
    }

    pub fn double(occupied: [usize; 2], unoccupied: [usize; 2]) -> Self {
        Excitation::new(occupied.to_vec(), unoccupied.to_vec())
    }

    /// Number of particles moved.
    pub fn order(&self) -> usize {
        self.occupied.len()
    }

    /// Only excitations with exactly two occupied and two unoccupied indices
    /// carry an MP2 amplitude.
    pub fn is_double(&self) -> bool {
        self.occupied.len() == 2 && self.unoccupied.len() == 2
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.occupied.iter().chain(self.unoccupied.iter()).copied()
    }
}

impl From<(Vec<usize>, Vec<usize>)> for Excitation {
    fn from((occupied, unoccupied): (Vec<usize>, Vec<usize>)) -> Self {
        Excitation::new(occupied, unoccupied)
    }
}

impl From<Excitation> for (Vec<usize>, Vec<usize>) {
    fn from(excitation: Excitation) -> Self {
        (excitation.occupied, excitation.unoccupied)
    }
}

impl fmt::Display for Excitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.occupied, self.unoccupied)
    }
}

/// What an initial point needs from an excitation-operator ansatz.
pub trait ExcitationAnsatz: fmt::Debug {
    /// Generate the excitations (and whatever operators depend on them).
    /// The excitation list is not available before this has run.
    fn build_operators(&mut self);

    /// The ordered excitation list, `None` until the operators are built.
    fn excitation_list(&self) -> Option<&[Excitation]>;
}
