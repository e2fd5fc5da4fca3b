//! Error type shared by the initial point calculators.

use crate::ansatz::Excitation;
use properties::PropertyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InitialPointError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InitialPointError {
    /// A property kind is missing from the grouped property.
    #[error("the `{0}` cannot be obtained from the grouped property")]
    MissingProperty(&'static str),

    #[error("the two-body MO electronic integrals cannot be obtained from the grouped property")]
    MissingTwoBodyIntegrals,

    #[error("the orbital energies cannot be obtained from the grouped property")]
    MissingOrbitalEnergies,

    #[error(
        "only restricted-spin setups are supported: \
         alpha and beta spin molecular orbitals must be identical"
    )]
    UnrestrictedSpin,

    #[error(
        "the excitation list has not been set directly or via the ansatz; \
         set the ansatz or pass it to compute, or set the excitation list directly"
    )]
    ExcitationListUnavailable,

    #[error("the grouped property has not been set")]
    PropertyUnavailable,

    #[error(
        "excitation {position} {excitation} does not address the {num_occ} occupied and \
         {num_vir} virtual orbitals of the T2 amplitudes"
    )]
    ExcitationOutOfRange {
        position: usize,
        excitation: Excitation,
        num_occ: usize,
        num_vir: usize,
    },

    #[error("two-body integrals of shape {found:?} do not match {num_orbitals} orbital energies")]
    ShapeMismatch {
        found: Vec<usize>,
        num_orbitals: usize,
    },

    #[error("{num_occ} occupied orbitals exceed the {num_orbitals} molecular orbitals")]
    TooManyOccupied { num_occ: usize, num_orbitals: usize },

    #[error("unknown excitation kind `{0}`, expected a combination of s, d, t and q")]
    InvalidExcitationKind(String),

    #[error("unknown index convention `{0}`, expected occupied_modulo or spatial_modulo")]
    InvalidIndexConvention(String),

    #[error(transparent)]
    Property(#[from] PropertyError),
}
