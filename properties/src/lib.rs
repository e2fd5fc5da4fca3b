//! Electronic-structure properties consumed by the initial point calculators.
//!
//! A [`GroupedProperty`] bundles the individual properties of a molecular
//! problem. The initial point code looks up the [`ElectronicEnergy`] (integrals,
//! orbital energies, reference energy) and the [`ParticleNumber`] by type.

pub mod bases;
pub mod electronic_energy;
pub mod grouped_property;
pub mod integrals;
pub mod particle_number;
pub mod property;
pub mod transform;


pub use bases::ElectronicBasis;
pub use electronic_energy::ElectronicEnergy;
pub use grouped_property::GroupedProperty;
pub use integrals::{allclose, tensor_from_vec, ElectronicIntegrals};
pub use particle_number::ParticleNumber;
pub use property::Property;
pub use transform::ElectronicBasisTransform;

use thiserror::Error;

/// Errors raised while building or transforming properties.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropertyError {
    #[error("{kind} integrals must have {expected} square axes, got shape {shape:?}")]
    NotSquare {
        kind: &'static str,
        expected: usize,
        shape: Vec<usize>,
    },
    #[error("spin matrices disagree in shape: alpha {alpha:?}, other {other:?}")]
    SpinShapeMismatch { alpha: Vec<usize>, other: Vec<usize> },
    #[error("only one- and two-body integrals are supported, got {0}-body")]
    UnsupportedBodyTerms(usize),
    #[error("cannot transform {found} integrals with a transform from the {expected} basis")]
    BasisMismatch {
        expected: ElectronicBasis,
        found: ElectronicBasis,
    },
    #[error("transform expects {expected} orbitals in the initial basis, integrals have {found}")]
    TransformDimension { expected: usize, found: usize },
    #[error("{num_particles} particles do not fit into {num_orbitals} spatial orbitals")]
    TooManyParticles {
        num_particles: usize,
        num_orbitals: usize,
    },
    #[error("tensor data of length {len} does not fit shape {shape:?}")]
    TensorData { len: usize, shape: Vec<usize> },
}
