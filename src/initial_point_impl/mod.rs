//! Initial points for variational excitation-operator ansatzes
//!
//! An initial point turns an excitation list (set directly or taken from an
//! ansatz) and a molecular property bundle into one starting parameter per
//! excitation.
//!
//! # MP2
//!
//! [`Mp2InitialPoint`] uses the restricted closed-shell MP2 double
//! amplitudes
//!
//! ```text
//! t_ij^ab = (ia|jb) / (ε_i + ε_j - ε_a - ε_b)
//! ```
//!
//! as the parameter of the double excitation `(i, j) -> (a, b)`. Singles and
//! higher excitations start at zero, as do doubles whose amplitude is not
//! above the threshold. The total energy is the reference energy of the
//! bundle plus the MP2 correction.
//!
//! # Caching
//!
//! Results are cached in [`CacheSlot`]s. Replacing an input invalidates
//! only what depends on it, following the table of
//! [`InputChange::invalidates`]:
//!
//! | input | parameters | amplitudes and energies |
//! |-------|------------|-------------------------|
//! | threshold, index convention | stale | kept |
//! | excitation list, ansatz | stale | kept |
//! | grouped property | stale | recomputed |

mod cache;
mod convention;
mod hf_initial_point;
mod mp2_initial_point;

pub use cache::{CacheSlot, InputChange, Invalidation, SlotState};
pub use convention::IndexConvention;
pub use hf_initial_point::HfInitialPoint;
pub use mp2_initial_point::{Mp2InitialPoint, DEFAULT_THRESHOLD};

use crate::ansatz::{Excitation, ExcitationAnsatz};
use crate::error::Result;
use nalgebra::DVector;
use properties::GroupedProperty;
use std::sync::Arc;

/// Starting parameters of an excitation-operator ansatz.
pub trait InitialPoint {
    fn ansatz(&self) -> Option<&dyn ExcitationAnsatz>;

    /// Build the ansatz operators and take over its excitation list.
    fn set_ansatz(&mut self, ansatz: Box<dyn ExcitationAnsatz>);

    fn excitation_list(&self) -> Option<&[Excitation]>;

    fn set_excitation_list(&mut self, excitation_list: Vec<Excitation>);

    fn grouped_property(&self) -> Option<&Arc<GroupedProperty>>;

    /// Read what the initial point needs from the bundle. On error nothing
    /// is changed.
    fn set_grouped_property(&mut self, grouped_property: Arc<GroupedProperty>) -> Result<()>;

    /// Apply the given inputs, then compute the parameter vector.
    fn compute(
        &mut self,
        ansatz: Option<Box<dyn ExcitationAnsatz>>,
        grouped_property: Option<Arc<GroupedProperty>>,
    ) -> Result<()>;

    /// The parameter vector, computed first if it is not cached.
    fn to_array(&mut self) -> Result<&DVector<f64>>;

    /// Energy of the state the initial parameters describe.
    fn total_energy(&self) -> f64;
}
