// MP2 initial points for VQE excitation-operator ansatzes

pub mod ansatz;
pub mod config;
pub mod error;
pub mod initial_point_impl;
pub mod io;
pub mod mp2_impl;
#[cfg(test)]
mod test_utils;

pub use ansatz::{Excitation, ExcitationAnsatz, Ucc};
pub use error::{InitialPointError, Result};
pub use initial_point_impl::{HfInitialPoint, IndexConvention, InitialPoint, Mp2InitialPoint};
pub use mp2_impl::compute_mp2;
