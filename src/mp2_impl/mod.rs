//! MP2 (Møller-Plesset perturbation theory, second order) amplitudes
//!
//! This module computes restricted closed-shell MP2 double amplitudes and
//! the MP2 energy correction from molecular-orbital two-electron integrals.
//!
//! # Theory
//!
//! For occupied orbitals i, j and virtual orbitals a, b:
//!
//! t_ij^ab = (ia|jb) / (ε_i + ε_j - ε_a - ε_b)
//!
//! E_MP2 = Σ_{ijab} t_ij^ab [2 (ia|jb) - (ib|ja)]
//!
//! where (ia|jb) are two-electron integrals in chemists' notation and ε are
//! the orbital energies.
//!
//! # Usage
//!
//! ```ignore
//! let (t2, energy_correction) = compute_mp2(num_occ, integrals.view(), &orbital_energies);
//! assert_eq!(t2.dim(), (num_occ, num_occ, num_vir, num_vir));
//! ```

mod mp2;
#[cfg(test)]
mod tests;

pub use mp2::compute_mp2;
