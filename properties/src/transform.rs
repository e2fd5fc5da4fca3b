use crate::ElectronicBasis;
use nalgebra::DMatrix;

/// Orbital coefficients mapping integrals from one basis into another.
///
/// Column `p` of a coefficient matrix holds the expansion of final orbital `p`
/// in the initial basis, as produced by a Hartree-Fock calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicBasisTransform {
    pub initial_basis: ElectronicBasis,
    pub final_basis: ElectronicBasis,
    pub coeff_alpha: DMatrix<f64>,
    /// Beta coefficients; `None` means they equal the alpha ones.
    pub coeff_beta: Option<DMatrix<f64>>,
}

impl ElectronicBasisTransform {
    pub fn new(
        initial_basis: ElectronicBasis,
        final_basis: ElectronicBasis,
        coeff_alpha: DMatrix<f64>,
        coeff_beta: Option<DMatrix<f64>>,
    ) -> Self {
        ElectronicBasisTransform {
            initial_basis,
            final_basis,
            coeff_alpha,
            coeff_beta,
        }
    }

    /// Whether the alpha and beta coefficients coincide.
    pub fn is_alpha_equal_beta(&self) -> bool {
        match &self.coeff_beta {
            None => true,
            Some(beta) => beta.shape() == self.coeff_alpha.shape()
                && beta
                    .iter()
                    .zip(self.coeff_alpha.iter())
                    .all(|(b, a)| (a - b).abs() <= 1e-8 + 1e-5 * a.abs()),
        }
    }
}
