//! One- and two-body electronic integrals with their spin channels.

use crate::{ElectronicBasis, ElectronicBasisTransform, PropertyError};
use nalgebra::DMatrix;
use ndarray::{
    Array2, Array4, ArrayBase, ArrayD, ArrayView2, ArrayView4, ArrayViewD, CowArray, Data,
    Dimension, Ix2, Ix4, IxDyn, Zip,
};
use tracing::debug;

const RTOL: f64 = 1e-5;
const ATOL: f64 = 1e-8;

/// Element-wise near-equality with NumPy `allclose` semantics
/// (`|a - b| <= atol + rtol * |b|`). Arrays of different shape are never close.
pub fn allclose<S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> bool
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    a.shape() == b.shape()
        && Zip::from(a)
            .and(b)
            .all(|&x, &y| x == y || (x - y).abs() <= ATOL + RTOL * y.abs())
}

/// A dense tensor from row-major `data`.
pub fn tensor_from_vec(shape: &[usize], data: Vec<f64>) -> Result<ArrayD<f64>, PropertyError> {
    let len = data.len();
    ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| PropertyError::TensorData {
        len,
        shape: shape.to_vec(),
    })
}

/// Electronic integrals in a given basis.
///
/// One-body integrals carry `[alpha, beta]` matrices, two-body integrals carry
/// `[alpha-alpha, beta-alpha, beta-beta, alpha-beta]` tensors in chemists'
/// notation, so `get_matrix(0)[[p, q, r, s]] = (pq|rs)`. Only the alpha
/// (alpha-alpha) channel is mandatory; the others are filled on access.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronicIntegrals {
    basis: ElectronicBasis,
    num_body_terms: usize,
    alpha: ArrayD<f64>,
    spin: Vec<Option<ArrayD<f64>>>,
}

impl ElectronicIntegrals {
    pub fn one_body(
        basis: ElectronicBasis,
        alpha: Array2<f64>,
        beta: Option<Array2<f64>>,
    ) -> Result<Self, PropertyError> {
        Self::new(
            basis,
            1,
            alpha.into_dyn(),
            vec![beta.map(|beta| beta.into_dyn())],
        )
    }

    pub fn two_body(
        basis: ElectronicBasis,
        alpha_alpha: Array4<f64>,
        beta_alpha: Option<Array4<f64>>,
        beta_beta: Option<Array4<f64>>,
        alpha_beta: Option<Array4<f64>>,
    ) -> Result<Self, PropertyError> {
        Self::new(
            basis,
            2,
            alpha_alpha.into_dyn(),
            vec![
                beta_alpha.map(|m| m.into_dyn()),
                beta_beta.map(|m| m.into_dyn()),
                alpha_beta.map(|m| m.into_dyn()),
            ],
        )
    }

    /// Integrals from tensors of any dimensionality. `spin` lists the optional
    /// channels after alpha in the order of [`get_matrix`](Self::get_matrix).
    pub fn new(
        basis: ElectronicBasis,
        num_body_terms: usize,
        alpha: ArrayD<f64>,
        spin: Vec<Option<ArrayD<f64>>>,
    ) -> Result<Self, PropertyError> {
        let kind = match num_body_terms {
            1 => "one-body",
            2 => "two-body",
            n => return Err(PropertyError::UnsupportedBodyTerms(n)),
        };

        let expected = 2 * num_body_terms;
        let shape = alpha.shape();
        if shape.len() != expected || shape.iter().any(|&dim| dim != shape[0]) {
            return Err(PropertyError::NotSquare {
                kind,
                expected,
                shape: shape.to_vec(),
            });
        }

        for other in spin.iter().flatten() {
            if other.shape() != alpha.shape() {
                return Err(PropertyError::SpinShapeMismatch {
                    alpha: alpha.shape().to_vec(),
                    other: other.shape().to_vec(),
                });
            }
        }

        Ok(ElectronicIntegrals {
            basis,
            num_body_terms,
            alpha,
            spin,
        })
    }

    pub fn basis(&self) -> ElectronicBasis {
        self.basis
    }

    pub fn num_body_terms(&self) -> usize {
        self.num_body_terms
    }

    /// Number of orbitals along each axis.
    pub fn num_orbitals(&self) -> usize {
        self.alpha.shape()[0]
    }

    /// Number of spin channels this kind of integral carries (2 or 4).
    pub fn num_spin_channels(&self) -> usize {
        1 + self.spin.len()
    }

    /// Whether only the alpha channel was supplied.
    pub fn is_alpha_only(&self) -> bool {
        self.spin.iter().all(Option::is_none)
    }

    /// Spin channel `index` of the integrals.
    ///
    /// Missing channels are filled the restricted way: beta mirrors alpha, and
    /// the two-body alpha-beta channel is the transpose of beta-alpha.
    ///
    /// # Panics
    ///
    /// If `index` is not below [`num_spin_channels`](Self::num_spin_channels).
    pub fn get_matrix(&self, index: usize) -> CowArray<'_, f64, IxDyn> {
        assert!(
            index < self.num_spin_channels(),
            "spin channel {} requested from {}-body integrals",
            index,
            self.num_body_terms
        );

        if index == 0 {
            return CowArray::from(self.alpha.view());
        }
        if let Some(matrix) = &self.spin[index - 1] {
            return CowArray::from(matrix.view());
        }

        if self.num_body_terms == 2 && index == 3 {
            let transposed = self.get_matrix(1).t().to_owned();
            return CowArray::from(transposed);
        }

        CowArray::from(self.alpha.view())
    }

    /// Express these integrals in the final basis of `transform`.
    pub fn transform_basis(
        &self,
        transform: &ElectronicBasisTransform,
    ) -> Result<Self, PropertyError> {
        if self.basis != transform.initial_basis {
            return Err(PropertyError::BasisMismatch {
                expected: transform.initial_basis,
                found: self.basis,
            });
        }
        let ca = &transform.coeff_alpha;
        let cb = transform.coeff_beta.as_ref().unwrap_or(ca);
        for coeff in [ca, cb] {
            if coeff.nrows() != self.num_orbitals() {
                return Err(PropertyError::TransformDimension {
                    expected: coeff.nrows(),
                    found: self.num_orbitals(),
                });
            }
        }

        debug!(
            "Transforming {}-body integrals from the {} to the {} basis",
            self.num_body_terms, transform.initial_basis, transform.final_basis
        );

        let restricted = transform.is_alpha_equal_beta() && self.is_alpha_only();

        match self.num_body_terms {
            1 => {
                let alpha = transform_one_body(as_ix2(self.get_matrix(0).view())?, ca);
                let beta = if restricted {
                    None
                } else {
                    Some(transform_one_body(as_ix2(self.get_matrix(1).view())?, cb))
                };
                Self::one_body(transform.final_basis, alpha, beta)
            }
            _ => {
                let alpha_alpha =
                    transform_two_body(as_ix4(self.get_matrix(0).view())?, [ca, ca, ca, ca]);
                if restricted {
                    return Self::two_body(transform.final_basis, alpha_alpha, None, None, None);
                }
                let beta_alpha =
                    transform_two_body(as_ix4(self.get_matrix(1).view())?, [cb, cb, ca, ca]);
                let beta_beta =
                    transform_two_body(as_ix4(self.get_matrix(2).view())?, [cb, cb, cb, cb]);
                let alpha_beta =
                    transform_two_body(as_ix4(self.get_matrix(3).view())?, [ca, ca, cb, cb]);
                Self::two_body(
                    transform.final_basis,
                    alpha_alpha,
                    Some(beta_alpha),
                    Some(beta_beta),
                    Some(alpha_beta),
                )
            }
        }
    }
}

fn as_ix2(view: ArrayViewD<'_, f64>) -> Result<ArrayView2<'_, f64>, PropertyError> {
    let shape = view.shape().to_vec();
    view.into_dimensionality::<Ix2>()
        .map_err(|_| PropertyError::NotSquare {
            kind: "one-body",
            expected: 2,
            shape,
        })
}

fn as_ix4(view: ArrayViewD<'_, f64>) -> Result<ArrayView4<'_, f64>, PropertyError> {
    let shape = view.shape().to_vec();
    view.into_dimensionality::<Ix4>()
        .map_err(|_| PropertyError::NotSquare {
            kind: "two-body",
            expected: 4,
            shape,
        })
}

/// h'[p, q] = Σ_μν C[μ, p] h[μ, ν] C[ν, q]
fn transform_one_body(matrix: ArrayView2<'_, f64>, coeff: &DMatrix<f64>) -> Array2<f64> {
    let n = coeff.nrows();
    Array2::from_shape_fn((coeff.ncols(), coeff.ncols()), |(p, q)| {
        let mut value = 0.0;
        for mu in 0..n {
            for nu in 0..n {
                value += coeff[(mu, p)] * matrix[[mu, nu]] * coeff[(nu, q)];
            }
        }
        value
    })
}

/// (pq|rs) = Σ_μνλσ C_μp C_νq C_λr C_σs (μν|λσ), done one axis at a time.
fn transform_two_body(tensor: ArrayView4<'_, f64>, coeffs: [&DMatrix<f64>; 4]) -> Array4<f64> {
    let mut transformed = tensor.to_owned();
    for (axis, coeff) in coeffs.iter().enumerate() {
        transformed = transform_axis(&transformed, coeff, axis);
    }
    transformed
}

fn transform_axis(tensor: &Array4<f64>, coeff: &DMatrix<f64>, axis: usize) -> Array4<f64> {
    let mut shape = tensor.raw_dim();
    shape[axis] = coeff.ncols();

    Array4::from_shape_fn(shape, |(p, q, r, s)| {
        let mut index = [p, q, r, s];
        let target = index[axis];
        let mut value = 0.0;
        for mu in 0..coeff.nrows() {
            let c = coeff[(mu, target)];
            if c.abs() < 1e-14 {
                continue;
            }
            index[axis] = mu;
            value += c * tensor[index];
        }
        value
    })
}
