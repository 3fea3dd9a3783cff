//! Laplace noise for count release.
//!
//! Perturbing each cell of a count tensor with independent Laplace(0, b)
//! noise is the Laplace mechanism: with `b = 1/ε` a single-row change moves
//! one cell by 1, so the release is ε-DP for that cell. No budget is tracked
//! here; choosing `b` is the caller's business.
//!
//! Sampling uses the inverse CDF: for `u ~ Uniform(-1/2, 1/2)`,
//!
//! ```text
//! x = -b * sgn(u) * ln(1 - 2|u|)
//! ```
//!
//! ## References
//!
//! - Dwork, McSherry, Nissim, Smith (2006): *Calibrating Noise to Sensitivity
//!   in Private Data Analysis*.

use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension, IxDyn, Zip};
use rand::distr::{Distribution, Open01};
use rand::Rng;

use crate::error::{Error, Result};
use crate::fields::allocatable_cells;

/// The Laplace distribution centered at zero with scale `b`.
///
/// Mean 0, variance `2b²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace {
    scale: f64,
}

impl Laplace {
    /// Laplace(0, `scale`).
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` unless `scale` is finite and > 0.
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            tracing::debug!(scale, "rejected noise scale");
            return Err(Error::InvalidInput(format!(
                "noise scale must be finite and > 0 (got {scale})"
            )));
        }
        Ok(Self { scale })
    }

    /// The scale parameter `b`.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for Laplace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Open interval keeps ln away from 0.
        let u: f64 = Open01.sample(rng);
        let u = u - 0.5;
        -self.scale * u.signum() * (-2.0f64).mul_add(u.abs(), 1.0).ln()
    }
}

/// Draw a tensor of Laplace(0, `scale`) noise with shape `shape`, using the
/// thread-local RNG.
pub fn draw_laplace(scale: f64, shape: &[usize]) -> Result<ArrayD<f64>> {
    let mut rng = rand::rng();
    draw_laplace_with_rng(scale, shape, &mut rng)
}

/// Draw a noise tensor using a caller-supplied RNG.
///
/// Cells are filled in row-major order, so a seeded RNG gives a reproducible
/// tensor.
///
/// # Errors
/// Returns `Error::InvalidInput` if `scale` is not finite and positive, or if
/// `shape` describes more cells than can be allocated.
pub fn draw_laplace_with_rng<R: Rng + ?Sized>(
    scale: f64,
    shape: &[usize],
    rng: &mut R,
) -> Result<ArrayD<f64>> {
    let dist = Laplace::new(scale)?;
    if allocatable_cells::<f64>(shape).is_none() {
        tracing::debug!(?shape, "rejected oversized noise shape");
        return Err(Error::InvalidInput(format!("noise shape {shape:?} is too large")));
    }
    Ok(ArrayD::from_shape_simple_fn(IxDyn(shape), || dist.sample(rng)))
}

/// Add `noise` to `counts` cell by cell.
///
/// The result is real-valued: cells may be negative or fractional.
///
/// # Errors
/// Returns `Error::InvalidInput` if the two shapes differ.
pub fn perturb<S, T, D>(counts: &ArrayBase<S, D>, noise: &ArrayBase<T, D>) -> Result<Array<f64, D>>
where
    S: Data<Elem = u64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    if counts.shape() != noise.shape() {
        tracing::debug!(counts = ?counts.shape(), noise = ?noise.shape(), "shape mismatch");
        return Err(Error::InvalidInput(format!(
            "noise shape {:?} does not match counts shape {:?}",
            noise.shape(),
            counts.shape()
        )));
    }
    Ok(Zip::from(counts)
        .and(noise)
        .map_collect(|&c, &n| c as f64 + n))
}
