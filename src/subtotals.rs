//! Marginal subtotals of a count tensor.
//!
//! For an N-dimensional tensor `c`, the subtotal along axis `k` is the
//! (N-1)-dimensional array
//!
//! ```text
//! s_k[i_0, .., i_{k-1}, i_{k+1}, .., i_{N-1}] = sum_j c[i_0, .., i_{k-1}, j, i_{k+1}, .., i_{N-1}]
//! ```
//!
//! with the remaining axes in their original relative order. A one-field
//! tensor reduces to a 0-dimensional array holding the grand total.
//!
//! Eg. for `[[1, 2, 3], [4, 5, 6]]` the subtotals are `[5, 7, 9]` (axis 0)
//! and `[6, 15]` (axis 1).
//!
//! The reduction is generic over both element type and dimensionality, so the
//! same code subtotals true (`u64`) and perturbed (`f64`) counts of any rank.

use std::ops::Add;

use ndarray::{Array, ArrayBase, Axis, Data, Dimension, RemoveAxis};
use num_traits::Zero;

use crate::error::{Error, Result};

/// Sum `counts` along `axis`, keeping every other axis.
///
/// # Errors
/// Returns `Error::InvalidInput` if `counts` is 0-dimensional or `axis` is
/// not one of its axes.
pub fn subtotal_along<A, S, D>(
    counts: &ArrayBase<S, D>,
    axis: usize,
) -> Result<Array<A, D::Smaller>>
where
    A: Clone + Zero + Add<Output = A>,
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    check_rank(counts.ndim())?;
    if axis >= counts.ndim() {
        tracing::debug!(axis, ndim = counts.ndim(), "axis out of range");
        return Err(Error::InvalidInput(format!(
            "axis {axis} out of range for {}-dimensional counts",
            counts.ndim()
        )));
    }

    // Each lane along `axis` collapses to one cell of the result; the lanes
    // are laid out over the remaining axes in their original order.
    Ok(counts.map_axis(Axis(axis), |lane| {
        lane.iter().fold(A::zero(), |acc, x| acc + x.clone())
    }))
}

/// Subtotals along every axis, in axis order.
///
/// Element `k` of the result has the shape of `counts` with axis `k` removed.
///
/// # Errors
/// Returns `Error::InvalidInput` if `counts` is 0-dimensional.
pub fn calculate_subtotals<A, S, D>(counts: &ArrayBase<S, D>) -> Result<Vec<Array<A, D::Smaller>>>
where
    A: Clone + Zero + Add<Output = A>,
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    check_rank(counts.ndim())?;
    (0..counts.ndim())
        .map(|axis| subtotal_along(counts, axis))
        .collect()
}

/// Sum over every axis at once.
pub fn grand_total<A, S, D>(counts: &ArrayBase<S, D>) -> A
where
    A: Clone + Zero + Add<Output = A>,
    S: Data<Elem = A>,
    D: Dimension,
{
    counts.iter().fold(A::zero(), |acc, x| acc + x.clone())
}

fn check_rank(ndim: usize) -> Result<()> {
    if ndim == 0 {
        tracing::debug!("rejected 0-dimensional counts");
        return Err(Error::InvalidInput(
            "counts must have at least one dimension".into(),
        ));
    }
    Ok(())
}
