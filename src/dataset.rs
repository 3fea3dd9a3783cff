//! Synthetic dataset generation.
//!
//! The row-production function is injected, so any strategy with the shape
//! `FnMut(&[usize]) -> Result<Row>` can drive generation: [`random_row`],
//! a seeded closure around [`random_row_with_rng`], a
//! [`WeightedRowSampler`](crate::sample::WeightedRowSampler), or a fixed
//! script of rows in tests.
//!
//! [`random_row`]: crate::sample::random_row
//! [`random_row_with_rng`]: crate::sample::random_row_with_rng

use rand::Rng;

use crate::error::{Error, Result};
use crate::fields::{check_field_sizes, check_row, Row};
use crate::sample::random_row_with_rng;

/// Create `num_rows` rows, each from one call to `row_fn(field_sizes)`.
///
/// # Errors
/// Returns `Error::InvalidInput` if `field_sizes` is empty or contains a 0,
/// `Error::InvalidCount` if `num_rows == 0`, otherwise the first error
/// `row_fn` returns, or `Error::InvalidInput` if `row_fn` produces a row that
/// does not fit `field_sizes`.
pub fn make_raw_data<F>(field_sizes: &[usize], num_rows: usize, mut row_fn: F) -> Result<Vec<Row>>
where
    F: FnMut(&[usize]) -> Result<Row>,
{
    check_field_sizes(field_sizes)?;
    if num_rows == 0 {
        tracing::debug!("rejected zero row count");
        return Err(Error::InvalidCount(num_rows));
    }

    (0..num_rows)
        .map(|i| -> Result<Row> {
            let row = row_fn(field_sizes)?;
            check_row(&row, field_sizes, i)?;
            Ok(row)
        })
        .collect()
}

/// Create `num_rows` uniform random rows from a caller-supplied RNG.
pub fn make_raw_data_with_rng<R: Rng + ?Sized>(
    field_sizes: &[usize],
    num_rows: usize,
    rng: &mut R,
) -> Result<Vec<Row>> {
    make_raw_data(field_sizes, num_rows, |sizes| random_row_with_rng(sizes, rng))
}
