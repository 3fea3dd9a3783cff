//! Contingency tables.
//!
//! Turns a dataset into a dense count tensor with one axis per field:
//! `counts[[i, j, k]]` is the number of rows equal to `(i, j, k)`.
//!
//! ## Algorithm
//!
//! 1. Validate every row up front (length, per-field range). Nothing is
//!    counted if any row is malformed.
//! 2. Build a frequency table keyed by row: O(rows).
//! 3. Enumerate the joint space in row-major order (last axis fastest) and
//!    look each cell up in the table, 0 when absent: O(volume).
//!
//! This avoids the O(volume x rows) cost of counting each cell by scanning
//! the dataset.

use std::collections::HashMap;

use ndarray::{ArrayD, Dimension, IxDyn};

use crate::error::Result;
use crate::fields::{check_row, volume, Row};

/// Count occurrences of every tuple in the joint space `field_sizes`.
///
/// The result has shape `field_sizes` and its entries sum to `rows.len()`.
/// Unobserved combinations are present with count 0.
///
/// # Errors
/// Returns `Error::InvalidInput` if `field_sizes` is invalid, if the joint
/// space is too large to allocate, or if any row has the wrong length or an
/// out-of-range value. Out-of-range values are never clamped or dropped.
pub fn get_counts(rows: &[Row], field_sizes: &[usize]) -> Result<ArrayD<u64>> {
    let cells = volume(field_sizes)?;
    for (i, row) in rows.iter().enumerate() {
        check_row(row, field_sizes, i)?;
    }

    let table = frequencies(rows);
    tracing::debug!(
        rows = rows.len(),
        cells,
        distinct = table.len(),
        "tabulating"
    );

    Ok(ArrayD::from_shape_fn(IxDyn(field_sizes), |idx| {
        table.get(idx.slice()).copied().unwrap_or(0)
    }))
}

fn frequencies(rows: &[Row]) -> HashMap<&[usize], u64> {
    let mut table: HashMap<&[usize], u64> = HashMap::new();
    for row in rows {
        *table.entry(row.as_slice()).or_insert(0) += 1;
    }
    table
}
