//! Field cardinalities and categorical rows.
//!
//! Fields have no names, only positions. A field with cardinality `n` takes
//! the values `0..n`.

use crate::error::{Error, Result};

/// One categorical record: entry `i` is the value of field `i`.
pub type Row = Vec<usize>;

/// Check that `field_sizes` is a usable cardinality vector.
///
/// # Errors
/// Returns `Error::InvalidInput` if `field_sizes` is empty or any entry is 0.
pub fn check_field_sizes(field_sizes: &[usize]) -> Result<()> {
    if field_sizes.is_empty() {
        tracing::debug!("rejected empty field sizes");
        return Err(Error::InvalidInput("field sizes must be non-empty".into()));
    }
    if let Some(i) = field_sizes.iter().position(|&n| n == 0) {
        tracing::debug!(field = i, ?field_sizes, "rejected zero cardinality");
        return Err(Error::InvalidInput(format!(
            "field {i} has cardinality 0 (must be >= 1)"
        )));
    }
    Ok(())
}

/// Number of cells in a tensor with shape `field_sizes` holding `u64` counts.
///
/// # Errors
/// Returns `Error::InvalidInput` if the tensor could not be allocated (cell
/// count or byte size overflows), or if the field sizes themselves are
/// invalid.
pub fn volume(field_sizes: &[usize]) -> Result<usize> {
    check_field_sizes(field_sizes)?;
    allocatable_cells::<u64>(field_sizes).ok_or_else(|| {
        tracing::debug!(?field_sizes, "rejected oversized joint space");
        Error::InvalidInput(format!("joint space of {field_sizes:?} is too large"))
    })
}

/// Cell count of an array of `T` with shape `shape`, or `None` if its byte
/// size exceeds `isize::MAX`.
pub(crate) fn allocatable_cells<T>(shape: &[usize]) -> Option<usize> {
    let max_cells = isize::MAX as usize / std::mem::size_of::<T>().max(1);
    shape
        .iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))
        .filter(|&v| v <= max_cells)
}

/// Check that `row` is a valid value of the joint space `field_sizes`.
///
/// `index` is the row's position in its dataset, used for diagnostics only.
pub(crate) fn check_row(row: &[usize], field_sizes: &[usize], index: usize) -> Result<()> {
    if row.len() != field_sizes.len() {
        tracing::debug!(
            row = index,
            len = row.len(),
            fields = field_sizes.len(),
            "row length mismatch"
        );
        return Err(Error::InvalidInput(format!(
            "row {index} has {} fields, expected {}",
            row.len(),
            field_sizes.len()
        )));
    }
    for (field, (&v, &n)) in row.iter().zip(field_sizes).enumerate() {
        if v >= n {
            tracing::debug!(
                row = index,
                field,
                value = v,
                cardinality = n,
                "value out of range"
            );
            return Err(Error::InvalidInput(format!(
                "row {index}, field {field}: value {v} out of range 0..{n}"
            )));
        }
    }
    Ok(())
}
