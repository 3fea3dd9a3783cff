//! Row sampling.
//!
//! Draws one categorical row from the joint space described by a cardinality
//! vector. Two strategies are provided:
//!
//! - [`random_row`]: every field uniform over its values, independently.
//! - [`WeightedRowSampler`]: every field drawn from its own categorical
//!   distribution, independently.
//!
//! Both have `*_with_rng` entrypoints for deterministic testing/benchmarking,
//! and both match the `FnMut(&[usize]) -> Result<Row>` shape that
//! [`crate::dataset::make_raw_data`] accepts.

use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;

use crate::error::{Error, Result};
use crate::fields::{check_field_sizes, Row};

/// Draw a uniform random row, using the thread-local RNG.
///
/// Eg. `random_row(&[5, 7, 3])` may return `[4, 0, 2]`.
///
/// # Errors
/// Returns `Error::InvalidInput` if `field_sizes` is empty or contains a 0.
pub fn random_row(field_sizes: &[usize]) -> Result<Row> {
    let mut rng = rand::rng();
    random_row_with_rng(field_sizes, &mut rng)
}

/// Draw a uniform random row using a caller-supplied RNG.
pub fn random_row_with_rng<R: Rng + ?Sized>(field_sizes: &[usize], rng: &mut R) -> Result<Row> {
    check_field_sizes(field_sizes)?;
    Ok(field_sizes.iter().map(|&n| rng.random_range(0..n)).collect())
}

/// Samples rows whose fields follow independent, non-uniform categorical
/// distributions.
///
/// Field `i` takes value `v` with probability `weights[i][v] / sum(weights[i])`,
/// so the cardinality of field `i` is `weights[i].len()`.
#[derive(Debug, Clone)]
pub struct WeightedRowSampler {
    field_sizes: Vec<usize>,
    fields: Vec<WeightedIndex<f64>>,
}

impl WeightedRowSampler {
    /// Build a sampler from per-field weights.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if there are no fields, or if any field's
    /// weights are empty, negative, non-finite, or all zero.
    pub fn new(weights: &[Vec<f64>]) -> Result<Self> {
        let field_sizes: Vec<usize> = weights.iter().map(Vec::len).collect();
        check_field_sizes(&field_sizes)?;

        let fields = weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                WeightedIndex::new(w).map_err(|e| {
                    tracing::debug!(field = i, weights = ?w, "rejected field weights");
                    Error::InvalidInput(format!("field {i}: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            field_sizes,
            fields,
        })
    }

    /// Cardinality vector implied by the weights.
    pub fn field_sizes(&self) -> &[usize] {
        &self.field_sizes
    }

    /// Draw a row, using the thread-local RNG.
    pub fn sample(&self, field_sizes: &[usize]) -> Result<Row> {
        let mut rng = rand::rng();
        self.sample_with_rng(field_sizes, &mut rng)
    }

    /// Draw a row using a caller-supplied RNG.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `field_sizes` does not match the
    /// cardinalities this sampler was built with.
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        field_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Row> {
        check_field_sizes(field_sizes)?;
        if field_sizes != self.field_sizes.as_slice() {
            tracing::debug!(
                ?field_sizes,
                expected = ?self.field_sizes,
                "field sizes do not match weights"
            );
            return Err(Error::InvalidInput(format!(
                "field sizes {field_sizes:?} do not match weighted sampler {:?}",
                self.field_sizes
            )));
        }
        Ok(self.fields.iter().map(|d| d.sample(rng)).collect())
    }
}
