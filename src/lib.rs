//! `tally`: contingency tables with noisy counts.
//!
//! Builds an N-dimensional count tensor from categorical rows, computes its
//! marginal subtotals along every axis, and perturbs counts with Laplace noise
//! for differentially-private-style release. Synthetic rows can be generated
//! for experiments.
//!
//! Fields are unnamed: field `i` with cardinality `n` takes values `0..n`.
//!
//! Exposed modules:
//! - `sample`: one random row (uniform or per-field weighted).
//! - `dataset`: many rows through an injected row function.
//! - `counts`: rows -> dense count tensor.
//! - `subtotals`: axis-wise marginal sums for any rank.
//! - `noise`: Laplace distribution, noise tensors, perturbation.
//! - `release`: the whole pipeline behind a seedable config.
//!
//! Every sampling entrypoint has a `*_with_rng` form for deterministic use.

#![forbid(unsafe_code)]

pub mod counts;
pub mod dataset;
pub mod error;
pub mod fields;
pub mod noise;
pub mod release;
pub mod sample;
pub mod subtotals;

pub use counts::get_counts;
pub use dataset::{make_raw_data, make_raw_data_with_rng};
pub use error::{Error, Result};
pub use fields::Row;
pub use noise::{draw_laplace, draw_laplace_with_rng, perturb, Laplace};
pub use release::{Release, ReleaseConfig};
pub use sample::{random_row, random_row_with_rng, WeightedRowSampler};
pub use subtotals::{calculate_subtotals, grand_total, subtotal_along};
