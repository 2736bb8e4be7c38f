//! High-level API for replicate generation
//!
//! Each function builds an entropy-seeded [`Resampler`] for a single call.
//! Use [`Resampler`] directly for seeding, event observation or to disable
//! compilation.

use crate::{Replicates, Resampler};
use resample_core::{Result, StatExpr};

pub use crate::config::DEFAULT_SIZE;

/// One-sample bootstrap replicates of `statistic`
///
/// # Example
/// ```rust
/// use resample_bootstrap::api::bs_1sample;
/// use resample_core::{Arg, StatExpr};
///
/// let x = [2.0, 4.0, 4.0, 5.0, 7.0, 9.0];
/// let reps = bs_1sample(&x, &StatExpr::median(Arg::X), 500).unwrap();
/// assert_eq!(reps.len(), 500);
/// ```
pub fn bs_1sample(x: &[f64], statistic: &StatExpr, size: usize) -> Result<Replicates> {
    Resampler::new().with_size(size).bs_1sample(x, statistic)
}

/// Two-sample bootstrap replicates, `x` and `y` resampled independently
pub fn bs_2sample(x: &[f64], y: &[f64], statistic: &StatExpr, size: usize) -> Result<Replicates> {
    Resampler::new().with_size(size).bs_2sample(x, y, statistic)
}

/// Paired bootstrap replicates; `x` and `y` must have equal lengths
///
/// # Example
/// ```rust
/// use resample_bootstrap::api::bs_pairs;
/// use resample_core::StatExpr;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.1, 3.9, 6.2, 8.0, 9.8];
/// let reps = bs_pairs(&x, &y, &StatExpr::slope(), 100).unwrap();
/// assert_eq!(reps.len(), 100);
///
/// assert!(bs_pairs(&x, &y[..4], &StatExpr::slope(), 100).is_err());
/// ```
pub fn bs_pairs(x: &[f64], y: &[f64], statistic: &StatExpr, size: usize) -> Result<Replicates> {
    Resampler::new().with_size(size).bs_pairs(x, y, statistic)
}

/// Permutation replicates over the pooled samples
pub fn permutation_2sample(
    x: &[f64],
    y: &[f64],
    statistic: &StatExpr,
    size: usize,
) -> Result<Replicates> {
    Resampler::new()
        .with_size(size)
        .permutation_2sample(x, y, statistic)
}

/// Permutation replicates with `y` shuffled against `x`; lengths must match
pub fn permutation_2sample_independent(
    x: &[f64],
    y: &[f64],
    statistic: &StatExpr,
    size: usize,
) -> Result<Replicates> {
    Resampler::new()
        .with_size(size)
        .permutation_2sample_independent(x, y, statistic)
}
