//! Bootstrap and permutation replicate generation
//!
//! This crate draws resamples of one or two samples and evaluates a
//! statistic on each, returning the replicate distribution:
//!
//! - **Bootstrap**: one-sample, independent two-sample and paired
//! - **Permutation**: pooled two-sample and within-sample (independence)
//!
//! Every strategy runs through one replicate loop. Statistics are compiled
//! when possible and interpreted otherwise; the replicates record which path
//! produced them.
//!
//! # Examples
//!
//! ## Difference of means
//!
//! ```rust
//! use resample_bootstrap::Resampler;
//! use resample_core::{Arg, StatExpr};
//!
//! let control = [10.2, 9.8, 10.5, 10.1, 9.9, 10.3];
//! let treated = [12.1, 11.8, 12.6, 12.0, 11.7, 12.4];
//!
//! let mut resampler = Resampler::new().with_size(1000).with_seed(7);
//! let reps = resampler
//!     .bs_2sample(&control, &treated, &(StatExpr::mean(Arg::Y) - StatExpr::mean(Arg::X)))
//!     .unwrap();
//!
//! assert!(!reps.is_degraded());
//! assert!(reps.mean() > 1.0);
//! ```
//!
//! ## Opaque statistics
//!
//! ```rust
//! use resample_bootstrap::api::bs_1sample;
//! use resample_core::StatExpr;
//!
//! let range = StatExpr::custom1("range", |x| {
//!     let lo = x.iter().copied().fold(f64::INFINITY, f64::min);
//!     let hi = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
//!     Ok(hi - lo)
//! });
//!
//! let reps = bs_1sample(&[1.0, 4.0, 2.0, 8.0], &range, 100).unwrap();
//! assert!(reps.is_degraded());
//! assert_eq!(reps.len(), 100);
//! ```

pub mod api;
mod config;
pub mod draw;
mod replicate;
mod replicates;
mod resampler;

// Re-exports
pub use api::{
    bs_1sample, bs_2sample, bs_pairs, permutation_2sample, permutation_2sample_independent,
    DEFAULT_SIZE,
};
pub use config::{ReplicateCount, ResamplerConfig};
pub use replicate::run_replicates;
pub use replicates::Replicates;
pub use resampler::Resampler;
