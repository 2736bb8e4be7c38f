//! Resampling inference for arbitrary statistics
//!
//! `resample-stats` generates bootstrap and permutation replicate
//! distributions for statistics over one or two samples. It re-exports:
//!
//! - [`resample_core`]: statistic expressions, evaluation paths, random
//!   sources and the event bus
//! - [`resample_bootstrap`]: the replicate strategies, [`Resampler`] engine
//!   and free-function API
//!
//! # Example
//!
//! ```rust
//! use resample_stats::prelude::*;
//!
//! let x = [3.1, 2.9, 3.4, 3.0, 3.3, 2.8, 3.2];
//! let y = [3.9, 4.1, 3.7, 4.3, 4.0, 3.8, 4.2];
//!
//! let shift = StatExpr::median(Arg::Y) - StatExpr::median(Arg::X);
//! let reps = Resampler::new()
//!     .with_size(500)
//!     .with_seed(3)
//!     .bs_2sample(&x, &y, &shift)
//!     .unwrap();
//!
//! assert_eq!(reps.len(), 500);
//! assert!(reps.iter().all(|&d| d > 0.0));
//! ```

pub use resample_bootstrap;
pub use resample_core;

pub use resample_bootstrap::{
    bs_1sample, bs_2sample, bs_pairs, permutation_2sample, permutation_2sample_independent,
    ReplicateCount, Replicates, Resampler, ResamplerConfig, DEFAULT_SIZE,
};
pub use resample_core::{
    Acceleration, Arg, Arity, CompilationUnsupported, Error, EvaluationPath, EventBus,
    EventHandler, LoggingHandler, MetricsHandler, ResampleEvent, Result, Samples, StatExpr,
    Statistic, StatisticFactory, Strategy,
};

pub mod prelude {
    pub use crate::{
        bs_1sample, bs_2sample, bs_pairs, permutation_2sample, permutation_2sample_independent,
        Acceleration, Arg, Error, EvaluationPath, Replicates, Resampler, ResamplerConfig,
        Result, StatExpr, DEFAULT_SIZE,
    };
}
