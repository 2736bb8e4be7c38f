//! Core types for resampling inference
//!
//! This crate provides the pieces the replicate loops are assembled from:
//!
//! - **Statistics**: [`StatExpr`] expressions over one or two samples,
//!   evaluated through the [`Statistic`] trait
//! - **Evaluation paths**: [`CompiledStatistic`] (a lowered stack program)
//!   and [`InterpretedStatistic`] (tree walking, supports opaque closures),
//!   chosen by [`StatisticFactory`]
//! - **Randomness**: the explicit, seedable [`ResampleRng`]
//! - **Buffers**: [`ResampleWorkspace`] with per-path [`BufferPolicy`]
//! - **Observation**: an [`EventBus`] with logging and metrics handlers
//!
//! # Example
//!
//! ```rust
//! use resample_core::{Arg, Arity, Samples, StatExpr, Statistic, StatisticFactory};
//!
//! let expr = StatExpr::mean(Arg::Y) - StatExpr::mean(Arg::X);
//! let statistic = StatisticFactory::default().build(&expr, Arity::Two).unwrap();
//! assert!(statistic.is_compiled());
//!
//! let value = statistic.evaluate(Samples::Two(&[1.0, 2.0], &[4.0, 5.0])).unwrap();
//! assert_eq!(value, 3.0);
//! ```

pub mod compiled;
pub mod error;
pub mod events;
pub mod expr;
pub mod factory;
pub mod kernels;
pub mod rng;
pub mod sample;
pub mod statistic;
pub mod workspace;

// Re-export core types
pub use error::{CompilationUnsupported, Error, Result};

pub use compiled::CompiledStatistic;
pub use events::{
    EventBus, EventHandler, LoggingHandler, MetricsHandler, NullEventHandler, ResampleEvent,
    ResampleMetrics, Strategy,
};
pub use expr::{BinaryOp, OpaqueFn, PairwiseReduction, Reduction, StatExpr, UnaryOp};
pub use factory::{Acceleration, EvaluationPath, PreparedStatistic, StatisticFactory};
pub use rng::ResampleRng;
pub use sample::{Arg, Arity, Samples};
pub use statistic::{InterpretedStatistic, Statistic};
pub use workspace::{BufferPolicy, ResampleWorkspace};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
