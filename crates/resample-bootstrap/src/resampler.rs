//! Resampling engine
//!
//! [`Resampler`] owns the random source and event bus for a series of calls.
//! Each call validates its inputs, prepares the statistic on the best
//! available path and runs the shared replicate loop with the strategy's
//! draw.

use crate::config::{ReplicateCount, ResamplerConfig};
use crate::draw::{
    Draw, IndependentPermutationDraw, OneSampleDraw, PairedDraw, PermutationDraw, TwoSampleDraw,
};
use crate::replicate::run_replicates;
use crate::replicates::Replicates;
use resample_core::{
    Acceleration, BufferPolicy, Error, EventBus, ResampleEvent, ResampleRng, Result, StatExpr,
    Statistic, StatisticFactory,
};
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Bootstrap and permutation replicate generator
///
/// # Example
///
/// ```rust
/// use resample_bootstrap::Resampler;
/// use resample_core::{Arg, StatExpr};
///
/// let x = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
/// let mut resampler = Resampler::new().with_size(200).with_seed(42);
/// let reps = resampler.bs_1sample(&x, &StatExpr::mean(Arg::X)).unwrap();
/// assert_eq!(reps.len(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct Resampler {
    config: ResamplerConfig,
    rng: ResampleRng,
    events: EventBus,
}

impl Resampler {
    /// Default configuration, entropy seeded
    pub fn new() -> Self {
        Self::from_config(ResamplerConfig::default())
    }

    pub fn from_config(config: ResamplerConfig) -> Self {
        Self {
            rng: ResampleRng::new(config.seed),
            config,
            events: EventBus::new(),
        }
    }

    /// Set the number of replicates per call
    pub fn with_size(mut self, size: usize) -> Self {
        self.config.size = ReplicateCount::new(size);
        self
    }

    /// Reseed the random source
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self.rng = ResampleRng::seeded(seed);
        self
    }

    pub fn with_acceleration(mut self, acceleration: Acceleration) -> Self {
        self.config.acceleration = acceleration;
        self
    }

    /// Publish call events on `events`
    pub fn with_event_bus(mut self, events: EventBus) -> Self {
        self.events = events;
        self
    }

    pub fn config(&self) -> &ResamplerConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Bootstrap a one-sample statistic
    #[instrument(skip(self, x, statistic), fields(n = x.len(), size = self.config.size.get()))]
    pub fn bs_1sample(&mut self, x: &[f64], statistic: &StatExpr) -> Result<Replicates> {
        require_data(x)?;
        self.run(&OneSampleDraw { x }, statistic, x.len(), None)
    }

    /// Bootstrap a two-sample statistic, resampling each sample independently
    #[instrument(skip(self, x, y, statistic), fields(n1 = x.len(), n2 = y.len(), size = self.config.size.get()))]
    pub fn bs_2sample(&mut self, x: &[f64], y: &[f64], statistic: &StatExpr) -> Result<Replicates> {
        require_data(x)?;
        require_data(y)?;
        self.run(&TwoSampleDraw { x, y }, statistic, x.len(), Some(y.len()))
    }

    /// Bootstrap a two-sample statistic over paired observations
    ///
    /// `x[i]` and `y[i]` are always drawn together.
    #[instrument(skip(self, x, y, statistic), fields(n = x.len(), size = self.config.size.get()))]
    pub fn bs_pairs(&mut self, x: &[f64], y: &[f64], statistic: &StatExpr) -> Result<Replicates> {
        require_equal_lengths(x, y)?;
        require_data(x)?;
        self.run(&PairedDraw { x, y }, statistic, x.len(), Some(y.len()))
    }

    /// Permutation replicates of a two-sample statistic over the pooled data
    #[instrument(skip(self, x, y, statistic), fields(n1 = x.len(), n2 = y.len(), size = self.config.size.get()))]
    pub fn permutation_2sample(
        &mut self,
        x: &[f64],
        y: &[f64],
        statistic: &StatExpr,
    ) -> Result<Replicates> {
        let draw = PermutationDraw::new(x, y);
        self.run(&draw, statistic, x.len(), Some(y.len()))
    }

    /// Permutation replicates with `y` shuffled against a fixed `x`
    #[instrument(skip(self, x, y, statistic), fields(n = x.len(), size = self.config.size.get()))]
    pub fn permutation_2sample_independent(
        &mut self,
        x: &[f64],
        y: &[f64],
        statistic: &StatExpr,
    ) -> Result<Replicates> {
        require_equal_lengths(x, y)?;
        require_data(x)?;
        self.run(
            &IndependentPermutationDraw { x, y },
            statistic,
            x.len(),
            Some(y.len()),
        )
    }

    fn run<D: Draw>(
        &mut self,
        draw: &D,
        statistic: &StatExpr,
        x_len: usize,
        y_len: Option<usize>,
    ) -> Result<Replicates> {
        let trace_id = Uuid::new_v4();
        let strategy = D::STRATEGY;
        let size = self.config.size.get();

        self.events.publish(&ResampleEvent::Started {
            trace_id,
            strategy,
            size,
            x_len,
            y_len,
        });

        let start = Instant::now();
        let result = self.generate(draw, statistic, trace_id);

        match &result {
            Ok(replicates) => {
                debug!("{strategy} produced {} replicates ({})", replicates.len(), replicates.path());
                self.events.publish(&ResampleEvent::Completed {
                    trace_id,
                    strategy,
                    size,
                    path: replicates.path().clone(),
                    duration: start.elapsed(),
                });
            }
            Err(e) => {
                debug!("{strategy} aborted: {e}");
                self.events.publish(&ResampleEvent::Failed {
                    trace_id,
                    strategy,
                    error: e.to_string(),
                });
            }
        }

        result
    }

    fn generate<D: Draw>(
        &mut self,
        draw: &D,
        statistic: &StatExpr,
        trace_id: Uuid,
    ) -> Result<Replicates> {
        let strategy = D::STRATEGY;
        let prepared = StatisticFactory::new(self.config.acceleration).build(statistic, D::ARITY)?;

        if let Some(unsupported) = prepared.fallback() {
            warn!(
                %strategy,
                reason = unsupported.reason(),
                "statistic cannot be compiled, falling back to interpreted evaluation"
            );
            self.events.publish(&ResampleEvent::CompilationFallback {
                trace_id,
                strategy,
                reason: unsupported.reason().to_string(),
            });
        }

        let policy = if prepared.is_compiled() {
            BufferPolicy::Reuse
        } else {
            BufferPolicy::Fresh
        };
        debug!("Running {} {strategy} replicates with {policy:?} buffers", self.config.size.get());

        let values = run_replicates(draw, &prepared, self.config.size.get(), &mut self.rng, policy)?;
        Ok(Replicates::new(values, prepared.path()))
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new()
    }
}

fn require_data(sample: &[f64]) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(())
}

fn require_equal_lengths(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::shape_mismatch(x.len(), y.len()));
    }
    Ok(())
}
