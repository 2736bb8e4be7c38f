//! Event-based resampling notification system
//!
//! Lets callers observe resampling calls (logging, metrics, tests) without
//! the replicate loops knowing who is listening. The compilation fallback is
//! reported here once per call.

use crate::error::Result;
use crate::factory::EvaluationPath;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// Resampling strategy of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    OneSampleBootstrap,
    TwoSampleBootstrap,
    PairedBootstrap,
    Permutation,
    IndependentPermutation,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::OneSampleBootstrap => "bs_1sample",
            Strategy::TwoSampleBootstrap => "bs_2sample",
            Strategy::PairedBootstrap => "bs_pairs",
            Strategy::Permutation => "permutation_2sample",
            Strategy::IndependentPermutation => "permutation_2sample_independent",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Event emitted during a resampling call
#[derive(Debug, Clone)]
pub enum ResampleEvent {
    /// Call accepted its inputs and is about to draw replicates
    Started {
        trace_id: Uuid,
        strategy: Strategy,
        size: usize,
        x_len: usize,
        y_len: Option<usize>,
    },

    /// Statistic could not be compiled; the call continues interpreted
    CompilationFallback {
        trace_id: Uuid,
        strategy: Strategy,
        reason: String,
    },

    /// All replicates were produced
    Completed {
        trace_id: Uuid,
        strategy: Strategy,
        size: usize,
        path: EvaluationPath,
        duration: Duration,
    },

    /// Call aborted; no replicates were returned
    Failed {
        trace_id: Uuid,
        strategy: Strategy,
        error: String,
    },
}

impl ResampleEvent {
    pub fn trace_id(&self) -> Uuid {
        match self {
            ResampleEvent::Started { trace_id, .. }
            | ResampleEvent::CompilationFallback { trace_id, .. }
            | ResampleEvent::Completed { trace_id, .. }
            | ResampleEvent::Failed { trace_id, .. } => *trace_id,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            ResampleEvent::Started { strategy, .. }
            | ResampleEvent::CompilationFallback { strategy, .. }
            | ResampleEvent::Completed { strategy, .. }
            | ResampleEvent::Failed { strategy, .. } => *strategy,
        }
    }
}

/// Trait for handling resampling events
pub trait EventHandler: Send + Sync {
    /// Handle a resampling event
    fn handle_event(&self, event: &ResampleEvent);

    /// Check if this handler is interested in a particular event type
    fn is_interested(&self, event: &ResampleEvent) -> bool {
        let _ = event;
        true
    }
}

/// Event bus for distributing events to multiple handlers
pub struct EventBus {
    handlers: Arc<Mutex<Vec<Box<dyn EventHandler>>>>,
    enabled: Arc<Mutex<bool>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(Vec::new())),
            enabled: Arc::new(Mutex::new(true)),
        }
    }

    /// Register an event handler
    pub fn register<H>(&self, handler: H) -> Result<()>
    where
        H: EventHandler + 'static,
    {
        let mut handlers = self.handlers.lock().map_err(|e| {
            crate::error::Error::Execution(format!("Failed to lock handlers: {e}"))
        })?;
        handlers.push(Box::new(handler));
        Ok(())
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: &ResampleEvent) -> Result<()> {
        if !self.is_enabled()? {
            return Ok(());
        }

        let handlers = self.handlers.lock().map_err(|e| {
            crate::error::Error::Execution(format!("Failed to lock handlers: {e}"))
        })?;

        for handler in handlers.iter() {
            if handler.is_interested(event) {
                handler.handle_event(event);
            }
        }

        Ok(())
    }

    /// Emit, ignoring a poisoned bus
    pub fn publish(&self, event: &ResampleEvent) {
        if let Err(e) = self.emit(event) {
            log::error!("Dropped resample event: {e}");
        }
    }

    /// Enable or disable event emission
    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        let mut state = self.enabled.lock().map_err(|e| {
            crate::error::Error::Execution(format!("Failed to lock enabled state: {e}"))
        })?;
        *state = enabled;
        Ok(())
    }

    /// Check if the event bus is enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let state = self.enabled.lock().map_err(|e| {
            crate::error::Error::Execution(format!("Failed to check enabled state: {e}"))
        })?;
        Ok(*state)
    }

    /// Get the number of registered handlers
    pub fn handler_count(&self) -> Result<usize> {
        let handlers = self.handlers.lock().map_err(|e| {
            crate::error::Error::Execution(format!("Failed to lock handlers: {e}"))
        })?;
        Ok(handlers.len())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            enabled: Arc::clone(&self.enabled),
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count().unwrap_or(0))
            .finish()
    }
}

/// Simple logging event handler
pub struct LoggingHandler {
    level: log::Level,
}

impl LoggingHandler {
    /// Create a new logging handler
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingHandler {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl EventHandler for LoggingHandler {
    fn handle_event(&self, event: &ResampleEvent) {
        match event {
            ResampleEvent::Started {
                trace_id,
                strategy,
                size,
                ..
            } => {
                log::log!(self.level, "{strategy} started: {size} replicates (trace: {trace_id})");
            }
            ResampleEvent::CompilationFallback {
                trace_id,
                strategy,
                reason,
            } => {
                log::warn!("{strategy} falling back to interpreted evaluation: {reason} (trace: {trace_id})");
            }
            ResampleEvent::Completed {
                trace_id,
                strategy,
                path,
                duration,
                ..
            } => {
                log::log!(self.level, "{strategy} completed {path} in {duration:?} (trace: {trace_id})");
            }
            ResampleEvent::Failed {
                trace_id,
                strategy,
                error,
            } => {
                log::error!("{strategy} failed: {error} (trace: {trace_id})");
            }
        }
    }
}

/// Metrics collection handler
///
/// Clones share the same counters, so a clone can be registered on a bus
/// while the original is kept for reading.
#[derive(Clone, Default)]
pub struct MetricsHandler {
    metrics: Arc<Mutex<ResampleMetrics>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResampleMetrics {
    pub total_runs: usize,
    pub total_replicates: usize,
    pub fallbacks: usize,
    pub failures: usize,
    pub runs_by_strategy: HashMap<Strategy, usize>,
}

impl MetricsHandler {
    /// Create a new metrics handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of current metrics
    pub fn snapshot(&self) -> Result<ResampleMetrics> {
        let metrics = self.metrics.lock().map_err(|e| {
            crate::error::Error::Execution(format!("Failed to lock metrics: {e}"))
        })?;
        Ok(metrics.clone())
    }
}

impl EventHandler for MetricsHandler {
    fn handle_event(&self, event: &ResampleEvent) {
        let Ok(mut metrics) = self.metrics.lock() else {
            log::error!("Failed to lock metrics");
            return;
        };

        match event {
            ResampleEvent::Started { strategy, .. } => {
                metrics.total_runs += 1;
                *metrics.runs_by_strategy.entry(*strategy).or_insert(0) += 1;
            }
            ResampleEvent::CompilationFallback { .. } => {
                metrics.fallbacks += 1;
            }
            ResampleEvent::Completed { size, .. } => {
                metrics.total_replicates += size;
            }
            ResampleEvent::Failed { .. } => {
                metrics.failures += 1;
            }
        }
    }
}

/// Null event handler that does nothing
#[derive(Default, Clone)]
pub struct NullEventHandler;

impl EventHandler for NullEventHandler {
    fn handle_event(&self, _event: &ResampleEvent) {}

    fn is_interested(&self, _event: &ResampleEvent) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(strategy: Strategy) -> ResampleEvent {
        ResampleEvent::Started {
            trace_id: Uuid::new_v4(),
            strategy,
            size: 10,
            x_len: 5,
            y_len: None,
        }
    }

    #[test]
    fn test_event_bus() {
        let bus = EventBus::new();
        bus.register(LoggingHandler::new(log::Level::Debug)).unwrap();
        bus.register(NullEventHandler).unwrap();
        assert_eq!(bus.handler_count().unwrap(), 2);

        bus.emit(&started(Strategy::OneSampleBootstrap)).unwrap();
    }

    #[test]
    fn test_metrics_handler() {
        let handler = MetricsHandler::new();
        let trace_id = Uuid::new_v4();

        handler.handle_event(&started(Strategy::PairedBootstrap));
        handler.handle_event(&ResampleEvent::CompilationFallback {
            trace_id,
            strategy: Strategy::PairedBootstrap,
            reason: "opaque".into(),
        });
        handler.handle_event(&ResampleEvent::Completed {
            trace_id,
            strategy: Strategy::PairedBootstrap,
            size: 10,
            path: EvaluationPath::Interpreted,
            duration: Duration::from_millis(1),
        });

        let metrics = handler.snapshot().unwrap();
        assert_eq!(metrics.total_runs, 1);
        assert_eq!(metrics.fallbacks, 1);
        assert_eq!(metrics.total_replicates, 10);
        assert_eq!(metrics.runs_by_strategy[&Strategy::PairedBootstrap], 1);
    }

    #[test]
    fn test_shared_metrics_through_bus() {
        let bus = EventBus::new();
        let metrics = MetricsHandler::new();
        bus.register(metrics.clone()).unwrap();

        bus.publish(&started(Strategy::Permutation));
        bus.publish(&started(Strategy::Permutation));
        assert_eq!(metrics.snapshot().unwrap().total_runs, 2);
    }

    #[test]
    fn test_disabled_bus() {
        let bus = EventBus::new();
        let metrics = MetricsHandler::new();
        bus.register(metrics.clone()).unwrap();
        bus.set_enabled(false).unwrap();

        bus.publish(&started(Strategy::Permutation));
        assert!(!bus.is_enabled().unwrap());
        assert_eq!(metrics.snapshot().unwrap().total_runs, 0);
    }

    #[test]
    fn test_event_accessors() {
        let event = started(Strategy::IndependentPermutation);
        assert_eq!(event.strategy(), Strategy::IndependentPermutation);
        assert_eq!(event.strategy().to_string(), "permutation_2sample_independent");
    }
}
