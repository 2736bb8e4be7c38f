//! Selecting the evaluation path for a statistic
//!
//! [`StatisticFactory::build`] validates a statistic against the call's
//! arity, attempts to compile it and falls back to interpretation when the
//! expression cannot be lowered. The fallback is recorded in the returned
//! [`PreparedStatistic`] rather than raised, so callers decide how to report
//! it.

use crate::compiled::CompiledStatistic;
use crate::error::CompilationUnsupported;
use crate::expr::StatExpr;
use crate::sample::{Arity, Samples};
use crate::statistic::{InterpretedStatistic, Statistic};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether compilation is attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acceleration {
    /// Compile when possible, interpret otherwise
    #[default]
    Auto,
    /// Always interpret
    Disabled,
}

/// How the replicates of a call were evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationPath {
    Compiled,
    /// Interpreted because acceleration was disabled
    Interpreted,
    /// Interpreted because compilation failed
    Fallback(CompilationUnsupported),
}

impl EvaluationPath {
    /// True when acceleration was wanted but not achieved
    pub fn is_degraded(&self) -> bool {
        matches!(self, EvaluationPath::Fallback(_))
    }
}

impl fmt::Display for EvaluationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationPath::Compiled => f.write_str("compiled"),
            EvaluationPath::Interpreted => f.write_str("interpreted"),
            EvaluationPath::Fallback(reason) => write!(f, "interpreted ({})", reason.reason()),
        }
    }
}

/// A statistic ready to evaluate, on whichever path was selected
#[derive(Debug, Clone)]
pub enum PreparedStatistic {
    Compiled(CompiledStatistic),
    Interpreted {
        statistic: InterpretedStatistic,
        fallback: Option<CompilationUnsupported>,
    },
}

impl PreparedStatistic {
    pub fn path(&self) -> EvaluationPath {
        match self {
            PreparedStatistic::Compiled(_) => EvaluationPath::Compiled,
            PreparedStatistic::Interpreted { fallback: None, .. } => EvaluationPath::Interpreted,
            PreparedStatistic::Interpreted {
                fallback: Some(reason),
                ..
            } => EvaluationPath::Fallback(reason.clone()),
        }
    }

    /// Why compilation was abandoned, if it was
    pub fn fallback(&self) -> Option<&CompilationUnsupported> {
        match self {
            PreparedStatistic::Interpreted { fallback, .. } => fallback.as_ref(),
            PreparedStatistic::Compiled(_) => None,
        }
    }
}

impl Statistic for PreparedStatistic {
    fn evaluate(&self, samples: Samples<'_>) -> Result<f64> {
        match self {
            PreparedStatistic::Compiled(statistic) => statistic.evaluate(samples),
            PreparedStatistic::Interpreted { statistic, .. } => statistic.evaluate(samples),
        }
    }

    fn is_compiled(&self) -> bool {
        matches!(self, PreparedStatistic::Compiled(_))
    }
}

/// Builds statistics on the best available path
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticFactory {
    acceleration: Acceleration,
}

impl StatisticFactory {
    pub fn new(acceleration: Acceleration) -> Self {
        Self { acceleration }
    }

    pub fn acceleration(&self) -> Acceleration {
        self.acceleration
    }

    /// Prepare `expr` for calls that provide `arity` samples
    ///
    /// Fails only when the statistic itself is invalid for the call; an
    /// expression that cannot be compiled still yields an interpreted
    /// statistic.
    pub fn build(&self, expr: &StatExpr, arity: Arity) -> Result<PreparedStatistic> {
        expr.validate(arity)?;

        let prepared = match self.acceleration {
            Acceleration::Disabled => PreparedStatistic::Interpreted {
                statistic: InterpretedStatistic::new(expr.clone()),
                fallback: None,
            },
            Acceleration::Auto => match CompiledStatistic::compile(expr) {
                Ok(compiled) => PreparedStatistic::Compiled(compiled),
                Err(unsupported) => PreparedStatistic::Interpreted {
                    statistic: InterpretedStatistic::new(expr.clone()),
                    fallback: Some(unsupported),
                },
            },
        };
        Ok(prepared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arg, Error};

    #[test]
    fn test_build_compiled() {
        let factory = StatisticFactory::default();
        let prepared = factory.build(&StatExpr::mean(Arg::X), Arity::One).unwrap();
        assert!(prepared.is_compiled());
        assert_eq!(prepared.path(), EvaluationPath::Compiled);
        assert!(prepared.fallback().is_none());
    }

    #[test]
    fn test_build_fallback() {
        let factory = StatisticFactory::new(Acceleration::Auto);
        let expr = StatExpr::custom1("first", |x| Ok(x[0]));
        let prepared = factory.build(&expr, Arity::One).unwrap();

        assert!(!prepared.is_compiled());
        assert!(prepared.path().is_degraded());
        assert_eq!(
            prepared.path().to_string(),
            "interpreted (opaque function `first` cannot be lowered)"
        );
        assert_eq!(prepared.evaluate(Samples::One(&[3.0, 1.0])).unwrap(), 3.0);
    }

    #[test]
    fn test_build_disabled() {
        let factory = StatisticFactory::new(Acceleration::Disabled);
        let prepared = factory.build(&StatExpr::mean(Arg::X), Arity::One).unwrap();
        assert_eq!(prepared.path(), EvaluationPath::Interpreted);
        assert!(!prepared.path().is_degraded());
    }

    #[test]
    fn test_build_rejects_arity() {
        let factory = StatisticFactory::default();
        let err = factory.build(&StatExpr::mean(Arg::Y), Arity::One).unwrap_err();
        assert!(matches!(err, Error::InvalidStatistic(_)));
    }

    #[test]
    fn test_acceleration_serde() {
        let json = serde_json::to_string(&Acceleration::Disabled).unwrap();
        assert_eq!(json, "\"disabled\"");
        let parsed: Acceleration = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, Acceleration::Auto);
    }
}
