//! Statistic expressions
//!
//! A [`StatExpr`] describes the statistic evaluated on every replicate. Most
//! statistics are built from the reductions and operators below, which the
//! compiled path can lower to a flat program. Anything else can be wrapped as
//! an opaque closure with [`StatExpr::custom1`] or [`StatExpr::custom2`]; such
//! statistics always run on the interpreted path.
//!
//! # Example
//!
//! ```rust
//! use resample_core::{Arg, StatExpr};
//!
//! // mean(y) - mean(x)
//! let diff = StatExpr::mean(Arg::Y) - StatExpr::mean(Arg::X);
//! assert!(diff.is_lowerable());
//!
//! let opaque = StatExpr::custom1("trimmed_sum", |x| Ok(x.iter().skip(1).sum()));
//! assert!(!opaque.is_lowerable());
//! ```

use crate::sample::{Arg, Arity, Samples};
use crate::{Error, Result};
use std::fmt;
use std::ops;
use std::sync::Arc;

/// Single-sample reductions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduction {
    Sum,
    Mean,
    /// Population variance
    Variance,
    /// Population standard deviation
    StdDev,
    Median,
    Min,
    Max,
    Len,
    /// Linearly interpolated quantile, `p` in [0, 1]
    Quantile(f64),
}

/// Reductions over two index-aligned samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairwiseReduction {
    Covariance,
    Correlation,
    /// Least-squares slope of y on x
    Slope,
    /// Least-squares intercept of y on x
    Intercept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Abs,
    Sqrt,
    Ln,
    Exp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

type OpaqueBody = dyn Fn(Samples<'_>) -> anyhow::Result<f64> + Send + Sync;

/// User closure evaluated as-is
#[derive(Clone)]
pub struct OpaqueFn {
    name: String,
    arity: Arity,
    body: Arc<OpaqueBody>,
}

impl OpaqueFn {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn call(&self, samples: Samples<'_>) -> Result<f64> {
        (self.body)(samples).map_err(Error::Statistic)
    }
}

impl fmt::Debug for OpaqueFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueFn")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A statistic over one or two samples
#[derive(Debug, Clone)]
pub enum StatExpr {
    Const(f64),
    Reduce(Reduction, Arg),
    Pairwise(PairwiseReduction),
    Unary(UnaryOp, Box<StatExpr>),
    Binary(BinaryOp, Box<StatExpr>, Box<StatExpr>),
    Opaque(OpaqueFn),
}

impl StatExpr {
    pub fn constant(value: f64) -> Self {
        Self::Const(value)
    }

    pub fn sum(arg: Arg) -> Self {
        Self::Reduce(Reduction::Sum, arg)
    }

    pub fn mean(arg: Arg) -> Self {
        Self::Reduce(Reduction::Mean, arg)
    }

    pub fn variance(arg: Arg) -> Self {
        Self::Reduce(Reduction::Variance, arg)
    }

    pub fn std_dev(arg: Arg) -> Self {
        Self::Reduce(Reduction::StdDev, arg)
    }

    pub fn median(arg: Arg) -> Self {
        Self::Reduce(Reduction::Median, arg)
    }

    pub fn min(arg: Arg) -> Self {
        Self::Reduce(Reduction::Min, arg)
    }

    pub fn max(arg: Arg) -> Self {
        Self::Reduce(Reduction::Max, arg)
    }

    pub fn len(arg: Arg) -> Self {
        Self::Reduce(Reduction::Len, arg)
    }

    pub fn quantile(arg: Arg, p: f64) -> Self {
        Self::Reduce(Reduction::Quantile(p), arg)
    }

    pub fn covariance() -> Self {
        Self::Pairwise(PairwiseReduction::Covariance)
    }

    pub fn correlation() -> Self {
        Self::Pairwise(PairwiseReduction::Correlation)
    }

    pub fn slope() -> Self {
        Self::Pairwise(PairwiseReduction::Slope)
    }

    pub fn intercept() -> Self {
        Self::Pairwise(PairwiseReduction::Intercept)
    }

    pub fn abs(self) -> Self {
        Self::Unary(UnaryOp::Abs, Box::new(self))
    }

    pub fn sqrt(self) -> Self {
        Self::Unary(UnaryOp::Sqrt, Box::new(self))
    }

    pub fn ln(self) -> Self {
        Self::Unary(UnaryOp::Ln, Box::new(self))
    }

    pub fn exp(self) -> Self {
        Self::Unary(UnaryOp::Exp, Box::new(self))
    }

    pub fn powf(self, exponent: impl Into<StatExpr>) -> Self {
        Self::Binary(BinaryOp::Pow, Box::new(self), Box::new(exponent.into()))
    }

    /// Wrap a one-sample closure
    pub fn custom1<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[f64]) -> anyhow::Result<f64> + Send + Sync + 'static,
    {
        Self::Opaque(OpaqueFn {
            name: name.into(),
            arity: Arity::One,
            body: Arc::new(move |samples: Samples<'_>| f(samples.x())),
        })
    }

    /// Wrap a two-sample closure
    pub fn custom2<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[f64], &[f64]) -> anyhow::Result<f64> + Send + Sync + 'static,
    {
        Self::Opaque(OpaqueFn {
            name: name.into(),
            arity: Arity::Two,
            body: Arc::new(move |samples: Samples<'_>| {
                let (x, y) = samples.pair()?;
                f(x, y)
            }),
        })
    }

    /// Minimum number of samples the statistic reads
    pub fn required_arity(&self) -> Arity {
        match self {
            StatExpr::Const(_) => Arity::One,
            StatExpr::Reduce(_, Arg::X) => Arity::One,
            StatExpr::Reduce(_, Arg::Y) | StatExpr::Pairwise(_) => Arity::Two,
            StatExpr::Unary(_, inner) => inner.required_arity(),
            StatExpr::Binary(_, lhs, rhs) => lhs.required_arity().max(rhs.required_arity()),
            StatExpr::Opaque(f) => f.arity(),
        }
    }

    /// Whether the expression contains no opaque closures
    pub fn is_lowerable(&self) -> bool {
        match self {
            StatExpr::Const(_) | StatExpr::Reduce(..) | StatExpr::Pairwise(_) => true,
            StatExpr::Unary(_, inner) => inner.is_lowerable(),
            StatExpr::Binary(_, lhs, rhs) => lhs.is_lowerable() && rhs.is_lowerable(),
            StatExpr::Opaque(_) => false,
        }
    }

    /// Check the statistic against the samples a call will provide
    pub fn validate(&self, arity: Arity) -> Result<()> {
        if self.required_arity() > arity {
            return Err(Error::InvalidStatistic(
                "statistic reads two samples but the call provides one".into(),
            ));
        }
        self.check_parameters()
    }

    fn check_parameters(&self) -> Result<()> {
        match self {
            StatExpr::Reduce(Reduction::Quantile(p), _) if !(0.0..=1.0).contains(p) => {
                Err(Error::invalid_quantile(*p))
            }
            StatExpr::Unary(_, inner) => inner.check_parameters(),
            StatExpr::Binary(_, lhs, rhs) => {
                lhs.check_parameters()?;
                rhs.check_parameters()
            }
            _ => Ok(()),
        }
    }
}

impl From<f64> for StatExpr {
    fn from(value: f64) -> Self {
        StatExpr::Const(value)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<R: Into<StatExpr>> ops::$trait<R> for StatExpr {
            type Output = StatExpr;

            fn $method(self, rhs: R) -> StatExpr {
                StatExpr::Binary($op, Box::new(self), Box::new(rhs.into()))
            }
        }
    };
}

impl_binary_op!(Add, add, BinaryOp::Add);
impl_binary_op!(Sub, sub, BinaryOp::Sub);
impl_binary_op!(Mul, mul, BinaryOp::Mul);
impl_binary_op!(Div, div, BinaryOp::Div);

impl ops::Neg for StatExpr {
    type Output = StatExpr;

    fn neg(self) -> StatExpr {
        StatExpr::Unary(UnaryOp::Neg, Box::new(self))
    }
}
