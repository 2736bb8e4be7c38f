//! The statistic capability and its interpreted implementation

use crate::expr::StatExpr;
use crate::kernels;
use crate::sample::Samples;
use crate::Result;

/// A scalar statistic over one or two samples
///
/// Implementations must be deterministic given their inputs.
pub trait Statistic {
    /// Evaluate the statistic on the given samples
    fn evaluate(&self, samples: Samples<'_>) -> Result<f64>;

    /// Whether this implementation runs the compiled representation
    fn is_compiled(&self) -> bool;
}

impl<S: Statistic + ?Sized> Statistic for &S {
    fn evaluate(&self, samples: Samples<'_>) -> Result<f64> {
        (**self).evaluate(samples)
    }

    fn is_compiled(&self) -> bool {
        (**self).is_compiled()
    }
}

/// Tree-walking evaluation of a [`StatExpr`]
///
/// Handles every expression, including opaque closures.
#[derive(Debug, Clone)]
pub struct InterpretedStatistic {
    expr: StatExpr,
}

impl InterpretedStatistic {
    pub fn new(expr: StatExpr) -> Self {
        Self { expr }
    }
}

impl Statistic for InterpretedStatistic {
    fn evaluate(&self, samples: Samples<'_>) -> Result<f64> {
        interpret(&self.expr, samples)
    }

    fn is_compiled(&self) -> bool {
        false
    }
}

fn interpret(expr: &StatExpr, samples: Samples<'_>) -> Result<f64> {
    match expr {
        StatExpr::Const(value) => Ok(*value),
        StatExpr::Reduce(reduction, arg) => kernels::reduce(*reduction, samples.get(*arg)?),
        StatExpr::Pairwise(reduction) => {
            let (x, y) = samples.pair()?;
            kernels::pairwise(*reduction, x, y)
        }
        StatExpr::Unary(op, inner) => Ok(kernels::unary(*op, interpret(inner, samples)?)),
        StatExpr::Binary(op, lhs, rhs) => {
            let lhs = interpret(lhs, samples)?;
            let rhs = interpret(rhs, samples)?;
            Ok(kernels::binary(*op, lhs, rhs))
        }
        StatExpr::Opaque(f) => f.call(samples),
    }
}
