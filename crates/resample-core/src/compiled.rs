//! Compiled statistics
//!
//! Lowering turns a [`StatExpr`] into a postfix program that runs on a small
//! value stack: no recursion, no boxed nodes and constant sub-expressions
//! folded ahead of time. Opaque closures have no lowered form, so
//! [`CompiledStatistic::compile`] reports [`CompilationUnsupported`] for any
//! expression that contains one.

use crate::error::CompilationUnsupported;
use crate::expr::{BinaryOp, PairwiseReduction, Reduction, StatExpr, UnaryOp};
use crate::kernels;
use crate::sample::{Arg, Samples};
use crate::statistic::Statistic;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Push(f64),
    Reduce(Reduction, Arg),
    Pairwise(PairwiseReduction),
    Unary(UnaryOp),
    Binary(BinaryOp),
}

/// A statistic lowered to a stack program
#[derive(Debug, Clone)]
pub struct CompiledStatistic {
    program: Vec<Op>,
    max_depth: usize,
}

impl CompiledStatistic {
    /// Lower an expression
    pub fn compile(expr: &StatExpr) -> std::result::Result<Self, CompilationUnsupported> {
        let mut lowering = Lowering::default();
        lowering.lower(expr)?;
        Ok(Self {
            program: lowering.program,
            max_depth: lowering.max_depth,
        })
    }

    /// Number of instructions after folding
    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    /// Deepest value stack the program needs
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Statistic for CompiledStatistic {
    fn evaluate(&self, samples: Samples<'_>) -> Result<f64> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.max_depth);
        for op in &self.program {
            let value = match *op {
                Op::Push(value) => value,
                Op::Reduce(reduction, arg) => kernels::reduce(reduction, samples.get(arg)?)?,
                Op::Pairwise(reduction) => {
                    let (x, y) = samples.pair()?;
                    kernels::pairwise(reduction, x, y)?
                }
                Op::Unary(op) => kernels::unary(op, pop(&mut stack)?),
                Op::Binary(op) => {
                    let rhs = pop(&mut stack)?;
                    let lhs = pop(&mut stack)?;
                    kernels::binary(op, lhs, rhs)
                }
            };
            stack.push(value);
        }
        pop(&mut stack)
    }

    fn is_compiled(&self) -> bool {
        true
    }
}

fn pop(stack: &mut Vec<f64>) -> Result<f64> {
    stack
        .pop()
        .ok_or_else(|| Error::InvalidStatistic("compiled program underflowed its stack".into()))
}

#[derive(Default)]
struct Lowering {
    program: Vec<Op>,
    depth: usize,
    max_depth: usize,
}

impl Lowering {
    fn lower(&mut self, expr: &StatExpr) -> std::result::Result<(), CompilationUnsupported> {
        match expr {
            StatExpr::Const(value) => self.push(Op::Push(*value)),
            StatExpr::Reduce(reduction, arg) => self.push(Op::Reduce(*reduction, *arg)),
            StatExpr::Pairwise(reduction) => self.push(Op::Pairwise(*reduction)),
            StatExpr::Unary(op, inner) => {
                self.lower(inner)?;
                match self.program.last().copied() {
                    Some(Op::Push(value)) => {
                        let n = self.program.len();
                        self.program[n - 1] = Op::Push(kernels::unary(*op, value));
                    }
                    _ => self.program.push(Op::Unary(*op)),
                }
            }
            StatExpr::Binary(op, lhs, rhs) => {
                self.lower(lhs)?;
                self.lower(rhs)?;
                self.depth -= 1;
                let n = self.program.len();
                match (self.program[n - 2], self.program[n - 1]) {
                    (Op::Push(l), Op::Push(r)) => {
                        self.program.truncate(n - 2);
                        self.program.push(Op::Push(kernels::binary(*op, l, r)));
                    }
                    _ => self.program.push(Op::Binary(*op)),
                }
            }
            StatExpr::Opaque(f) => return Err(CompilationUnsupported::opaque(f.name())),
        }
        Ok(())
    }

    fn push(&mut self, op: Op) {
        self.program.push(op);
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistic::InterpretedStatistic;

    #[test]
    fn test_compile_and_evaluate() {
        let expr = StatExpr::mean(Arg::Y) - StatExpr::mean(Arg::X);
        let stat = CompiledStatistic::compile(&expr).unwrap();
        assert!(stat.is_compiled());
        assert_eq!(stat.program_len(), 3);
        assert_eq!(stat.max_depth(), 2);

        let value = stat
            .evaluate(Samples::Two(&[1.0, 2.0, 3.0], &[5.0, 6.0, 7.0]))
            .unwrap();
        assert_eq!(value, 4.0);
    }

    #[test]
    fn test_constant_folding() {
        let expr = StatExpr::mean(Arg::X) * (StatExpr::constant(2.0) + 3.0).sqrt();
        let stat = CompiledStatistic::compile(&expr).unwrap();
        // mean, folded sqrt(5), mul
        assert_eq!(stat.program_len(), 3);

        let value = stat.evaluate(Samples::One(&[1.0, 3.0])).unwrap();
        assert_eq!(value, 2.0 * 5.0_f64.sqrt());
    }

    #[test]
    fn test_opaque_is_unsupported() {
        let expr = StatExpr::mean(Arg::X) + StatExpr::custom1("polyfit", |x| Ok(x[0]));
        let err = CompiledStatistic::compile(&expr).unwrap_err();
        assert_eq!(err.reason(), "opaque function `polyfit` cannot be lowered");
    }

    #[test]
    fn test_matches_interpreted() {
        let x = [4.0, 1.5, 9.25, 3.0, 7.5];
        let y = [2.0, 8.0, 1.0, 6.5, 3.25];
        let exprs = vec![
            StatExpr::median(Arg::X),
            StatExpr::quantile(Arg::Y, 0.9) - StatExpr::quantile(Arg::Y, 0.1),
            StatExpr::correlation(),
            -(StatExpr::slope() * StatExpr::std_dev(Arg::X)).abs(),
            (StatExpr::variance(Arg::Y) / StatExpr::len(Arg::Y)).ln().exp(),
            StatExpr::max(Arg::X).powf(StatExpr::min(Arg::Y)),
            StatExpr::intercept() + StatExpr::covariance(),
        ];
        for expr in exprs {
            let compiled = CompiledStatistic::compile(&expr).unwrap();
            let interpreted = InterpretedStatistic::new(expr.clone());
            let samples = Samples::Two(&x, &y);
            assert_eq!(
                compiled.evaluate(samples).unwrap().to_bits(),
                interpreted.evaluate(samples).unwrap().to_bits(),
                "paths disagree on {expr:?}"
            );
        }
    }

    #[test]
    fn test_runtime_errors_match_interpreted() {
        let expr = StatExpr::mean(Arg::X);
        let compiled = CompiledStatistic::compile(&expr).unwrap();
        assert!(matches!(
            compiled.evaluate(Samples::One(&[])),
            Err(Error::InsufficientData { .. })
        ));
    }
}
