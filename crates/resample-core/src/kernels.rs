//! Numeric kernels shared by both evaluation paths
//!
//! The compiled and interpreted statistics dispatch into these functions,
//! which is what makes the two paths return bit-identical values.
//! Variances and covariances are population moments (divisor `n`).

use crate::expr::{BinaryOp, PairwiseReduction, Reduction, UnaryOp};
use crate::{Error, Result};
use statrs::statistics::Statistics;

/// Reduce one sample to a scalar
pub fn reduce(reduction: Reduction, data: &[f64]) -> Result<f64> {
    if data.is_empty() && reduction != Reduction::Len {
        return Err(Error::empty_input());
    }
    let value = match reduction {
        Reduction::Sum => data.iter().sum(),
        Reduction::Mean => data.iter().mean(),
        Reduction::Variance => data.iter().population_variance(),
        Reduction::StdDev => data.iter().population_std_dev(),
        Reduction::Min => data.iter().copied().fold(f64::INFINITY, f64::min),
        Reduction::Max => data.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Reduction::Median => quantile(data, 0.5),
        Reduction::Quantile(p) => {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::invalid_quantile(p));
            }
            quantile(data, p)
        }
        Reduction::Len => data.len() as f64,
    };
    Ok(value)
}

/// Reduce two index-aligned samples to a scalar
pub fn pairwise(reduction: PairwiseReduction, x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::shape_mismatch(x.len(), y.len()));
    }
    if x.is_empty() {
        return Err(Error::empty_input());
    }
    let covariance = x.iter().population_covariance(y.iter());
    let value = match reduction {
        PairwiseReduction::Covariance => covariance,
        PairwiseReduction::Correlation => {
            covariance / (x.iter().population_std_dev() * y.iter().population_std_dev())
        }
        PairwiseReduction::Slope => covariance / x.iter().population_variance(),
        PairwiseReduction::Intercept => {
            let slope = covariance / x.iter().population_variance();
            y.iter().mean() - slope * x.iter().mean()
        }
    };
    Ok(value)
}

#[inline]
pub fn unary(op: UnaryOp, value: f64) -> f64 {
    match op {
        UnaryOp::Neg => -value,
        UnaryOp::Abs => value.abs(),
        UnaryOp::Sqrt => value.sqrt(),
        UnaryOp::Ln => value.ln(),
        UnaryOp::Exp => value.exp(),
    }
}

#[inline]
pub fn binary(op: BinaryOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Div => lhs / rhs,
        BinaryOp::Pow => lhs.powf(rhs),
    }
}

/// Linearly interpolated quantile of unsorted, non-empty data
fn quantile(data: &[f64], p: f64) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
