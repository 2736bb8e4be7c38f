//! Sample views handed to statistics

use crate::{Error, Result};
use std::fmt;

/// Which sample an expression reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arg {
    X,
    Y,
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::X => f.write_str("x"),
            Arg::Y => f.write_str("y"),
        }
    }
}

/// Number of samples a statistic consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arity {
    One,
    Two,
}

/// One or two borrowed samples
///
/// Resampled data lives in workspace buffers; statistics only ever see
/// these borrowed views.
#[derive(Debug, Clone, Copy)]
pub enum Samples<'a> {
    One(&'a [f64]),
    Two(&'a [f64], &'a [f64]),
}

impl<'a> Samples<'a> {
    pub fn arity(&self) -> Arity {
        match self {
            Samples::One(_) => Arity::One,
            Samples::Two(..) => Arity::Two,
        }
    }

    pub fn x(&self) -> &'a [f64] {
        match *self {
            Samples::One(x) | Samples::Two(x, _) => x,
        }
    }

    pub fn y(&self) -> Option<&'a [f64]> {
        match *self {
            Samples::One(_) => None,
            Samples::Two(_, y) => Some(y),
        }
    }

    /// Resolve an argument reference
    pub fn get(&self, arg: Arg) -> Result<&'a [f64]> {
        match arg {
            Arg::X => Ok(self.x()),
            Arg::Y => self.y().ok_or_else(|| {
                Error::InvalidStatistic("statistic reads `y` but only one sample was given".into())
            }),
        }
    }

    /// Both samples, for pairwise reductions
    pub fn pair(&self) -> Result<(&'a [f64], &'a [f64])> {
        match *self {
            Samples::Two(x, y) => Ok((x, y)),
            Samples::One(_) => Err(Error::InvalidStatistic(
                "pairwise statistic needs two samples".into(),
            )),
        }
    }
}
