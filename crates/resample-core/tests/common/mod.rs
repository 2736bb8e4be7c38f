//! Common test utilities

pub use approx::assert_relative_eq;

use resample_core::{Arg, StatExpr};

/// Lowerable statistics covering every reduction and operator
pub fn lowerable_statistics() -> Vec<StatExpr> {
    vec![
        StatExpr::sum(Arg::X),
        StatExpr::mean(Arg::Y) - StatExpr::mean(Arg::X),
        StatExpr::variance(Arg::X) / StatExpr::variance(Arg::Y),
        StatExpr::std_dev(Arg::X) * 2.0,
        StatExpr::median(Arg::X).abs().sqrt(),
        StatExpr::quantile(Arg::Y, 0.75) - StatExpr::quantile(Arg::Y, 0.25),
        StatExpr::max(Arg::X) - StatExpr::min(Arg::X),
        StatExpr::len(Arg::X).ln() + StatExpr::len(Arg::Y).exp(),
        StatExpr::correlation(),
        -StatExpr::covariance(),
        StatExpr::slope().powf(2.0),
        StatExpr::intercept(),
    ]
}
