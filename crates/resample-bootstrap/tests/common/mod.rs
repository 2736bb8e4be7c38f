//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

pub const EPSILON: f64 = 1e-9;

/// Generate normal data
pub fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

/// `x = 0..n` with `y = factor * x`, so every pair lies on one line
pub fn proportional_pairs(n: usize, factor: f64) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x.iter().map(|v| v * factor).collect();
    (x, y)
}

/// Values sorted with NaN-safe total ordering
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}
