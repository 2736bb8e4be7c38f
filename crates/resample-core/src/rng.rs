//! Random source for resampling
//!
//! Every resampling call draws from an explicit [`ResampleRng`] rather than a
//! process-wide generator, so a seed fully determines the replicates.

use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable generator with the draw primitives the replicate loops need
#[derive(Debug, Clone)]
pub struct ResampleRng {
    inner: ChaCha8Rng,
}

impl ResampleRng {
    /// Deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Fill `out` with `len` uniform indices in `[0, n)`
    ///
    /// `n` must be positive when `len` is.
    pub fn fill_indices(&mut self, n: usize, len: usize, out: &mut Vec<usize>) {
        out.clear();
        if len == 0 {
            return;
        }
        let dist = Uniform::new(0, n);
        out.extend((0..len).map(|_| dist.sample(&mut self.inner)));
    }

    /// Draw `source.len()` values with replacement into `out`
    pub fn resample_into(&mut self, source: &[f64], out: &mut Vec<f64>) {
        out.clear();
        if source.is_empty() {
            return;
        }
        let dist = Uniform::new(0, source.len());
        out.extend((0..source.len()).map(|_| source[dist.sample(&mut self.inner)]));
    }

    /// Uniformly permute `data` in place
    pub fn shuffle(&mut self, data: &mut [f64]) {
        data.shuffle(&mut self.inner);
    }
}
