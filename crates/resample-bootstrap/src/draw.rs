//! Per-strategy replicate draws
//!
//! A [`Draw`] fills the workspace buffers for one replicate and exposes them
//! as the [`Samples`] the statistic sees. The replicate loop is shared by
//! every strategy; only the draw differs.

use resample_core::{Arity, ResampleRng, ResampleWorkspace, Samples, Strategy};

/// How one replicate's samples are produced
pub trait Draw {
    const STRATEGY: Strategy;
    const ARITY: Arity;

    /// Fill `ws` with the next replicate's data
    fn draw(&self, rng: &mut ResampleRng, ws: &mut ResampleWorkspace);

    /// View the current replicate
    fn samples<'s>(&'s self, ws: &'s ResampleWorkspace) -> Samples<'s>;
}

/// Resample `x` with replacement
#[derive(Debug, Clone, Copy)]
pub struct OneSampleDraw<'a> {
    pub x: &'a [f64],
}

impl Draw for OneSampleDraw<'_> {
    const STRATEGY: Strategy = Strategy::OneSampleBootstrap;
    const ARITY: Arity = Arity::One;

    fn draw(&self, rng: &mut ResampleRng, ws: &mut ResampleWorkspace) {
        rng.resample_into(self.x, &mut ws.x);
    }

    fn samples<'s>(&'s self, ws: &'s ResampleWorkspace) -> Samples<'s> {
        Samples::One(&ws.x)
    }
}

/// Resample `x` and `y` independently, each with replacement
#[derive(Debug, Clone, Copy)]
pub struct TwoSampleDraw<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
}

impl Draw for TwoSampleDraw<'_> {
    const STRATEGY: Strategy = Strategy::TwoSampleBootstrap;
    const ARITY: Arity = Arity::Two;

    fn draw(&self, rng: &mut ResampleRng, ws: &mut ResampleWorkspace) {
        rng.resample_into(self.x, &mut ws.x);
        rng.resample_into(self.y, &mut ws.y);
    }

    fn samples<'s>(&'s self, ws: &'s ResampleWorkspace) -> Samples<'s> {
        Samples::Two(&ws.x, &ws.y)
    }
}

/// Resample index pairs so `(x[i], y[i])` stay together
#[derive(Debug, Clone, Copy)]
pub struct PairedDraw<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
}

impl Draw for PairedDraw<'_> {
    const STRATEGY: Strategy = Strategy::PairedBootstrap;
    const ARITY: Arity = Arity::Two;

    fn draw(&self, rng: &mut ResampleRng, ws: &mut ResampleWorkspace) {
        let n = self.x.len();
        rng.fill_indices(n, n, &mut ws.indices);
        ws.gather_pairs(self.x, self.y);
    }

    fn samples<'s>(&'s self, ws: &'s ResampleWorkspace) -> Samples<'s> {
        Samples::Two(&ws.x, &ws.y)
    }
}

/// Shuffle the pooled samples and split at `x`'s length
#[derive(Debug, Clone)]
pub struct PermutationDraw {
    pool: Vec<f64>,
    split: usize,
}

impl PermutationDraw {
    pub fn new(x: &[f64], y: &[f64]) -> Self {
        let mut pool = Vec::with_capacity(x.len() + y.len());
        pool.extend_from_slice(x);
        pool.extend_from_slice(y);
        Self {
            pool,
            split: x.len(),
        }
    }
}

impl Draw for PermutationDraw {
    const STRATEGY: Strategy = Strategy::Permutation;
    const ARITY: Arity = Arity::Two;

    fn draw(&self, rng: &mut ResampleRng, ws: &mut ResampleWorkspace) {
        ws.load_x(&self.pool);
        rng.shuffle(&mut ws.x);
    }

    fn samples<'s>(&'s self, ws: &'s ResampleWorkspace) -> Samples<'s> {
        let (xs, ys) = ws.x.split_at(self.split.min(ws.x.len()));
        Samples::Two(xs, ys)
    }
}

/// Keep `x` in place and shuffle `y`, breaking the pairing
#[derive(Debug, Clone, Copy)]
pub struct IndependentPermutationDraw<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
}

impl Draw for IndependentPermutationDraw<'_> {
    const STRATEGY: Strategy = Strategy::IndependentPermutation;
    const ARITY: Arity = Arity::Two;

    fn draw(&self, rng: &mut ResampleRng, ws: &mut ResampleWorkspace) {
        ws.y.clear();
        ws.y.extend_from_slice(self.y);
        rng.shuffle(&mut ws.y);
    }

    fn samples<'s>(&'s self, ws: &'s ResampleWorkspace) -> Samples<'s> {
        Samples::Two(self.x, &ws.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resample_core::BufferPolicy;

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut v = values.to_vec();
        v.sort_by(f64::total_cmp);
        v
    }

    #[test]
    fn test_one_sample_draw() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let draw = OneSampleDraw { x: &x };
        let mut rng = ResampleRng::seeded(11);
        let mut ws = ResampleWorkspace::new(BufferPolicy::Reuse);

        draw.draw(&mut rng, &mut ws);
        match draw.samples(&ws) {
            Samples::One(xs) => {
                assert_eq!(xs.len(), 4);
                assert!(xs.iter().all(|v| x.contains(v)));
            }
            Samples::Two(..) => panic!("expected one sample"),
        }
    }

    #[test]
    fn test_two_sample_draw_keeps_lengths() {
        let x = [1.0, 2.0, 3.0];
        let y = [10.0, 20.0, 30.0, 40.0, 50.0];
        let draw = TwoSampleDraw { x: &x, y: &y };
        let mut rng = ResampleRng::seeded(5);
        let mut ws = ResampleWorkspace::new(BufferPolicy::Fresh);

        draw.draw(&mut rng, &mut ws);
        let (xs, ys) = draw.samples(&ws).pair().unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(ys.len(), 5);
        assert!(xs.iter().all(|v| x.contains(v)));
        assert!(ys.iter().all(|v| y.contains(v)));
    }

    #[test]
    fn test_paired_draw_preserves_pairs() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| v * 10.0).collect();
        let draw = PairedDraw { x: &x, y: &y };
        let mut rng = ResampleRng::seeded(2);
        let mut ws = ResampleWorkspace::new(BufferPolicy::Reuse);

        for _ in 0..10 {
            ws.begin_iteration();
            draw.draw(&mut rng, &mut ws);
            let (xs, ys) = draw.samples(&ws).pair().unwrap();
            for (a, b) in xs.iter().zip(ys) {
                assert_eq!(*b, a * 10.0);
            }
        }
    }

    #[test]
    fn test_permutation_draw_partitions_pool() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0, 7.0];
        let draw = PermutationDraw::new(&x, &y);
        let mut rng = ResampleRng::seeded(8);
        let mut ws = ResampleWorkspace::new(BufferPolicy::Reuse);

        draw.draw(&mut rng, &mut ws);
        let (xs, ys) = draw.samples(&ws).pair().unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(ys.len(), 4);

        let mut all = xs.to_vec();
        all.extend_from_slice(ys);
        assert_eq!(sorted(&all), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_independent_permutation_keeps_x() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [5.0, 6.0, 7.0, 8.0];
        let draw = IndependentPermutationDraw { x: &x, y: &y };
        let mut rng = ResampleRng::seeded(4);
        let mut ws = ResampleWorkspace::new(BufferPolicy::Fresh);

        draw.draw(&mut rng, &mut ws);
        let (xs, ys) = draw.samples(&ws).pair().unwrap();
        assert_eq!(xs, &x);
        assert_eq!(sorted(ys), y.to_vec());
    }
}
