//! The replicate loop shared by every strategy

use crate::draw::Draw;
use resample_core::{BufferPolicy, ResampleRng, ResampleWorkspace, Result, Statistic};

/// Draw `size` replicates and evaluate `statistic` on each
///
/// Stops at the first failing evaluation; no partial output is returned.
/// The buffer policy only changes allocation behaviour, never the sequence
/// of random draws, so equal seeds give equal replicates on either policy.
pub fn run_replicates<D, S>(
    draw: &D,
    statistic: &S,
    size: usize,
    rng: &mut ResampleRng,
    policy: BufferPolicy,
) -> Result<Vec<f64>>
where
    D: Draw,
    S: Statistic + ?Sized,
{
    let mut ws = ResampleWorkspace::new(policy);
    let mut out = Vec::with_capacity(size);

    for _ in 0..size {
        ws.begin_iteration();
        draw.draw(rng, &mut ws);
        out.push(statistic.evaluate(draw.samples(&ws))?);
    }

    Ok(out)
}
