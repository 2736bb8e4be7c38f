//! Resample buffers
//!
//! The compiled path keeps one set of buffers for a whole call; the
//! interpreted path starts every iteration from freshly allocated buffers.
//! Draw code sees the same interface either way, so both paths consume the
//! random stream identically.

/// Buffer lifetime across iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferPolicy {
    /// Clear and reuse buffers between iterations
    Reuse,
    /// Drop buffers and allocate new ones every iteration
    Fresh,
}

/// Scratch space for one resampling call
#[derive(Debug)]
pub struct ResampleWorkspace {
    policy: BufferPolicy,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub indices: Vec<usize>,
}

impl ResampleWorkspace {
    pub fn new(policy: BufferPolicy) -> Self {
        Self {
            policy,
            x: Vec::new(),
            y: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn policy(&self) -> BufferPolicy {
        self.policy
    }

    /// Prepare the buffers for the next replicate
    pub fn begin_iteration(&mut self) {
        match self.policy {
            BufferPolicy::Reuse => {
                self.x.clear();
                self.y.clear();
                self.indices.clear();
            }
            BufferPolicy::Fresh => {
                self.x = Vec::new();
                self.y = Vec::new();
                self.indices = Vec::new();
            }
        }
    }

    /// Copy `source` into the x buffer
    pub fn load_x(&mut self, source: &[f64]) {
        self.x.clear();
        self.x.extend_from_slice(source);
    }

    /// Gather `source[indices]` into the x and y buffers
    pub fn gather_pairs(&mut self, x: &[f64], y: &[f64]) {
        self.x.clear();
        self.y.clear();
        for &idx in &self.indices {
            debug_assert!(idx < x.len() && idx < y.len(), "Index {idx} out of bounds");
            self.x.push(x[idx]);
            self.y.push(y[idx]);
        }
    }
}
