//! Replicate output of a resampling call

use resample_core::EvaluationPath;

/// Statistic values, one per replicate, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct Replicates {
    values: Vec<f64>,
    path: EvaluationPath,
}

impl Replicates {
    pub fn new(values: Vec<f64>, path: EvaluationPath) -> Self {
        Self { values, path }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Path the replicates were evaluated on
    pub fn path(&self) -> &EvaluationPath {
        &self.path
    }

    /// True when the statistic had to fall back to interpretation
    pub fn is_degraded(&self) -> bool {
        self.path.is_degraded()
    }

    /// Mean of the replicates, NaN when empty
    pub fn mean(&self) -> f64 {
        use statrs::statistics::Statistics;
        self.values.iter().mean()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

impl AsRef<[f64]> for Replicates {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl IntoIterator for Replicates {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Replicates {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
