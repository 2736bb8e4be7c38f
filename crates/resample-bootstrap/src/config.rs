//! Resampler configuration

use resample_core::{Acceleration, Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of replicates
pub const DEFAULT_SIZE: usize = 5000;

/// Validated replicate count
///
/// Deserializes from a signed integer so a negative count is reported as
/// [`Error::InvalidSize`] instead of a generic parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ReplicateCount(usize);

impl ReplicateCount {
    pub const fn new(size: usize) -> Self {
        Self(size)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for ReplicateCount {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

impl From<usize> for ReplicateCount {
    fn from(size: usize) -> Self {
        Self(size)
    }
}

impl TryFrom<i64> for ReplicateCount {
    type Error = Error;

    fn try_from(size: i64) -> Result<Self> {
        usize::try_from(size)
            .map(Self)
            .map_err(|_| Error::InvalidSize(size))
    }
}

impl From<ReplicateCount> for i64 {
    fn from(count: ReplicateCount) -> i64 {
        i64::try_from(count.0).unwrap_or(i64::MAX)
    }
}

/// Settings for a [`Resampler`](crate::Resampler)
///
/// # Example
///
/// ```rust
/// use resample_bootstrap::ResamplerConfig;
///
/// let config = ResamplerConfig::from_json(r#"{ "size": 1000, "seed": 7 }"#).unwrap();
/// assert_eq!(config.size.get(), 1000);
/// assert_eq!(config.seed, Some(7));
///
/// assert!(ResamplerConfig::from_json(r#"{ "size": -1 }"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct ResamplerConfig {
    /// Number of replicates per call
    pub size: ReplicateCount,
    /// Seed for the random source; entropy when absent
    pub seed: Option<u64>,
    /// Whether statistics are compiled when possible
    pub acceleration: Acceleration,
}

impl Default for ResamplerConfig {
    fn default() -> Self {
        Self {
            size: ReplicateCount::default(),
            seed: None,
            acceleration: Acceleration::Auto,
        }
    }
}

impl ResamplerConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Unvalidated configuration as written by users
#[doc(hidden)]
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    size: Option<i64>,
    seed: Option<u64>,
    acceleration: Option<Acceleration>,
}

impl TryFrom<RawConfig> for ResamplerConfig {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let size = match raw.size {
            Some(size) => ReplicateCount::try_from(size)?,
            None => ReplicateCount::default(),
        };
        Ok(Self {
            size,
            seed: raw.seed,
            acceleration: raw.acceleration.unwrap_or_default(),
        })
    }
}
