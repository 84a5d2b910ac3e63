use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use tracing::trace;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_SAMPLE_COUNT: usize = 10;
/// Upper bound paired with `LayoutConfig::wide_steelblue`.
pub const WIDE_PRESET_MAX: f64 = 50.0;
/// Upper bound paired with `LayoutConfig::narrow_blue`.
pub const NARROW_PRESET_MAX: f64 = 100.0;

/// Producer of one finite, ordered batch of samples per call.
pub trait SampleSource {
    fn next_samples(&mut self) -> ChartResult<Vec<f64>>;
}

/// Draws `count` values uniformly from `[0, max_value)` on every call.
#[derive(Debug, Clone)]
pub struct UniformSampleSource {
    count: usize,
    max_value: f64,
    distribution: Uniform<f64>,
    rng: StdRng,
}

impl UniformSampleSource {
    /// Seeded source; the same seed always yields the same batches.
    pub fn new(count: usize, max_value: f64, seed: u64) -> ChartResult<Self> {
        Self::with_rng(count, max_value, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(count: usize, max_value: f64) -> ChartResult<Self> {
        Self::with_rng(count, max_value, StdRng::from_entropy())
    }

    fn with_rng(count: usize, max_value: f64, rng: StdRng) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "sample max value must be finite and > 0, got {max_value}"
            )));
        }
        Ok(Self {
            count,
            max_value,
            distribution: Uniform::new(0.0, max_value),
            rng,
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }
}

impl SampleSource for UniformSampleSource {
    fn next_samples(&mut self) -> ChartResult<Vec<f64>> {
        let samples: Vec<f64> = (0..self.count)
            .map(|_| self.distribution.sample(&mut self.rng))
            .collect();
        trace!(count = samples.len(), max = self.max_value, "drew uniform samples");
        Ok(samples)
    }
}

/// Replays the same samples on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedSamples(pub Vec<f64>);

impl From<Vec<f64>> for FixedSamples {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples)
    }
}

impl SampleSource for FixedSamples {
    fn next_samples(&mut self) -> ChartResult<Vec<f64>> {
        Ok(self.0.clone())
    }
}
