//! Sampler configuration.

use crate::gen::Strategy;

/// Configuration for the constrained sampler.
///
/// # Examples
///
/// ```
/// use derange::gen::Strategy;
/// use derange::sampler::SamplerConfig;
///
/// let config = SamplerConfig::default()
///     .with_min_cycle(3)
///     .with_strategy(Strategy::Uniform)
///     .with_max_attempts(50_000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Minimum allowed cycle length. Values below 2 are treated as 2,
    /// since a 1-cycle is a fixed point and is forbidden for any
    /// derangement.
    pub min_cycle: usize,

    /// Generator strategy for raw candidates.
    pub strategy: Strategy,

    /// Attempt budget. Chosen so that feasible instances succeed with
    /// overwhelming probability; exhaustion is reported as a distinct
    /// error rather than looping forever.
    pub max_attempts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_cycle: 2,
            strategy: Strategy::default(),
            max_attempts: 10_000,
            seed: None,
        }
    }
}

impl SamplerConfig {
    pub fn with_min_cycle(mut self, min_cycle: usize) -> Self {
        self.min_cycle = min_cycle;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".into());
        }
        Ok(())
    }
}
