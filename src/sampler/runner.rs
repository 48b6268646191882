//! Bounded generate-then-validate loop.

use super::config::SamplerConfig;
use crate::constraint::{satisfies_constraints, Blacklist};
use crate::error::{Error, Result};
use crate::gen::{random_derangement, Strategy};
use crate::perm::Permutation;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a successful constrained sample.
#[derive(Debug, Clone)]
pub struct SampleResult {
    /// The constrained derangement.
    pub perm: Permutation,

    /// Candidates generated, including the accepted one. 1 means the
    /// first draw already satisfied every constraint.
    pub attempts: usize,

    /// Strategy that produced the candidates.
    pub strategy: Strategy,
}

/// Executes constrained derangement sampling.
pub struct Sampler;

impl Sampler {
    /// Samples with the default configuration and the given minimum cycle
    /// length. Convenience wrapper for the config/notification layers.
    ///
    /// # Errors
    ///
    /// See [`Sampler::run`].
    pub fn sample(n: usize, min_cycle: usize, blacklist: &Blacklist) -> Result<SampleResult> {
        Self::run(n, blacklist, &SamplerConfig::default().with_min_cycle(min_cycle))
    }

    /// Draws derangements with the configured strategy until one satisfies
    /// the minimum-cycle and blacklist constraints, up to the attempt
    /// budget.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`]: `n == 1`, an out-of-range blacklist pair,
    ///   or an invalid configuration.
    /// - [`Error::Infeasible`]: `min_cycle` (after normalization) exceeds
    ///   `n` for a non-empty group; no sampling is attempted.
    /// - [`Error::RetriesExhausted`]: no candidate passed within the
    ///   budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use derange::constraint::Blacklist;
    /// use derange::sampler::{Sampler, SamplerConfig};
    ///
    /// let blacklist = Blacklist::new([(0, 1)]).unwrap();
    /// let config = SamplerConfig::default().with_min_cycle(3).with_seed(42);
    /// let result = Sampler::run(8, &blacklist, &config).unwrap();
    /// assert!(result.perm.cycles().iter().all(|c| c.len() >= 3));
    /// ```
    pub fn run(n: usize, blacklist: &Blacklist, config: &SamplerConfig) -> Result<SampleResult> {
        config.validate().map_err(Error::InvalidInput)?;
        blacklist.ensure_in_range(n)?;

        // The empty permutation is the one derangement of the empty group
        // and satisfies any constraint set vacuously.
        if n == 0 {
            return Ok(SampleResult {
                perm: Permutation::identity(0),
                attempts: 0,
                strategy: config.strategy,
            });
        }
        if n == 1 {
            return Err(Error::InvalidInput(
                "no derangement exists for a group of size 1".into(),
            ));
        }

        let min_cycle = config.min_cycle.max(2);
        if min_cycle > n {
            return Err(Error::Infeasible(format!(
                "minimum cycle length {min_cycle} exceeds group size {n}"
            )));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        for attempt in 1..=config.max_attempts {
            let perm = random_derangement(n, config.strategy, &mut rng)?;
            if satisfies_constraints(&perm, min_cycle, blacklist) {
                return Ok(SampleResult {
                    perm,
                    attempts: attempt,
                    strategy: config.strategy,
                });
            }
        }
        Err(Error::RetriesExhausted {
            attempts: config.max_attempts,
        })
    }
}
