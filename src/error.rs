//! Crate-wide error types.
//!
//! Every fallible operation in this crate returns [`Error`] to its immediate
//! caller. The engine never logs and never retries past its own bounded
//! attempt budget; how these conditions surface to an end user is the
//! responsibility of the embedding config/CLI layer.

use thiserror::Error;

/// Errors produced by the derangement engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The request itself is malformed: a group of size 1 (no derangement
    /// exists), a blacklist pair out of range or pairing an index with
    /// itself, or a sequence that is not a permutation of `0..n`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The constraints are provably unsatisfiable, e.g. a minimum cycle
    /// length larger than the group size. Detected up front, before any
    /// sampling.
    #[error("constraints are unsatisfiable: {0}")]
    Infeasible(String),

    /// No valid derangement was found within the sampler's attempt budget.
    ///
    /// Distinct from [`Error::Infeasible`]: the constraints may still be
    /// satisfiable, just too tight for the budget. Callers can raise
    /// `max_attempts` and retry, or treat this as failure.
    #[error("no valid derangement found within {attempts} attempts")]
    RetriesExhausted {
        /// Number of candidates generated and rejected.
        attempts: usize,
    },

    /// An internal invariant of the exact counting machinery was violated.
    /// Unreachable in correct code; indicates a programming defect, not a
    /// user-facing condition.
    #[error("internal precision invariant violated: {0}")]
    Precision(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
