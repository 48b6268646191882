//! Constrained sampling.
//!
//! Orchestrates a generator strategy and the constraint validator in a
//! bounded retry loop: draw a raw derangement, check it against the
//! minimum-cycle-length and blacklist constraints, return the first
//! candidate that passes.
//!
//! Provably impossible requests (`min_cycle > n`) fail up front as
//! [`Infeasible`] without consuming any entropy. Requests that are merely
//! too tight for the attempt budget fail as [`RetriesExhausted`], reported
//! distinctly so callers can decide between raising the budget and
//! treating the constraints as unsatisfiable. The budget is a correctness
//! guard: an unbounded loop would hang forever on adversarial constraint
//! combinations.
//!
//! [`Infeasible`]: crate::error::Error::Infeasible
//! [`RetriesExhausted`]: crate::error::Error::RetriesExhausted

mod config;
mod runner;

pub use config::SamplerConfig;
pub use runner::{SampleResult, Sampler};
