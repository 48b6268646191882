//! Constrained random derangement engine.
//!
//! Assigns each member of a group a distinct recipient such that nobody is
//! assigned themselves, optionally forbidding short assignment cycles and
//! specific pairings. Provides:
//!
//! - **Permutation model**: validated bijections with cycle decomposition
//!   and reconstruction.
//! - **Generators**: three interchangeable strategies producing raw
//!   derangements — shuffle-and-reject, biased backtracking, and direct
//!   uniform construction driven by exact subfactorial ratios.
//! - **Exact counting**: the subfactorial `D(n)` in arbitrary-precision
//!   integer arithmetic, exact for group sizes well into the hundreds.
//! - **Constrained sampler**: a bounded retry loop combining a generator
//!   with minimum-cycle-length and forbidden-pair validation, failing
//!   fast on provably impossible constraints.
//!
//! # Architecture
//!
//! This crate is the algorithmic core only. Participant rosters, identifier
//! mapping, persistence, and delivery belong to consumers: callers translate
//! human identifiers to positions `0..n` before calling in and back to
//! identifiers afterward. Everything here is pure, single-threaded,
//! CPU-bound computation; each sampling call owns its working state and is
//! independently re-entrant.
//!
//! # Examples
//!
//! ```
//! use derange::constraint::Blacklist;
//! use derange::sampler::{Sampler, SamplerConfig};
//!
//! // Eight participants, no cycle shorter than 3, participants 0 and 4
//! // must not draw each other.
//! let blacklist = Blacklist::new([(0, 4)]).unwrap();
//! let config = SamplerConfig::default().with_min_cycle(3).with_seed(42);
//! let result = Sampler::run(8, &blacklist, &config).unwrap();
//!
//! assert!(result.perm.is_derangement());
//! assert!(result.perm.cycles().iter().all(|c| c.len() >= 3));
//! ```

pub mod constraint;
pub mod count;
pub mod error;
pub mod gen;
pub mod perm;
pub mod sampler;
