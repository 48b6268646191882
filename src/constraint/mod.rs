//! Constraint model and candidate validation.
//!
//! Two constraint kinds apply to a candidate derangement:
//!
//! - **Minimum cycle length**: every cycle of the permutation must have at
//!   least `min_cycle` elements. A `min_cycle` below 2 normalizes to 2,
//!   since a 1-cycle is a fixed point and is forbidden for any derangement.
//! - **Blacklist**: a set of unordered position pairs that must not be
//!   mapped directly onto each other in either direction.
//!
//! The checks are independent and order-insensitive; [`satisfies_constraints`]
//! only orders them to take the cheap fixed-point scan when no cycle
//! decomposition is needed.

mod blacklist;
mod validate;

pub use blacklist::Blacklist;
pub use validate::satisfies_constraints;
