//! Permutation model and cycle structure.
//!
//! A [`Permutation`] is a validated bijection `i -> perm[i]` on `[0, n)`,
//! read as "position `i`'s recipient is `perm[i]`". Construction rejects
//! anything that is not a true permutation, so every downstream operation
//! (cycle decomposition, constraint validation) is total.
//!
//! Cycle decomposition resolves a permutation into its disjoint orbits:
//! `[4, 3, 0, 1, 2]` has the 3-cycle `0 -> 4 -> 2 -> 0` and the 2-cycle
//! `1 -> 3 -> 1`, so `cycles()` returns `[[0, 4, 2], [1, 3]]`. A fixed
//! point is a cycle of length 1; a permutation with none is a derangement.

mod cycles;
mod types;

pub use types::Permutation;
