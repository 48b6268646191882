//! Derangement generators.
//!
//! Three interchangeable strategies, each producing a fixed-point-free
//! permutation of `[0, n)` with no further constraints:
//!
//! - **Rejection**: shuffle until fixed-point-free. Exactly uniform,
//!   expected ~2.72 shuffles per draw.
//! - **Backtrack**: slot-by-slot construction with a last-two swap escape.
//!   Fast and allocation-light but **biased**; never the default.
//! - **Uniform**: direct cycle-merge construction driven by exact
//!   subfactorial ratios. Exactly uniform with no rejection loop.
//!
//! The strategy is an explicit enum chosen by the caller; there is no
//! name-based lookup. All strategies treat `n == 0` as the empty
//! derangement and reject `n == 1`, where no derangement exists.
//!
//! # References
//!
//! - Martínez, Panholzer & Prodinger (2008), "Generating random derangements"

mod backtrack;
mod rejection;
mod uniform;

pub use backtrack::backtrack;
pub use rejection::rejection;
pub use uniform::uniform;

use crate::error::Result;
use crate::perm::Permutation;
use rand::Rng;

/// Which generator to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Shuffle-and-reject. Uniform. The default.
    #[default]
    Rejection,
    /// Slot-by-slot backtracking. Biased; see [`backtrack`].
    Backtrack,
    /// Direct cycle merging with exact closing probabilities. Uniform.
    Uniform,
}

/// Draws one random derangement of `[0, n)` using the given strategy.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for `n == 1`.
///
/// [`Error::InvalidInput`]: crate::error::Error::InvalidInput
///
/// # Examples
///
/// ```
/// use derange::gen::{random_derangement, Strategy};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let perm = random_derangement(10, Strategy::Uniform, &mut rng).unwrap();
/// assert!(perm.is_derangement());
/// ```
pub fn random_derangement<R: Rng + ?Sized>(
    n: usize,
    strategy: Strategy,
    rng: &mut R,
) -> Result<Permutation> {
    match strategy {
        Strategy::Rejection => rejection(n, rng),
        Strategy::Backtrack => backtrack(n, rng),
        Strategy::Uniform => uniform(n, rng),
    }
}

/// Enumerates every derangement of `[0, n)` in lexicographic order.
///
/// Exhaustive, so only usable for small `n` (there are `D(n)` of them,
/// growing like `n!/e`). Exists for verification: uniformity tests bin
/// against it and counting tests compare its length to
/// [`subfactorial`](crate::count::subfactorial).
pub fn all_derangements(n: usize) -> AllDerangements {
    AllDerangements {
        current: Some((0..n).collect()),
    }
}

/// Iterator over all derangements of a fixed size. See [`all_derangements`].
#[derive(Debug, Clone)]
pub struct AllDerangements {
    current: Option<Vec<usize>>,
}

impl Iterator for AllDerangements {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        while let Some(cur) = self.current.as_mut() {
            let hit = cur.iter().enumerate().all(|(i, &v)| i != v);
            let out = hit.then(|| Permutation::from_vec_unchecked(cur.clone()));
            if !next_lexicographic(cur) {
                self.current = None;
            }
            if out.is_some() {
                return out;
            }
        }
        None
    }
}

/// Advances to the next permutation in lexicographic order; false once the
/// descending arrangement is reached.
fn next_lexicographic(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}
