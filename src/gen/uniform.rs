//! Direct uniform generation by random cycle merging.

use crate::count;
use crate::error::{Error, Result};
use crate::perm::Permutation;
use rand::Rng;

/// Above this many open positions the cycle-closing probability
/// `u * D(u-1) / D(u+1)` is replaced by `1/u`. The exact value approaches
/// `1/(u+1)`, so the substitution is off by under 1/31 at the boundary and
/// shrinks with `u`. At or below the threshold the decision is exact
/// integer arithmetic throughout.
const APPROX_THRESHOLD: usize = 30;

/// Generates an exactly uniform random derangement without rejection.
///
/// Walks from the identity, repeatedly swapping a random open position
/// into the orbit of the highest open position, then deciding whether to
/// close the cycle under construction with probability
/// `u * D(u-1) / D(u+1)` (where `u` counts the still-open positions).
/// Expected O(n) swaps, no retries.
///
/// The closing decision never touches floating point: at or below the
/// approximation threshold it draws an integer below the exact denominator
/// `D(u+1)` and compares against the exact numerator; above it, `1/u`
/// becomes a draw from `0..u` compared against zero.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for `n == 1`. `n == 0` yields the empty
/// permutation. [`Error::Precision`] signals a broken internal table
/// invariant and is unreachable in correct code.
///
/// # References
///
/// Martínez, Panholzer & Prodinger (2008), "Generating random derangements"
pub fn uniform<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Permutation> {
    if n == 1 {
        return Err(Error::InvalidInput(
            "no derangement exists for a group of size 1".into(),
        ));
    }
    let mut map: Vec<usize> = (0..n).collect();
    let mut open: Vec<usize> = (0..n).collect();
    while open.len() > 1 {
        let j = rng.random_range(0..open.len() - 1);
        let last = open[open.len() - 1];
        let other = open[j];

        // merge `last` into the cycle through `other`
        map.swap(last, other);
        open.pop();

        if close_cycle(open.len(), rng)? {
            open.remove(j);
        }
    }
    // The ratio is exactly 1 at u == 1 and exactly 0 at u == 2, so the
    // loop can only exit with every position closed.
    debug_assert!(open.is_empty());
    Ok(Permutation::from_vec_unchecked(map))
}

/// Decides whether to close the cycle while `u` positions remain open.
fn close_cycle<R: Rng + ?Sized>(u: usize, rng: &mut R) -> Result<bool> {
    if u > APPROX_THRESHOLD {
        return Ok(rng.random_range(0..u) == 0);
    }
    let (Some(&d_below), Some(&d_above)) = (
        u.checked_sub(1).and_then(|i| count::SMALL.get(i)),
        count::SMALL.get(u + 1),
    ) else {
        return Err(Error::Precision(format!(
            "subfactorial table cannot serve u = {u}"
        )));
    };
    let numerator = u as u128 * d_below;
    Ok(rng.random_range(0..d_above) < numerator)
}
