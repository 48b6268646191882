//! Rejection sampling: shuffle until fixed-point-free.

use crate::error::{Error, Result};
use crate::perm::Permutation;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draws a uniformly random derangement by rejection.
///
/// Repeatedly Fisher-Yates-shuffles the identity and accepts the first
/// fixed-point-free result. Every permutation is drawn with probability
/// `1/n!`, so conditioning on survival leaves the derangements exactly
/// uniform. The acceptance probability `D(n)/n!` tends to `1/e`, so the
/// expected number of shuffles is about 2.72 regardless of `n`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for `n == 1`, where no derangement
/// exists. `n == 0` yields the empty permutation.
pub fn rejection<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Permutation> {
    if n == 1 {
        return Err(Error::InvalidInput(
            "no derangement exists for a group of size 1".into(),
        ));
    }
    if n == 0 {
        return Ok(Permutation::identity(0));
    }
    let mut map: Vec<usize> = (0..n).collect();
    loop {
        map.shuffle(rng);
        if map.iter().enumerate().all(|(i, &v)| i != v) {
            return Ok(Permutation::from_vec_unchecked(map));
        }
    }
}
