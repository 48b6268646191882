//! Backtracking construction. Fast, always terminates, and NOT uniform.

use crate::error::{Error, Result};
use crate::perm::Permutation;
use rand::Rng;

/// Builds a derangement position by position, retrying a slot whenever the
/// drawn value would be a fixed point. When only the final slot's own index
/// remains, the last two assignments are swapped instead of backtracking
/// further.
///
/// **This strategy is biased**: the swap escape and the slot-local retries
/// skew the distribution over derangements, measurably so even at small
/// `n`. It is kept as an illustrative cheap fallback and must not be used
/// where uniformity matters; prefer [`Strategy::Uniform`] or
/// [`Strategy::Rejection`].
///
/// [`Strategy::Uniform`]: super::Strategy::Uniform
/// [`Strategy::Rejection`]: super::Strategy::Rejection
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for `n == 1`. `n == 0` yields the empty
/// permutation.
pub fn backtrack<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Permutation> {
    if n == 1 {
        return Err(Error::InvalidInput(
            "no derangement exists for a group of size 1".into(),
        ));
    }
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut map: Vec<usize> = Vec::with_capacity(n);
    while map.len() < n {
        let idx = rng.random_range(0..remaining.len());
        let pick = remaining[idx];
        if pick != map.len() {
            map.push(pick);
            remaining.remove(idx);
        } else if remaining.len() == 1 {
            // Only the final slot's own index is left; swapping the last
            // two assignments restores a derangement.
            map.push(pick);
            let last = map.len() - 1;
            map.swap(last - 1, last);
            break;
        }
        // else: the pick would be a fixed point, redraw this slot
    }
    Ok(Permutation::from_vec_unchecked(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_backtrack_produces_derangements() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [2usize, 3, 4, 7, 15, 60] {
            for _ in 0..50 {
                let perm = backtrack(n, &mut rng).unwrap();
                assert_eq!(perm.len(), n);
                assert!(perm.is_derangement());
            }
        }
    }

    #[test]
    fn test_backtrack_size_one_is_invalid() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            backtrack(1, &mut rng),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_backtrack_size_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(backtrack(0, &mut rng).unwrap().is_empty());
    }
}
