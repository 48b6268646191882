//! Candidate validation against cycle-length and blacklist constraints.

use super::blacklist::Blacklist;
use crate::perm::Permutation;

/// Checks a candidate permutation against the full constraint set.
///
/// `min_cycle` values below 2 are treated as 2. For `min_cycle == 2` only a
/// fixed-point scan is needed (O(n), no decomposition); larger values walk
/// the cycle structure. The blacklist check forbids direct adjacency in
/// either direction (see [`Blacklist`] for the exact semantics).
///
/// # Panics
///
/// Panics if the blacklist references indices outside `perm`; use
/// [`Blacklist::ensure_in_range`] first for untrusted input.
///
/// # Examples
///
/// ```
/// use derange::constraint::{satisfies_constraints, Blacklist};
/// use derange::perm::Permutation;
///
/// // Two 2-cycles: (0 1) and (2 3)
/// let perm = Permutation::new(vec![1, 0, 3, 2]).unwrap();
/// assert!(satisfies_constraints(&perm, 2, &Blacklist::empty()));
/// assert!(!satisfies_constraints(&perm, 3, &Blacklist::empty()));
/// ```
pub fn satisfies_constraints(perm: &Permutation, min_cycle: usize, blacklist: &Blacklist) -> bool {
    let min_cycle = min_cycle.max(2);
    if min_cycle == 2 {
        if !perm.is_derangement() {
            return false;
        }
    } else if perm.shortest_cycle().is_some_and(|shortest| shortest < min_cycle) {
        return false;
    }
    blacklist.permits(perm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bl(pairs: &[(usize, usize)]) -> Blacklist {
        Blacklist::new(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_fixed_point_rejected_at_min_cycle_two() {
        let perm = Permutation::new(vec![0, 2, 1]).unwrap();
        assert!(!satisfies_constraints(&perm, 2, &Blacklist::empty()));
    }

    #[test]
    fn test_min_cycle_below_two_normalized() {
        let fixed = Permutation::new(vec![0, 2, 1]).unwrap();
        assert!(!satisfies_constraints(&fixed, 0, &Blacklist::empty()));
        assert!(!satisfies_constraints(&fixed, 1, &Blacklist::empty()));
        let deranged = Permutation::new(vec![1, 0]).unwrap();
        assert!(satisfies_constraints(&deranged, 1, &Blacklist::empty()));
    }

    #[test]
    fn test_min_cycle_three_rejects_transposition() {
        // 3-cycle plus 2-cycle
        let perm = Permutation::new(vec![4, 3, 0, 1, 2]).unwrap();
        assert!(satisfies_constraints(&perm, 2, &Blacklist::empty()));
        assert!(!satisfies_constraints(&perm, 3, &Blacklist::empty()));
        // single 5-cycle passes up to min_cycle 5
        let perm = Permutation::new(vec![1, 2, 3, 4, 0]).unwrap();
        assert!(satisfies_constraints(&perm, 5, &Blacklist::empty()));
        assert!(!satisfies_constraints(&perm, 6, &Blacklist::empty()));
    }

    #[test]
    fn test_blacklist_rejects_adjacency() {
        let perm = Permutation::new(vec![1, 2, 3, 0]).unwrap();
        assert!(!satisfies_constraints(&perm, 2, &bl(&[(0, 1)])));
        assert!(!satisfies_constraints(&perm, 2, &bl(&[(3, 0)])));
        assert!(satisfies_constraints(&perm, 2, &bl(&[(0, 2)])));
    }

    #[test]
    fn test_checks_compose() {
        let perm = Permutation::new(vec![1, 0, 3, 2]).unwrap();
        // passes cycle check, fails blacklist
        assert!(!satisfies_constraints(&perm, 2, &bl(&[(2, 3)])));
        // fails cycle check, passes blacklist
        assert!(!satisfies_constraints(&perm, 4, &bl(&[(0, 2)])));
    }

    #[test]
    fn test_empty_permutation_satisfies() {
        let perm = Permutation::new(vec![]).unwrap();
        assert!(satisfies_constraints(&perm, 2, &Blacklist::empty()));
        assert!(satisfies_constraints(&perm, 5, &Blacklist::empty()));
    }
}
