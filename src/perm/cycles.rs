//! Cycle decomposition and reconstruction.

use super::types::Permutation;
use crate::error::{Error, Result};

impl Permutation {
    /// Decomposes the permutation into its disjoint cycles.
    ///
    /// Each cycle is listed in traversal order; cycles are ordered by their
    /// smallest index, which is also the element each cycle starts from.
    /// The cycles partition `{0..n-1}`, so their lengths sum to `n`.
    /// Runs in O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use derange::perm::Permutation;
    ///
    /// let perm = Permutation::new(vec![4, 3, 0, 1, 2]).unwrap();
    /// assert_eq!(perm.cycles(), vec![vec![0, 4, 2], vec![1, 3]]);
    /// ```
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let n = self.len();
        let mut visited = vec![false; n];
        let mut cycles = Vec::new();
        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut cycle = vec![start];
            let mut next = self.image(start);
            while next != start {
                visited[next] = true;
                cycle.push(next);
                next = self.image(next);
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Length of the shortest cycle, or `None` for the empty permutation.
    ///
    /// Walks the orbit structure without materializing the cycles.
    pub fn shortest_cycle(&self) -> Option<usize> {
        let n = self.len();
        let mut visited = vec![false; n];
        let mut shortest: Option<usize> = None;
        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut len = 1;
            let mut next = self.image(start);
            while next != start {
                visited[next] = true;
                len += 1;
                next = self.image(next);
            }
            shortest = Some(shortest.map_or(len, |s: usize| s.min(len)));
        }
        shortest
    }

    /// Rebuilds a permutation of size `n` from a cycle list, replaying each
    /// cycle's successor relation. Inverse of [`Permutation::cycles`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the cycles contain an empty cycle,
    /// an index out of `[0, n)`, a repeated index, or do not cover all of
    /// `{0..n-1}`.
    pub fn from_cycles(n: usize, cycles: &[Vec<usize>]) -> Result<Self> {
        let mut map = vec![usize::MAX; n];
        let mut covered = 0usize;
        for cycle in cycles {
            if cycle.is_empty() {
                return Err(Error::InvalidInput("empty cycle".into()));
            }
            for (k, &i) in cycle.iter().enumerate() {
                if i >= n {
                    return Err(Error::InvalidInput(format!(
                        "cycle index {i} is out of range for size {n}"
                    )));
                }
                if map[i] != usize::MAX {
                    return Err(Error::InvalidInput(format!(
                        "index {i} appears in more than one cycle position"
                    )));
                }
                map[i] = cycle[(k + 1) % cycle.len()];
                covered += 1;
            }
        }
        if covered != n {
            return Err(Error::InvalidInput(format!(
                "cycles cover {covered} of {n} indices"
            )));
        }
        Permutation::new(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    #[test]
    fn test_cycles_documented_example() {
        let perm = Permutation::new(vec![4, 3, 0, 1, 2]).unwrap();
        assert_eq!(perm.cycles(), vec![vec![0, 4, 2], vec![1, 3]]);
    }

    #[test]
    fn test_cycles_identity() {
        let perm = Permutation::identity(3);
        assert_eq!(perm.cycles(), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_cycles_empty() {
        let perm = Permutation::new(vec![]).unwrap();
        assert!(perm.cycles().is_empty());
        assert_eq!(perm.shortest_cycle(), None);
    }

    #[test]
    fn test_cycles_single_full_cycle() {
        let perm = Permutation::new(vec![1, 2, 3, 0]).unwrap();
        assert_eq!(perm.cycles(), vec![vec![0, 1, 2, 3]]);
        assert_eq!(perm.shortest_cycle(), Some(4));
    }

    #[test]
    fn test_shortest_cycle_mixed() {
        // 3-cycle and 2-cycle
        let perm = Permutation::new(vec![4, 3, 0, 1, 2]).unwrap();
        assert_eq!(perm.shortest_cycle(), Some(2));
        // Fixed point present
        let perm = Permutation::new(vec![0, 2, 1]).unwrap();
        assert_eq!(perm.shortest_cycle(), Some(1));
    }

    #[test]
    fn test_cycle_lengths_sum_to_n() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for n in 0..40 {
            let mut map: Vec<usize> = (0..n).collect();
            map.shuffle(&mut rng);
            let perm = Permutation::new(map).unwrap();
            let cycles = perm.cycles();
            let total: usize = cycles.iter().map(|c| c.len()).sum();
            assert_eq!(total, n);

            // Union of elements is exactly {0..n-1}
            let mut elems: Vec<usize> = cycles.into_iter().flatten().collect();
            elems.sort_unstable();
            assert_eq!(elems, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_from_cycles_round_trip() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for n in 0..60 {
            let mut map: Vec<usize> = (0..n).collect();
            map.shuffle(&mut rng);
            let perm = Permutation::new(map).unwrap();
            let rebuilt = Permutation::from_cycles(n, &perm.cycles()).unwrap();
            assert_eq!(rebuilt, perm);
        }
    }

    #[test]
    fn test_from_cycles_rejects_incomplete_cover() {
        let err = Permutation::from_cycles(3, &[vec![0, 1]]);
        assert!(matches!(err, Err(crate::error::Error::InvalidInput(_))));
    }

    #[test]
    fn test_from_cycles_rejects_duplicate_index() {
        let err = Permutation::from_cycles(3, &[vec![0, 1], vec![1, 2]]);
        assert!(matches!(err, Err(crate::error::Error::InvalidInput(_))));
    }

    #[test]
    fn test_from_cycles_rejects_out_of_range() {
        let err = Permutation::from_cycles(2, &[vec![0, 5]]);
        assert!(matches!(err, Err(crate::error::Error::InvalidInput(_))));
    }
}
