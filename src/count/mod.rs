//! Exact derangement counting (the subfactorial).
//!
//! `D(n)` is the number of derangements of an n-element set, defined by
//! `D(n) = n! * sum_{k=0}^{n} (-1)^k / k!`. Evaluating that alternating sum
//! in floating point loses precision catastrophically beyond `n ~ 15-20`,
//! so everything here is exact integer arithmetic: distributing `n!`
//! through the sum gives the recurrence `D(n) = n * D(n-1) + (-1)^n`, which
//! involves no division and no rounding at any step.
//!
//! The [`subfactorial`] oracle backs the direct uniform generator's
//! cycle-closing probabilities; a compile-time `u128` prefix of the same
//! sequence serves the generator's hot path without heap allocation.
//!
//! # References
//!
//! - Stanley (2011), "Enumerative Combinatorics" vol. 1, §2.2
//! - Martínez, Panholzer & Prodinger (2008), "Generating random derangements"

use num_bigint::BigUint;
use num_traits::One;

/// Number of subfactorials in the compile-time table. `D(31)` is the
/// largest that the uniform generator's exact branch can need, and it fits
/// a `u128` with room to spare.
pub(crate) const SMALL_LEN: usize = 32;

/// `D(0)..=D(31)` as `u128`, evaluated at compile time.
pub(crate) const SMALL: [u128; SMALL_LEN] = small_table();

const fn small_table() -> [u128; SMALL_LEN] {
    let mut d = [0u128; SMALL_LEN];
    d[0] = 1;
    let mut n = 1;
    while n < SMALL_LEN {
        d[n] = n as u128 * d[n - 1];
        if n % 2 == 0 {
            d[n] += 1;
        } else {
            d[n] -= 1;
        }
        n += 1;
    }
    d
}

/// Computes the subfactorial `D(n)` exactly.
///
/// `D(0) = 1`, `D(1) = 0`, `D(2) = 1`, `D(3) = 2`, `D(4) = 9`, `D(5) = 44`.
/// Exact for arbitrary `n`; group sizes in the low hundreds produce values
/// of a few hundred digits. Runs in O(n) big-integer multiplications.
///
/// # Examples
///
/// ```
/// use derange::count::subfactorial;
///
/// assert_eq!(subfactorial(6).to_string(), "265");
/// ```
pub fn subfactorial(n: usize) -> BigUint {
    let mut d = BigUint::one();
    for k in 1..=n {
        d *= k;
        if k % 2 == 0 {
            d += 1u32;
        } else {
            d -= 1u32;
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_traits::{One, Zero};

    #[test]
    fn test_subfactorial_known_values() {
        let expected: [u64; 10] = [1, 0, 1, 2, 9, 44, 265, 1854, 14833, 133496];
        for (n, &d) in expected.iter().enumerate() {
            assert_eq!(subfactorial(n), BigUint::from(d), "D({n})");
        }
    }

    #[test]
    fn test_subfactorial_large() {
        assert_eq!(subfactorial(25).to_string(), "5706255282633466762357224");
        // 158 digits; fixed-width floats are hopeless here
        assert_eq!(subfactorial(100).to_string().len(), 158);
    }

    #[test]
    fn test_small_table_matches_oracle() {
        for n in 0..SMALL_LEN {
            assert_eq!(BigUint::from(SMALL[n]), subfactorial(n), "D({n})");
        }
    }

    /// The recurrence against the literal alternating-sum definition,
    /// `D(n) = sum_{k=0}^{n} (-1)^k * n!/k!`, whose terms are all integers.
    #[test]
    fn test_recurrence_matches_alternating_sum() {
        for n in 0..60usize {
            let mut factorial = BigInt::one();
            for k in 2..=n {
                factorial *= k;
            }
            // term(k) = n!/k!, built down from term(0) = n!
            let mut term = factorial;
            let mut sum = BigInt::zero();
            for k in 0..=n {
                if k % 2 == 0 {
                    sum += &term;
                } else {
                    sum -= &term;
                }
                if k < n {
                    term /= k as i64 + 1;
                }
            }
            let (_, digits) = sum.into_parts();
            assert_eq!(digits, subfactorial(n), "D({n})");
        }
    }
}
