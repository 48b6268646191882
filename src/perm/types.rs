//! The validated permutation value type.

use crate::error::{Error, Result};

/// A permutation of `[0, n)`, interpreted as the bijection `i -> perm[i]`.
///
/// Immutable once constructed. [`Permutation::new`] fails fast on any
/// sequence that is not a bijection, so holders of a `Permutation` never
/// need to re-check it.
///
/// # Examples
///
/// ```
/// use derange::perm::Permutation;
///
/// let perm = Permutation::new(vec![1, 2, 0]).unwrap();
/// assert!(perm.is_derangement());
/// assert_eq!(perm.image(0), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Permutation {
    map: Vec<usize>,
}

/// Fallible construction from a raw mapping; serde deserialization funnels
/// through here so a wire payload can never bypass bijection validation.
impl TryFrom<Vec<usize>> for Permutation {
    type Error = Error;

    fn try_from(map: Vec<usize>) -> Result<Self> {
        Permutation::new(map)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(perm: Permutation) -> Self {
        perm.map
    }
}

impl Permutation {
    /// Creates a permutation from an explicit mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any value is out of `[0, n)` or
    /// appears more than once.
    pub fn new(map: Vec<usize>) -> Result<Self> {
        let n = map.len();
        let mut seen = vec![false; n];
        for (i, &v) in map.iter().enumerate() {
            if v >= n {
                return Err(Error::InvalidInput(format!(
                    "perm[{i}] = {v} is out of range for size {n}"
                )));
            }
            if seen[v] {
                return Err(Error::InvalidInput(format!(
                    "value {v} appears more than once"
                )));
            }
            seen[v] = true;
        }
        Ok(Self { map })
    }

    /// Wraps a mapping already known to be a bijection (built by swaps from
    /// the identity). Callers uphold the invariant.
    pub(crate) fn from_vec_unchecked(map: Vec<usize>) -> Self {
        debug_assert!(Self::new(map.clone()).is_ok());
        Self { map }
    }

    /// The identity permutation on `[0, n)`.
    pub fn identity(n: usize) -> Self {
        Self {
            map: (0..n).collect(),
        }
    }

    /// Group size `n`.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether this is the (unique) permutation of the empty set.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The recipient of position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn image(&self, i: usize) -> usize {
        self.map[i]
    }

    /// The raw mapping as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// True if no position maps to itself.
    pub fn is_derangement(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &v)| i != v)
    }
}
