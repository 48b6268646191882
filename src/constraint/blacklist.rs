//! Forbidden-pair set.

use crate::error::{Error, Result};
use crate::perm::Permutation;

/// A set of unordered position pairs that must not be mapped onto each
/// other.
///
/// A pair `(a, b)` forbids *direct adjacency only*: the permutation may not
/// send `a -> b` or `b -> a`. It does not forbid `a` and `b` from sharing a
/// short cycle through intermediaries; that narrower reading is deliberate
/// and matches the established behavior of this engine's consumers.
///
/// Pairs are stored normalized (`small, large`) and sorted. Self-pairs and
/// duplicates are rejected at construction; whether indices fit a given
/// group size is checked separately via [`Blacklist::ensure_in_range`],
/// since the size is not known here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(usize, usize)>", into = "Vec<(usize, usize)>")
)]
pub struct Blacklist {
    pairs: Vec<(usize, usize)>,
}

/// Fallible construction from raw pairs; serde deserialization funnels
/// through here so self-pairs and duplicates can't enter off the wire.
impl TryFrom<Vec<(usize, usize)>> for Blacklist {
    type Error = Error;

    fn try_from(pairs: Vec<(usize, usize)>) -> Result<Self> {
        Blacklist::new(pairs)
    }
}

impl From<Blacklist> for Vec<(usize, usize)> {
    fn from(blacklist: Blacklist) -> Self {
        blacklist.pairs
    }
}

impl Blacklist {
    /// Builds a blacklist from unordered pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] on a self-pair or a duplicate pair
    /// (in either orientation).
    pub fn new(pairs: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        let mut normalized: Vec<(usize, usize)> = Vec::new();
        for (a, b) in pairs {
            if a == b {
                return Err(Error::InvalidInput(format!(
                    "blacklist pair ({a}, {b}) pairs an index with itself"
                )));
            }
            normalized.push((a.min(b), a.max(b)));
        }
        normalized.sort_unstable();
        if let Some(w) = normalized.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::InvalidInput(format!(
                "duplicate blacklist pair ({}, {})",
                w[0].0, w[0].1
            )));
        }
        Ok(Self { pairs: normalized })
    }

    /// The empty blacklist.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of forbidden pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs are forbidden.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The normalized pairs, sorted ascending.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Checks that every referenced index fits a group of size `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the first offending pair.
    pub fn ensure_in_range(&self, n: usize) -> Result<()> {
        // pairs are (small, large), so checking the large side suffices
        match self.pairs.iter().find(|&&(_, b)| b >= n) {
            Some(&(a, b)) => Err(Error::InvalidInput(format!(
                "blacklist pair ({a}, {b}) is out of range for group size {n}"
            ))),
            None => Ok(()),
        }
    }

    /// True if no forbidden pair is directly adjacent in `perm`, in either
    /// direction.
    ///
    /// # Panics
    ///
    /// Panics if a pair references an index outside `perm`; call
    /// [`Blacklist::ensure_in_range`] first for untrusted input.
    pub fn permits(&self, perm: &Permutation) -> bool {
        self.pairs
            .iter()
            .all(|&(a, b)| perm.image(a) != b && perm.image(b) != a)
    }
}
