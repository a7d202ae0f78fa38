//! Factors and factorizations of a cyclic boundary word.

use serde::Serialize;

use crate::criteria::Criterion;
use crate::word::Word;

/// A contiguous, possibly wrapping piece of a cyclic word.
///
/// `start` and `finish` are 1-based inclusive positions; a factor wraps when
/// `start > finish`. The length is always the content length, never a
/// position difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factor {
    pub start: usize,
    pub finish: usize,
    pub content: String,
}

impl Factor {
    /// Build the factor of `len` letters beginning at cyclic position
    /// `start` (any signed value; it is reduced modulo the word length).
    pub fn new(word: &Word, start: i64, len: usize) -> Factor {
        assert!(len >= 1, "factors are never empty");
        let start = word.wrap(start);
        let finish = word.wrap((start + len - 1) as i64);
        Factor {
            start,
            finish,
            content: word.extract(start, finish).to_string(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A factorization tagged with the boundary criterion it witnesses.
///
/// The factor contents, concatenated in order and wrapping through the seam,
/// spell out a cyclic rotation of the underlying boundary word, and each
/// factor starts right after its predecessor finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryFactorization {
    pub criterion: Criterion,
    pub factors: Vec<Factor>,
}

impl BoundaryFactorization {
    pub fn new(criterion: Criterion, factors: Vec<Factor>) -> Self {
        Self { criterion, factors }
    }

    /// Total letters covered by the factors.
    pub fn total_len(&self) -> usize {
        self.factors.iter().map(|f| f.len()).sum()
    }
}
