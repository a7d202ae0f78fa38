//! Admissible gapped-mirror factors, the backbone of the translation
//! criterion.
//!
//! A pair (A, Â) on a cyclic word of even length n is a *gapped mirror* when
//! Â is the backtrack of A and the two factors start exactly n/2 apart. The
//! pair is *admissible* when neither side can grow by a letter without
//! breaking that relation. Every admissible pair is found by scanning the
//! n possible letter centers and the n possible between-letter centers: from
//! a center, the match extends some distance right and some distance left,
//! and only a center whose two arms agree yields a factor.
//!
//! Matching is done on the doubled word against the doubled backtrack, which
//! turns every cyclic comparison into a plain common-prefix scan.

use crate::factor::Factor;
use crate::word::{common_prefix_len, Word};

/// All admissible A-factors of `word` (each pair is reported once per half,
/// so a factor and its antipodal partner both appear).
///
/// The word length must be even.
pub fn admissible_factors(word: &Word) -> Vec<Factor> {
    let n = word.len();
    assert!(n % 2 == 0, "gapped mirrors need an even word length");
    let half = (n / 2) as i64;

    let doubled = word.twice();
    let back_doubled = word.backtrack().twice();
    // 1-based starts into the doubled words.
    let cp = |i: usize, j: usize| {
        common_prefix_len(&doubled.letters()[i - 1..], &back_doubled.letters()[j - 1..])
    };

    let mut factors = Vec::new();
    let ni = n as i64;

    // Centers on a letter: the factor has odd length r + l - 1.
    for c in 1..=ni {
        let d = word.wrap(c + half) as i64;
        let r = cp(c as usize, (ni - d + 1) as usize);
        let l = cp(d as usize, (ni - c + 1) as usize);
        if r == l && r > 0 {
            factors.push(Factor::new(word, c - l as i64 + 1, r + l - 1));
        }
    }

    // Centers between letters c and c+1: the factor has even length r + l.
    for c in 1..=ni {
        let d = word.wrap(c + half) as i64;
        let r = cp(word.wrap(c + 1), (ni - d + 1) as usize);
        let l = cp(word.wrap(d + 1), (ni - c + 1) as usize);
        if r == l && r > 0 {
            factors.push(Factor::new(word, c - l as i64 + 1, r + l));
        }
    }

    factors
}

/// Admissible factors indexed by start and by finish position.
///
/// Every position in `1..=n` is present; the per-position lists are sorted
/// by ascending length so searches can stop early once a length bound is
/// exceeded. Iteration order (ascending position, then ascending length) is
/// what makes the detector's first match deterministic.
#[derive(Debug)]
pub struct FactorIndex {
    by_start: Vec<Vec<Factor>>,
    by_finish: Vec<Vec<Factor>>,
}

impl FactorIndex {
    pub fn build(word: &Word) -> FactorIndex {
        let n = word.len();
        let mut by_start = vec![Vec::new(); n];
        let mut by_finish = vec![Vec::new(); n];
        for f in admissible_factors(word) {
            by_start[f.start - 1].push(f.clone());
            by_finish[f.finish - 1].push(f);
        }
        for list in by_start.iter_mut().chain(by_finish.iter_mut()) {
            list.sort_by_key(|f| f.len());
        }
        FactorIndex { by_start, by_finish }
    }

    /// Admissible factors starting at `pos`, shortest first.
    pub fn starting_at(&self, pos: usize) -> &[Factor] {
        &self.by_start[pos - 1]
    }

    /// Admissible factors finishing at `pos`, shortest first.
    pub fn finishing_at(&self, pos: usize) -> &[Factor] {
        &self.by_finish[pos - 1]
    }

    /// The admissible factor with this exact start and length, if any.
    pub fn factor_at(&self, start: usize, len: usize) -> Option<&Factor> {
        self.starting_at(start).iter().find(|f| f.len() == len)
    }
}
