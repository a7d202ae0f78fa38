//! Type-1 half-turn reflection criterion: W = A B C Â D fΘ(D).
//!
//! Two palindromes sit between A and its backtrack partner; the rest of the
//! boundary is one reflected pair, split evenly.

use crate::criteria::Criterion;
use crate::factor::{BoundaryFactorization, Factor};
use crate::word::Word;

pub fn detect(word: &Word) -> Option<BoundaryFactorization> {
    let n = word.len();
    let half = n / 2;

    for a in 1..=n {
        for la in 1..=half {
            let b = word.wrap((a + la) as i64);
            let gap = n - 2 * la;
            for lb in 1..gap {
                if !word.is_palindrome_at(b, lb) {
                    continue;
                }
                let c = word.wrap((b + lb) as i64);
                for lc in 1..gap - lb {
                    if !word.is_palindrome_at(c, lc) {
                        continue;
                    }
                    let ahat = word.wrap((c + lc) as i64);
                    if !word.backtrack_eq_at(a, ahat, la) {
                        continue;
                    }
                    let rest = gap - lb - lc;
                    if rest % 2 != 0 || rest == 0 {
                        continue;
                    }
                    let ld = rest / 2;
                    let d = word.wrap((ahat + la) as i64);
                    let d_refl = word.wrap((d + ld) as i64);
                    if word.reflection_between(d, d_refl, ld).is_none() {
                        continue;
                    }
                    return Some(BoundaryFactorization::new(
                        Criterion::TypeOneHalfTurnReflection,
                        vec![
                            Factor::new(word, a as i64, la),
                            Factor::new(word, b as i64, lb),
                            Factor::new(word, c as i64, lc),
                            Factor::new(word, ahat as i64, la),
                            Factor::new(word, d as i64, ld),
                            Factor::new(word, d_refl as i64, ld),
                        ],
                    ));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_boundary_mixes_rotation_and_reflection() {
        let w = Word::boundary("urrdrrdlddlddldrrrrdldllulldlullurrululurrullururr").unwrap();
        let f = detect(&w).unwrap();
        assert_eq!(f.factors.len(), 6);
        assert_eq!(f.total_len(), w.len());
        for k in [1, 2] {
            assert!(Word::parse(&f.factors[k].content).unwrap().is_palindrome());
        }
        let a = Word::parse(&f.factors[0].content).unwrap();
        assert_eq!(Word::parse(&f.factors[3].content).unwrap(), a.backtrack());
        assert_eq!(f.factors[4].len(), f.factors[5].len());
        assert!(w
            .reflection_between(f.factors[4].start, f.factors[5].start, f.factors[4].len())
            .is_some());
    }
}
