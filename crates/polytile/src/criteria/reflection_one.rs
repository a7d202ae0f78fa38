//! Type-1 reflection criterion: W = A B fΘ(B) Â C fΦ(C).
//!
//! The two reflected pairs sit adjacent to each other, one pair per side of
//! the backtrack pair (A, Â). Each pair may reflect across its own axis;
//! the two axes are discovered independently.

use crate::criteria::Criterion;
use crate::factor::{BoundaryFactorization, Factor};
use crate::word::Word;

pub fn detect(word: &Word) -> Option<BoundaryFactorization> {
    let n = word.len();
    let half = n / 2;

    for a in 1..=n {
        for la in 1..half {
            let b = word.wrap((a + la) as i64);
            for lb in 1..half - la {
                let lc = half - la - lb;
                let b_refl = word.wrap((b + lb) as i64);
                let ahat = word.wrap((b_refl + lb) as i64);
                let c = word.wrap((ahat + la) as i64);
                let c_refl = word.wrap((c + lc) as i64);
                if !word.backtrack_eq_at(a, ahat, la) {
                    continue;
                }
                if word.reflection_between(b, b_refl, lb).is_none() {
                    continue;
                }
                if word.reflection_between(c, c_refl, lc).is_none() {
                    continue;
                }
                return Some(BoundaryFactorization::new(
                    Criterion::TypeOneReflection,
                    vec![
                        Factor::new(word, a as i64, la),
                        Factor::new(word, b as i64, lb),
                        Factor::new(word, b_refl as i64, lb),
                        Factor::new(word, ahat as i64, la),
                        Factor::new(word, c as i64, lc),
                        Factor::new(word, c_refl as i64, lc),
                    ],
                ));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_boundary_factors_by_type_one_reflection() {
        let w = Word::boundary("rrrdrdddrurdddddlulddlullldluululuuurururu").unwrap();
        let f = detect(&w).unwrap();
        assert_eq!(f.factors.len(), 6);
        assert_eq!(f.total_len(), w.len());
        // Reflected pairs share a length and an axis.
        assert_eq!(f.factors[1].len(), f.factors[2].len());
        assert_eq!(f.factors[4].len(), f.factors[5].len());
        assert!(w
            .reflection_between(f.factors[1].start, f.factors[2].start, f.factors[1].len())
            .is_some());
        assert!(w
            .reflection_between(f.factors[4].start, f.factors[5].start, f.factors[4].len())
            .is_some());
    }
}
