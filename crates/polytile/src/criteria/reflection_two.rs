//! Type-2 reflection criterion: W = A B C Â fΘ(C) fΘ(B).
//!
//! Here the backtrack pair is antipodal (Â starts exactly half a word after
//! A), and the reflected images of B and C come back in reverse order on
//! the far side. Both pairs must reflect across the *same* axis.

use crate::criteria::Criterion;
use crate::factor::{BoundaryFactorization, Factor};
use crate::letter::AXES;
use crate::word::Word;

pub fn detect(word: &Word) -> Option<BoundaryFactorization> {
    let n = word.len();
    let half = n / 2;

    for a in 1..=n {
        let ahat = word.wrap((a + half) as i64);
        for la in 1..half {
            if !word.backtrack_eq_at(a, ahat, la) {
                continue;
            }
            let b = word.wrap((a + la) as i64);
            for lb in 1..half - la {
                let lc = half - la - lb;
                let c = word.wrap((b + lb) as i64);
                let c_refl = word.wrap((ahat + la) as i64);
                let b_refl = word.wrap((c_refl + lc) as i64);
                let shared_axis = AXES.into_iter().find(|&axis| {
                    word.is_reflection_at(b, b_refl, lb, axis)
                        && word.is_reflection_at(c, c_refl, lc, axis)
                });
                if shared_axis.is_none() {
                    continue;
                }
                return Some(BoundaryFactorization::new(
                    Criterion::TypeTwoReflection,
                    vec![
                        Factor::new(word, a as i64, la),
                        Factor::new(word, b as i64, lb),
                        Factor::new(word, c as i64, lc),
                        Factor::new(word, ahat as i64, la),
                        Factor::new(word, c_refl as i64, lc),
                        Factor::new(word, b_refl as i64, lb),
                    ],
                ));
            }
        }
    }
    None
}
