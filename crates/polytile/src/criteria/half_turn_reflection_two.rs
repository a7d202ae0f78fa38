//! Type-2 half-turn reflection criterion: W = A B C D fΘ(B) fΦ(D) with A
//! and C palindromes and the two reflection axes a quarter turn apart.

use crate::criteria::Criterion;
use crate::factor::{BoundaryFactorization, Factor};
use crate::letter::AXES;
use crate::word::Word;

pub fn detect(word: &Word) -> Option<BoundaryFactorization> {
    let n = word.len();

    for a in 1..=n {
        for la in 1..n {
            if !word.is_palindrome_at(a, la) {
                continue;
            }
            let b = word.wrap((a + la) as i64);
            for lb in 1..=(n - la) / 2 {
                let c = word.wrap((b + lb) as i64);
                for lc in 1..n - la - 2 * lb {
                    if !word.is_palindrome_at(c, lc) {
                        continue;
                    }
                    let rest = n - la - 2 * lb - lc;
                    if rest % 2 != 0 {
                        continue;
                    }
                    let ld = rest / 2;
                    if ld == 0 {
                        continue;
                    }
                    let d = word.wrap((c + lc) as i64);
                    let b_refl = word.wrap((d + ld) as i64);
                    let d_refl = word.wrap((b_refl + lb) as i64);
                    let axes = perpendicular_axes(word, b, b_refl, lb, d, d_refl, ld);
                    if axes.is_none() {
                        continue;
                    }
                    return Some(BoundaryFactorization::new(
                        Criterion::TypeTwoHalfTurnReflection,
                        vec![
                            Factor::new(word, a as i64, la),
                            Factor::new(word, b as i64, lb),
                            Factor::new(word, c as i64, lc),
                            Factor::new(word, d as i64, ld),
                            Factor::new(word, b_refl as i64, lb),
                            Factor::new(word, d_refl as i64, ld),
                        ],
                    ));
                }
            }
        }
    }
    None
}

/// First axis pair (Θ, Φ) with Θ − Φ = ±90 such that the B-pair reflects
/// across Θ and the D-pair across Φ.
fn perpendicular_axes(
    word: &Word,
    b: usize,
    b_refl: usize,
    lb: usize,
    d: usize,
    d_refl: usize,
    ld: usize,
) -> Option<(i32, i32)> {
    for theta in AXES {
        if !word.is_reflection_at(b, b_refl, lb, theta) {
            continue;
        }
        for phi in AXES {
            if (theta - phi).abs() != 90 {
                continue;
            }
            if word.is_reflection_at(d, d_refl, ld, phi) {
                return Some((theta, phi));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossed_axes_boundary_is_recognized() {
        let w = Word::boundary("drdrdllddrurddddlllddldluurulluulluurdruurdruulurrur").unwrap();
        let f = detect(&w).unwrap();
        assert_eq!(f.factors.len(), 6);
        assert_eq!(f.total_len(), w.len());
        for k in [0, 2] {
            assert!(Word::parse(&f.factors[k].content).unwrap().is_palindrome());
        }
        let (theta, phi) = perpendicular_axes(
            &w,
            f.factors[1].start,
            f.factors[4].start,
            f.factors[1].len(),
            f.factors[3].start,
            f.factors[5].start,
            f.factors[3].len(),
        )
        .expect("the reflected pairs must share perpendicular axes");
        assert_eq!((theta - phi).abs(), 90);
    }
}
