//! Quarter-turn criterion: W = A B C with A a palindrome and B, C
//! 90-dromes.
//!
//! The degenerate two-factor form is tried first: W = X Y where X is a
//! palindrome or a 90-drome and Y is a 90-drome. Only then does the search
//! move on to the full three-factor shape, so a word admitting both reports
//! the two-factor split.

use crate::criteria::Criterion;
use crate::factor::{BoundaryFactorization, Factor};
use crate::word::Word;

pub fn detect(word: &Word) -> Option<BoundaryFactorization> {
    let n = word.len();

    // Two-factor degenerate form.
    for a in 1..=n {
        for la in 1..n {
            if !word.is_palindrome_at(a, la) && !word.is_90_drome_at(a, la) {
                continue;
            }
            let b = word.wrap((a + la) as i64);
            if word.is_90_drome_at(b, n - la) {
                return Some(BoundaryFactorization::new(
                    Criterion::QuarterTurn,
                    vec![
                        Factor::new(word, a as i64, la),
                        Factor::new(word, b as i64, n - la),
                    ],
                ));
            }
        }
    }

    // Full three-factor form.
    for a in 1..=n {
        for la in 1..n - 1 {
            if !word.is_palindrome_at(a, la) {
                continue;
            }
            let b = word.wrap((a + la) as i64);
            for lb in 1..n - la {
                if !word.is_90_drome_at(b, lb) {
                    continue;
                }
                let c = word.wrap((b + lb) as i64);
                let lc = n - la - lb;
                if word.is_90_drome_at(c, lc) {
                    return Some(BoundaryFactorization::new(
                        Criterion::QuarterTurn,
                        vec![
                            Factor::new(word, a as i64, la),
                            Factor::new(word, b as i64, lb),
                            Factor::new(word, c as i64, lc),
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
    fn square_degenerates_to_two_ninety_dromes() {
        let w = Word::boundary("urdl").unwrap();
        let f = detect(&w).unwrap();
        let got: Vec<_> = f
            .factors
            .iter()
            .map(|x| (x.content.as_str(), x.start, x.finish))
            .collect();
        assert_eq!(got, [("ur", 1, 2), ("dl", 3, 4)]);
    }

    #[test]
    fn pinwheel_boundary_factors_by_quarter_turn() {
        let w =
            Word::boundary("druuurddrurrddrdlldrrrdlddrdldluldluullurullurulluur").unwrap();
        let f = detect(&w).unwrap();
        assert_eq!(f.factors.len(), 3);
        assert_eq!(f.total_len(), w.len());
        let a = Word::parse(&f.factors[0].content).unwrap();
        assert!(a.is_palindrome() || a.is_90_drome());
        for k in [1, 2] {
            assert!(Word::parse(&f.factors[k].content).unwrap().is_90_drome());
        }
    }
}
