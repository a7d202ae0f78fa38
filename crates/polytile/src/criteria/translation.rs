//! Translation (Beauquier-Nivat) criterion: W = A B C Â B̂ Ĉ.
//!
//! The first half of the factorization is a chain of two or three admissible
//! gapped-mirror factors covering exactly half the boundary; the second half
//! is forced, because every factor's partner sits half a word away. The
//! search runs once keyed by start positions and once keyed by finish
//! positions, which catches factorizations whose witness chain is easier to
//! assemble from the back.

use crate::admissible::FactorIndex;
use crate::criteria::Criterion;
use crate::factor::{BoundaryFactorization, Factor};
use crate::word::Word;

pub fn detect(word: &Word) -> Option<BoundaryFactorization> {
    let n = word.len();
    let half = n / 2;
    let index = FactorIndex::build(word);

    // Forward: A by start, then B right after it, then the forced C.
    for s in 1..=n {
        for a in index.starting_at(s) {
            if a.len() >= half {
                break; // sorted by length, nothing shorter follows
            }
            let b_start = word.wrap(a.finish as i64 + 1);
            for b in index.starting_at(b_start) {
                let rest = half - a.len();
                if b.len() > rest {
                    break;
                }
                if b.len() == rest {
                    return Some(expand(word, &[a.clone(), b.clone()]));
                }
                let c_start = word.wrap(b.finish as i64 + 1);
                if let Some(c) = index.factor_at(c_start, rest - b.len()) {
                    return Some(expand(word, &[a.clone(), b.clone(), c.clone()]));
                }
            }
        }
    }

    // Backward: C by finish, then B ending right before it, then the forced A.
    for fin in 1..=n {
        for c in index.finishing_at(fin) {
            if c.len() >= half {
                break;
            }
            let b_finish = word.wrap(c.start as i64 - 1);
            for b in index.finishing_at(b_finish) {
                let rest = half - c.len();
                if b.len() > rest {
                    break;
                }
                if b.len() == rest {
                    return Some(expand(word, &[b.clone(), c.clone()]));
                }
                let a_start = word.wrap(fin as i64 - half as i64 + 1);
                if let Some(a) = index.factor_at(a_start, rest - b.len()) {
                    return Some(expand(word, &[a.clone(), b.clone(), c.clone()]));
                }
            }
        }
    }

    None
}

/// Append each half-factor's antipodal partner, giving the full four- or
/// six-factor boundary factorization.
fn expand(word: &Word, half_factors: &[Factor]) -> BoundaryFactorization {
    let half = (word.len() / 2) as i64;
    let mut factors = half_factors.to_vec();
    for f in half_factors {
        let partner = Factor::new(word, f.start as i64 + half, f.len());
        debug_assert_eq!(
            partner.content,
            Word::parse(&f.content).unwrap().backtrack().to_string(),
            "gapped mirror partner must be the backtrack of its factor"
        );
        factors.push(partner);
    }
    BoundaryFactorization::new(Criterion::Translation, factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_splits_into_four_letters() {
        let w = Word::boundary("urdl").unwrap();
        let f = detect(&w).unwrap();
        let got: Vec<_> = f.factors.iter().map(|x| x.content.as_str()).collect();
        assert_eq!(got, ["u", "r", "d", "l"]);
    }

    #[test]
    fn domino_is_a_translation_tile() {
        let w = Word::boundary("rrdllu").unwrap();
        let f = detect(&w).unwrap();
        assert_eq!(f.criterion, Criterion::Translation);
        assert_eq!(f.total_len(), 6);
        // Factors chain around the cycle.
        for (cur, next) in f.factors.iter().zip(f.factors.iter().cycle().skip(1)) {
            assert_eq!(next.start, w.wrap(cur.finish as i64 + 1));
        }
    }

    #[test]
    fn staircase_boundary_splits_into_two_factor_halves() {
        let w = Word::boundary("rrddrurddrdllldldluullurrruluu").unwrap();
        let f = detect(&w).unwrap();
        let got: Vec<_> = f.factors.iter().map(|x| x.content.as_str()).collect();
        assert_eq!(got, ["rrddrur", "ddrdllld", "ldluull", "urrruluu"]);
        assert_eq!(f.total_len(), w.len());
    }
}
