//! Half-turn (Conway) criterion: W = A B C Â D E with B, C, D, E
//! palindromes.
//!
//! A and Â are a backtrack pair of equal length anywhere on the cycle; the
//! four palindromes fill the two gaps between them, two per gap. Palindrome
//! factors are kept no longer than A itself, which bounds every inner loop
//! by |A| and keeps the pattern from swallowing the word.

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
            for lb in 1..=la.min(gap) {
                if !word.is_palindrome_at(b, lb) {
                    continue;
                }
                let c = word.wrap((b + lb) as i64);
                for lc in 1..=la.min(gap - lb) {
                    if !word.is_palindrome_at(c, lc) {
                        continue;
                    }
                    let ahat = word.wrap((c + lc) as i64);
                    if !word.backtrack_eq_at(a, ahat, la) {
                        continue;
                    }
                    let d = word.wrap((ahat + la) as i64);
                    let rest = gap - lb - lc;
                    if rest < 2 {
                        continue;
                    }
                    let ld_lo = 1.max(rest.saturating_sub(la));
                    let ld_hi = la.min(rest - 1);
                    for ld in ld_lo..=ld_hi {
                        if !word.is_palindrome_at(d, ld) {
                            continue;
                        }
                        let e = word.wrap((d + ld) as i64);
                        let le = rest - ld;
                        if !word.is_palindrome_at(e, le) {
                            continue;
                        }
                        return Some(BoundaryFactorization::new(
                            Criterion::HalfTurn,
                            vec![
                                Factor::new(word, a as i64, la),
                                Factor::new(word, b as i64, lb),
                                Factor::new(word, c as i64, lc),
                                Factor::new(word, ahat as i64, la),
                                Factor::new(word, d as i64, ld),
                                Factor::new(word, e as i64, le),
                            ],
                        ));
                    }
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
    fn winding_boundary_factors_by_half_turn() {
        let w = Word::boundary(
            "rddrurdruuurdrdrdrdldrddrdllululdddluldluullurrulllllurruuur",
        )
        .unwrap();
        let f = detect(&w).unwrap();
        assert_eq!(f.criterion, Criterion::HalfTurn);
        assert_eq!(f.factors.len(), 6);
        assert_eq!(f.total_len(), w.len());
        // A and its partner are backtracks of each other.
        let a = Word::parse(&f.factors[0].content).unwrap();
        let ahat = Word::parse(&f.factors[3].content).unwrap();
        assert_eq!(ahat, a.backtrack());
        // The four remaining factors are palindromes no longer than A.
        for k in [1, 2, 4, 5] {
            let p = Word::parse(&f.factors[k].content).unwrap();
            assert!(p.is_palindrome(), "factor {} must be a palindrome", k);
            assert!(p.len() <= a.len());
        }
    }

    #[test]
    fn unit_square_has_no_half_turn_witness_shorter_than_its_pairs() {
        // The square is caught by the translation criterion; the half-turn
        // shape needs two gaps of at least two letters, which a four-letter
        // word cannot provide.
        let w = Word::boundary("urdl").unwrap();
        assert!(detect(&w).is_none());
    }
}
