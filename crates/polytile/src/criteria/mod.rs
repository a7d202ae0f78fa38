//! The seven boundary criteria and the orchestrator that tries them in
//! order.
//!
//! Each criterion module implements one search over the cyclic splits of a
//! boundary word and returns the first factorization that fits its shape.
//! They share the same skeleton (pick split points, test the factor
//! predicates, bail early) with different predicates per criterion.

mod half_turn;
mod half_turn_reflection_one;
mod half_turn_reflection_two;
mod quarter_turn;
mod reflection_one;
mod reflection_two;
mod translation;

use serde::Serialize;

use crate::factor::BoundaryFactorization;
use crate::word::Word;

/// The boundary criteria, in the order the orchestrator tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Criterion {
    Translation,
    HalfTurn,
    QuarterTurn,
    TypeOneReflection,
    TypeTwoReflection,
    TypeOneHalfTurnReflection,
    TypeTwoHalfTurnReflection,
}

impl Criterion {
    /// All criteria in detection order.
    pub fn all() -> &'static [Criterion] {
        &[
            Criterion::Translation,
            Criterion::HalfTurn,
            Criterion::QuarterTurn,
            Criterion::TypeOneReflection,
            Criterion::TypeTwoReflection,
            Criterion::TypeOneHalfTurnReflection,
            Criterion::TypeTwoHalfTurnReflection,
        ]
    }

    /// Stable lowercase name, usable on a command line.
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Translation => "translation",
            Criterion::HalfTurn => "half-turn",
            Criterion::QuarterTurn => "quarter-turn",
            Criterion::TypeOneReflection => "type-1-reflection",
            Criterion::TypeTwoReflection => "type-2-reflection",
            Criterion::TypeOneHalfTurnReflection => "type-1-half-turn-reflection",
            Criterion::TypeTwoHalfTurnReflection => "type-2-half-turn-reflection",
        }
    }

    /// Parse a criterion name as printed by [`Criterion::name`].
    pub fn from_name(name: &str) -> Option<Criterion> {
        Criterion::all()
            .iter()
            .copied()
            .find(|c| c.name() == name.to_lowercase())
    }

    /// The factorization shape this criterion looks for.
    pub fn shape(&self) -> &'static str {
        match self {
            Criterion::Translation => "A B C A* B* C*",
            Criterion::HalfTurn => "A B C A* D E",
            Criterion::QuarterTurn => "A B C",
            Criterion::TypeOneReflection => "A B fΘ(B) A* C fΦ(C)",
            Criterion::TypeTwoReflection => "A B C A* fΘ(C) fΘ(B)",
            Criterion::TypeOneHalfTurnReflection => "A B C A* D fΘ(D)",
            Criterion::TypeTwoHalfTurnReflection => "A B C D fΘ(B) fΦ(D)",
        }
    }

    /// Run this criterion's detector on a validated boundary word.
    pub fn detect(&self, word: &Word) -> Option<BoundaryFactorization> {
        match self {
            Criterion::Translation => translation::detect(word),
            Criterion::HalfTurn => half_turn::detect(word),
            Criterion::QuarterTurn => quarter_turn::detect(word),
            Criterion::TypeOneReflection => reflection_one::detect(word),
            Criterion::TypeTwoReflection => reflection_two::detect(word),
            Criterion::TypeOneHalfTurnReflection => half_turn_reflection_one::detect(word),
            Criterion::TypeTwoHalfTurnReflection => half_turn_reflection_two::detect(word),
        }
    }
}

/// Try the criteria in their fixed order and return the first factorization
/// found, or `None` when the polyomino admits no isohedral tiling that the
/// seven criteria cover.
pub fn any_factorization(word: &Word) -> Option<BoundaryFactorization> {
    Criterion::all().iter().find_map(|c| c.detect(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &c in Criterion::all() {
            assert_eq!(Criterion::from_name(c.name()), Some(c));
        }
        assert_eq!(Criterion::from_name("no-such"), None);
    }

    #[test]
    fn unit_square_is_a_translation_tile() {
        let w = Word::boundary("urdl").unwrap();
        let f = any_factorization(&w).unwrap();
        assert_eq!(f.criterion, Criterion::Translation);
        assert_eq!(f.total_len(), 4);
    }
}
