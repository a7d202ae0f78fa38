//! Builds the neighbor transforms for each criterion's factorization.
//!
//! The builder trusts its input: the factorization must have come from the
//! matching detector on the same word. Shape mismatches (wrong factor
//! count, a reflected pair that no longer reflects) are programmer errors
//! and panic rather than propagate.
//!
//! Word-level reflection axes describe how *letters* map onto each other;
//! the plane mirror that realizes them has its diagonal angles negated
//! because the y-axis points down. [`plane_axis`] is the only place that
//! conversion happens.

use crate::criteria::Criterion;
use crate::factor::{BoundaryFactorization, Factor};
use crate::letter::AXES;
use crate::transform::Transform;
use crate::word::Word;

/// Convert a word-level reflection axis to the plane mirror angle.
fn plane_axis(theta: i32) -> i32 {
    match theta {
        45 => -45,
        -45 => 45,
        other => other,
    }
}

/// Build the ordered neighbor transforms for a factorization of `word`.
pub fn build_transforms(word: &Word, fac: &BoundaryFactorization) -> Vec<Transform> {
    Builder::new(word, &fac.factors).build(fac.criterion)
}

struct Builder<'a> {
    word: &'a Word,
    factors: &'a [Factor],
}

impl<'a> Builder<'a> {
    fn new(word: &'a Word, factors: &'a [Factor]) -> Self {
        Self { word, factors }
    }

    /// Vertex index of a 1-based boundary position.
    fn vertex(&self, pos: usize) -> usize {
        self.word.wrap(pos as i64) - 1
    }

    /// Vertex index where factor `i` begins.
    fn start(&self, i: usize) -> usize {
        self.vertex(self.factors[i].start)
    }

    /// Vertex index just past factor `i`.
    fn end(&self, i: usize) -> usize {
        self.vertex(self.factors[i].start + self.factors[i].len())
    }

    /// The two glide reflections exchanging the letter-wise reflected
    /// factors `i` and `j`.
    fn glide_pair(&self, i: usize, j: usize) -> [Transform; 2] {
        let axis = self
            .word
            .reflection_between(
                self.factors[i].start,
                self.factors[j].start,
                self.factors[i].len(),
            )
            .unwrap_or_else(|| {
                panic!(
                    "factors {} and {} lost their reflection axis; \
                     factorization does not match its word",
                    i, j
                )
            });
        let angle = plane_axis(axis);
        [
            Transform::Mirror {
                angle,
                pivot_vertex: self.start(j),
                to_vertex: self.start(i),
            },
            Transform::Mirror {
                angle,
                pivot_vertex: self.start(i),
                to_vertex: self.start(j),
            },
        ]
    }

    /// Translation mapping the backtrack partner of factor `i` (factor `j`)
    /// onto it: from the partner's start to the end of factor `i`.
    fn pair_translation(&self, i: usize, j: usize) -> Transform {
        Transform::Translate {
            from_vertex: self.start(j),
            to_vertex: self.end(i),
        }
    }

    fn inverse(&self, t: Transform) -> Transform {
        match t {
            Transform::Translate { from_vertex, to_vertex } => Transform::Translate {
                from_vertex: to_vertex,
                to_vertex: from_vertex,
            },
            _ => panic!("only translations are inverted here"),
        }
    }

    fn build(&self, criterion: Criterion) -> Vec<Transform> {
        match criterion {
            Criterion::Translation => self.translation(),
            Criterion::HalfTurn => self.half_turn(),
            Criterion::QuarterTurn => self.quarter_turn(),
            Criterion::TypeOneReflection => self.reflection_one(),
            Criterion::TypeTwoReflection => self.reflection_two(),
            Criterion::TypeOneHalfTurnReflection => self.half_turn_reflection_one(),
            Criterion::TypeTwoHalfTurnReflection => self.half_turn_reflection_two(),
        }
    }

    /// W = A B C Â B̂ Ĉ: six translations, one per boundary piece, forming
    /// the set {u, v, v-u} and inverses.
    fn translation(&self) -> Vec<Transform> {
        let k = self.factors.len() / 2;
        assert!(
            self.factors.len() == 2 * k && (k == 2 || k == 3),
            "translation factorization must have four or six factors"
        );
        let mut halves = Vec::with_capacity(3);
        for i in 0..k {
            halves.push(self.pair_translation(i, k + i));
        }
        if k == 2 {
            // The empty third pair still contributes its diagonal period.
            halves.push(Transform::Translate {
                from_vertex: self.start(0),
                to_vertex: self.start(k),
            });
        }
        let mut out = halves.clone();
        out.extend(halves.into_iter().map(|t| self.inverse(t)));
        out
    }

    /// W = A B C Â D E: the A-pair translation and four half-turns, one
    /// centered on each palindrome.
    fn half_turn(&self) -> Vec<Transform> {
        assert_eq!(self.factors.len(), 6, "half-turn needs six factors");
        let u = self.pair_translation(0, 3);
        let mut out = vec![u, self.inverse(u)];
        for i in [1, 2, 4, 5] {
            out.push(Transform::Rotate {
                angle: 180,
                pivot_vertex: self.start(i),
                to_vertex: self.start((i + 1) % 6),
            });
        }
        out
    }

    /// W = A B C (or the two-factor degenerate form): rotations about the
    /// 90-drome midpoints and factor joints.
    fn quarter_turn(&self) -> Vec<Transform> {
        let word = self.word;
        let a = &self.factors[0];
        let first_angle = if word.is_palindrome_at(a.start, a.len()) {
            180
        } else {
            90
        };
        let mid = |f: &Factor| self.vertex(f.start + f.len() / 2);
        match self.factors {
            [_, y] => {
                vec![
                    Transform::Rotate {
                        angle: first_angle,
                        pivot_vertex: self.start(0),
                        to_vertex: self.start(1),
                    },
                    Transform::Rotate {
                        angle: 90,
                        pivot_vertex: self.start(1),
                        to_vertex: self.start(0),
                    },
                    Transform::Rotate {
                        angle: -90,
                        pivot_vertex: mid(y),
                        to_vertex: mid(y),
                    },
                ]
            }
            [_, b, c] => vec![
                Transform::Rotate {
                    angle: first_angle,
                    pivot_vertex: self.start(0),
                    to_vertex: self.start(1),
                },
                Transform::Rotate {
                    angle: 90,
                    pivot_vertex: self.start(1),
                    to_vertex: self.start(2),
                },
                Transform::Rotate {
                    angle: -90,
                    pivot_vertex: mid(b),
                    to_vertex: mid(b),
                },
                Transform::Rotate {
                    angle: 90,
                    pivot_vertex: self.start(2),
                    to_vertex: self.start(0),
                },
                Transform::Rotate {
                    angle: -90,
                    pivot_vertex: mid(c),
                    to_vertex: mid(c),
                },
            ],
            _ => panic!("quarter-turn factorization must have two or three factors"),
        }
    }

    /// W = A B fΘ(B) Â C fΦ(C): the A-pair translation plus a glide pair
    /// per reflected pair.
    fn reflection_one(&self) -> Vec<Transform> {
        assert_eq!(self.factors.len(), 6, "type-1 reflection needs six factors");
        let u = self.pair_translation(0, 3);
        let mut out = vec![u, self.inverse(u)];
        out.extend(self.glide_pair(1, 2));
        out.extend(self.glide_pair(4, 5));
        out
    }

    /// W = A B C Â fΘ(C) fΘ(B): like type 1, but both glide pairs share a
    /// single axis and straddle the antipodal A-pair.
    fn reflection_two(&self) -> Vec<Transform> {
        assert_eq!(self.factors.len(), 6, "type-2 reflection needs six factors");
        let shared = AXES.into_iter().find(|&axis| {
            self.word.is_reflection_at(
                self.factors[1].start,
                self.factors[5].start,
                self.factors[1].len(),
                axis,
            ) && self.word.is_reflection_at(
                self.factors[2].start,
                self.factors[4].start,
                self.factors[2].len(),
                axis,
            )
        });
        assert!(
            shared.is_some(),
            "type-2 reflection pairs no longer share an axis"
        );
        let u = self.pair_translation(0, 3);
        let mut out = vec![u, self.inverse(u)];
        out.extend(self.glide_pair(1, 5));
        out.extend(self.glide_pair(2, 4));
        out
    }

    /// W = A B C Â D fΘ(D): translation, two half-turns, one glide pair.
    fn half_turn_reflection_one(&self) -> Vec<Transform> {
        assert_eq!(
            self.factors.len(),
            6,
            "type-1 half-turn reflection needs six factors"
        );
        let u = self.pair_translation(0, 3);
        let mut out = vec![
            u,
            self.inverse(u),
            Transform::Rotate {
                angle: 180,
                pivot_vertex: self.start(1),
                to_vertex: self.start(2),
            },
            Transform::Rotate {
                angle: 180,
                pivot_vertex: self.start(2),
                to_vertex: self.start(3),
            },
        ];
        out.extend(self.glide_pair(4, 5));
        out
    }

    /// W = A B C D fΘ(B) fΦ(D): two half-turns on the palindromes and a
    /// glide pair per reflected pair; the perpendicular axes make the
    /// rotations come out of the composition.
    fn half_turn_reflection_two(&self) -> Vec<Transform> {
        assert_eq!(
            self.factors.len(),
            6,
            "type-2 half-turn reflection needs six factors"
        );
        let mut out = vec![
            Transform::Rotate {
                angle: 180,
                pivot_vertex: self.start(0),
                to_vertex: self.start(1),
            },
            Transform::Rotate {
                angle: 180,
                pivot_vertex: self.start(2),
                to_vertex: self.start(3),
            },
        ];
        out.extend(self.glide_pair(1, 4));
        out.extend(self.glide_pair(3, 5));
        out
    }
}
