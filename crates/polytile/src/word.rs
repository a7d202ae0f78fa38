//! Cyclic boundary words and the predicates the criterion searches run on.
//!
//! Positions are 1-based and inclusive, and wrap modulo the word length, so
//! a factor from 10 to 3 on a 12-letter word runs through the seam. All the
//! modular arithmetic is centralized here: detectors only ever hand
//! positions to [`Word`] methods and never touch raw indices.

use std::fmt;
use std::str::FromStr;

use crate::error::{BoundaryError, MAX_BOUNDARY_LEN};
use crate::geometry::{Point, Polygon};
use crate::letter::{Letter, AXES};

/// A word over the boundary alphabet.
///
/// Plain words (factors, scratch values) may be any length including empty;
/// validated polyomino boundaries come from [`Word::boundary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    pub fn new(letters: Vec<Letter>) -> Self {
        Self { letters }
    }

    /// Parse a string of boundary letters without boundary validation.
    pub fn parse(s: &str) -> Result<Word, BoundaryError> {
        let mut letters = Vec::with_capacity(s.len());
        for (i, ch) in s.chars().enumerate() {
            match Letter::from_char(ch) {
                Some(l) => letters.push(l),
                None => return Err(BoundaryError::IllegalCharacter { ch, position: i + 1 }),
            }
        }
        Ok(Word::new(letters))
    }

    /// Parse and validate a polyomino boundary word: legal letters, even
    /// length of at least 4, a closed walk, and no revisited lattice point.
    pub fn boundary(s: &str) -> Result<Word, BoundaryError> {
        let word = Word::parse(s)?;
        let n = word.len();
        if n < 4 {
            return Err(BoundaryError::TooShort(n));
        }
        if n % 2 != 0 {
            return Err(BoundaryError::OddLength(n));
        }
        if n > MAX_BOUNDARY_LEN {
            return Err(BoundaryError::TooLong(n));
        }
        let points = word.path_points();
        let end = points[n];
        if end != Point::zero() {
            return Err(BoundaryError::NotClosed(end));
        }
        let mut seen = std::collections::HashSet::with_capacity(n);
        for &p in &points[..n] {
            if !seen.insert(p) {
                return Err(BoundaryError::SelfIntersecting(p));
            }
        }
        Ok(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Letter at a 1-based cyclic position (any `pos >= 1`).
    #[inline]
    pub fn at(&self, pos: usize) -> Letter {
        debug_assert!(pos >= 1);
        self.letters[(pos - 1) % self.len()]
    }

    /// Reduce any signed index to the canonical range `1..=len`.
    #[inline]
    pub fn wrap(&self, pos: i64) -> usize {
        let n = self.len() as i64;
        ((pos - 1).rem_euclid(n) + 1) as usize
    }

    /// Cyclic substring from `start` to `finish` inclusive, wrapping through
    /// the seam when `start > finish`. Both must be in `1..=len`.
    pub fn extract(&self, start: usize, finish: usize) -> Word {
        let n = self.len();
        debug_assert!(1 <= start && start <= n && 1 <= finish && finish <= n);
        let count = if start <= finish {
            finish - start + 1
        } else {
            n - start + 1 + finish
        };
        Word::new((0..count).map(|k| self.at(start + k)).collect())
    }

    /// The word concatenated with itself. Doubling turns every cyclic factor
    /// into an ordinary substring.
    pub fn twice(&self) -> Word {
        let mut letters = self.letters.clone();
        letters.extend_from_slice(&self.letters);
        Word::new(letters)
    }

    pub fn reversed(&self) -> Word {
        Word::new(self.letters.iter().rev().copied().collect())
    }

    pub fn complement(&self) -> Word {
        Word::new(self.letters.iter().map(|l| l.complement()).collect())
    }

    /// The path that undoes this one: reverse, then complement letter-wise.
    pub fn backtrack(&self) -> Word {
        Word::new(self.letters.iter().rev().map(|l| l.complement()).collect())
    }

    // ------------------------------------------------------------------
    // Factor predicates. All of these read the word cyclically and never
    // allocate; the detectors call them in tight loops.
    // ------------------------------------------------------------------

    /// Θ-drome test on the factor of `len` letters starting at `start`.
    ///
    /// Walks inward from both ends requiring
    /// `rotate(W[i], theta + 180) == W[j]`; the middle letter of an
    /// odd-length factor is never examined. The empty factor passes for
    /// every Θ.
    pub fn is_theta_drome_at(&self, start: usize, len: usize, theta: i32) -> bool {
        if len == 0 {
            return true;
        }
        let (mut i, mut j) = (0, len - 1);
        while i < j {
            if self.at(start + i).rotated(theta + 180) != self.at(start + j) {
                return false;
            }
            i += 1;
            j -= 1;
        }
        true
    }

    /// Palindrome (Θ = 180): the factor reads the same in both directions.
    #[inline]
    pub fn is_palindrome_at(&self, start: usize, len: usize) -> bool {
        self.is_theta_drome_at(start, len, 180)
    }

    /// 90-drome (Θ = 90): the factor folds onto itself under a quarter turn.
    #[inline]
    pub fn is_90_drome_at(&self, start: usize, len: usize) -> bool {
        self.is_theta_drome_at(start, len, 90)
    }

    /// Whole-word palindrome test.
    pub fn is_palindrome(&self) -> bool {
        self.is_empty() || self.is_palindrome_at(1, self.len())
    }

    /// Whole-word 90-drome test.
    pub fn is_90_drome(&self) -> bool {
        self.is_empty() || self.is_90_drome_at(1, self.len())
    }

    /// True iff the factor at `s2` is the backtrack of the factor at `s1`
    /// (both of `len` letters).
    pub fn backtrack_eq_at(&self, s1: usize, s2: usize, len: usize) -> bool {
        (0..len).all(|k| self.at(s2 + k) == self.at(s1 + len - 1 - k).complement())
    }

    /// True iff the two equal-length factors are letter-wise reflections of
    /// each other across `axis`. The relation is symmetric because letter
    /// reflection is involutive.
    pub fn is_reflection_at(&self, s1: usize, s2: usize, len: usize, axis: i32) -> bool {
        (0..len).all(|k| self.at(s1 + k) == self.at(s2 + k).reflected(axis))
    }

    /// First axis (in the fixed [-45, 0, 45, 90] probe order) across which
    /// the two factors reflect, if any.
    pub fn reflection_between(&self, s1: usize, s2: usize, len: usize) -> Option<i32> {
        AXES.into_iter()
            .find(|&axis| self.is_reflection_at(s1, s2, len, axis))
    }

    // ------------------------------------------------------------------
    // Path geometry.
    // ------------------------------------------------------------------

    /// The lattice points visited by walking the word from the origin,
    /// including both endpoints (`len + 1` points; for a closed boundary the
    /// last equals the first).
    pub fn path_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.len() + 1);
        let mut p = Point::zero();
        points.push(p);
        for l in &self.letters {
            p = p + l.step();
            points.push(p);
        }
        points
    }

    /// Net displacement of the walk (end minus start).
    pub fn path_vector(&self) -> Point {
        self.letters
            .iter()
            .fold(Point::zero(), |acc, l| acc + l.step())
    }

    /// The polygon traced by a closed word: the visited points without the
    /// closing duplicate. Vertex `p - 1` is where position `p` starts its
    /// step, which is the correspondence the isometry builder relies on.
    pub fn to_polygon(&self) -> Polygon {
        let mut points = self.path_points();
        points.pop();
        Polygon::new(points)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for l in &self.letters {
            write!(f, "{}", l.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = BoundaryError;
    fn from_str(s: &str) -> Result<Word, BoundaryError> {
        Word::parse(s)
    }
}

/// True iff `a` and `b` have equal length and are letter-wise reflections
/// of each other across `axis`.
pub fn is_reflection(a: &Word, b: &Word, axis: i32) -> bool {
    a.len() == b.len()
        && a.letters()
            .iter()
            .zip(b.letters())
            .all(|(x, y)| *x == y.reflected(axis))
}

/// True iff the two words reflect across any of the four lattice axes.
pub fn is_any_reflection(a: &Word, b: &Word) -> bool {
    reflection_angle(a, b).is_some()
}

/// First axis (probing -45, 0, 45, 90 in order) across which the two words
/// reflect, if any.
pub fn reflection_angle(a: &Word, b: &Word) -> Option<i32> {
    AXES.into_iter().find(|&axis| is_reflection(a, b, axis))
}

/// Longest common prefix of two strings.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    &a[..end]
}

/// Longest common prefix length of two letter slices.
pub(crate) fn common_prefix_len(a: &[Letter], b: &[Letter]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}
