//! The four-letter boundary alphabet and its rigid motions.
//!
//! A boundary word walks the edge of a polyomino clockwise using unit steps
//! `r`, `u`, `l`, `d`. Rotations act on letters by advancing the alphabet
//! index, so the alphabet order [R, U, L, D] is load-bearing: it encodes the
//! counter-clockwise rotation sense every caller relies on.

use crate::geometry::Point;

/// A unit step of a boundary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    R,
    U,
    L,
    D,
}

/// The alphabet in rotation order.
pub const ALPHABET: [Letter; 4] = [Letter::R, Letter::U, Letter::L, Letter::D];

/// The four axis angles (degrees from the x-axis) that map the lattice
/// alphabet onto itself under reflection, in the fixed probe order used by
/// every reflection search.
pub const AXES: [i32; 4] = [-45, 0, 45, 90];

impl Letter {
    /// Parse a single boundary character.
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'r' => Some(Letter::R),
            'u' => Some(Letter::U),
            'l' => Some(Letter::L),
            'd' => Some(Letter::D),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Letter::R => 'r',
            Letter::U => 'u',
            Letter::L => 'l',
            Letter::D => 'd',
        }
    }

    /// Index into [`ALPHABET`].
    #[inline]
    fn index(self) -> i32 {
        match self {
            Letter::R => 0,
            Letter::U => 1,
            Letter::L => 2,
            Letter::D => 3,
        }
    }

    /// The unit lattice step this letter takes (y-axis points down).
    #[inline]
    pub fn step(self) -> Point {
        match self {
            Letter::R => Point::new(1, 0),
            Letter::U => Point::new(0, -1),
            Letter::L => Point::new(-1, 0),
            Letter::D => Point::new(0, 1),
        }
    }

    /// Rotate by `degrees` counter-clockwise (mathematical sense).
    ///
    /// `degrees` must be a multiple of 90; negative angles rotate the other
    /// way.
    #[inline]
    pub fn rotated(self, degrees: i32) -> Letter {
        assert!(
            degrees % 90 == 0,
            "letter rotation must be a multiple of 90 degrees, got {}",
            degrees
        );
        let idx = (self.index() + degrees / 90).rem_euclid(4);
        ALPHABET[idx as usize]
    }

    /// The opposite step: rotation by 180 degrees.
    #[inline]
    pub fn complement(self) -> Letter {
        self.rotated(180)
    }

    /// Reflect across a line through the origin at `axis` degrees from the
    /// x-axis; `axis` must be one of [`AXES`].
    ///
    /// Horizontal letters (r, l) and vertical letters (u, d) rotate by
    /// opposite quarter turns for the diagonal axes, and swap roles between
    /// the 0- and 90-degree axes.
    pub fn reflected(self, axis: i32) -> Letter {
        let horizontal = matches!(self, Letter::R | Letter::L);
        let turn = match (axis, horizontal) {
            (-45, true) => -90,
            (-45, false) => 90,
            (0, true) => 0,
            (0, false) => 180,
            (45, true) => 90,
            (45, false) => -90,
            (90, true) => 180,
            (90, false) => 0,
            _ => panic!("reflection axis must be one of -45, 0, 45, 90, got {}", axis),
        };
        self.rotated(turn)
    }
}
