//! Error type for boundary-word validation.

use std::fmt;

use crate::geometry::Point;

/// Upper bound on accepted boundary length. Large enough for any polyomino a
/// person would paint, small enough to keep the quadratic factor index sane.
pub const MAX_BOUNDARY_LEN: usize = 4096;

/// Why an input string was rejected as a polyomino boundary.
///
/// A word that passes validation may still fail to tile; that outcome is the
/// orchestrator's `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// Input contains a character outside {r, u, l, d}. `position` is
    /// 1-based.
    IllegalCharacter { ch: char, position: usize },
    /// A boundary word always has even length (every step is undone).
    OddLength(usize),
    /// Shorter than the unit square's four steps (includes empty input).
    TooShort(usize),
    /// Longer than [`MAX_BOUNDARY_LEN`].
    TooLong(usize),
    /// The walk does not return to its start; the leftover displacement is
    /// carried for diagnostics.
    NotClosed(Point),
    /// The walk revisits a lattice point before closing.
    SelfIntersecting(Point),
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::IllegalCharacter { ch, position } => {
                write!(f, "illegal character '{}' at position {}", ch, position)
            }
            BoundaryError::OddLength(n) => {
                write!(f, "boundary length {} is odd", n)
            }
            BoundaryError::TooShort(n) => {
                write!(f, "boundary length {} is below the minimum of 4", n)
            }
            BoundaryError::TooLong(n) => {
                write!(
                    f,
                    "boundary length {} exceeds the maximum of {}",
                    n, MAX_BOUNDARY_LEN
                )
            }
            BoundaryError::NotClosed(v) => {
                write!(f, "boundary does not close (ends {:+},{:+} from start)", v.x, v.y)
            }
            BoundaryError::SelfIntersecting(p) => {
                write!(f, "boundary revisits the point ({}, {})", p.x, p.y)
            }
        }
    }
}

impl std::error::Error for BoundaryError {}
