//! # polytile
//!
//! Decides whether a polyomino tiles the plane isohedrally, and produces the
//! rigid motions that generate such a tiling from the single tile.
//!
//! The input is the polyomino's clockwise boundary word over the alphabet
//! `{r, u, l, d}` (y-axis pointing down). The engine checks the seven
//! boundary criteria in a fixed order - translation, half-turn,
//! quarter-turn, the two reflection types, and the two half-turn reflection
//! types - and reports the first factorization of the boundary that fits.
//! From the factorization it builds the neighbor transforms, and a bounded
//! breadth-first generator expands the seed polygon into an actual patch of
//! the tiling.
//!
//! ```
//! let solution = polytile::analyze("urdl").unwrap().expect("squares tile");
//! assert_eq!(solution.criterion, polytile::Criterion::Translation);
//! let patch = solution.tiling((8, 8));
//! assert!(patch.len() > 1);
//! ```

pub mod admissible;
pub mod criteria;
pub mod error;
pub mod factor;
pub mod geometry;
pub mod isometry;
pub mod letter;
pub mod solution;
pub mod tiling;
pub mod transform;
pub mod word;

// Re-export the working set at the crate root.
pub use admissible::{admissible_factors, FactorIndex};
pub use criteria::{any_factorization, Criterion};
pub use error::{BoundaryError, MAX_BOUNDARY_LEN};
pub use factor::{BoundaryFactorization, Factor};
pub use geometry::{Point, Polygon};
pub use isometry::build_transforms;
pub use solution::{analyze, TilingSolution};
pub use tiling::{generate_tiling, generate_tiling_depth};
pub use transform::{AffineMap, Transform};
pub use word::{common_prefix, is_any_reflection, is_reflection, reflection_angle, Word};
