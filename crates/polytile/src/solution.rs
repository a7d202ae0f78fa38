//! Top-level entry point tying the engine together: word in, tiling recipe
//! out.

use serde::Serialize;

use crate::criteria::{any_factorization, Criterion};
use crate::error::BoundaryError;
use crate::factor::Factor;
use crate::geometry::Polygon;
use crate::isometry::build_transforms;
use crate::tiling::{generate_tiling, generate_tiling_depth};
use crate::transform::{AffineMap, Transform};
use crate::word::Word;

/// Everything needed to reproduce an isohedral tiling of one polyomino: the
/// criterion that matched, its factorization, the seed polygon, and the
/// neighbor transforms.
#[derive(Debug, Clone, Serialize)]
pub struct TilingSolution {
    pub criterion: Criterion,
    pub factors: Vec<Factor>,
    pub seed: Polygon,
    pub transforms: Vec<Transform>,
}

impl TilingSolution {
    /// The transforms in canonical affine form, resolved against the seed.
    pub fn affine_maps(&self) -> Vec<AffineMap> {
        self.transforms
            .iter()
            .map(|t| t.to_affine(&self.seed))
            .collect()
    }

    /// Generate the tiling clipped to a centered window.
    pub fn tiling(&self, window: (i64, i64)) -> Vec<Polygon> {
        generate_tiling(&self.seed, &self.transforms, window)
    }

    /// Generate the tiling out to a fixed BFS depth.
    pub fn tiling_to_depth(&self, max_depth: usize) -> Vec<Polygon> {
        generate_tiling_depth(&self.seed, &self.transforms, max_depth)
    }
}

/// Decide whether `input` is the boundary of an isohedrally tiling
/// polyomino.
///
/// Returns `Err` for words that are not valid polyomino boundaries,
/// `Ok(None)` for valid boundaries none of the seven criteria accept, and
/// `Ok(Some(..))` with the full recipe otherwise.
pub fn analyze(input: &str) -> Result<Option<TilingSolution>, BoundaryError> {
    let word = Word::boundary(input)?;
    Ok(any_factorization(&word).map(|fac| {
        let transforms = build_transforms(&word, &fac);
        TilingSolution {
            criterion: fac.criterion,
            factors: fac.factors,
            seed: word.to_polygon(),
            transforms,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_round_trip() {
        let solution = analyze("urdl").unwrap().unwrap();
        assert_eq!(solution.criterion, Criterion::Translation);
        assert_eq!(solution.seed.len(), 4);
        assert_eq!(solution.transforms.len(), 6);
        let tiles = solution.tiling((4, 4));
        assert!(tiles.len() > 1);
        assert_eq!(tiles[0], solution.seed);
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(analyze("uu").is_err());
        assert!(analyze("hello").is_err());
    }

    #[test]
    fn untileable_boundary_is_ok_none() {
        // A valid octomino boundary that satisfies none of the criteria.
        assert!(analyze("rdddrdlldllururuuu").unwrap().is_none());
    }
}
