//! End-to-end scenarios: known boundary words through the whole engine.
//!
//! Beyond checking which criterion fires, these tests verify the geometry:
//! every emitted transform must map the seed onto a touching, non-overlapping
//! neighbor, and a window-clipped tiling run must produce a packing that
//! covers the center of the window without gaps.

use std::collections::HashMap;

use polytile::{analyze, BoundaryError, Criterion, Point, Polygon, Word};

/// Boundary words with the criterion the orchestrator must report first.
const SCENARIOS: &[(&str, Criterion)] = &[
    ("rrddrurddrdllldldluullurrruluu", Criterion::Translation),
    (
        "rddrurdruuurdrdrdrdldrddrdllululdddluldluullurrulllllurruuur",
        Criterion::HalfTurn,
    ),
    (
        "druuurddrurrddrdlldrrrdlddrdldluldluullurullurulluur",
        Criterion::QuarterTurn,
    ),
    (
        "rrrdrdddrurdddddlulddlullldluululuuurururu",
        Criterion::TypeOneReflection,
    ),
    (
        "ruuurddrrddldrrrdlddddllluuldddlulluuuuluulurrrurd",
        Criterion::TypeTwoReflection,
    ),
    (
        "urrdrrdlddlddldrrrrdldllulldlullurrululurrullururr",
        Criterion::TypeOneHalfTurnReflection,
    ),
    (
        "drdrdllddrurddddlllddldluurulluulluurdruurdruulurrur",
        Criterion::TypeTwoHalfTurnReflection,
    ),
];

/// The set of unit cells enclosed by a rectilinear lattice polygon, computed
/// by casting a ray through each candidate cell center.
fn cells(poly: &Polygon) -> Vec<(i64, i64)> {
    let (min_x, min_y, max_x, max_y) = poly.bounding_box().unwrap();
    let n = poly.len();
    let mut out = Vec::new();
    for i in min_x..max_x {
        for j in min_y..max_y {
            // Count vertical edges strictly left of the center (i+1/2, j+1/2).
            let mut crossings = 0;
            for k in 0..n {
                let a = poly.points[k];
                let b = poly.points[(k + 1) % n];
                if a.x == b.x && a.x <= i && a.y.min(b.y) <= j && j < a.y.max(b.y) {
                    crossings += 1;
                }
            }
            if crossings % 2 == 1 {
                out.push((i, j));
            }
        }
    }
    out
}

fn shares_a_vertex(a: &Polygon, b: &Polygon) -> bool {
    a.points.iter().any(|p| b.points.contains(p))
}

#[test]
fn orchestrator_reports_the_expected_criterion() {
    for &(word, expected) in SCENARIOS {
        let solution = analyze(word)
            .unwrap_or_else(|e| panic!("{} should be a valid boundary: {}", word, e))
            .unwrap_or_else(|| panic!("{} should admit a tiling", word));
        assert_eq!(solution.criterion, expected, "word {}", word);
    }
}

#[test]
fn factorizations_cover_the_word_exactly_once() {
    for &(word, _) in SCENARIOS {
        let w = Word::boundary(word).unwrap();
        let solution = analyze(word).unwrap().unwrap();
        let n = w.len();
        assert_eq!(
            solution.factors.iter().map(|f| f.len()).sum::<usize>(),
            n,
            "factors of {} must cover the boundary",
            word
        );
        // Factors chain start-to-finish around the cycle.
        for pair in solution.factors.windows(2) {
            assert_eq!(pair[1].start, w.wrap(pair[0].finish as i64 + 1));
        }
        let first = &solution.factors[0];
        let last = solution.factors.last().unwrap();
        assert_eq!(first.start, w.wrap(last.finish as i64 + 1));
        // Concatenated contents spell the word rotated to the first start.
        let joined: String = solution
            .factors
            .iter()
            .map(|f| f.content.as_str())
            .collect();
        let rotated = w.extract(first.start, w.wrap(first.start as i64 - 1)).to_string();
        assert_eq!(joined, rotated, "contents of {} out of order", word);
        assert!(solution.factors.iter().all(|f| !f.is_empty()));
    }
}

#[test]
fn every_transform_yields_a_touching_disjoint_neighbor() {
    for &(word, _) in SCENARIOS {
        let solution = analyze(word).unwrap().unwrap();
        let seed_cells = cells(&solution.seed);
        for t in &solution.transforms {
            let image = t.apply(&solution.seed);
            let image_cells = cells(&image);
            assert!(
                image_cells.iter().all(|c| !seed_cells.contains(c)),
                "{:?} overlaps the seed of {}",
                t,
                word
            );
            assert!(
                shares_a_vertex(&image, &solution.seed),
                "{:?} leaves the seed of {} untouched",
                t,
                word
            );
        }
    }
}

#[test]
fn window_tilings_are_gapless_packings() {
    for &(word, _) in SCENARIOS {
        let solution = analyze(word).unwrap().unwrap();
        let tiles = solution.tiling((44, 44));
        assert!(tiles.len() > 1, "window tiling of {} is trivial", word);

        let mut owner: HashMap<(i64, i64), usize> = HashMap::new();
        for (index, tile) in tiles.iter().enumerate() {
            assert!(tile.touches_window(44, 44));
            for cell in cells(tile) {
                if let Some(previous) = owner.insert(cell, index) {
                    panic!(
                        "tiles {} and {} of {} both cover cell {:?}",
                        previous, index, word, cell
                    );
                }
            }
        }
        // The middle of the window is fully covered.
        for x in -6..6 {
            for y in -6..6 {
                assert!(
                    owner.contains_key(&(x, y)),
                    "cell ({}, {}) uncovered in tiling of {}",
                    x,
                    y,
                    word
                );
            }
        }
    }
}

#[test]
fn unit_square_tiles_by_translation() {
    let solution = analyze("urdl").unwrap().unwrap();
    assert_eq!(solution.criterion, Criterion::Translation);
    assert_eq!(solution.factors.len(), 4);
    assert!(solution.factors.iter().all(|f| f.len() == 1));
}

#[test]
fn malformed_boundaries_are_rejected() {
    assert!(matches!(analyze(""), Err(BoundaryError::TooShort(0))));
    assert!(matches!(analyze("uu"), Err(BoundaryError::TooShort(2))));
    assert!(matches!(analyze("uudd"), Err(BoundaryError::SelfIntersecting(_))));
    assert!(matches!(analyze("uurr"), Err(BoundaryError::NotClosed(_))));
    assert!(matches!(
        analyze("polyomino"),
        Err(BoundaryError::IllegalCharacter { .. })
    ));
}

#[test]
fn closed_boundary_words_have_zero_path_vector() {
    for &(word, _) in SCENARIOS {
        let w = Word::boundary(word).unwrap();
        assert_eq!(w.path_vector(), Point::zero());
    }
}

#[test]
fn untileable_octomino_returns_none() {
    // A pinwheel-ish octomino none of the seven criteria accept.
    let result = analyze("rdddrdlldllururuuu").unwrap();
    assert!(result.is_none());
}
