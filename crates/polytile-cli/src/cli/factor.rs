//! Factor command: run the criterion detectors on one boundary word.

use serde::Serialize;

use polytile::{AffineMap, Factor};

use super::{analyze_or_exit, EXIT_NO_TILING};

/// JSON payload for a successful factorization.
#[derive(Serialize)]
struct FactorReport<'a> {
    word: &'a str,
    criterion: &'static str,
    factors: &'a [Factor],
    transforms: Vec<AffineMap>,
}

pub fn cmd_factor(args: &[String]) {
    let mut word: Option<&str> = None;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            other if word.is_none() && !other.starts_with('-') => word = Some(other),
            other => {
                eprintln!("factor: unexpected argument '{}'", other);
                std::process::exit(1);
            }
        }
    }

    let word = word.unwrap_or_else(|| {
        eprintln!("Usage: polytile factor <word> [--json]");
        std::process::exit(1);
    });

    let solution = match analyze_or_exit(word) {
        Some(s) => s,
        None => {
            if json {
                println!("{{\"word\":{:?},\"criterion\":null}}", word);
            } else {
                println!("no isohedral tiling: none of the seven criteria match");
            }
            std::process::exit(EXIT_NO_TILING);
        }
    };

    if json {
        let report = FactorReport {
            word,
            criterion: solution.criterion.name(),
            factors: &solution.factors,
            transforms: solution.affine_maps(),
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    println!("criterion: {}", solution.criterion.name());
    println!("factors:");
    for (i, f) in solution.factors.iter().enumerate() {
        println!("  {}: [{:>3}..{:>3}] {}", i + 1, f.start, f.finish, f.content);
    }
    println!("transforms:");
    for map in solution.affine_maps() {
        match map {
            AffineMap::Translate { vec } => {
                println!("  translate ({}, {})", vec.x, vec.y);
            }
            AffineMap::Rotate { angle, pivot_vertex_index, then_translate } => {
                println!(
                    "  rotate {:>4} about vertex {} then translate ({}, {})",
                    angle, pivot_vertex_index, then_translate.x, then_translate.y
                );
            }
            AffineMap::Mirror { angle, pivot_vertex_index, then_translate } => {
                println!(
                    "  mirror {:>4} through vertex {} then translate ({}, {})",
                    angle, pivot_vertex_index, then_translate.x, then_translate.y
                );
            }
        }
    }
}
