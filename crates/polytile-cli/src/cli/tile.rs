//! Tile command: expand a recognized boundary into a patch of its tiling.

use serde::Serialize;

use polytile::Polygon;

use super::{analyze_or_exit, EXIT_NO_TILING};

#[derive(Serialize)]
struct TileReport<'a> {
    word: &'a str,
    criterion: &'static str,
    count: usize,
    polygons: &'a [Polygon],
}

pub fn cmd_tile(args: &[String]) {
    let mut word: Option<&str> = None;
    let mut width: i64 = 16;
    let mut height: i64 = 16;
    let mut depth: Option<usize> = None;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-W" | "--width" => {
                i += 1;
                width = parse_number(args.get(i), "--width");
            }
            "-H" | "--height" => {
                i += 1;
                height = parse_number(args.get(i), "--height");
            }
            "--depth" => {
                i += 1;
                depth = Some(parse_number(args.get(i), "--depth") as usize);
            }
            "--json" => json = true,
            other if word.is_none() && !other.starts_with('-') => word = Some(other),
            other => {
                eprintln!("tile: unexpected argument '{}'", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let word = word.unwrap_or_else(|| {
        eprintln!("Usage: polytile tile <word> [-W <n>] [-H <n>] [--depth <k>] [--json]");
        std::process::exit(1);
    });

    let solution = match analyze_or_exit(word) {
        Some(s) => s,
        None => {
            eprintln!("no isohedral tiling: none of the seven criteria match");
            std::process::exit(EXIT_NO_TILING);
        }
    };

    let polygons = match depth {
        Some(k) => solution.tiling_to_depth(k),
        None => solution.tiling((width, height)),
    };

    if json {
        let report = TileReport {
            word,
            criterion: solution.criterion.name(),
            count: polygons.len(),
            polygons: &polygons,
        };
        println!("{}", serde_json::to_string(&report).unwrap());
        return;
    }

    eprintln!(
        "{}: {} copies via {}",
        word,
        polygons.len(),
        solution.criterion.name()
    );
    for poly in &polygons {
        let line: Vec<String> = poly
            .points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect();
        println!("{}", line.join(" "));
    }
}

fn parse_number(arg: Option<&String>, flag: &str) -> i64 {
    match arg.and_then(|s| s.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("tile: {} needs a numeric argument", flag);
            std::process::exit(1);
        }
    }
}
