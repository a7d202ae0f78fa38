//! polytile - isohedral tiling checks for polyominoes
//!
//! Usage:
//!   polytile factor <word> [--json]          Factor a boundary word
//!   polytile tile <word> [options]           Generate a tiling patch
//!   polytile criteria                        List the boundary criteria
//!   polytile harness [--json]                Run the built-in word suite

mod cli;

use std::env;

use polytile::Criterion;

use cli::{cmd_factor, cmd_harness, cmd_tile};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "factor" => cmd_factor(&args[2..]),
        "tile" => cmd_tile(&args[2..]),
        "criteria" => cmd_criteria(),
        "harness" => cmd_harness(&args[2..]),
        "help" | "--help" | "-h" => print_usage(&args[0]),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("polytile - decide whether a polyomino tiles the plane isohedrally");
    eprintln!();
    eprintln!("The input is the clockwise boundary word of a polyomino over the");
    eprintln!("letters r, u, l, d (y-axis pointing down), e.g. 'urdl' for the");
    eprintln!("unit square.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} factor <word> [--json]", prog);
    eprintln!("  {} tile <word> [-W <n>] [-H <n>] [--depth <k>] [--json]", prog);
    eprintln!("  {} criteria", prog);
    eprintln!("  {} harness [--json]", prog);
    eprintln!();
    eprintln!("Factor output:");
    eprintln!("  The first matching criterion, its factor list, and the affine");
    eprintln!("  maps that carry the tile onto each neighbor.");
    eprintln!();
    eprintln!("Tile options:");
    eprintln!("  -W, --width <n>    Window width in lattice units (default 16)");
    eprintln!("  -H, --height <n>   Window height in lattice units (default 16)");
    eprintln!("  --depth <k>        Expand to BFS depth k instead of a window");
    eprintln!();
    eprintln!("Exit status: 0 on success, 2 when no criterion matches,");
    eprintln!("1 on malformed input.");
}

fn cmd_criteria() {
    println!("Boundary criteria, in detection order:");
    for c in Criterion::all() {
        println!("  {:28} {}", c.name(), c.shape());
    }
}
