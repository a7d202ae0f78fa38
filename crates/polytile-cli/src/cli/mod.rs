//! CLI command implementations.
//!
//! Human-readable diagnostics go to stderr; machine output (tables, JSON)
//! goes to stdout so the commands compose in pipelines.

mod factor;
mod harness;
mod tile;

pub use factor::cmd_factor;
pub use harness::cmd_harness;
pub use tile::cmd_tile;

use polytile::{BoundaryError, TilingSolution};

/// Exit status when a well-formed boundary admits no isohedral tiling.
pub const EXIT_NO_TILING: i32 = 2;

/// Run the engine on a word argument, exiting with a diagnostic on
/// malformed input.
pub fn analyze_or_exit(word: &str) -> Option<TilingSolution> {
    match polytile::analyze(word) {
        Ok(solution) => solution,
        Err(err) => {
            report_boundary_error(word, &err);
            std::process::exit(1);
        }
    }
}

fn report_boundary_error(word: &str, err: &BoundaryError) {
    eprintln!("error: '{}' is not a polyomino boundary: {}", word, err);
}
