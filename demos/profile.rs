//! Batch profiling over seeded random mazes.
//!
//! Run: cargo run --release --bin profile -- [runs] [seed]
//!
//! Prints one summary line per maze size, obstacle density and heuristic.

use gridstar_demos::{DemoError, ProfileCase, init_logging, profile};
use gridstar_paths::HeuristicKind;

const SIZES: [usize; 3] = [10, 25, 50];
const DENSITIES: [f64; 4] = [0.1, 0.2, 0.3, 0.4];
const HEURISTICS: [HeuristicKind; 2] = [HeuristicKind::Octile, HeuristicKind::Euclidean];

fn run() -> Result<(), DemoError> {
    init_logging()?;
    let mut args = std::env::args().skip(1);
    let runs = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    log::info!("profiling {runs} runs per case, seed {seed}");

    println!(
        "{:>5} {:>7} {:>9} {:>8} {:>10} {:>9} {:>9} {:>11}",
        "size", "density", "heuristic", "solved", "expansions", "frontier", "cost", "mean time"
    );
    for size in SIZES {
        for density in DENSITIES {
            for heuristic in HEURISTICS {
                let case = ProfileCase {
                    size,
                    density,
                    heuristic,
                    runs,
                };
                // Both heuristics see the same mazes.
                let s = profile(case, seed)?;
                let cost = s.mean_cost.map_or_else(|| "-".to_string(), |c| format!("{c:.2}"));
                println!(
                    "{:>5} {:>7.2} {:>9} {:>7.1}% {:>10.1} {:>9.1} {:>9} {:>11?}",
                    size,
                    density,
                    heuristic,
                    s.success_rate() * 100.0,
                    s.mean_expansions,
                    s.mean_peak_frontier,
                    cost,
                    s.mean_elapsed
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let result = run();
    log::logger().flush();
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
