//! Step-by-step A* trace over a maze.
//!
//! Run: cargo run --bin maze -- [settings.toml] [--trace]
//!
//! Without a settings file the built-in 10×10 maze is used. `--trace` prints
//! the grid after every expansion instead of only at the end.

use std::path::PathBuf;

use gridstar_demos::{DemoError, init_logging, load_settings, render};
use gridstar_paths::SearchStep;

fn run() -> Result<(), DemoError> {
    init_logging()?;
    let mut trace = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--trace" => trace = true,
            _ => path = Some(PathBuf::from(arg)),
        }
    }

    let problem = load_settings(path.as_deref())?.build()?;
    let (rows, cols) = problem.grid.dimensions();
    log::info!(
        "{rows}x{cols} maze, {} -> {}, {} heuristic, diagonal step {:.3}",
        problem.start,
        problem.goal,
        problem.config.heuristic,
        problem.config.diagonal_cost()
    );

    let mut search = problem.search()?;
    let mut found = None;
    while let Some(step) = search.next() {
        match step {
            SearchStep::Expanded(e) => {
                log::debug!("expanded {} g={:.3} h={:.3} f={:.3}", e.cell, e.g, e.h, e.f);
                if trace {
                    println!("step {}: {}\n{}", search.expansions(), e.cell, render(&search, None));
                }
            }
            SearchStep::Success(p) => found = Some(p),
            SearchStep::Failure(e) => log::warn!("{e}"),
        }
    }

    print!("{}", render(&search, found.as_ref()));
    match &found {
        Some(p) => println!(
            "path: {p}\ncost {:.3}, {} cells, {} expansions, peak frontier {}",
            p.cost(),
            p.len(),
            search.expansions(),
            search.peak_frontier()
        ),
        None => println!("no path after {} expansions", search.expansions()),
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
