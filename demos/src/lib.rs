//! Shared pieces of the gridstar demos: logging setup, settings loading,
//! an ASCII renderer for search progress and the batch profiler.
//!
//! Demonstrates: TOML settings, step-by-step observation of a [`Search`],
//! seeded random mazes and [`BatchSummary`] reporting.

use std::path::Path as FsPath;

use gridstar_core::{Cell, MapGen};
use gridstar_paths::{
    BatchSummary, Heuristic, HeuristicKind, MazeSource, Path, Search, SearchConfig, SearchError,
    Settings,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Environment variable holding the log level (`error` .. `trace`).
pub const LOG_ENV: &str = "GRIDSTAR_LOG";

/// Environment variable naming a log file written next to the console.
pub const LOG_FILE_ENV: &str = "GRIDSTAR_LOG_FILE";

const DEFAULT_MAZE: [[u8; 10]; 10] = [
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 1, 0],
    [0, 1, 0, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 0, 1, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 1, 0, 0],
];

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("logger: {0}")]
    Logger(String),
    #[error("reading settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Search(#[from] SearchError),
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Where and how much the demos log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: log::LevelFilter,
    /// Optional file sink in addition to the console.
    pub file: Option<String>,
}

impl LogSettings {
    /// Level defaults to `info` when unset or unparsable; an empty file name
    /// means no file.
    pub fn from_values(level: Option<&str>, file: Option<&str>) -> Self {
        Self {
            level: level
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(log::LevelFilter::Info),
            file: file
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        }
    }

    /// Read [`LOG_ENV`] and [`LOG_FILE_ENV`].
    pub fn from_env() -> Self {
        let level = std::env::var(LOG_ENV).ok();
        let file = std::env::var(LOG_FILE_ENV).ok();
        Self::from_values(level.as_deref(), file.as_deref())
    }

    fn config(&self) -> fast_log::config::Config {
        let mut config = fast_log::config::Config::new().console().level(self.level);
        if let Some(path) = &self.file {
            config = config.file(path);
        }
        config
    }
}

/// Install a `fast_log` logger configured from the environment.
pub fn init_logging() -> Result<(), DemoError> {
    let settings = LogSettings::from_env();
    fast_log::init(settings.config()).map_err(|e| DemoError::Logger(e.to_string()))?;
    if let Some(path) = &settings.file {
        log::info!("logging to {path}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The built-in 10×10 maze from (0, 0) to (9, 9) with the octile heuristic.
pub fn default_settings() -> Settings {
    Settings {
        maze: MazeSource::Explicit {
            rows: DEFAULT_MAZE.iter().map(|r| r.to_vec()).collect(),
        },
        start: Cell::new(0, 0),
        goal: Cell::new(9, 9),
        search: SearchConfig::default(),
    }
}

pub fn parse_settings(text: &str) -> Result<Settings, DemoError> {
    Ok(toml::from_str(text)?)
}

/// Load settings from a TOML file, or the built-in default when no path is
/// given.
pub fn load_settings(path: Option<&FsPath>) -> Result<Settings, DemoError> {
    match path {
        Some(path) => {
            log::info!("loading settings from {}", path.display());
            parse_settings(&std::fs::read_to_string(path)?)
        }
        None => {
            log::info!("no settings file given, using the built-in maze");
            Ok(default_settings())
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const EXPANDED: char = 'x';
pub const FRONTIER: char = 'o';
pub const PATH: char = '*';

/// Draw the grid with the current search state on top: expanded cells,
/// frontier cells and, if given, the final path. Endpoints are drawn last.
pub fn render<H: Heuristic>(search: &Search<'_, H>, path: Option<&Path>) -> String {
    let grid = search.grid();
    let mut canvas: Vec<Vec<char>> = vec![Vec::with_capacity(grid.cols()); grid.rows()];
    for (c, occ) in grid.iter() {
        let ch = if search.is_expanded(c) {
            EXPANDED
        } else {
            occ.symbol()
        };
        canvas[c.row as usize].push(ch);
    }
    let mut put = |c: Cell, ch: char| canvas[c.row as usize][c.col as usize] = ch;
    for c in search.frontier() {
        put(c, FRONTIER);
    }
    for &c in path.map(Path::cells).unwrap_or_default() {
        put(c, PATH);
    }
    put(search.start(), START);
    put(search.goal(), GOAL);

    let mut out = String::with_capacity(grid.len() + grid.rows());
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Profiling
// ---------------------------------------------------------------------------

/// One batch of the profiler: square random mazes from the top-left to the
/// bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileCase {
    pub size: usize,
    pub density: f64,
    pub heuristic: HeuristicKind,
    pub runs: usize,
}

/// Run `case.runs` searches over mazes drawn from `seed` and summarise them.
/// Surrounded endpoints are searched rather than rejected, so every run
/// counts.
pub fn profile(case: ProfileCase, seed: u64) -> Result<BatchSummary, DemoError> {
    let mut mapgen = MapGen::new(StdRng::seed_from_u64(seed));
    let start = Cell::ORIGIN;
    let last = case.size.saturating_sub(1) as i32;
    let goal = Cell::new(last, last);
    let config = SearchConfig::default()
        .with_heuristic(case.heuristic)
        .with_reject_surrounded(false);

    let mut reports = Vec::with_capacity(case.runs);
    for _ in 0..case.runs {
        let grid = mapgen
            .random_obstacles_keeping(case.size, case.size, case.density, &[start, goal])
            .map_err(SearchError::from)?;
        reports.push(Search::new(&grid, start, goal, &config)?.run());
    }
    let summary = BatchSummary::from_reports(&reports);
    log::debug!(
        "{}x{} density {:.2} {}: {}/{} solved",
        case.size,
        case.size,
        case.density,
        case.heuristic,
        summary.successes,
        summary.runs
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Grid;
    use gridstar_paths::SearchStep;

    #[test]
    fn log_settings_from_values() {
        let s = LogSettings::from_values(None, None);
        assert_eq!(s.level, log::LevelFilter::Info);
        assert_eq!(s.file, None);

        let s = LogSettings::from_values(Some("debug"), Some("application.log"));
        assert_eq!(s.level, log::LevelFilter::Debug);
        assert_eq!(s.file.as_deref(), Some("application.log"));

        let s = LogSettings::from_values(Some("loud"), Some("  "));
        assert_eq!(s.level, log::LevelFilter::Info);
        assert_eq!(s.file, None);
    }

    #[test]
    fn default_settings_solve() {
        let problem = default_settings().build().unwrap();
        let report = problem.search().unwrap().run();
        assert!(report.is_success());
        let path = report.outcome.unwrap();
        assert!(path.is_valid_on(&problem.grid));
        assert_eq!(path.goal(), Some(Cell::new(9, 9)));
    }

    #[test]
    fn bundled_toml_matches_default() {
        let parsed = parse_settings(include_str!("../settings/default.toml")).unwrap();
        assert_eq!(parsed, default_settings());
    }

    #[test]
    fn toml_random_maze() {
        let text = r#"
            start = { row = 0, col = 0 }
            goal = { row = 7, col = 7 }

            [maze]
            kind = "random"
            rows = 8
            cols = 8
            density = 0.2
            seed = 3

            [search]
            heuristic = "euclidean"
            reject_surrounded = false
        "#;
        let s = parse_settings(text).unwrap();
        assert_eq!(s.search.heuristic, HeuristicKind::Euclidean);
        assert!(!s.search.reject_surrounded);
        assert_eq!(s.build().unwrap().grid.dimensions(), (8, 8));
    }

    #[test]
    fn malformed_toml() {
        assert!(matches!(
            parse_settings("start = 3"),
            Err(DemoError::Toml(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = load_settings(Some(FsPath::new("/nonexistent/gridstar.toml"))).unwrap_err();
        assert!(matches!(err, DemoError::Io(_)));
        assert_eq!(load_settings(None).unwrap(), default_settings());
    }

    #[test]
    fn render_progress_and_path() {
        let grid: Grid = "...\n.#.\n...".parse().unwrap();
        let config = SearchConfig::default();
        let mut search = Search::new(&grid, Cell::new(0, 0), Cell::new(2, 2), &config).unwrap();
        assert_eq!(render(&search, None), "S..\n.#.\n..G\n");

        search.next();
        assert_eq!(render(&search, None), "So.\no#.\n..G\n");

        let mut path = None;
        for step in search.by_ref() {
            if let SearchStep::Success(p) = step {
                path = Some(p);
            }
        }
        let path = path.unwrap();
        let drawn = render(&search, Some(&path));
        assert_eq!(drawn.lines().count(), 3);
        assert_eq!(drawn.matches(PATH).count(), path.len() - 2);
        assert!(drawn.starts_with('S'));
        assert!(drawn.trim_end().ends_with('G'));
    }

    #[test]
    fn profile_is_reproducible() {
        let case = ProfileCase {
            size: 12,
            density: 0.25,
            heuristic: HeuristicKind::Octile,
            runs: 10,
        };
        let a = profile(case, 42).unwrap();
        let b = profile(case, 42).unwrap();
        assert_eq!(a.runs, 10);
        assert_eq!(a.successes, b.successes);
        assert_eq!(a.mean_expansions, b.mean_expansions);
        assert_eq!(a.mean_cost, b.mean_cost);
    }

    #[test]
    fn profile_open_mazes_always_succeed() {
        let case = ProfileCase {
            size: 6,
            density: 0.0,
            heuristic: HeuristicKind::Euclidean,
            runs: 3,
        };
        let s = profile(case, 0).unwrap();
        assert_eq!(s.successes, 3);
        assert_eq!(s.success_rate(), 1.0);
    }
}
