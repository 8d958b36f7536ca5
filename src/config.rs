use crate::grid::Position;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum Algorithm {
    Gbfs,
    AStar,
    /// Run every engine on the same maze and compare them
    All,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

impl Verbosity {
    /// Log filter for this verbosity. `directives` in `RUST_LOG` syntax take
    /// over from the verbosity level when present.
    pub fn log_filter(self, directives: Option<&str>) -> EnvFilter {
        let level: tracing::Level = self.into();
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .parse_lossy(directives.unwrap_or_default())
    }
}

/// Search a grid maze with greedy best-first search and A*.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Maze file, one row per line ('*' wall, '.' or ' ' free, 'A' agent).
    /// The built-in maze is used when omitted.
    #[arg(long)]
    pub maze: Option<PathBuf>,

    /// Goal cell as ROW,COL. Defaults to the built-in maze's goal, or the
    /// generated goal with --random.
    #[arg(long)]
    pub goal: Option<Position>,

    #[arg(long, value_enum, default_value_t = Algorithm::All)]
    pub algorithm: Algorithm,

    /// Generate a random square maze instead of loading one
    #[arg(long, default_value_t = false, conflicts_with = "maze")]
    pub random: bool,

    #[arg(long, default_value_t = 20)]
    pub grid_size: usize,

    #[arg(long, default_value_t = 80)]
    pub num_walls: usize,

    /// Seed for --random; entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every move from start to goal
    #[arg(long, default_value_t = false)]
    pub show_path: bool,

    /// Only print the result lines
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    #[arg(long, value_enum, default_value_t = Verbosity::Normal)]
    pub verbosity: Verbosity,

    /// Coloured log output
    #[arg(long, default_value_t = false)]
    pub colour: bool,
}

impl Config {
    /// Log filter from `--verbosity`, refined by `RUST_LOG` when it is set.
    pub fn log_filter(&self) -> EnvFilter {
        let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        self.verbosity.log_filter(directives.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_built_in_maze() {
        let config = Config::parse_from(["maze-search"]);
        assert_eq!(config.maze, None);
        assert_eq!(config.goal, None);
        assert_eq!(config.algorithm, Algorithm::All);
        assert!(!config.random);
        assert_eq!(config.verbosity, Verbosity::Normal);
    }

    #[test]
    fn parses_goal_and_algorithm() {
        let config = Config::parse_from([
            "maze-search",
            "--goal",
            "3,4",
            "--algorithm",
            "a-star",
            "--show-path",
        ]);
        assert_eq!(config.goal, Some(Position::new(3, 4)));
        assert_eq!(config.algorithm, Algorithm::AStar);
        assert!(config.show_path);
    }

    #[test]
    fn random_conflicts_with_maze_file() {
        let result = Config::try_parse_from(["maze-search", "--random", "--maze", "m.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_sets_default_log_level() {
        let filter = Verbosity::Normal.log_filter(None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        let filter = Verbosity::Debug.log_filter(Some(""));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn log_directives_override_verbosity() {
        let filter = Verbosity::Silent.log_filter(Some("maze_search=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn parses_colour_flag() {
        assert!(!Config::parse_from(["maze-search"]).colour);
        assert!(Config::parse_from(["maze-search", "--colour"]).colour);
    }

    #[test]
    fn rejects_malformed_goal() {
        assert!(Config::try_parse_from(["maze-search", "--goal", "12"]).is_err());
    }
}
