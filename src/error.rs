use crate::grid::Position;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a maze.
///
/// Running out of frontier or starting on the goal are search outcomes, not
/// errors; see [`crate::algorithms::SearchOutcome`].
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze has no rows")]
    EmptyMaze,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell marker {marker:?} at ({row}, {col})")]
    UnknownMarker { marker: char, row: usize, col: usize },

    #[error("maze has no agent cell")]
    MissingAgent,

    #[error("maze has {count} agent cells, expected exactly one")]
    MultipleAgents { count: usize },

    #[error("goal {goal} lies outside the {rows}x{cols} maze")]
    GoalOutOfBounds {
        goal: Position,
        rows: usize,
        cols: usize,
    },

    #[error("invalid position {0:?}, expected \"row,col\"")]
    InvalidPosition(String),

    #[error("failed to read maze file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
