use std::path::PathBuf;

use thiserror::Error;

use super::position::Position;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("maze has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown marker {marker:?} at {position}")]
    UnknownMarker { marker: char, position: Position },

    #[error("maze has no start marker")]
    MissingStart,

    #[error("maze has no goal marker")]
    MissingGoal,

    #[error("duplicate start marker at {second} (first at {first})")]
    DuplicateStart { first: Position, second: Position },

    #[error("duplicate goal marker at {second} (first at {first})")]
    DuplicateGoal { first: Position, second: Position },

    #[error("{what} {position} lies outside the {rows}x{cols} maze")]
    OutOfBounds {
        what: &'static str,
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("{what} {position} is a wall")]
    Blocked {
        what: &'static str,
        position: Position,
    },

    #[error("start and goal are the same cell {0}")]
    StartIsGoal(Position),

    #[error("failed to read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
