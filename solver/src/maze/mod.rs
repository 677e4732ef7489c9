mod cell;
mod direction;
mod error;
mod grid;
mod position;

pub use cell::{Cell, Marker};
pub use direction::{DOWN_UP_RIGHT_LEFT, Direction, UP_DOWN_LEFT_RIGHT};
pub use error::GridError;
pub use grid::{Grid, REFERENCE_MAZE};
pub use position::Position;
