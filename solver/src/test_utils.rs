use crate::maze::{Grid, Position};

/// Checks the endpoints, that every step is an orthogonal unit move, and that
/// no wall is crossed.
pub fn assert_valid_path(grid: &Grid, path: &[Position]) {
    assert_eq!(path.first(), Some(&grid.start()), "path must begin at start");
    assert_eq!(path.last(), Some(&grid.goal()), "path must end at goal");

    for &position in path {
        assert!(grid.is_open(position), "path crosses wall at {position}");
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(pair[1]),
            "{} -> {} is not a unit move",
            pair[0],
            pair[1]
        );
    }
}
