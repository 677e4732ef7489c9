use std::path::Path;

use super::{
    cell::{Cell, Marker},
    direction::Direction,
    error::GridError,
    position::Position,
};

/// The 12x24 maze shipped with the simulator.
pub const REFERENCE_MAZE: &str = "\
########################
#........#.............#
#.S......#.......#####.#
#........#.......#...#.#
#........#...#####..G#.#
#........#...##..#...#.#
#.########...#...#...#.#
#........#...#.#.#...#.#
#........#...###.#...#.#
#.###............#...#.#
#...#.####.......#.....#
########################";

/// Immutable rectangular maze with exactly one start and one goal.
///
/// Every query is read-only, so a single grid can be handed to any number of
/// searches by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Builds a grid from an explicit row-major matrix.
    pub fn from_cells(
        rows: Vec<Vec<Cell>>,
        start: Position,
        goal: Position,
    ) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        let grid = Self {
            cells,
            width,
            height,
            start,
            goal,
        };
        grid.validate_endpoint("start", start)?;
        grid.validate_endpoint("goal", goal)?;
        if start == goal {
            return Err(GridError::StartIsGoal(start));
        }

        Ok(grid)
    }

    /// Parses a character maze: `#` wall, `.` or space open, `S` start,
    /// `G` goal, one row per line.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        let mut start: Option<Position> = None;
        let mut goal: Option<Position> = None;

        let lines: Vec<&str> = input
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let used = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(0, |last| last + 1);

        for (row, line) in lines[..used].iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                let position = Position::new(row, col);
                let marker = Marker::from_char(c)
                    .ok_or(GridError::UnknownMarker { marker: c, position })?;

                match marker {
                    Marker::Start => match start {
                        Some(first) => {
                            return Err(GridError::DuplicateStart {
                                first,
                                second: position,
                            });
                        }
                        None => start = Some(position),
                    },
                    Marker::Goal => match goal {
                        Some(first) => {
                            return Err(GridError::DuplicateGoal {
                                first,
                                second: position,
                            });
                        }
                        None => goal = Some(position),
                    },
                    Marker::Cell(_) => {}
                }

                cells.push(marker.cell());
            }
            rows.push(cells);
        }

        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;

        Self::from_cells(rows, start, goal)
    }

    /// Reads and parses a maze file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let grid = Self::parse(&contents)?;
        log::debug!(
            "loaded {}x{} maze from {}",
            grid.height,
            grid.width,
            path.display()
        );
        Ok(grid)
    }

    pub fn reference() -> Self {
        Self::parse(REFERENCE_MAZE).expect("reference maze is well formed")
    }

    fn validate_endpoint(&self, what: &'static str, position: Position) -> Result<(), GridError> {
        match self.cell(position) {
            None => Err(GridError::OutOfBounds {
                what,
                position,
                rows: self.height,
                cols: self.width,
            }),
            Some(Cell::Wall) => Err(GridError::Blocked { what, position }),
            Some(Cell::Open) => Ok(()),
        }
    }

    pub fn rows(&self) -> usize {
        self.height
    }

    pub fn cols(&self) -> usize {
        self.width
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.cells[pos.to_index(self.width)])
        } else {
            None
        }
    }

    /// False for walls and for anything outside the grid.
    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_walkable)
    }

    /// Walkable orthogonal neighbours of `pos`, yielded in `order`.
    pub fn neighbors(&self, pos: Position, order: &[Direction]) -> Vec<Position> {
        order
            .iter()
            .filter_map(|&dir| pos.move_in_direction(dir, self.bounds()))
            .filter(|&p| self.is_open(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::direction::{DOWN_UP_RIGHT_LEFT, UP_DOWN_LEFT_RIGHT};

    #[test]
    fn reference_maze_dimensions() {
        let grid = Grid::reference();
        assert_eq!(grid.bounds(), (12, 24));
        assert_eq!(grid.start(), Position::new(2, 2));
        assert_eq!(grid.goal(), Position::new(4, 20));
        assert!(grid.is_open(grid.start()));
        assert!(grid.is_open(grid.goal()));
    }

    #[test]
    fn is_open_rejects_walls_and_out_of_bounds() {
        let grid = Grid::parse("S#\n.G").unwrap();
        assert!(!grid.is_open(Position::new(0, 1)));
        assert!(!grid.is_open(Position::new(2, 0)));
        assert!(!grid.is_open(Position::new(0, 2)));
        assert!(grid.is_open(Position::new(1, 0)));
    }

    #[test]
    fn neighbors_follow_requested_order() {
        let grid = Grid::parse("...\n.S.\n..G").unwrap();
        let center = Position::new(1, 1);

        let udlr = grid.neighbors(center, &UP_DOWN_LEFT_RIGHT);
        assert_eq!(
            udlr,
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );

        let durl = grid.neighbors(center, &DOWN_UP_RIGHT_LEFT);
        assert_eq!(
            durl,
            vec![
                Position::new(2, 1),
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls() {
        let grid = Grid::parse("#.#\n.S#\n#G#").unwrap();
        let around = grid.neighbors(Position::new(1, 1), &UP_DOWN_LEFT_RIGHT);
        assert_eq!(
            around,
            vec![Position::new(0, 1), Position::new(2, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn parse_rejects_missing_markers() {
        assert!(matches!(Grid::parse("..G"), Err(GridError::MissingStart)));
        assert!(matches!(Grid::parse("S.."), Err(GridError::MissingGoal)));
        assert!(matches!(Grid::parse(""), Err(GridError::Empty)));
    }

    #[test]
    fn parse_rejects_duplicate_markers() {
        assert!(matches!(
            Grid::parse("S.S\n..G"),
            Err(GridError::DuplicateStart { first, second })
                if first == Position::new(0, 0) && second == Position::new(0, 2)
        ));
        assert!(matches!(
            Grid::parse("S.G\nG.."),
            Err(GridError::DuplicateGoal { .. })
        ));
    }

    #[test]
    fn parse_rejects_ragged_rows_and_unknown_markers() {
        assert!(matches!(
            Grid::parse("S..\n.G"),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            Grid::parse("S.x\n..G"),
            Err(GridError::UnknownMarker { marker: 'x', .. })
        ));
    }

    #[test]
    fn parse_tolerates_crlf_and_trailing_blank_lines() {
        let grid = Grid::parse("S.\r\n.G\r\n\n").unwrap();
        assert_eq!(grid.bounds(), (2, 2));
    }

    #[test]
    fn from_cells_validates_endpoints() {
        let open = || vec![vec![Cell::Open; 3]; 2];

        assert!(matches!(
            Grid::from_cells(open(), Position::new(0, 0), Position::new(5, 0)),
            Err(GridError::OutOfBounds { what: "goal", .. })
        ));
        assert!(matches!(
            Grid::from_cells(open(), Position::new(1, 1), Position::new(1, 1)),
            Err(GridError::StartIsGoal(_))
        ));

        let mut walled = open();
        walled[0][0] = Cell::Wall;
        assert!(matches!(
            Grid::from_cells(walled, Position::new(0, 0), Position::new(1, 2)),
            Err(GridError::Blocked { what: "start", .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Grid::load("/definitely/not/a/maze.txt").unwrap_err();
        assert!(matches!(err, GridError::Io { .. }));
    }
}
