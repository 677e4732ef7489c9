#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

/// What a single character of a maze file stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Cell(Cell),
    Start,
    Goal,
}

impl Marker {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Cell(Cell::Wall)),
            '.' | ' ' => Some(Self::Cell(Cell::Open)),
            'S' | 's' => Some(Self::Start),
            'G' | 'g' => Some(Self::Goal),
            _ => None,
        }
    }

    /// Start and goal always sit on open cells.
    pub fn cell(self) -> Cell {
        match self {
            Self::Cell(cell) => cell,
            Self::Start | Self::Goal => Cell::Open,
        }
    }
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Open)
    }
}
