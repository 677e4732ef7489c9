use crate::maze::{Grid, Position};

pub trait SearchAlgorithm {
    fn search(&self, grid: &Grid) -> SearchResult;

    fn name(&self) -> &'static str;
}

/// Outcome of one search run. A missing path is a normal outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Start to goal inclusive.
    pub path: Option<Vec<Position>>,
    /// Frontier pops, including pops that were discarded as already visited.
    pub steps: usize,
    /// Distinct cells in the visited structure when the search stopped.
    pub explored: usize,
}

impl SearchResult {
    pub fn reached(path: Vec<Position>, steps: usize, explored: usize) -> Self {
        Self {
            path: Some(path),
            steps,
            explored,
        }
    }

    pub fn exhausted(steps: usize, explored: usize) -> Self {
        Self {
            path: None,
            steps,
            explored,
        }
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, or 0 when there is none.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}
