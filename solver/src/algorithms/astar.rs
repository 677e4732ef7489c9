use crate::maze::Grid;

use super::best_first::best_first;
use super::traits::{SearchAlgorithm, SearchResult};

/// A* with the Manhattan distance heuristic.
pub struct AStar;

impl SearchAlgorithm for AStar {
    fn search(&self, grid: &Grid) -> SearchResult {
        let goal = grid.goal();
        best_first(grid, |cost, position| cost + position.manhattan_distance(goal))
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
