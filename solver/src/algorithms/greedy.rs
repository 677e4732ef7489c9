use crate::maze::Grid;

use super::best_first::best_first;
use super::traits::{SearchAlgorithm, SearchResult};

/// Greedy best-first search: always expands the cell that looks closest to
/// the goal, ignoring the distance already travelled.
pub struct Greedy;

impl SearchAlgorithm for Greedy {
    fn search(&self, grid: &Grid) -> SearchResult {
        let goal = grid.goal();
        best_first(grid, |_, position| position.manhattan_distance(goal))
    }

    fn name(&self) -> &'static str {
        "Greedy Best-First"
    }
}
