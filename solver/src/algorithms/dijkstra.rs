use crate::maze::Grid;

use super::best_first::best_first;
use super::traits::{SearchAlgorithm, SearchResult};

pub struct Dijkstra;

impl SearchAlgorithm for Dijkstra {
    fn search(&self, grid: &Grid) -> SearchResult {
        best_first(grid, |cost, _| cost)
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
