use std::collections::HashSet;

use crate::maze::{DOWN_UP_RIGHT_LEFT, Grid, Position};

use super::frontier::PathArena;
use super::traits::{SearchAlgorithm, SearchResult};

#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl SearchAlgorithm for DFS {
    fn search(&self, grid: &Grid) -> SearchResult {
        let start = grid.start();
        let goal = grid.goal();

        let mut arena = PathArena::default();
        let mut stack = vec![arena.root(start)];
        let mut visited: HashSet<Position> = HashSet::new();
        let mut steps = 0;

        while let Some(id) = stack.pop() {
            steps += 1;
            let current = arena.position(id);

            if current == goal {
                return SearchResult::reached(arena.path_to(id), steps, visited.len());
            }

            if !visited.insert(current) {
                continue;
            }

            // pushed unchecked, filtered when popped
            for neighbor in grid.neighbors(current, &DOWN_UP_RIGHT_LEFT) {
                stack.push(arena.push(neighbor, id));
            }
        }

        SearchResult::exhausted(steps, visited.len())
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
