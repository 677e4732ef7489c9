use std::collections::{HashSet, VecDeque};

use crate::maze::{Grid, Position, UP_DOWN_LEFT_RIGHT};

use super::frontier::PathArena;
use super::traits::{SearchAlgorithm, SearchResult};

#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl SearchAlgorithm for BFS {
    fn search(&self, grid: &Grid) -> SearchResult {
        let start = grid.start();
        let goal = grid.goal();

        let mut arena = PathArena::default();
        let mut queue = VecDeque::from([arena.root(start)]);
        // marked on enqueue; the start is not pre-marked and is only added
        // once a neighbour rediscovers it
        let mut visited: HashSet<Position> = HashSet::new();
        let mut steps = 0;

        while let Some(id) = queue.pop_front() {
            steps += 1;
            let current = arena.position(id);

            if current == goal {
                return SearchResult::reached(arena.path_to(id), steps, visited.len());
            }

            for neighbor in grid.neighbors(current, &UP_DOWN_LEFT_RIGHT) {
                if visited.insert(neighbor) {
                    queue.push_back(arena.push(neighbor, id));
                }
            }
        }

        SearchResult::exhausted(steps, visited.len())
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
