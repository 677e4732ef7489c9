use std::collections::HashMap;

use crate::maze::{Grid, Position, UP_DOWN_LEFT_RIGHT};

use super::traits::{SearchAlgorithm, SearchResult};

/// Depth limits `1..DEFAULT_DEPTH_CEILING` are tried before giving up.
pub const DEFAULT_DEPTH_CEILING: usize = 1000;

/// Iterative deepening depth-first search.
///
/// Each iteration is a depth-limited DFS run from scratch on an explicit
/// frame stack, so the native call stack never grows with the depth limit.
/// The visited structure maps each cell to the largest remaining depth it was
/// expanded with; a cell is entered again only with strictly more budget,
/// which keeps the first successful limit equal to the shortest distance.
#[allow(clippy::upper_case_acronyms)]
pub struct IDDFS {
    ceiling: usize,
}

struct Frame {
    position: Position,
    remaining: usize,
    neighbors: Vec<Position>,
    next: usize,
}

struct Iteration {
    path: Option<Vec<Position>>,
    steps: usize,
    explored: usize,
    /// Some branch was cut off by the limit.
    cutoff: bool,
}

impl IDDFS {
    pub fn new() -> Self {
        Self::with_ceiling(DEFAULT_DEPTH_CEILING)
    }

    pub fn with_ceiling(ceiling: usize) -> Self {
        Self { ceiling }
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    fn depth_limited(grid: &Grid, limit: usize) -> Iteration {
        let start = grid.start();
        let goal = grid.goal();
        let mut steps = 1;

        if start == goal {
            return Iteration {
                path: Some(vec![start]),
                steps,
                explored: 0,
                cutoff: false,
            };
        }

        let mut budget: HashMap<Position, usize> = HashMap::from([(start, limit)]);
        let mut frames = vec![Frame {
            position: start,
            remaining: limit,
            neighbors: grid.neighbors(start, &UP_DOWN_LEFT_RIGHT),
            next: 0,
        }];
        let mut cutoff = false;

        while let Some(frame) = frames.last_mut() {
            let Some(&neighbor) = frame.neighbors.get(frame.next) else {
                frames.pop();
                continue;
            };
            frame.next += 1;
            let remaining = frame.remaining - 1;

            if budget.get(&neighbor).is_some_and(|&seen| seen >= remaining) {
                continue;
            }

            steps += 1;

            if neighbor == goal {
                let mut path: Vec<Position> = frames.iter().map(|f| f.position).collect();
                path.push(neighbor);
                return Iteration {
                    path: Some(path),
                    steps,
                    explored: budget.len(),
                    cutoff,
                };
            }

            if remaining == 0 {
                cutoff = true;
                continue;
            }

            budget.insert(neighbor, remaining);
            frames.push(Frame {
                position: neighbor,
                remaining,
                neighbors: grid.neighbors(neighbor, &UP_DOWN_LEFT_RIGHT),
                next: 0,
            });
        }

        Iteration {
            path: None,
            steps,
            explored: budget.len(),
            cutoff,
        }
    }
}

impl Default for IDDFS {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for IDDFS {
    fn search(&self, grid: &Grid) -> SearchResult {
        let mut last = SearchResult::exhausted(0, 0);

        for limit in 1..self.ceiling {
            let iteration = Self::depth_limited(grid, limit);

            if let Some(path) = iteration.path {
                log::trace!("iddfs reached goal at depth limit {}", limit);
                return SearchResult::reached(path, iteration.steps, iteration.explored);
            }

            last = SearchResult::exhausted(iteration.steps, iteration.explored);

            // nothing was cut off, so every deeper limit would repeat this run
            if !iteration.cutoff {
                log::trace!("iddfs exhausted the reachable region at depth limit {}", limit);
                break;
            }
        }

        last
    }

    fn name(&self) -> &'static str {
        "IDDFS"
    }
}
