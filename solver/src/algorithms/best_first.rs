use std::collections::HashSet;

use crate::maze::{Grid, Position, UP_DOWN_LEFT_RIGHT};

use super::frontier::{PathArena, PriorityFrontier};
use super::traits::SearchResult;

/// Shared loop of greedy best-first, Dijkstra and A*.
///
/// `priority` receives the accumulated cost of the entry being pushed and its
/// cell. Cells are marked visited when popped, so the frontier may hold
/// duplicates; a duplicate still counts as a step when it is popped and
/// discarded.
pub(crate) fn best_first<F>(grid: &Grid, priority: F) -> SearchResult
where
    F: Fn(usize, Position) -> usize,
{
    let start = grid.start();
    let goal = grid.goal();

    let mut arena = PathArena::default();
    let mut frontier = PriorityFrontier::default();
    let mut visited: HashSet<Position> = HashSet::new();
    let mut steps = 0;

    frontier.push(priority(0, start), 0, arena.root(start));

    while let Some(entry) = frontier.pop() {
        steps += 1;
        let current = arena.position(entry.node);

        if current == goal {
            return SearchResult::reached(arena.path_to(entry.node), steps, visited.len());
        }

        if !visited.insert(current) {
            continue;
        }

        let cost = entry.cost + 1;
        for neighbor in grid.neighbors(current, &UP_DOWN_LEFT_RIGHT) {
            let node = arena.push(neighbor, entry.node);
            frontier.push(priority(cost, neighbor), cost, node);
        }
    }

    SearchResult::exhausted(steps, visited.len())
}
