use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::maze::Position;

pub type NodeId = usize;

/// Parent links for every frontier entry ever created.
///
/// Two entries for the same cell get two nodes, so a path always describes
/// the route that produced the entry it was rebuilt from.
#[derive(Debug, Default)]
pub struct PathArena {
    nodes: Vec<(Position, Option<NodeId>)>,
}

impl PathArena {
    pub fn root(&mut self, position: Position) -> NodeId {
        self.nodes.push((position, None));
        self.nodes.len() - 1
    }

    pub fn push(&mut self, position: Position, parent: NodeId) -> NodeId {
        self.nodes.push((position, Some(parent)));
        self.nodes.len() - 1
    }

    pub fn position(&self, id: NodeId) -> Position {
        self.nodes[id].0
    }

    pub fn path_to(&self, id: NodeId) -> Vec<Position> {
        let mut path = Vec::new();
        let mut current = Some(id);

        while let Some(node) = current {
            let (position, parent) = self.nodes[node];
            path.push(position);
            current = parent;
        }

        path.reverse();
        path
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Entry {
    pub priority: usize,
    pub cost: usize,
    pub node: NodeId,
    seq: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys so the lowest
        // priority, then the earliest discovery, pops first
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with ties broken by discovery order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    next_seq: usize,
}

impl PriorityFrontier {
    pub fn push(&mut self, priority: usize, cost: usize, node: NodeId) {
        self.heap.push(Entry {
            priority,
            cost,
            node,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_rebuilds_route_of_each_entry() {
        let mut arena = PathArena::default();
        let root = arena.root(Position::new(0, 0));
        let a = arena.push(Position::new(0, 1), root);
        let b = arena.push(Position::new(1, 0), root);
        let joined_via_a = arena.push(Position::new(1, 1), a);
        let joined_via_b = arena.push(Position::new(1, 1), b);

        assert_eq!(arena.path_to(root), vec![Position::new(0, 0)]);
        assert_eq!(
            arena.path_to(joined_via_a),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
        assert_eq!(
            arena.path_to(joined_via_b),
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn frontier_pops_lowest_priority_first() {
        let mut frontier = PriorityFrontier::default();
        frontier.push(5, 0, 0);
        frontier.push(1, 0, 1);
        frontier.push(3, 0, 2);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn frontier_breaks_ties_by_discovery_order() {
        let mut frontier = PriorityFrontier::default();
        for node in [7, 3, 9, 1] {
            frontier.push(2, 0, node);
        }
        frontier.push(1, 0, 42);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![42, 7, 3, 9, 1]);
    }
}
