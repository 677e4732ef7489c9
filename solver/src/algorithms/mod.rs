mod astar;
mod best_first;
mod bfs;
mod dfs;
mod dijkstra;
mod frontier;
mod greedy;
mod iddfs;
pub mod traits;

use std::str::FromStr;

use thiserror::Error;

use crate::maze::Grid;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use dijkstra::Dijkstra;
pub use greedy::Greedy;
pub use iddfs::{DEFAULT_DEPTH_CEILING, IDDFS};
pub use traits::{SearchAlgorithm, SearchResult};

/// Stable identifier of each strategy, in comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Greedy,
    Dijkstra,
    AStar,
    Iddfs,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm {0:?} (expected bfs, dfs, greedy, dijkstra, astar or iddfs)")]
pub struct UnknownAlgorithm(pub String);

/// Tunables shared by every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Exclusive upper bound on the IDDFS depth limit.
    pub depth_ceiling: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_ceiling: DEFAULT_DEPTH_CEILING,
        }
    }
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::Bfs,
            Self::Dfs,
            Self::Greedy,
            Self::Dijkstra,
            Self::AStar,
            Self::Iddfs,
        ]
        .into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Greedy => "Greedy Best-First",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
            Self::Iddfs => "IDDFS",
        }
    }

    /// Entries 1 to 6 of the interactive menu.
    pub fn from_menu_choice(choice: u8) -> Option<Self> {
        Self::all().nth(usize::from(choice).checked_sub(1)?)
    }

    pub fn search(self, grid: &Grid, config: &SearchConfig) -> SearchResult {
        let result = match self {
            Self::Bfs => BFS.search(grid),
            Self::Dfs => DFS.search(grid),
            Self::Greedy => Greedy.search(grid),
            Self::Dijkstra => Dijkstra.search(grid),
            Self::AStar => AStar.search(grid),
            Self::Iddfs => IDDFS::with_ceiling(config.depth_ceiling).search(grid),
        };

        log::debug!(
            "{}: path={} steps={} explored={}",
            self.name(),
            result.path_len(),
            result.steps,
            result.explored
        );
        result
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "greedy" | "greedy-best-first" => Ok(Self::Greedy),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a-star" | "a*" => Ok(Self::AStar),
            "iddfs" => Ok(Self::Iddfs),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
