use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use pathfinding_sim::algorithms::{Algorithm, DEFAULT_DEPTH_CEILING};

#[derive(Parser, Debug)]
#[command(name = "pathfinding-sim")]
#[command(about = "Compare classical search strategies on a grid maze")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Maze file to load ('#' wall, '.' open, 'S' start, 'G' goal).
    /// Uses the built-in reference maze when omitted
    #[arg(short, long, value_name = "FILE")]
    pub maze: Option<PathBuf>,

    /// Exclusive upper bound on the IDDFS depth limit
    #[arg(long, value_name = "DEPTH", default_value_t = DEFAULT_DEPTH_CEILING)]
    pub max_depth: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single algorithm and draw its path
    Run {
        /// bfs, dfs, greedy, dijkstra, astar or iddfs
        algorithm: Algorithm,
    },

    /// Run every algorithm, rank them and draw the best path
    Compare,

    /// Pick by menu number: 1-6 a single algorithm, 7 compare all
    Menu {
        /// Unknown choices fall back to BFS
        choice: String,
    },
}

/// What a menu choice resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(Algorithm),
    CompareAll,
}

impl Selection {
    pub fn from_menu(choice: &str) -> Self {
        match choice.trim().parse::<u8>() {
            Ok(7) => Self::CompareAll,
            Ok(n) => Self::Single(Algorithm::from_menu_choice(n).unwrap_or(Algorithm::Bfs)),
            Err(_) => Self::Single(Algorithm::Bfs),
        }
    }
}
