mod cli;
mod logging;
mod render;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::{debug, error, info};

use cli::{Args, Command, Selection};
use logging::Logger;
use pathfinding_sim::{
    algorithms::{Algorithm, SearchConfig},
    maze::Grid,
    ranking::{self, RankingError, Weights},
};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let grid = match args.maze {
        Some(ref path) => {
            info!("loading maze: {}", path.display());
            Grid::load(path)?
        }
        None => {
            debug!("using built-in reference maze");
            Grid::reference()
        }
    };
    debug!(
        "{}x{} maze: {} -> {}",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.goal()
    );

    let config = SearchConfig {
        depth_ceiling: args.max_depth,
    };

    let selection = match args.command {
        Command::Run { algorithm } => Selection::Single(algorithm),
        Command::Compare => Selection::CompareAll,
        Command::Menu { ref choice } => Selection::from_menu(choice),
    };

    match selection {
        Selection::Single(algorithm) => run_single(&grid, algorithm, &config),
        Selection::CompareAll => run_comparison(&grid, &config)?,
    }

    Ok(())
}

fn run_single(grid: &Grid, algorithm: Algorithm, config: &SearchConfig) {
    info!("running {}", algorithm.name());

    let started = Instant::now();
    let result = algorithm.search(grid, config);
    let elapsed = started.elapsed();

    match result.path {
        Some(ref path) => {
            info!(
                "found path: length={}, steps={}, explored={}",
                path.len(),
                result.steps,
                result.explored
            );
            println!("{}", render::path_overlay(grid, path));
        }
        None => {
            error!(
                "no path found (steps={}, explored={})",
                result.steps, result.explored
            );
            println!("{}", "Error: No path found.".red());
        }
    }

    info!("time taken: {:?}", elapsed);
}

fn run_comparison(grid: &Grid, config: &SearchConfig) -> Result<()> {
    info!("comparing all algorithms");

    let comparison = match ranking::compare(grid, config, &Weights::default()) {
        Ok(comparison) => comparison,
        Err(RankingError::NoEligibleResult) => {
            error!("no algorithm reached the goal");
            println!("{}", "Error: No path found by any algorithm.".red());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{}",
        "\n--- ranked results (weighted score, lower is better) ---\n".cyan()
    );
    println!(
        "{:<20} {:>6} {:>8} {:>10} {:>8}",
        "algorithm", "path", "steps", "explored", "score"
    );
    println!("{:-<56}", "");
    for entry in &comparison.ranked {
        println!(
            "{:<20} {:>6} {:>8} {:>10} {:>8.3}",
            entry.name(),
            entry.path_len,
            entry.steps,
            entry.explored,
            entry.score
        );
    }

    let best = comparison.best();
    println!(
        "{}",
        format!("\nbest performing algorithm: {}\n", best.name()).yellow()
    );
    println!("{}", render::path_overlay(grid, &comparison.best_path));

    Ok(())
}
