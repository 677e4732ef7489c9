use thiserror::Error;

use crate::algorithms::{Algorithm, SearchConfig, SearchResult};
use crate::maze::{Grid, Position};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    #[error("no algorithm found a path, nothing to rank")]
    NoEligibleResult,

    #[error("{0} found a path while ranking but not when re-run")]
    Irreproducible(Algorithm),
}

/// Weights of the three normalized metrics in the combined score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub path: f64,
    pub steps: f64,
    pub explored: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            path: 0.5,
            steps: 0.2,
            explored: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub algorithm: Algorithm,
    pub path_len: usize,
    pub steps: usize,
    pub explored: usize,
    /// Lower is better.
    pub score: f64,
}

impl ScoredResult {
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }
}

/// Ranked metrics plus a freshly computed path for the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub ranked: Vec<ScoredResult>,
    pub best_path: Vec<Position>,
}

impl Comparison {
    pub fn best(&self) -> &ScoredResult {
        // rank never returns an empty list
        &self.ranked[0]
    }
}

fn normalize(value: usize, max: usize) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 / max as f64
    }
}

/// Scores every result that found a path and sorts ascending by score.
///
/// Each metric is divided by its maximum over the eligible results only, so
/// results without a path do not shift the baseline. Equal scores keep their
/// input order.
pub fn rank<I>(results: I, weights: &Weights) -> Result<Vec<ScoredResult>, RankingError>
where
    I: IntoIterator<Item = (Algorithm, SearchResult)>,
{
    let eligible: Vec<(Algorithm, SearchResult)> = results
        .into_iter()
        .filter(|(algorithm, result)| {
            if !result.found() {
                log::debug!("{} found no path, excluded from ranking", algorithm.name());
            }
            result.found()
        })
        .collect();

    if eligible.is_empty() {
        return Err(RankingError::NoEligibleResult);
    }

    let max_path = eligible.iter().map(|(_, r)| r.path_len()).max().unwrap_or(0);
    let max_steps = eligible.iter().map(|(_, r)| r.steps).max().unwrap_or(0);
    let max_explored = eligible.iter().map(|(_, r)| r.explored).max().unwrap_or(0);

    let mut scored: Vec<ScoredResult> = eligible
        .into_iter()
        .map(|(algorithm, result)| {
            let path_len = result.path_len();
            let score = weights.path * normalize(path_len, max_path)
                + weights.steps * normalize(result.steps, max_steps)
                + weights.explored * normalize(result.explored, max_explored);

            ScoredResult {
                algorithm,
                path_len,
                steps: result.steps,
                explored: result.explored,
                score,
            }
        })
        .collect();

    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    Ok(scored)
}

/// Runs every algorithm, ranks them, then re-runs the winner for its path.
pub fn compare(
    grid: &Grid,
    config: &SearchConfig,
    weights: &Weights,
) -> Result<Comparison, RankingError> {
    let results = Algorithm::all().map(|algorithm| (algorithm, algorithm.search(grid, config)));
    let ranked = rank(results, weights)?;

    let winner = ranked[0].algorithm;
    log::debug!("best algorithm: {}", winner.name());

    let best_path = winner
        .search(grid, config)
        .path
        .ok_or(RankingError::Irreproducible(winner))?;

    Ok(Comparison { ranked, best_path })
}
