use assert_approx_eq::assert_approx_eq;

use pathfinding_sim::{
    algorithms::{Algorithm, SearchConfig, SearchResult},
    maze::{Grid, Position},
    ranking::{self, Weights},
};

/// Minimal path on the reference maze, counted in cells.
const SHORTEST_PATH_LEN: usize = 55;

fn assert_walk(grid: &Grid, path: &[Position]) {
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.goal()));
    assert!(path.iter().all(|&p| grid.is_open(p)));
    assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
}

fn run(algorithm: Algorithm) -> SearchResult {
    algorithm.search(&Grid::reference(), &SearchConfig::default())
}

#[test]
fn every_algorithm_walks_from_start_to_goal() {
    let grid = Grid::reference();
    for algorithm in Algorithm::all() {
        let result = algorithm.search(&grid, &SearchConfig::default());
        let path = result.path.expect("reference maze is solvable");
        assert_walk(&grid, &path);
    }
}

#[test]
fn optimal_algorithms_pin_golden_length() {
    for algorithm in [
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Iddfs,
    ] {
        assert_eq!(run(algorithm).path_len(), SHORTEST_PATH_LEN, "{algorithm}");
    }
}

#[test]
fn golden_metrics() {
    let metrics = |a: Algorithm| {
        let r = run(a);
        (r.path_len(), r.steps, r.explored)
    };

    assert_eq!(metrics(Algorithm::Bfs), (55, 158, 159));
    assert_eq!(metrics(Algorithm::Dfs), (127, 298, 158));
    assert_eq!(metrics(Algorithm::Greedy), (55, 227, 93));
    assert_eq!(metrics(Algorithm::Dijkstra), (55, 459, 156));
    assert_eq!(metrics(Algorithm::AStar), (55, 425, 147));
    assert_eq!(metrics(Algorithm::Iddfs), (55, 1238, 152));
}

#[test]
fn bfs_route_hugs_the_east_corridor() {
    let path = run(Algorithm::Bfs).path.unwrap();
    assert_eq!(path[1], Position::new(3, 2));
    assert_eq!(path[25], Position::new(1, 10));
    assert!(path.contains(&Position::new(10, 22)));
}

#[test]
fn comparison_ranking_is_pinned() {
    let comparison = ranking::compare(
        &Grid::reference(),
        &SearchConfig::default(),
        &Weights::default(),
    )
    .unwrap();

    let order: Vec<Algorithm> = comparison.ranked.iter().map(|s| s.algorithm).collect();
    assert_eq!(
        order,
        vec![
            Algorithm::Greedy,
            Algorithm::Bfs,
            Algorithm::AStar,
            Algorithm::Dijkstra,
            Algorithm::Iddfs,
            Algorithm::Dfs,
        ]
    );

    assert_approx_eq!(comparison.ranked[0].score, 0.428679, 1e-5);
    assert_approx_eq!(comparison.ranked[5].score, 0.846255, 1e-5);

    assert_eq!(comparison.best().algorithm, Algorithm::Greedy);
    assert_eq!(comparison.best_path, run(Algorithm::Greedy).path.unwrap());
    assert_eq!(comparison.best_path.len(), SHORTEST_PATH_LEN);
}

#[test]
fn shallow_depth_ceiling_drops_iddfs_from_ranking() {
    let config = SearchConfig { depth_ceiling: 10 };
    let grid = Grid::reference();

    assert!(!Algorithm::Iddfs.search(&grid, &config).found());

    let comparison = ranking::compare(&grid, &config, &Weights::default()).unwrap();
    assert_eq!(comparison.ranked.len(), 5);
    assert!(
        comparison
            .ranked
            .iter()
            .all(|s| s.algorithm != Algorithm::Iddfs)
    );
}

#[test]
fn walled_off_goal_yields_no_eligible_result() {
    let grid = Grid::parse("#######\n#S.#..#\n#..#.G#\n#######").unwrap();
    let config = SearchConfig::default();

    for algorithm in Algorithm::all() {
        let result = algorithm.search(&grid, &config);
        assert_eq!(result.path, None, "{algorithm}");

        assert_eq!(
            ranking::rank([(algorithm, result)], &Weights::default()),
            Err(ranking::RankingError::NoEligibleResult)
        );
    }
}
