use std::collections::HashSet;

use colored::Colorize;

use pathfinding_sim::maze::{Cell, Grid, Position};

/// Draws the maze with `path` overlaid: `P` start, `G` goal, `█` wall, `*`
/// path.
pub fn path_overlay(grid: &Grid, path: &[Position]) -> String {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1) * 8);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            let glyph = if pos == grid.start() {
                "P".red()
            } else if pos == grid.goal() {
                "G".blue()
            } else if grid.cell(pos) == Some(Cell::Wall) {
                "█".green()
            } else if on_path.contains(&pos) {
                "*".yellow()
            } else {
                " ".normal()
            };
            out.push_str(&glyph.to_string());
        }
        out.push('\n');
    }

    out
}
