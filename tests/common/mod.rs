#![allow(dead_code)]

use cave_explorer::pathfinding::parse_moves;
use cave_explorer::{Grid, PathFinder, Position};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Test case stored under `test_data/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaveTestData {
    #[serde(rename = "testName")]
    pub test_name: String,
    pub layout: Vec<String>,
    #[serde(rename = "expectedSolve")]
    pub expected_solve: bool,
    #[serde(rename = "expectedPath")]
    pub expected_path: String,
}

/// Load a test from JSON file
pub fn load_test(path: &Path) -> Result<CaveTestData, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let test_data: CaveTestData = serde_json::from_str(&contents)?;
    Ok(test_data)
}

pub fn finder(rows: &[&str]) -> PathFinder {
    PathFinder::new(Grid::from_rows(rows).expect("valid layout")).expect("start marker")
}

/// Mirror the layout left-right
pub fn flip_horizontal(layout: &[String]) -> Vec<String> {
    layout.iter().map(|row| row.chars().rev().collect()).collect()
}

/// Mirror the layout top-bottom
pub fn flip_vertical(layout: &[String]) -> Vec<String> {
    layout.iter().rev().cloned().collect()
}

/// Reachability does not depend on orientation, so every mirrored variant
/// must agree with the expected answer.
/// Returns the name of the first failing variant.
pub fn run_solve_variants(test_data: &CaveTestData) -> Option<String> {
    let variants = vec![
        ("original", test_data.layout.clone()),
        ("h_flip", flip_horizontal(&test_data.layout)),
        ("v_flip", flip_vertical(&test_data.layout)),
        ("hv_flip", flip_vertical(&flip_horizontal(&test_data.layout))),
    ];

    for (variant_name, layout) in variants {
        let solved = Grid::from_rows(layout.as_slice())
            .ok()
            .and_then(|grid| PathFinder::new(grid).ok())
            .map(|finder| finder.solve());
        if solved != Some(test_data.expected_solve) {
            return Some(variant_name.to_string());
        }
    }
    None
}

/// Apply `path` from the start, returning the cell reached.
/// `None` if a move letter is unknown or a step leaves the grid.
pub fn follow_path(finder: &PathFinder, path: &str) -> Option<Position> {
    let mut pos = finder.start();
    for dir in parse_moves(path)? {
        pos = pos.step(dir);
        finder.grid().get(pos.row, pos.col)?;
    }
    Some(pos)
}
