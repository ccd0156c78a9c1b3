use crate::error::CaveError;
use crate::pathfinding::{PathFinder, Position};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Outcome of running both queries on a cave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub rows: i32,
    pub cols: i32,
    /// Cave rows, top to bottom
    pub layout: Vec<String>,
    pub start: Position,
    pub solvable: bool,
    /// Move letters; empty when the walk found nothing
    pub path: String,
    /// Line shown to the user
    pub message: String,
}

impl SolveReport {
    pub fn from_finder(finder: &PathFinder) -> Self {
        let solvable = finder.solve();
        let path = if solvable { finder.get_path() } else { String::new() };
        let grid = finder.grid();

        SolveReport {
            rows: grid.rows,
            cols: grid.cols,
            layout: grid.layout(),
            start: finder.start(),
            solvable,
            message: result_message(&path),
            path,
        }
    }

    pub fn to_json(&self) -> Result<String, CaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CaveError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| CaveError::from_io(path, e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CaveError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| CaveError::from_io(path, e))?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// User-facing result line. An unreachable pool and a failed walk read the same.
pub fn result_message(path: &str) -> String {
    if path.is_empty() {
        "No path to the mirror pool.".to_string()
    } else {
        format!("Path to the mirror pool: {}", path)
    }
}
