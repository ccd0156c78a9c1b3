pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod pathfinding;
pub mod report;

pub use cell::Cell;
pub use config::Config;
pub use error::CaveError;
pub use grid::{Grid, DEFAULT_CAVE};
pub use pathfinding::{Direction, GoalApproach, PathFinder, Position};
pub use report::SolveReport;
