use crate::cell::Cell;
use crate::error::CaveError;
use crate::grid::{Grid, DEFAULT_START};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use tracing::{debug, trace};

/// A position on the grid, row increasing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Neighbor one step in `dir`. May be out of bounds.
    pub fn step(self, dir: Direction) -> Position {
        let (dr, dc) = dir.offset();
        Position::new(self.row + dr, self.col + dc)
    }
}

/// Movement directions in search priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Priority table used by both the search and the walk
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) delta
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Move letter emitted in paths. Fixed table, not compass letters.
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Down => 's',
            Direction::Left => 'e',
            Direction::Right => 'n',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| d.symbol() == ch)
    }
}

/// When the greedy walk considers itself done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalApproach {
    /// Stop once the mirror pool is a direct neighbor. The final hop is not recorded.
    #[default]
    Adjacent,
    /// Stop only when standing on the mirror pool. The walk never steps onto
    /// the pool, so this yields an empty path unless the walk starts on it.
    Enter,
}

/// Owns a cave and its start position; answers reachability and path queries.
///
/// Queries never mutate the finder, so it can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct PathFinder {
    grid: Grid,
    start: Position,
    goal_approach: GoalApproach,
}

impl PathFinder {
    /// Fails with [`CaveError::MissingStart`] if the grid has no `S`
    pub fn new(grid: Grid) -> Result<Self, CaveError> {
        let (row, col) = grid.find_start().ok_or(CaveError::MissingStart)?;
        Ok(PathFinder {
            grid,
            start: Position::new(row, col),
            goal_approach: GoalApproach::default(),
        })
    }

    /// Finder over the embedded default cave
    pub fn default_cave() -> Self {
        let (row, col) = DEFAULT_START;
        PathFinder {
            grid: Grid::default_cave(),
            start: Position::new(row, col),
            goal_approach: GoalApproach::default(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CaveError> {
        Self::new(Grid::load_from_file(path)?)
    }

    pub fn with_goal_approach(mut self, goal_approach: GoalApproach) -> Self {
        self.goal_approach = goal_approach;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal_approach(&self) -> GoalApproach {
        self.goal_approach
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }

    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        self.grid.is_valid(row, col)
    }

    fn cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos.row, pos.col)
    }

    /// Breadth-first reachability check from the start to any mirror pool.
    ///
    /// Expands only into unvisited `.` and `M` cells; returns as soon as an
    /// `M` cell is dequeued.
    pub fn solve(&self) -> bool {
        let mut visited = vec![false; self.grid.len()];
        let mut queue = VecDeque::new();

        visited[self.grid.get_id(self.start.row, self.start.col)] = true;
        queue.push_back(self.start);

        let mut expanded = 0usize;
        while let Some(pos) = queue.pop_front() {
            expanded += 1;
            if self.cell(pos).is_some_and(Cell::is_goal) {
                debug!(row = pos.row, col = pos.col, expanded, "reached mirror pool");
                return true;
            }

            for dir in Direction::ALL {
                let next = pos.step(dir);
                let Some(cell) = self.cell(next) else {
                    continue;
                };
                let id = self.grid.get_id(next.row, next.col);
                if visited[id] || !cell.is_open() {
                    continue;
                }
                visited[id] = true;
                queue.push_back(next);
            }
        }

        debug!(expanded, "mirror pool unreachable");
        false
    }

    /// Greedy single-path walk from the start.
    ///
    /// Each step takes the first unvisited `.` neighbor in [`Direction::ALL`]
    /// order. There is no backtracking: a dead end gives `None` even when
    /// [`solve`](Self::solve) succeeds. Returns `None` as well when the goal
    /// is unreachable.
    pub fn walk(&self) -> Option<Vec<Direction>> {
        if !self.solve() {
            return None;
        }

        let mut visited = vec![false; self.grid.len()];
        let mut current = self.start;
        let mut moves = Vec::new();

        while !self.walk_finished(current) {
            visited[self.grid.get_id(current.row, current.col)] = true;

            let next = Direction::ALL.into_iter().find_map(|dir| {
                let next = current.step(dir);
                let cell = self.cell(next)?;
                let unvisited = !visited[self.grid.get_id(next.row, next.col)];
                (cell.is_floor() && unvisited).then_some((dir, next))
            });

            let Some((dir, next)) = next else {
                debug!(
                    row = current.row,
                    col = current.col,
                    steps = moves.len(),
                    "walk hit a dead end"
                );
                return None;
            };
            trace!(?dir, row = next.row, col = next.col, "walk step");
            moves.push(dir);
            current = next;
        }

        Some(moves)
    }

    /// Path as move letters; an empty string means no path
    pub fn get_path(&self) -> String {
        self.walk().map(|moves| format_moves(&moves)).unwrap_or_default()
    }

    fn walk_finished(&self, pos: Position) -> bool {
        if self.cell(pos).is_some_and(Cell::is_goal) {
            return true;
        }
        match self.goal_approach {
            GoalApproach::Enter => false,
            GoalApproach::Adjacent => Direction::ALL
                .into_iter()
                .any(|dir| self.cell(pos.step(dir)).is_some_and(Cell::is_goal)),
        }
    }
}

/// Format moves as their letters, e.g. `"eess"`
pub fn format_moves(moves: &[Direction]) -> String {
    moves.iter().map(|d| d.symbol()).collect()
}

/// Parse move letters back into directions. Unknown letters yield `None`.
pub fn parse_moves(path: &str) -> Option<Vec<Direction>> {
    path.chars().map(Direction::from_symbol).collect()
}
