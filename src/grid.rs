use crate::cell::Cell;
use crate::error::CaveError;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Layout used when no cave file is given
pub const DEFAULT_CAVE: [&str; 5] = ["RRRRRR", "R..SRR", "R.RRRR", "R.MRRR", "RRRRRR"];

/// Start marker position in [`DEFAULT_CAVE`]
pub const DEFAULT_START: (i32, i32) = (1, 3);

/// Cave layout stored row-major.
/// The column count is fixed by the first row; every row has exactly `cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from literal rows such as `["RRR", "S.M"]`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, CaveError> {
        let Some(first) = rows.first() else {
            return Err(CaveError::EmptyGrid);
        };
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(CaveError::EmptyGrid);
        }

        let (row_count, col_count) = checked_dimensions(rows.len(), cols)
            .ok_or(CaveError::TooLarge { rows: rows.len(), cols })?;

        let mut cells = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != cols {
                return Err(CaveError::RaggedRow { row, len, expected: cols });
            }
            push_row(&mut cells, line, row)?;
        }

        Ok(Grid {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    /// The embedded 5x6 cave
    pub fn default_cave() -> Self {
        let cells = DEFAULT_CAVE
            .iter()
            .flat_map(|row| row.chars())
            .filter_map(Cell::from_char)
            .collect();
        Grid {
            rows: DEFAULT_CAVE.len() as i32,
            cols: DEFAULT_CAVE[0].len() as i32,
            cells,
        }
    }

    /// Parse the cave file format:
    ///
    /// ```text
    /// <rows> <cols>
    /// <row 0>
    /// ...
    /// ```
    ///
    /// Characters past `cols` on a row are ignored.
    pub fn parse(text: &str) -> Result<Self, CaveError> {
        let mut lines = text.lines();
        let header = lines.next().unwrap_or_default();
        let (rows, cols) = parse_header(header)?;
        if rows == 0 || cols == 0 {
            return Err(CaveError::EmptyGrid);
        }
        let (row_count, col_count) = checked_dimensions(rows, cols)
            .ok_or_else(|| CaveError::InvalidHeader { line: header.to_string() })?;

        // Sized by the rows actually read, never by the header.
        let mut cells = Vec::new();
        for row in 0..rows {
            let Some(line) = lines.next() else {
                return Err(CaveError::MissingRows { expected: rows, found: row });
            };
            let line = line.strip_suffix('\r').unwrap_or(line);
            let len = line.chars().count();
            if len < cols {
                return Err(CaveError::RowTooShort { row, len, expected: cols });
            }
            let truncated: String = line.chars().take(cols).collect();
            push_row(&mut cells, &truncated, row)?;
        }

        Ok(Grid {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    /// Load a cave file. A missing file is reported as [`CaveError::NotFound`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CaveError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CaveError::from_io(path, e))?;
        let grid = Self::parse(&text)?;
        info!(path = %path.display(), rows = grid.rows, cols = grid.cols, "loaded cave");
        Ok(grid)
    }

    /// Serialize back into the cave file format
    pub fn to_file_format(&self) -> String {
        format!("{} {}\n{}", self.rows, self.cols, self.render())
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CaveError> {
        let path = path.as_ref();
        fs::write(path, self.to_file_format()).map_err(|e| CaveError::from_io(path, e))?;
        debug!(path = %path.display(), "saved cave");
        Ok(())
    }

    /// Check that (row, col) lies inside the grid
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    /// Convert (row, col) to a cell index
    pub fn get_id(&self, row: i32, col: i32) -> usize {
        (row * self.cols + col) as usize
    }

    /// Convert a cell index back to (row, col)
    pub fn get_coords(&self, id: usize) -> (i32, i32) {
        let id = id as i32;
        (id / self.cols, id % self.cols)
    }

    /// Cell at (row, col), or `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if !self.is_valid(row, col) {
            return None;
        }
        Some(self.cells[self.get_id(row, col)])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First start marker in row-major order
    pub fn find_start(&self) -> Option<(i32, i32)> {
        self.cells
            .iter()
            .position(|&c| c == Cell::Start)
            .map(|id| self.get_coords(id))
    }

    /// Rows as strings, top to bottom
    pub fn layout(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect()
    }

    /// One character per cell, a newline after every row
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(self.cells.len() + self.rows as usize);
        for row in self.cells.chunks(self.cols as usize) {
            result.extend(row.iter().map(|c| c.to_char()));
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), CaveError> {
    let invalid = || CaveError::InvalidHeader { line: line.to_string() };
    let mut parts = line.split_whitespace();
    let rows = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    let cols = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((rows, cols))
}

/// Dimensions as i32, as long as every cell index also fits in an i32
fn checked_dimensions(rows: usize, cols: usize) -> Option<(i32, i32)> {
    let total = rows.checked_mul(cols)?;
    i32::try_from(total).ok()?;
    Some((i32::try_from(rows).ok()?, i32::try_from(cols).ok()?))
}

fn push_row(cells: &mut Vec<Cell>, line: &str, row: usize) -> Result<(), CaveError> {
    for (col, ch) in line.chars().enumerate() {
        let cell = Cell::from_char(ch).ok_or(CaveError::UnknownCell { ch, row, col })?;
        cells.push(cell);
    }
    Ok(())
}
