use std::path::PathBuf;

/// Errors raised while loading or constructing a cave
#[derive(Debug, thiserror::Error)]
pub enum CaveError {
    #[error("cave file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid header line {line:?}: expected \"<rows> <cols>\"")]
    InvalidHeader { line: String },

    #[error("expected {expected} rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    RowTooShort { row: usize, len: usize, expected: usize },

    #[error("row {row} has {len} cells but the first row has {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("unknown cell {ch:?} at row {row}, col {col}")]
    UnknownCell { ch: char, row: usize, col: usize },

    #[error("cave of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("cave has no rows or columns")]
    EmptyGrid,

    #[error("no start marker 'S' found in cave")]
    MissingStart,

    #[error("failed to parse config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CaveError {
    /// Map an I/O failure on `path`, keeping "not found" distinct
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CaveError::NotFound { path }
        } else {
            CaveError::Io { path, source }
        }
    }
}
