use std::path::PathBuf;

/// Errors raised by the board's coordinate math.
///
/// These indicate an internal contract violation rather than bad user input:
/// correct callers never request an out-of-grid coordinate or a diagonal
/// neighbor of an edge cell. They are surfaced as hard failures, not retried.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("row {row} and column {col} is not a valid combination on a {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell {index} is on the top row or last column; it has no up-right neighbor")]
    NoUpRightNeighbor { index: usize },

    #[error("cell {index} is on the bottom row or last column; it has no down-right neighbor")]
    NoDownRightNeighbor { index: usize },

    #[error("cell index {index} is outside a board of {len} slots")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
