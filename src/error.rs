use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

/// Errors produced while building grids, stepping engines and driving a simulation.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },
    #[error("no grid was supplied")]
    MissingGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected symbol {symbol:?} at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        symbol: char,
    },
    #[error("target generation count must be positive")]
    InvalidTarget,
    #[error("worker count must be positive")]
    InvalidWorkerCount,
    /// A chunk worker of the parallel engine panicked or could not be started.
    /// The engine state is left as it was before the failed `advance`.
    #[error("worker for chunk {chunk} failed: {reason}")]
    WorkerFault { chunk: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
