use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("row {row} has {actual} cells but the first row has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("invalid cell {token:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, token: String },
}
