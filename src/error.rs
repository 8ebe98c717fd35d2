use thiserror::Error;

/// A data line that could not be turned into an [`ExperimentRecord`](crate::ExperimentRecord).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedRecordError {
    #[error("expected 7 comma-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("invalid number {value:?} in column `{column}`")]
    InvalidNumber { column: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum CombineError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record on line {line}: {source}")]
    Malformed {
        line: usize,
        source: MalformedRecordError,
    },
}

pub type Result<T, E = CombineError> = std::result::Result<T, E>;
