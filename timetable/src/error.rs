use thiserror::Error;

use crate::Timestamp;

pub type TableResult<T> = Result<T, TableError>;

/// Structural problems found while assembling a table from external parts.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum TableError {
    #[error("column {column} has {actual} values; the time axis has {expected} rows")]
    ColumnLength {
        column: usize,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate timestamp `{0}` in time axis")]
    DuplicateTimestamp(Timestamp),
    #[error("time axis has {0} rows but the table has no columns")]
    MissingColumns(usize),
    #[error("`times` and `values` must both be null or both be present")]
    MismatchedNullity,
}
