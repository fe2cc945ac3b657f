//! JSON encoding of [`timetable`] series and tables.
//!
//! Thin helpers over `serde_json` that report every failure as a single
//! [`EncodingError`]. A failed decode never yields a partially built value.
use snafu::Snafu;

pub mod json;

pub use json::*;

/// What was being encoded or decoded when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Series,
    Table,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Series => write!(f, "time series"),
            Target::Table => write!(f, "aligned table"),
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EncodingError {
    #[snafu(display("Failed to encode {target}"))]
    Encode {
        target: Target,
        #[snafu(source)]
        error: serde_json::Error,
    },

    #[snafu(display("Failed to decode {target}: {error}"))]
    Decode {
        target: Target,
        #[snafu(source)]
        error: serde_json::Error,
    },
}

impl EncodingError {
    pub fn target(&self) -> Target {
        match self {
            EncodingError::Encode { target, .. } | EncodingError::Decode { target, .. } => *target,
        }
    }
}

pub type EncodingResult<T> = Result<T, EncodingError>;
