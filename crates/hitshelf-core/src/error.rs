use thiserror::Error;

use crate::model::SongField;

/// A song field was missing or blank at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} must not be null or empty")]
pub struct ValidationError {
    pub field: SongField,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid song: {0}")]
    Validation(#[from] ValidationError),

    #[error("year index {index} out of range (0..{count})")]
    YearIndex { index: usize, count: usize },

    #[error("song index {index} out of range (0..{count}) for year index {year_index}")]
    SongIndex {
        year_index: usize,
        index: usize,
        count: usize,
    },

    #[error("invalid catalog input: {0}")]
    Config(String),

    #[error("invalid stream count: {0:?}")]
    Streams(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Returns `true` for out-of-range year or song indices.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::YearIndex { .. } | Self::SongIndex { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
