//! Scheduling error taxonomy.

use thiserror::Error;

use crate::position::PositionError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Position names a book id absent from the index. Hard error; never
    /// treated as a finished corpus.
    #[error("book not found in corpus: {0}")]
    UnknownBook(String),
    /// Index has zero books; scheduling over it is undefined.
    #[error("corpus has no books; nothing to schedule")]
    CorpusEmpty,
    /// Persisted position is corrupt.
    #[error("malformed position: {0}")]
    MalformedPosition(#[from] PositionError),
}
