//! Daily batch computation: greedy contiguous fill across book boundaries.

use crate::corpus::CorpusIndex;
use crate::position::{Position, PositionError};

use super::error::ScheduleError;

/// Chapters delivered per day. Fixed; not user state.
pub const DEFAULT_QUOTA: u32 = 4;

/// One batch entry: a contiguous ascending chapter run within one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub book: String,
    pub chapters: Vec<u32>,
}

impl BatchEntry {
    /// Human label, e.g. `Gn 1-4` or `Ob 1`.
    pub fn label(&self) -> String {
        match (self.chapters.first(), self.chapters.last()) {
            (Some(first), Some(last)) if first != last => {
                format!("{} {}-{}", self.book, first, last)
            }
            (Some(first), _) => format!("{} {}", self.book, first),
            _ => self.book.clone(),
        }
    }
}

/// Today's reading, in canonical order.
pub type DailyBatch = Vec<BatchEntry>;

/// Joined label for the whole batch, e.g. `Gn 50, Ex 1-3`.
pub fn batch_label(batch: &DailyBatch) -> String {
    batch
        .iter()
        .map(BatchEntry::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Computes the next daily batch from `position` and the resulting new
/// position. Pure: nothing is persisted here.
///
/// Starting at the chapter after `position.chapter`, takes up to `quota`
/// chapters, rolling into the next canonical book when the current one runs
/// out. Reaching the end of the last book marks the position finished and
/// discards the remaining quota (no wrap-around to the first book).
pub fn compute_daily_batch(
    index: &CorpusIndex,
    position: &Position,
    quota: u32,
) -> Result<(DailyBatch, Position), ScheduleError> {
    if index.is_empty() {
        return Err(ScheduleError::CorpusEmpty);
    }

    let mut batch = DailyBatch::new();
    if position.finished {
        return Ok((batch, position.clone()));
    }
    let Some(mut book) = position.book.clone() else {
        return Ok((batch, position.clone()));
    };

    let mut info = index
        .get(&book)
        .map_err(|_| ScheduleError::UnknownBook(book.clone()))?;
    let mut chapter = position.chapter;
    if chapter > info.chapter_count() {
        return Err(PositionError::ChapterOutOfRange {
            book,
            chapter,
            count: info.chapter_count(),
        }
        .into());
    }

    let mut remaining = quota;
    let mut finished = false;
    while remaining > 0 {
        let book_remaining = info.chapter_count() - chapter;
        if book_remaining >= remaining {
            let range: Vec<u32> = (chapter + 1..=chapter + remaining).collect();
            if !range.is_empty() {
                batch.push(BatchEntry {
                    book: book.clone(),
                    chapters: range,
                });
            }
            chapter += remaining;
            remaining = 0;
        } else {
            // Empty when the book was already fully read; skipped, and the
            // full remaining quota carries into the next book.
            let range: Vec<u32> = (chapter + 1..=info.chapter_count()).collect();
            if !range.is_empty() {
                batch.push(BatchEntry {
                    book: book.clone(),
                    chapters: range,
                });
            }
            remaining -= book_remaining;
            chapter = 0;
            match index
                .next_book(&book)
                .map_err(|_| ScheduleError::UnknownBook(book.clone()))?
            {
                Some(next) => {
                    book = next.to_string();
                    info = index
                        .get(&book)
                        .map_err(|_| ScheduleError::UnknownBook(book.clone()))?;
                }
                None => {
                    finished = true;
                    break;
                }
            }
        }
    }

    let new_position = Position {
        book: if finished { None } else { Some(book) },
        chapter,
        finished,
    };
    Ok((batch, new_position))
}
