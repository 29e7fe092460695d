//! Reading-progress scheduler.
//!
//! Holds the persisted position and the daily quota; each call computes the
//! next contiguous chapter range in canonical order, spanning book
//! boundaries, and persists the new position only on confirmed delivery.

mod error;
mod plan;

pub use error::ScheduleError;
pub use plan::{batch_label, compute_daily_batch, BatchEntry, DailyBatch, DEFAULT_QUOTA};

use anyhow::Result;

use crate::corpus::CorpusIndex;
use crate::position::{Position, PositionStore};

/// Scheduler facade over the index and the position store.
pub struct ReadingPlanner<'a> {
    index: &'a CorpusIndex,
    store: PositionStore,
    quota: u32,
}

impl<'a> ReadingPlanner<'a> {
    pub fn new(index: &'a CorpusIndex, store: PositionStore) -> Self {
        Self {
            index,
            store,
            quota: DEFAULT_QUOTA,
        }
    }

    pub fn with_quota(mut self, quota: u32) -> Self {
        self.quota = quota;
        self
    }

    pub fn index(&self) -> &CorpusIndex {
        self.index
    }

    /// Current position: the persisted record when one exists (validated),
    /// otherwise the default start at the first book.
    pub fn current_position(&self) -> Result<Position> {
        match self.store.load()? {
            Some(record) => Ok(Position::resolve(record, self.index)
                .map_err(ScheduleError::MalformedPosition)?),
            None => {
                let first = self
                    .index
                    .first_book()
                    .map_err(|_| ScheduleError::CorpusEmpty)?;
                Ok(Position::start(first))
            }
        }
    }

    /// Computes today's batch. With `confirm_delivered` the new position is
    /// persisted; otherwise this is a pure query and repeat calls return
    /// the same batch.
    pub fn compute_daily_batch(
        &self,
        confirm_delivered: bool,
    ) -> Result<(DailyBatch, Position)> {
        let position = self.current_position()?;
        let (batch, new_position) = plan::compute_daily_batch(self.index, &position, self.quota)?;
        if confirm_delivered {
            self.store.save(&new_position)?;
        }
        Ok((batch, new_position))
    }

    /// Persists a position computed earlier with `confirm_delivered: false`.
    /// Called once the delivery collaborator has confirmed the send.
    pub fn commit(&self, position: &Position) -> Result<()> {
        self.store.save(position)
    }

    /// Resets the persisted position to the default start.
    pub fn reset(&self) -> Result<Position> {
        let first = self
            .index
            .first_book()
            .map_err(|_| ScheduleError::CorpusEmpty)?;
        let start = Position::start(first);
        self.store.save(&start)?;
        Ok(start)
    }
}
