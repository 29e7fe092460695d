//! One delivery cycle: sent-log gate, batch computation, chapter texts
//! through the sink, then state updates.
//!
//! State (position and sent-log) is only written after every message went
//! out; a failed send leaves both untouched for the next hourly attempt.
//! The trigger guarantees at most one cycle in flight.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::fs;

use crate::delivery::MessageSink;
use crate::scheduler::{batch_label, ReadingPlanner};
use crate::sent_log::SentLog;

/// What a cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Batch delivered; position and sent-log updated.
    Sent { label: String, chapters: usize },
    /// Sent-log already records today; nothing delivered.
    AlreadySent,
    /// Corpus finished; nothing left to deliver.
    NothingToSend,
}

pub fn run_daily_cycle(
    planner: &ReadingPlanner<'_>,
    sent_log: &SentLog,
    sink: &mut dyn MessageSink,
    contact: &str,
    today: NaiveDate,
    force: bool,
) -> Result<CycleOutcome> {
    if !force && sent_log.was_sent_on(today)? {
        tracing::info!(%today, "already sent today; skipping");
        return Ok(CycleOutcome::AlreadySent);
    }

    let (batch, new_position) = planner.compute_daily_batch(false)?;
    if batch.is_empty() {
        tracing::info!("reading plan finished; nothing to send");
        return Ok(CycleOutcome::NothingToSend);
    }

    let label = batch_label(&batch);
    sink.send(contact, &format!("Leitura de hoje: {label}"))
        .context("send batch header")?;

    let mut sent = 0usize;
    for entry in &batch {
        let book = planner
            .index()
            .get(&entry.book)
            .with_context(|| format!("book {} vanished from index", entry.book))?;
        for &chapter in &entry.chapters {
            let path = book
                .chapter_path(chapter)
                .ok_or_else(|| anyhow!("missing chapter file: {} {chapter}", entry.book))?;
            let text = fs::read_to_string(path)
                .with_context(|| format!("read chapter: {}", path.display()))?;
            sink.send(contact, &text)
                .with_context(|| format!("send {} {chapter}", entry.book))?;
            sent += 1;
        }
    }

    // Every message confirmed; now advance the persisted state.
    planner.commit(&new_position)?;
    sent_log.mark_sent(today)?;
    tracing::info!(%label, chapters = sent, "daily reading delivered");
    Ok(CycleOutcome::Sent {
        label,
        chapters: sent,
    })
}
