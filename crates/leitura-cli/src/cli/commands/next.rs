//! `leitura next` – preview today's batch without persisting.

use anyhow::Result;
use leitura_core::config::LeituraConfig;
use leitura_core::scheduler::batch_label;

use super::{load_index, planner};

pub fn run_next(cfg: &LeituraConfig) -> Result<()> {
    let index = load_index(cfg)?;
    let planner = planner(cfg, &index)?;

    let (batch, new_position) = planner.compute_daily_batch(false)?;
    if batch.is_empty() {
        println!("Reading plan finished; nothing left to read.");
        return Ok(());
    }

    println!("Next reading: {}", batch_label(&batch));
    for entry in &batch {
        let name = &index.get(&entry.book)?.name;
        println!("  {} ({}) chapters {:?}", entry.book, name, entry.chapters);
    }
    match &new_position.book {
        Some(book) => println!("Position after delivery: {} {}", book, new_position.chapter),
        None => println!("Position after delivery: finished"),
    }
    Ok(())
}
