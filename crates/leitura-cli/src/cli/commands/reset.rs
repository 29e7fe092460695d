//! `leitura reset` – reset the persisted position to the start.

use anyhow::Result;
use leitura_core::config::LeituraConfig;

use super::{load_index, planner};

pub fn run_reset(cfg: &LeituraConfig) -> Result<()> {
    let index = load_index(cfg)?;
    let planner = planner(cfg, &index)?;
    let start = planner.reset()?;
    match &start.book {
        Some(book) => println!("Position reset to {book} 0."),
        None => println!("Position reset."),
    }
    Ok(())
}
