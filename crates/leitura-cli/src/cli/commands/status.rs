//! `leitura status` – show the current reading position and corpus stats.

use anyhow::Result;
use leitura_core::config::LeituraConfig;

use super::{load_index, planner};

pub fn run_status(cfg: &LeituraConfig) -> Result<()> {
    let index = load_index(cfg)?;
    let planner = planner(cfg, &index)?;

    println!(
        "Corpus: {} book(s), {} chapter(s) at {}",
        index.len(),
        index.total_chapters(),
        cfg.corpus_dir()?.display()
    );

    let position = planner.current_position()?;
    if position.finished {
        println!("Position: reading plan finished.");
        return Ok(());
    }
    match &position.book {
        Some(book) => {
            let info = index.get(book)?;
            println!(
                "Position: {} ({}) chapter {} of {}",
                book,
                info.name,
                position.chapter,
                info.chapter_count()
            );
        }
        None => println!("Position: not started."),
    }
    Ok(())
}
