//! CLI command handlers. Each command is in its own file for clarity.

mod next;
mod reset;
mod send;
mod status;
mod trigger;

pub use next::run_next;
pub use reset::run_reset;
pub use send::run_send;
pub use status::run_status;
pub use trigger::run_trigger;

use anyhow::Result;
use leitura_core::config::LeituraConfig;
use leitura_core::corpus::CorpusIndex;
use leitura_core::position::PositionStore;
use leitura_core::scheduler::ReadingPlanner;

/// Loads the corpus index from the configured root.
pub(crate) fn load_index(cfg: &LeituraConfig) -> Result<CorpusIndex> {
    let root = cfg.corpus_dir()?;
    CorpusIndex::load(&root)
}

/// Planner over the default position store, with the configured quota.
pub(crate) fn planner<'a>(
    cfg: &LeituraConfig,
    index: &'a CorpusIndex,
) -> Result<ReadingPlanner<'a>> {
    let store = PositionStore::open_default()?;
    Ok(ReadingPlanner::new(index, store).with_quota(cfg.chapters_per_day))
}
