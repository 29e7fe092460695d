//! `leitura send` – run one delivery cycle now.

use anyhow::Result;
use chrono::Local;
use leitura_core::config::{DeliveryMode, LeituraConfig};
use leitura_core::daily::{run_daily_cycle, CycleOutcome};
use leitura_core::delivery::{ConsoleSink, MessageSink, OutboxSink};
use leitura_core::sent_log::SentLog;

use super::{load_index, planner};

pub fn run_send(cfg: &LeituraConfig, force: bool) -> Result<()> {
    let index = load_index(cfg)?;
    let planner = planner(cfg, &index)?;
    let sent_log = SentLog::open_default()?;

    let mut sink: Box<dyn MessageSink> = match cfg.delivery {
        DeliveryMode::Console => Box::new(ConsoleSink),
        DeliveryMode::Outbox => Box::new(OutboxSink::open_default()?),
    };

    let today = Local::now().date_naive();
    let outcome = run_daily_cycle(
        &planner,
        &sent_log,
        sink.as_mut(),
        cfg.contacts.recipient(),
        today,
        force,
    )?;

    match outcome {
        CycleOutcome::Sent { label, chapters } => {
            println!("Delivered {label} ({chapters} chapter(s)).");
        }
        CycleOutcome::AlreadySent => {
            println!("Today's reading already went out; use --force to resend.");
        }
        CycleOutcome::NothingToSend => {
            println!("Reading plan finished; nothing left to send.");
        }
    }
    Ok(())
}
