//! `leitura run` – the hourly trigger loop.

use anyhow::Result;
use chrono::Local;
use leitura_core::config::{DeliveryMode, LeituraConfig};
use leitura_core::daily::run_daily_cycle;
use leitura_core::delivery::{ConsoleSink, MessageSink, OutboxSink};
use leitura_core::sent_log::SentLog;
use leitura_core::trigger::{run_loop, DaytimeWindow};

use super::{load_index, planner};

pub async fn run_trigger(cfg: &LeituraConfig, once: bool) -> Result<()> {
    let index = load_index(cfg)?;
    let planner = planner(cfg, &index)?;
    let sent_log = SentLog::open_default()?;
    let contact = cfg.contacts.recipient().to_string();

    let mut sink: Box<dyn MessageSink> = match cfg.delivery {
        DeliveryMode::Console => Box::new(ConsoleSink),
        DeliveryMode::Outbox => Box::new(OutboxSink::open_default()?),
    };

    let mut cycle = move || {
        let today = Local::now().date_naive();
        let outcome = run_daily_cycle(&planner, &sent_log, sink.as_mut(), &contact, today, false)?;
        tracing::debug!(?outcome, "cycle finished");
        Ok(())
    };

    if once {
        return cycle();
    }

    let window = DaytimeWindow::new(cfg.window_start_hour, cfg.window_end_hour)?;
    tracing::info!(
        start = cfg.window_start_hour,
        end = cfg.window_end_hour,
        "trigger loop started"
    );
    run_loop(window, cycle).await
}
