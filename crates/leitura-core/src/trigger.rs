//! Hourly trigger with a daytime window.
//!
//! Wake times are computed deterministically from the clock: before the
//! window, today at the start hour; past it, tomorrow at the start hour;
//! inside it, the top of the next hour. The loop is sequential, so at most
//! one cycle is ever in flight.

use anyhow::{ensure, Result};
use chrono::{Duration, Local, NaiveDateTime, Timelike};

/// Inclusive hour range in which sends may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaytimeWindow {
    start_hour: u32,
    end_hour: u32,
}

impl Default for DaytimeWindow {
    fn default() -> Self {
        Self {
            start_hour: 5,
            end_hour: 20,
        }
    }
}

impl DaytimeWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        ensure!(end_hour < 24, "window end hour {end_hour} out of range");
        ensure!(
            start_hour <= end_hour,
            "window start {start_hour} after end {end_hour}"
        );
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// Next time the trigger should wake, strictly after `now`.
pub fn next_wake(now: NaiveDateTime, window: DaytimeWindow) -> NaiveDateTime {
    let at_start = |date: chrono::NaiveDate| {
        date.and_hms_opt(window.start_hour, 0, 0)
            .expect("validated window hour")
    };
    if now.hour() < window.start_hour {
        at_start(now.date())
    } else if now.hour() > window.end_hour {
        at_start(now.date() + Duration::days(1))
    } else {
        let top_of_hour = now
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        top_of_hour + Duration::hours(1)
    }
}

/// Runs `cycle` once per wake-up while inside the window, forever. Cycle
/// errors are logged and the schedule keeps going; the next hourly attempt
/// is the retry policy.
pub async fn run_loop<F>(window: DaytimeWindow, mut cycle: F) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    loop {
        let now = Local::now().naive_local();
        if window.contains(now.hour()) {
            if let Err(err) = cycle() {
                tracing::error!("daily cycle failed: {err:#}");
            }
        }
        let now = Local::now().naive_local();
        let wake = next_wake(now, window);
        let delay = (wake - now).to_std().unwrap_or_default();
        tracing::debug!(wake = %wake, "sleeping until next trigger");
        tokio::time::sleep(delay).await;
    }
}
