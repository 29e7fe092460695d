//! "Already sent today" record (JSON under the XDG state dir).
//!
//! The scheduler is date-unaware; the daily cycle consults this log so a
//! restarted process inside the same day does not deliver twice.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Serialize, Deserialize)]
struct SentRecord {
    date: Option<String>,
}

/// File-backed sent-log keyed by calendar date.
#[derive(Debug)]
pub struct SentLog {
    path: PathBuf,
}

impl SentLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default path: `~/.local/state/leitura/last_sent_date.json`.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("leitura")?;
        let path = xdg_dirs.place_state_file("last_sent_date.json")?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the log records a send on `date`. A missing file or an
    /// absent date field means nothing was sent yet.
    pub fn was_sent_on(&self, date: NaiveDate) -> Result<bool> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(e).with_context(|| format!("read sent-log: {}", self.path.display()))
            }
        };
        let record: SentRecord = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse sent-log: {}", self.path.display()))?;
        let Some(last) = record.date else {
            return Ok(false);
        };
        let last_date = NaiveDate::parse_from_str(&last, DATE_FORMAT)
            .with_context(|| format!("sent-log date {last:?}"))?;
        Ok(last_date == date)
    }

    /// Records a send on `date`, atomically replacing the log file.
    pub fn mark_sent(&self, date: NaiveDate) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let record = SentRecord {
            date: Some(date.format(DATE_FORMAT).to_string()),
        };
        let json = serde_json::to_string(&record).context("serialize sent-log")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write sent-log: {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace sent-log: {}", self.path.display()))?;
        Ok(())
    }
}
