//! Message delivery seam.
//!
//! The chat transport (browser automation over the messaging app) lives
//! outside this crate; the daily cycle only needs something that accepts
//! (contact, text) pairs in order.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait MessageSink {
    fn send(&mut self, contact: &str, text: &str) -> Result<()>;
}

/// Prints messages to stdout. The "notepad" test transport.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn send(&mut self, contact: &str, text: &str) -> Result<()> {
        println!("[{contact}]\n{text}");
        Ok(())
    }
}

/// Appends each message to an outbox file for an external transport to
/// pick up, one header line per message.
#[derive(Debug)]
pub struct OutboxSink {
    path: PathBuf,
}

impl OutboxSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default path: `~/.local/state/leitura/outbox.txt`.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("leitura")?;
        let path = xdg_dirs.place_state_file("outbox.txt")?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageSink for OutboxSink {
    fn send(&mut self, contact: &str, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open outbox: {}", self.path.display()))?;
        writeln!(file, "--- to: {contact}")
            .and_then(|_| writeln!(file, "{text}"))
            .with_context(|| format!("append outbox: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records every (contact, text) pair for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub messages: Vec<(String, String)>,
    }

    impl MessageSink for RecordingSink {
        fn send(&mut self, contact: &str, text: &str) -> Result<()> {
            self.messages.push((contact.to_string(), text.to_string()));
            Ok(())
        }
    }
}
