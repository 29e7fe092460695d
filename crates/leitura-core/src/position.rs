//! Persisted reading position (JSON under the XDG state dir).
//!
//! The on-disk record mirrors the delivery history: `last_book` /
//! `last_chapter` name the last chapter fully delivered, `finished` marks a
//! completed corpus. A missing file means the default start position.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::corpus::CorpusIndex;

/// Corrupt persisted state. Surfaced loudly; `leitura reset` is the
/// recovery path, never a silent default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("position names book {book} but has no chapter")]
    MissingChapter { book: String },
    #[error("chapter {chapter} out of range for {book} ({count} chapters)")]
    ChapterOutOfRange { book: String, chapter: u32, count: u32 },
}

/// On-disk shape of `last_chapter.json`. Absent fields fall back to the
/// default start position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRecord {
    pub last_book: Option<String>,
    pub last_chapter: Option<u32>,
    #[serde(default)]
    pub finished: bool,
}

/// Resolved position: last completed chapter of `book` (0 = none yet).
/// `book` is `None` once the corpus is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub book: Option<String>,
    pub chapter: u32,
    pub finished: bool,
}

impl Position {
    /// Default start: first book of the corpus, nothing read yet.
    pub fn start(first_book: &str) -> Self {
        Self {
            book: Some(first_book.to_string()),
            chapter: 0,
            finished: false,
        }
    }

    /// Validates a persisted record against the index. A book without a
    /// chapter, or a chapter past the book's count, is corrupt state. An
    /// unknown book id passes through; the scheduler reports it as its own
    /// hard error.
    pub fn resolve(record: PositionRecord, index: &CorpusIndex) -> Result<Self, PositionError> {
        let chapter = match (&record.last_book, record.last_chapter) {
            (Some(book), None) => {
                return Err(PositionError::MissingChapter { book: book.clone() })
            }
            (_, chapter) => chapter.unwrap_or(0),
        };
        if let Some(book) = &record.last_book {
            if let Ok(info) = index.get(book) {
                let count = info.chapter_count();
                if chapter > count {
                    return Err(PositionError::ChapterOutOfRange {
                        book: book.clone(),
                        chapter,
                        count,
                    });
                }
            }
        }
        Ok(Self {
            book: record.last_book,
            chapter,
            finished: record.finished,
        })
    }

    pub fn to_record(&self) -> PositionRecord {
        PositionRecord {
            last_book: self.book.clone(),
            last_chapter: Some(self.chapter),
            finished: self.finished,
        }
    }
}

/// File-backed position store. Writes go through a temp file and rename so
/// a crash never leaves a half-written record for the next cycle.
#[derive(Debug)]
pub struct PositionStore {
    path: PathBuf,
}

impl PositionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default path: `~/.local/state/leitura/last_chapter.json`.
    pub fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("leitura")?;
        let path = xdg_dirs.place_state_file("last_chapter.json")?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted record; `None` when no state file exists yet.
    pub fn load(&self) -> Result<Option<PositionRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read position: {}", self.path.display()))
            }
        };
        let record: PositionRecord = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse position: {}", self.path.display()))?;
        Ok(Some(record))
    }

    /// Atomically replaces the record on disk.
    pub fn save(&self, position: &Position) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&position.to_record())
            .context("serialize position")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write position: {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace position: {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "position saved");
        Ok(())
    }

    /// Removes the state file (used by `reset`). Missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove position: {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::test_support::index_from_counts;

    fn store_in(dir: &Path) -> PositionStore {
        PositionStore::new(dir.join("last_chapter.json"))
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(dir.path()).load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let pos = Position {
            book: Some("Gn".into()),
            chapter: 4,
            finished: false,
        };
        store.save(&pos).unwrap();
        let record = store.load().unwrap().unwrap();
        assert_eq!(record.last_book.as_deref(), Some("Gn"));
        assert_eq!(record.last_chapter, Some(4));
        assert!(!record.finished);
        // No temp file left behind after the rename.
        assert!(!dir.path().join("last_chapter.json.tmp").exists());
    }

    #[test]
    fn corrupt_json_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::write(store.path(), b"{not json").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn resolve_rejects_book_without_chapter() {
        let index = index_from_counts(&[("Gênesis", 50)]);
        let record = PositionRecord {
            last_book: Some("Gn".into()),
            last_chapter: None,
            finished: false,
        };
        assert_eq!(
            Position::resolve(record, &index),
            Err(PositionError::MissingChapter { book: "Gn".into() })
        );
    }

    #[test]
    fn resolve_rejects_chapter_past_count() {
        let index = index_from_counts(&[("Gênesis", 50)]);
        let record = PositionRecord {
            last_book: Some("Gn".into()),
            last_chapter: Some(51),
            finished: false,
        };
        assert!(matches!(
            Position::resolve(record, &index),
            Err(PositionError::ChapterOutOfRange { chapter: 51, count: 50, .. })
        ));
    }

    #[test]
    fn resolve_allows_boundary_chapter() {
        let index = index_from_counts(&[("Gênesis", 50)]);
        let record = PositionRecord {
            last_book: Some("Gn".into()),
            last_chapter: Some(50),
            finished: false,
        };
        let pos = Position::resolve(record, &index).unwrap();
        assert_eq!(pos.chapter, 50);
    }

    #[test]
    fn resolve_passes_unknown_book_through() {
        // Unknown-book is the scheduler's hard error, not corrupt state.
        let index = index_from_counts(&[("Gênesis", 50)]);
        let record = PositionRecord {
            last_book: Some("Zz".into()),
            last_chapter: Some(3),
            finished: false,
        };
        let pos = Position::resolve(record, &index).unwrap();
        assert_eq!(pos.book.as_deref(), Some("Zz"));
    }

    #[test]
    fn clear_removes_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.clear().unwrap();
        store
            .save(&Position::start("Gn"))
            .unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
