//! Corpus index: the fixed, ordered catalog of books and chapters.
//!
//! Canonical reading order is the insertion order discovered at load time
//! (old testament first, then new, books sorted within each). The order is
//! kept in an explicit list next to the map so `next_book` never depends on
//! incidental map iteration.

mod abbrev;
mod scan;

pub use abbrev::{abbreviation_for, BOOK_ABBREVIATIONS};
pub use scan::{scan_corpus, BookEntry, TESTAMENTS};

use anyhow::Result;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    /// Requested book id is not in the index. Never silently defaulted.
    #[error("book not found in corpus: {0}")]
    NotFound(String),
    /// Index has zero books; scheduling over it is undefined.
    #[error("corpus has no books")]
    Empty,
}

/// Chapter lookup key: zero-padded two-digit string (`7` -> `"07"`).
pub fn chapter_key(chapter: u32) -> String {
    format!("{chapter:02}")
}

/// One book: display name plus chapter key -> text file path.
#[derive(Debug, Clone)]
pub struct Book {
    pub name: String,
    chapters: IndexMap<String, PathBuf>,
}

impl Book {
    pub fn chapter_count(&self) -> u32 {
        self.chapters.len() as u32
    }

    /// Path of the chapter's text file, or None if the book has no such
    /// chapter.
    pub fn chapter_path(&self, chapter: u32) -> Option<&Path> {
        self.chapters.get(&chapter_key(chapter)).map(PathBuf::as_path)
    }
}

/// Ordered book catalog keyed by short code.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    books: IndexMap<String, Book>,
    order: Vec<String>,
}

impl CorpusIndex {
    /// Builds the index from a book listing, preserving listing order as
    /// canonical order. Duplicate identifiers keep the first occurrence.
    pub fn from_listing(entries: Vec<BookEntry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            let code = abbreviation_for(&entry.name).to_string();
            if index.books.contains_key(&code) {
                tracing::warn!(book = %entry.name, code = %code, "duplicate book identifier; keeping first");
                continue;
            }
            let chapters = entry
                .chapters
                .into_iter()
                .map(|(n, path)| (chapter_key(n), path))
                .collect();
            index.order.push(code.clone());
            index.books.insert(
                code,
                Book {
                    name: entry.name,
                    chapters,
                },
            );
        }
        index
    }

    /// Walks the corpus tree under `root` and builds the index.
    pub fn load(root: &Path) -> Result<Self> {
        let entries = scan::scan_corpus(root)?;
        let index = Self::from_listing(entries);
        tracing::info!(books = index.len(), "corpus loaded from {}", root.display());
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Book record for `book_id`, or `NotFound`.
    pub fn get(&self, book_id: &str) -> Result<&Book, CorpusError> {
        self.books
            .get(book_id)
            .ok_or_else(|| CorpusError::NotFound(book_id.to_string()))
    }

    /// Identifier of the book immediately after `book_id` in canonical
    /// order; `Ok(None)` when `book_id` is the last book.
    pub fn next_book(&self, book_id: &str) -> Result<Option<&str>, CorpusError> {
        let pos = self
            .order
            .iter()
            .position(|id| id == book_id)
            .ok_or_else(|| CorpusError::NotFound(book_id.to_string()))?;
        Ok(self.order.get(pos + 1).map(String::as_str))
    }

    /// First book in canonical order, or `Empty`.
    pub fn first_book(&self) -> Result<&str, CorpusError> {
        self.order.first().map(String::as_str).ok_or(CorpusError::Empty)
    }

    /// Books in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Book)> {
        self.order
            .iter()
            .filter_map(|id| self.books.get(id).map(|b| (id.as_str(), b)))
    }

    /// Total chapter count across all books.
    pub fn total_chapters(&self) -> u32 {
        self.books.values().map(Book::chapter_count).sum()
    }
}
