//! Filesystem walker for the corpus tree.
//!
//! Layout: `<root>/<testament>/<book dir>/<Book Name> <chapter>.txt`, with
//! the two testament directories fixed and book directories optionally
//! carrying a numeric ordering prefix (`01 Gênesis`). Listings are sorted
//! so the discovered order is deterministic.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Testament directory names, in canonical reading order.
pub const TESTAMENTS: [&str; 2] = ["Antigo Testamento", "Novo Testamento"];

/// Chapter files look like `Gênesis 1.txt`; the trailing number is the
/// chapter marker. Book names may contain spaces (`I Samuel 12.txt`).
static CHAPTER_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\s(\d+)\.txt$").expect("chapter pattern"));

/// Numeric ordering prefix on book directories, stripped before lookup.
static DIR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s+(.+)$").expect("prefix pattern"));

/// One book as discovered on disk: display name plus chapters in
/// ascending numeric order.
#[derive(Debug, Clone)]
pub struct BookEntry {
    pub name: String,
    pub chapters: Vec<(u32, PathBuf)>,
}

/// Walks both testament directories under `root` and returns the book
/// listing in canonical order (old testament first, books sorted by
/// directory name within each).
pub fn scan_corpus(root: &Path) -> Result<Vec<BookEntry>> {
    let mut entries = Vec::new();
    for testament in TESTAMENTS {
        let dir = root.join(testament);
        let books = scan_testament(&dir)
            .with_context(|| format!("scan testament: {}", dir.display()))?;
        entries.extend(books);
    }
    Ok(entries)
}

fn scan_testament(dir: &Path) -> Result<Vec<BookEntry>> {
    let mut book_dirs: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    book_dirs.sort();

    let mut entries = Vec::with_capacity(book_dirs.len());
    for book_dir in book_dirs {
        let raw = match book_dir.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        let name = strip_dir_prefix(&raw).to_string();
        let chapters = scan_chapters(&book_dir)
            .with_context(|| format!("scan book: {}", book_dir.display()))?;
        entries.push(BookEntry { name, chapters });
    }
    Ok(entries)
}

/// Strips a leading `NN ` ordering prefix from a book directory name.
fn strip_dir_prefix(raw: &str) -> &str {
    DIR_PREFIX
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw)
}

fn scan_chapters(dir: &Path) -> Result<Vec<(u32, PathBuf)>> {
    let mut chapters = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(caps) = CHAPTER_FILE.captures(file_name) {
            let number: u32 = caps[2]
                .parse()
                .with_context(|| format!("chapter number in {file_name}"))?;
            chapters.push((number, path));
        }
    }
    chapters.sort_by_key(|(n, _)| *n);
    Ok(chapters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_chapter(dir: &Path, book: &str, chapter: u32) {
        let path = dir.join(format!("{book} {chapter}.txt"));
        let mut f = File::create(path).unwrap();
        writeln!(f, "{book} {chapter}").unwrap();
    }

    #[test]
    fn scans_testaments_in_order_with_prefixes_stripped() {
        let root = tempfile::tempdir().unwrap();
        let old = root.path().join("Antigo Testamento");
        let new = root.path().join("Novo Testamento");

        let gn = old.join("01 Gênesis");
        fs::create_dir_all(&gn).unwrap();
        write_chapter(&gn, "Gênesis", 1);
        write_chapter(&gn, "Gênesis", 2);

        let ex = old.join("02 Êxodo");
        fs::create_dir_all(&ex).unwrap();
        write_chapter(&ex, "Êxodo", 1);

        let mt = new.join("01 Mateus");
        fs::create_dir_all(&mt).unwrap();
        write_chapter(&mt, "Mateus", 1);

        let entries = scan_corpus(root.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Gênesis", "Êxodo", "Mateus"]);
        assert_eq!(entries[0].chapters.len(), 2);
        assert_eq!(entries[0].chapters[0].0, 1);
        assert_eq!(entries[0].chapters[1].0, 2);
    }

    #[test]
    fn chapters_sorted_numerically_not_lexically() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("Antigo Testamento").join("Salmos");
        fs::create_dir_all(&dir).unwrap();
        for n in [10, 2, 1] {
            write_chapter(&dir, "Salmos", n);
        }
        fs::create_dir_all(root.path().join("Novo Testamento")).unwrap();

        let entries = scan_corpus(root.path()).unwrap();
        let numbers: Vec<u32> = entries[0].chapters.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, [1, 2, 10]);
    }

    #[test]
    fn non_chapter_files_ignored() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("Antigo Testamento").join("Gênesis");
        fs::create_dir_all(&dir).unwrap();
        write_chapter(&dir, "Gênesis", 1);
        File::create(dir.join("README.md")).unwrap();
        File::create(dir.join("notes.txt")).unwrap();
        fs::create_dir_all(root.path().join("Novo Testamento")).unwrap();

        let entries = scan_corpus(root.path()).unwrap();
        assert_eq!(entries[0].chapters.len(), 1);
    }

    #[test]
    fn multi_word_book_names_parse() {
        assert!(CHAPTER_FILE.is_match("I Samuel 12.txt"));
        let caps = CHAPTER_FILE.captures("I Samuel 12.txt").unwrap();
        assert_eq!(&caps[1], "I Samuel");
        assert_eq!(&caps[2], "12");
    }

    #[test]
    fn missing_testament_dir_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(scan_corpus(root.path()).is_err());
    }
}
