//! Word list loading
//!
//! Reads a dictionary file into memory, one word per line. Words are trimmed
//! and lower-cased at ingestion so the engine can assume canonical casing;
//! blank lines are skipped. Duplicates are neither assumed nor removed.

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Load a word list from a UTF-8 text file.
///
/// An unreadable source is a fatal boundary error.
pub fn load_words(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {:?}", path))?;

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    log::debug!("loaded {} words from {:?}", words.len(), path);

    Ok(words)
}
