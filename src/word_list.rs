//! `word_list` — Module to load and preprocess the fill vocabulary.
//!
//! The input is plain text with one word per line. Parsing:
//! - Each line is trimmed of surrounding whitespace.
//! - Blank lines are skipped.
//! - Words are normalized to uppercase.
//! - The final list is deduplicated and sorted by length first, then
//!   alphabetically, so iteration order is reproducible.
//!
//! Words are stored as `Rc<str>`: the solver clones candidate words into
//! every variable's domain and into assignments, and reference-counted
//! slices make those clones cheap.
//!
//! An empty result is not an error here. A puzzle with no usable words is
//! simply unsatisfiable, which the solver reports as a normal failure.
//!
//! The public API provides:
//! - `parse_from_str(...)` — works on in-memory text.
//! - `load_from_path(...)` — convenience method to read from a file path.

use std::rc::Rc;

use crate::errors::CrossfillError;

/// A processed, ready-to-use vocabulary.
///
/// The `words` vector contains all distinct normalized words, already
/// sorted by (length, alphabetical).
#[derive(Debug, Clone)]
pub struct WordList {
    /// Uppercase words, e.g. `["ART", "CAR", "CAT", "EAGLE", ...]`
    pub words: Vec<Rc<str>>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut entries: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_uppercase())
                }
            })
            .collect();

        // Sort alphabetically first so dedup() sees duplicates adjacent,
        // then re-sort into the final (length, alphabetical) order.
        entries.sort();
        entries.dedup();
        entries.sort_by(|a, b| match a.len().cmp(&b.len()) {
            std::cmp::Ordering::Equal => a.cmp(b),
            other => other,
        });

        let words = entries.into_iter().map(Rc::from).collect();
        WordList { words }
    }

    /// Read a word list file and parse it.
    ///
    /// # Errors
    ///
    /// Returns `WordListRead` if the file at `path` cannot be read.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, CrossfillError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| CrossfillError::WordListRead {
            path: path_ref.display().to_string(),
            source: e,
        })?;
        Ok(Self::parse_from_str(&data))
    }
}
