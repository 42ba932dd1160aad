//! Bilingual word glossary.
//!
//! [`Glossary`] maps an Indonesian word to its meaning and synonyms,
//! loaded from a JSON file of the form:
//!
//! ```json
//! { "saya": { "meaning": "I / me", "synonyms": "aku, gue" } }
//! ```
//!
//! After a correct answer or a reveal, the engine appends a per-word
//! info block for the answer sentence via [`Glossary::format_sentence`].
//! A starter dictionary of common Indonesian words ships with the crate
//! and is used whenever no `glossary.json` is found on disk, so word
//! info works out of the box.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GlossaryEntry
// ---------------------------------------------------------------------------

/// Meaning and synonyms for one word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// Translation / gloss of the word.
    pub meaning: String,
    /// Comma-separated synonyms or near-synonyms.
    pub synonyms: String,
}

// ---------------------------------------------------------------------------
// Glossary
// ---------------------------------------------------------------------------

/// Starter dictionary shipped with the crate (`data/glossary.json`).
const BUILTIN_GLOSSARY: &str = include_str!("../../data/glossary.json");

/// Word → entry lookup table.  Read-only after loading.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: HashMap<String, GlossaryEntry>,
}

impl Glossary {
    /// Load a glossary from `path`, falling back to the built-in
    /// starter dictionary when the file is missing or unparseable
    /// (logged, not fatal).
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!(
                "No glossary at {} — using built-in dictionary",
                path.display()
            );
            return Self::builtin();
        }
        let data = std::fs::read_to_string(path).unwrap_or_default();
        match serde_json::from_str::<HashMap<String, GlossaryEntry>>(&data) {
            Ok(entries) => {
                log::info!("Loaded {} glossary entries", entries.len());
                Self { entries }
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse glossary {}: {e} — using built-in dictionary",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    /// The starter dictionary compiled into the binary.
    pub fn builtin() -> Self {
        match serde_json::from_str::<HashMap<String, GlossaryEntry>>(BUILTIN_GLOSSARY) {
            Ok(entries) => Self { entries },
            Err(e) => {
                log::warn!("Built-in glossary is invalid: {e}");
                Self::default()
            }
        }
    }

    /// Build a glossary from in-memory entries (useful for tests).
    pub fn from_entries(entries: HashMap<String, GlossaryEntry>) -> Self {
        Self { entries }
    }

    /// Look up a word, case-insensitively.
    pub fn lookup(&self, word: &str) -> Option<&GlossaryEntry> {
        self.entries.get(&word.to_lowercase())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the glossary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `word: meaning (synonyms)` line per word of `sentence`.
    ///
    /// Trailing sentence punctuation is trimmed from each word before
    /// lookup; words absent from the glossary get a placeholder entry
    /// rather than being dropped.
    pub fn format_sentence(&self, sentence: &str) -> String {
        sentence
            .split_whitespace()
            .map(|word| {
                let clean = word.trim_end_matches(['.', ',', '!', '?']);
                match self.lookup(clean) {
                    Some(entry) => {
                        format!("{clean}: {} ({})", entry.meaning, entry.synonyms)
                    }
                    None => format!("{clean}: unknown (-)"),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
