//! Corpus items and the difficulty-partitioned catalog.
//!
//! [`Catalog::build`] is the partitioner: a pure transformation from
//! parsed corpus records into three word-count-derived difficulty
//! buckets.  Items shorter than three words never enter the catalog,
//! so every downstream consumer can rely on the ≥ 3-word invariant.
//! The catalog is built once at startup and read-only afterwards.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Word-count-derived difficulty of a corpus item.
///
/// Derived once at catalog build time and never recomputed:
/// ≤ 5 words → `Easy`, ≥ 10 words → `Hard`, everything between →
/// `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// All difficulties in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Classify a sentence by its whitespace-tokenized word count.
    pub fn classify(word_count: usize) -> Self {
        match word_count {
            0..=5 => Difficulty::Easy,
            10.. => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }

    /// Lowercase selector string, as used in chat commands and config.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// CorpusRecord / CorpusItem
// ---------------------------------------------------------------------------

/// A raw corpus record as produced by the loader, before partitioning.
#[derive(Debug, Clone)]
pub struct CorpusRecord {
    /// Path (or opaque handle) to the audio clip.
    pub clip: PathBuf,
    /// The reference transcript.
    pub sentence: String,
}

/// A quiz-ready transcript/audio pair.  Immutable once loaded.
#[derive(Debug, Clone)]
pub struct CorpusItem {
    /// Path (or opaque handle) to the audio clip.
    pub clip: PathBuf,
    /// The reference transcript — always ≥ 3 whitespace-separated words.
    pub sentence: String,
    /// Word-count-derived difficulty, fixed at build time.
    pub difficulty: Difficulty,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Difficulty-partitioned, read-only collection of [`CorpusItem`]s.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    buckets: HashMap<Difficulty, Vec<CorpusItem>>,
}

impl Catalog {
    /// Partition `records` into difficulty buckets.
    ///
    /// Records with fewer than 3 words are discarded.  Relative input
    /// order is preserved within each bucket (selection is random at
    /// quiz time; order only matters for deterministic tests).  An
    /// empty input yields an empty catalog, never an error — callers
    /// report "no items for level" as a user-facing condition.
    pub fn build(records: impl IntoIterator<Item = CorpusRecord>) -> Self {
        let mut buckets: HashMap<Difficulty, Vec<CorpusItem>> = HashMap::new();

        for record in records {
            let word_count = record.sentence.split_whitespace().count();
            if word_count < 3 {
                continue;
            }
            let difficulty = Difficulty::classify(word_count);
            buckets.entry(difficulty).or_default().push(CorpusItem {
                clip: record.clip,
                sentence: record.sentence,
                difficulty,
            });
        }

        Self { buckets }
    }

    /// Items of one difficulty, in input order.
    pub fn bucket(&self, difficulty: Difficulty) -> &[CorpusItem] {
        self.buckets.get(&difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The selection pool for a difficulty selector string.
    ///
    /// `"all"` (the default) unions every bucket in easy → normal →
    /// hard order.  An unknown selector yields an empty pool — the
    /// caller reports it, mirroring a missing difficulty bucket.
    pub fn pool(&self, selector: &str) -> Vec<&CorpusItem> {
        if selector == "all" {
            Difficulty::ALL
                .iter()
                .flat_map(|d| self.bucket(*d))
                .collect()
        } else {
            match Difficulty::from_str(selector) {
                Ok(d) => self.bucket(d).iter().collect(),
                Err(()) => Vec::new(),
            }
        }
    }

    /// Total number of items across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns `true` when no bucket holds any item.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
