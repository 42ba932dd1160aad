//! Speech corpus: records, difficulty catalog, and the manifest loader.
//!
//! The loader turns a Common Voice `validated.tsv` into
//! [`CorpusRecord`]s; [`Catalog::build`] partitions those into
//! word-count difficulty buckets.  Both steps run once at startup; the
//! resulting [`Catalog`] is read-only for the life of the process.

pub mod catalog;
pub mod loader;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use catalog::{Catalog, CorpusItem, CorpusRecord, Difficulty};
pub use loader::{load_manifest, parse_manifest, CorpusError};
