//! The quiz session engine.
//!
//! This module is the core of Simak:
//!
//! * [`matching`] — answer normalization, exact match, partial overlap.
//! * [`hints`] — the progressive hint ladder.
//! * [`session`] — the single-slot session state machine and per-user
//!   progress counters.
//! * [`runner`] — the serialized async event loop wrapping the engine.
//!
//! The engine consumes an already-built [`Catalog`](crate::corpus::Catalog)
//! and emits plain [`Reply`] payloads; it performs no I/O and knows
//! nothing about any particular chat transport.

pub mod hints;
pub mod matching;
pub mod runner;
pub mod session;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use hints::{hint, Hint};
pub use matching::{is_exact_match, normalize, partial_overlap};
pub use runner::{run, QuizCommand};
pub use session::{QuizEngine, Reply, UserProgress, MISTAKE_LIMIT};
