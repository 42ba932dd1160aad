//! Quiz session state machine.
//!
//! [`QuizEngine`] owns everything mutable about the quiz:
//!
//! * the single globally active item (`Option<CorpusItem>` — one quiz
//!   at a time for everyone, by design; see DESIGN.md),
//! * the per-user mistake and hint counters,
//! * the random source used for item selection.
//!
//! The state machine is `Idle` → `Awaiting` → `Idle`; resolution is a
//! transition, not a rest state, so "active item present" *is* the
//! `Awaiting` state.  Every operation returns a [`Reply`] of user-facing
//! text (plus a clip handle on start) — the engine never performs I/O
//! itself.
//!
//! Callers must serialize access (see [`runner`](super::runner), which
//! wraps the engine in a single actor task).

use std::collections::HashMap;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::corpus::{Catalog, CorpusItem};
use crate::glossary::Glossary;
use crate::quiz::hints::hint as ladder_hint;
use crate::quiz::matching::{is_exact_match, partial_overlap};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Incorrect submissions a user gets before the answer is revealed and
/// the session closes.  Invariant across all resolution paths.
pub const MISTAKE_LIMIT: u32 = 3;

// ---------------------------------------------------------------------------
// UserProgress
// ---------------------------------------------------------------------------

/// Per-user counters, created lazily on first interaction.
///
/// These outlive individual sessions: only a correct answer, the
/// mistake limit, or an explicit reveal resets them (and `hint_level`
/// additionally resets when that user starts a new quiz).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserProgress {
    /// Incorrect submissions against the current run of sessions.
    pub mistakes: u32,
    /// Next hint-ladder tier for this user.
    pub hint_level: u32,
}

// ---------------------------------------------------------------------------
// Reply
// ---------------------------------------------------------------------------

/// What the engine hands back to the transport for one event.
///
/// `messages` are delivered in order; `clip` (set on a successful
/// start) is an opaque audio handle for the transport to send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// User-facing text, in delivery order.
    pub messages: Vec<String>,
    /// Audio clip to deliver alongside the prompt, when starting.
    pub clip: Option<PathBuf>,
}

impl Reply {
    fn text(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            clip: None,
        }
    }
}

// ---------------------------------------------------------------------------
// QuizEngine
// ---------------------------------------------------------------------------

/// The quiz session engine.  See the module docs for the state model.
pub struct QuizEngine {
    catalog: Catalog,
    glossary: Glossary,
    /// The single active item — `Some` is the `Awaiting` state.
    active: Option<CorpusItem>,
    progress: HashMap<String, UserProgress>,
    rng: StdRng,
}

impl QuizEngine {
    /// Engine with an entropy-seeded random source (production).
    pub fn new(catalog: Catalog, glossary: Glossary) -> Self {
        Self::with_rng(catalog, glossary, StdRng::from_entropy())
    }

    /// Engine with a fixed seed — item selection is reproducible.
    pub fn with_seed(catalog: Catalog, glossary: Glossary, seed: u64) -> Self {
        Self::with_rng(catalog, glossary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, glossary: Glossary, rng: StdRng) -> Self {
        Self {
            catalog,
            glossary,
            active: None,
            progress: HashMap::new(),
            rng,
        }
    }

    /// `true` while a quiz item is awaiting an answer.
    pub fn is_awaiting(&self) -> bool {
        self.active.is_some()
    }

    /// Sentence of the active item, if any (mainly for tests).
    pub fn active_sentence(&self) -> Option<&str> {
        self.active.as_ref().map(|i| i.sentence.as_str())
    }

    /// Counters for `user`, if that user has interacted before.
    pub fn progress(&self, user: &str) -> Option<UserProgress> {
        self.progress.get(user).copied()
    }

    // -----------------------------------------------------------------------
    // Start
    // -----------------------------------------------------------------------

    /// Start a new quiz from the `selector` pool (`"easy"`, `"normal"`,
    /// `"hard"`, or `"all"`).
    ///
    /// An unresolved active item is surfaced (its answer emitted) before
    /// being replaced — never silently overwritten.  An empty pool
    /// reports the condition as text and leaves the engine state
    /// untouched: an in-flight session survives a start that cannot
    /// proceed.
    pub fn start(&mut self, selector: &str, user: &str) -> Reply {
        let mut messages = Vec::new();

        if let Some(previous) = &self.active {
            log::info!("start while awaiting — surfacing unresolved answer");
            messages.push(format!(
                "The previous clip was never solved. The answer was: {}",
                previous.sentence
            ));
        }

        let pool = self.catalog.pool(selector);
        if pool.is_empty() {
            messages.push(format!("No corpus items loaded for level: {selector}"));
            return Reply {
                messages,
                clip: None,
            };
        }

        let item = pool[self.rng.gen_range(0..pool.len())].clone();
        log::info!(
            "quiz started ({selector}, {} words, {})",
            item.sentence.split_whitespace().count(),
            item.difficulty.label()
        );

        self.progress_mut(user).hint_level = 0;
        let clip = item.clip.clone();
        self.active = Some(item);

        messages.push("Listen to the clip and type the sentence!".to_string());
        Reply {
            messages,
            clip: Some(clip),
        }
    }

    // -----------------------------------------------------------------------
    // Submit
    // -----------------------------------------------------------------------

    /// Evaluate a transcription attempt by `user`.
    pub fn submit(&mut self, text: &str, user: &str) -> Reply {
        let Some(item) = self.active.clone() else {
            return Reply::text(NO_ACTIVE_QUIZ);
        };

        if is_exact_match(text, &item.sentence) {
            log::info!("correct answer by {user}");
            self.progress_mut(user).mistakes = 0;
            self.active = None;
            return Reply::text(format!(
                "Correct! 🎉{}",
                self.word_info_block(&item.sentence)
            ));
        }

        let overlap = partial_overlap(text, &item.sentence);
        let progress = self.progress_mut(user);
        progress.mistakes += 1;
        let mistakes = progress.mistakes;
        let remaining = MISTAKE_LIMIT.saturating_sub(mistakes);

        let mut message = String::new();
        if !overlap.is_empty() {
            message.push_str(&format!("Matched words: {}\n", overlap.join(", ")));
        }

        if mistakes >= MISTAKE_LIMIT {
            log::info!("mistake limit reached by {user} — revealing answer");
            message.push_str(&format!(
                "Incorrect. The answer was: {}{}",
                item.sentence,
                self.word_info_block(&item.sentence)
            ));
            self.progress_mut(user).mistakes = 0;
            self.active = None;
        } else if overlap.is_empty() {
            message.push_str(&format!("Incorrect. Attempts remaining: {remaining}"));
        } else {
            message.push_str(&format!("Still incorrect. Attempts remaining: {remaining}"));
        }

        Reply::text(message)
    }

    // -----------------------------------------------------------------------
    // Hint
    // -----------------------------------------------------------------------

    /// Emit the next hint-ladder tier for `user` and advance their
    /// counter.  When the ladder reveals the full sentence, the session
    /// closes.
    pub fn hint(&mut self, user: &str) -> Reply {
        let Some(item) = self.active.clone() else {
            return Reply::text(NO_ACTIVE_QUIZ);
        };

        let level = self.progress_mut(user).hint_level;
        let hint = ladder_hint(&item.sentence, level);
        // The counter advances on every hint request, exhausted or not.
        self.progress_mut(user).hint_level = level + 1;

        if hint.exhausted {
            log::info!("hint ladder exhausted — closing session");
            self.active = None;
        }

        Reply::text(hint.text)
    }

    // -----------------------------------------------------------------------
    // Reveal
    // -----------------------------------------------------------------------

    /// Reveal the answer on request and close the session, resetting
    /// both counters for `user`.
    pub fn reveal(&mut self, user: &str) -> Reply {
        let Some(item) = self.active.take() else {
            return Reply::text(NO_ACTIVE_QUIZ);
        };

        log::info!("answer revealed on request by {user}");
        let progress = self.progress_mut(user);
        progress.mistakes = 0;
        progress.hint_level = 0;

        Reply::text(format!(
            "Answer: {}{}",
            item.sentence,
            self.word_info_block(&item.sentence)
        ))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn progress_mut(&mut self, user: &str) -> &mut UserProgress {
        self.progress.entry(user.to_string()).or_default()
    }

    /// Glossary block appended to success/reveal messages, or empty
    /// when no glossary is loaded.
    fn word_info_block(&self, sentence: &str) -> String {
        if self.glossary.is_empty() {
            String::new()
        } else {
            format!("\n\nWord info:\n{}", self.glossary.format_sentence(sentence))
        }
    }
}

const NO_ACTIVE_QUIZ: &str = "No active quiz — start a new one first.";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
