//! Static trivia questions ("question of the day").
//!
//! [`QuestionBank`] loads a fixed list from `questions.json`:
//!
//! ```json
//! [
//!   { "type": "vocab", "question": "What does 'makan' mean?",
//!     "choices": ["to eat", "to drink"], "answer": "to eat" },
//!   { "type": "free", "question": "Translate: saya suka kopi" }
//! ]
//! ```
//!
//! Multiple-choice questions are rendered with `A.`, `B.`, … option
//! labels.  A starter question list ships with the crate and is used
//! whenever no `questions.json` is found on disk, so the feature works
//! out of the box.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One trivia question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question category, e.g. `"vocab"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The question text.
    pub question: String,
    /// Choices for multiple-choice questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    /// The expected answer, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Question {
    /// Render the question with lettered choices for display.
    pub fn render(&self) -> String {
        let mut text = format!("📘 Question of the day\n{}", self.question);
        for (i, choice) in self.choices.iter().enumerate() {
            let letter = (b'A' + (i % 26) as u8) as char;
            text.push_str(&format!("\n{letter}. {choice}"));
        }
        text
    }
}

// ---------------------------------------------------------------------------
// QuestionBank
// ---------------------------------------------------------------------------

/// Starter question list shipped with the crate (`data/questions.json`).
const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.json");

/// The loaded question list plus its own random source.
pub struct QuestionBank {
    questions: Vec<Question>,
    rng: StdRng,
}

impl QuestionBank {
    /// Load questions from `path`, falling back to the built-in starter
    /// list when the file is missing or unparseable (logged, not fatal).
    pub fn load_or_default(path: &Path) -> Self {
        let questions = if path.exists() {
            let data = std::fs::read_to_string(path).unwrap_or_default();
            match serde_json::from_str::<Vec<Question>>(&data) {
                Ok(list) => {
                    log::info!("Loaded {} trivia questions", list.len());
                    list
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse questions {}: {e} — using built-in list",
                        path.display()
                    );
                    Self::builtin_questions()
                }
            }
        } else {
            log::info!(
                "No questions file at {} — using built-in list",
                path.display()
            );
            Self::builtin_questions()
        };
        Self {
            questions,
            rng: StdRng::from_entropy(),
        }
    }

    fn builtin_questions() -> Vec<Question> {
        match serde_json::from_str(BUILTIN_QUESTIONS) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Built-in question list is invalid: {e}");
                Vec::new()
            }
        }
    }

    /// Bank over in-memory questions with a fixed seed (tests).
    pub fn with_seed(questions: Vec<Question>, seed: u64) -> Self {
        Self {
            questions,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns `true` when no questions are loaded.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Pick a random question and render it, or `None` when empty.
    pub fn daily_question(&mut self) -> Option<String> {
        if self.questions.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..self.questions.len());
        Some(self.questions[idx].render())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
