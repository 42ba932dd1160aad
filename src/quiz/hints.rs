//! Progressive hint ladder.
//!
//! [`hint`] is a pure function from a sentence and a per-user hint
//! counter to a hint string.  Each tier reveals a little more:
//!
//! | level | hint |
//! |-------|------|
//! | 0 | word count |
//! | 1 | per-word character lengths + blank markers |
//! | 2 | a word-class tag per word (fixed placeholder, see below) |
//! | 3 | first character of each word + blank markers |
//! | ≥ 4 | first `level - 3` words verbatim, rest masked; once that |
//! |     | reaches the full sentence the ladder is exhausted |
//!
//! The level-2 tier does **not** perform real part-of-speech tagging:
//! it emits the same fixed tag for every word.  That is a deliberate,
//! documented simplification carried over from the original feature —
//! changing it would change observable behavior.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// One blank marker per hidden character.  The backslash keeps the
/// underscore literal in markdown-rendering chat clients.
const MASK: &str = "\\_";

/// Fixed placeholder emitted by the level-2 "word class" tier.
const PLACEHOLDER_CLASS: &str = "noun";

// ---------------------------------------------------------------------------
// Hint
// ---------------------------------------------------------------------------

/// A single rung of the hint ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// User-facing hint text.
    pub text: String,
    /// `true` when the hint revealed the full sentence — the session
    /// has nothing left to ask and must close.
    pub exhausted: bool,
}

// ---------------------------------------------------------------------------
// hint
// ---------------------------------------------------------------------------

/// Compute the hint for `sentence` at hint counter `level`.
///
/// Pure and total: a zero-length word (which the ≥ 3-word catalog
/// invariant rules out anyway) yields an empty mask rather than an
/// error.
pub fn hint(sentence: &str, level: u32) -> Hint {
    let words: Vec<&str> = sentence.split_whitespace().collect();

    match level {
        0 => Hint {
            text: format!("Word count: {}", words.len()),
            exhausted: false,
        },
        1 => {
            let counts: Vec<String> =
                words.iter().map(|w| w.chars().count().to_string()).collect();
            let masks: Vec<String> = words.iter().map(|w| full_mask(w)).collect();
            Hint {
                text: format!(
                    "Word lengths: {} {}",
                    counts.join(", "),
                    masks.join(" ")
                ),
                exhausted: false,
            }
        }
        2 => {
            let classes = vec![PLACEHOLDER_CLASS; words.len()];
            Hint {
                text: format!("Word classes: {}", classes.join(", ")),
                exhausted: false,
            }
        }
        3 => Hint {
            text: format!("Word initials: {}", initials_line(&words).join(" ")),
            exhausted: false,
        },
        _ => {
            let reveal = (level - 3) as usize;
            if reveal < words.len() {
                let shown = words[..reveal].join(" ");
                let masked = initials_line(&words[reveal..]).join(" ");
                Hint {
                    text: format!("First {reveal} words: {shown} {masked}"),
                    exhausted: false,
                }
            } else {
                Hint {
                    text: format!("That was the whole sentence. Answer: {sentence}"),
                    exhausted: true,
                }
            }
        }
    }
}

/// Mask every character of `word`.
fn full_mask(word: &str) -> String {
    MASK.repeat(word.chars().count())
}

/// First character of each word followed by masks for the remainder.
fn initials_line(words: &[&str]) -> Vec<String> {
    words
        .iter()
        .map(|w| match w.chars().next() {
            Some(first) => format!("{first}{}", MASK.repeat(w.chars().count() - 1)),
            None => String::new(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "saya pergi ke sekolah";

    #[test]
    fn level_0_reports_word_count() {
        let h = hint(SENTENCE, 0);
        assert_eq!(h.text, "Word count: 4");
        assert!(!h.exhausted);
    }

    #[test]
    fn level_1_reports_lengths_and_masks() {
        let h = hint(SENTENCE, 1);
        assert!(h.text.starts_with("Word lengths: 4, 5, 2, 7"));
        // "ke" masks to two blank markers.
        assert!(h.text.contains("\\_\\_"));
        assert!(!h.exhausted);
    }

    #[test]
    fn level_2_is_a_fixed_placeholder_per_word() {
        let h = hint(SENTENCE, 2);
        assert_eq!(h.text, "Word classes: noun, noun, noun, noun");
        assert!(!h.exhausted);
    }

    #[test]
    fn level_3_shows_initials() {
        let h = hint(SENTENCE, 3);
        assert_eq!(
            h.text,
            "Word initials: s\\_\\_\\_ p\\_\\_\\_\\_ k\\_ s\\_\\_\\_\\_\\_\\_"
        );
        assert!(!h.exhausted);
    }

    #[test]
    fn level_4_reveals_one_word() {
        let h = hint(SENTENCE, 4);
        assert_eq!(
            h.text,
            "First 1 words: saya p\\_\\_\\_\\_ k\\_ s\\_\\_\\_\\_\\_\\_"
        );
        assert!(!h.exhausted);
    }

    #[test]
    fn level_6_reveals_three_words() {
        let h = hint(SENTENCE, 6);
        assert!(h.text.contains("saya pergi ke"));
        assert!(!h.exhausted);
    }

    #[test]
    fn reveal_equal_to_word_count_exhausts() {
        // 4 words → level 7 is the first exhausting level.
        let h = hint(SENTENCE, 7);
        assert!(h.exhausted);
        assert!(h.text.contains(SENTENCE));
    }

    #[test]
    fn any_level_past_exhaustion_stays_exhausted() {
        for level in 7..20 {
            let h = hint(SENTENCE, level);
            assert!(h.exhausted, "level {level} should exhaust");
            assert!(h.text.contains(SENTENCE));
        }
    }

    #[test]
    fn exhaustion_boundary_for_any_word_count() {
        // For an n-word sentence, level n + 3 always reveals everything.
        for sentence in ["satu dua tiga", "a b c d e f g h i j"] {
            let n = sentence.split_whitespace().count() as u32;
            assert!(!hint(sentence, n + 2).exhausted);
            assert!(hint(sentence, n + 3).exhausted);
        }
    }

    #[test]
    fn multibyte_words_mask_per_character() {
        // Character count, not byte count, drives the mask width.
        let h = hint("héllo wörld aou", 3);
        assert_eq!(
            h.text,
            "Word initials: h\\_\\_\\_\\_ w\\_\\_\\_\\_ a\\_\\_"
        );
    }

    #[test]
    fn empty_sentence_does_not_panic() {
        let h = hint("", 0);
        assert_eq!(h.text, "Word count: 0");
        // No words means any reveal level ≥ 4 already covers everything.
        assert!(hint("", 4).exhausted);
    }
}
