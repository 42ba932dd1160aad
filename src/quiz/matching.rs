//! Answer normalization and matching.
//!
//! All comparison between a user's transcription attempt and the target
//! sentence goes through [`normalize`] first, so case and sentence
//! punctuation never count against the user.
//!
//! [`partial_overlap`] powers the "you got these words right" feedback:
//! it returns the candidate words that also occur in the target, first
//! occurrence only, in the order the user typed them.  An empty result
//! means no word matched — it is a valid outcome, not an error.

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

/// Canonicalize `text` for comparison: lowercase, strip `.` `!` `?` `,`,
/// and trim surrounding whitespace.
///
/// Interior whitespace is left alone beyond what whitespace tokenization
/// later collapses.  Total function — never fails, and idempotent:
///
/// ```
/// use simak::quiz::normalize;
///
/// assert_eq!(normalize("Saya, suka makan!"), "saya suka makan");
/// assert_eq!(normalize(&normalize("Apa Kabar?")), normalize("Apa Kabar?"));
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | '!' | '?' | ','))
        .collect::<String>()
        .trim()
        .to_string()
}

// ---------------------------------------------------------------------------
// is_exact_match
// ---------------------------------------------------------------------------

/// Returns `true` when `candidate` and `target` are equal after
/// [`normalize`].  Symmetric by construction.
pub fn is_exact_match(candidate: &str, target: &str) -> bool {
    normalize(candidate) == normalize(target)
}

// ---------------------------------------------------------------------------
// partial_overlap
// ---------------------------------------------------------------------------

/// Words of `candidate` that also appear in `target`, after normalizing
/// and tokenizing both on whitespace.
///
/// Each word is reported at most once (dedup by word, not position), in
/// the order of its first appearance in the candidate.  Returns an empty
/// `Vec` when nothing matches.
pub fn partial_overlap(candidate: &str, target: &str) -> Vec<String> {
    let candidate = normalize(candidate);
    let target = normalize(target);

    let target_words: std::collections::HashSet<&str> =
        target.split_whitespace().collect();

    let mut seen = std::collections::HashSet::new();
    let mut matched = Vec::new();
    for word in candidate.split_whitespace() {
        if target_words.contains(word) && seen.insert(word) {
            matched.push(word.to_string());
        }
    }
    matched
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- normalize ---

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("Saya Suka"), "saya suka");
    }

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("saya, suka. makan!?"), "saya suka makan");
    }

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize("  saya suka  "), "saya suka");
    }

    #[test]
    fn normalize_keeps_interior_spacing() {
        // Interior runs of spaces are not collapsed by normalize itself.
        assert_eq!(normalize("saya  suka"), "saya  suka");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["Saya, suka makan!", "  APA Kabar?  ", "", "a.b,c!d?e"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" .!?, "), "");
    }

    // --- is_exact_match ---

    #[test]
    fn exact_match_ignores_case_and_punctuation() {
        assert!(is_exact_match("Saya, suka makan!", "saya suka makan"));
    }

    #[test]
    fn exact_match_rejects_different_sentences() {
        assert!(!is_exact_match("saya suka minum", "saya suka makan"));
    }

    #[test]
    fn exact_match_is_symmetric() {
        let pairs = [
            ("Saya, suka makan!", "saya suka makan"),
            ("apa kabar", "Apa Kabar?"),
            ("x", "y"),
        ];
        for (a, b) in pairs {
            assert_eq!(is_exact_match(a, b), is_exact_match(b, a));
        }
    }

    // --- partial_overlap ---

    #[test]
    fn overlap_preserves_candidate_order() {
        // Spec scenario: target "saya pergi ke sekolah", candidate
        // "saya ke mana" → ["saya", "ke"].
        let overlap = partial_overlap("saya ke mana", "saya pergi ke sekolah");
        assert_eq!(overlap, vec!["saya", "ke"]);
    }

    #[test]
    fn overlap_dedups_repeated_words() {
        let overlap = partial_overlap("ke ke ke saya", "saya pergi ke sekolah");
        assert_eq!(overlap, vec!["ke", "saya"]);
    }

    #[test]
    fn overlap_empty_when_nothing_matches() {
        let overlap = partial_overlap("tidak ada", "saya pergi ke sekolah");
        assert!(overlap.is_empty());
    }

    #[test]
    fn overlap_normalizes_both_sides() {
        let overlap = partial_overlap("Saya! Sekolah,", "saya pergi ke sekolah");
        assert_eq!(overlap, vec!["saya", "sekolah"]);
    }

    #[test]
    fn overlap_of_empty_candidate_is_empty() {
        assert!(partial_overlap("", "saya pergi").is_empty());
    }
}
