//! Conflict trigger extraction.
//!
//! Four independent conditions are checked in order. The output is always
//! exactly two phrases: padded with a filler when one condition hits, replaced
//! by a fixed pair when none do, truncated to the first two otherwise.

use crate::lexicon::{TRIGGER_CONDITIONS, TRIGGER_FALLBACK, TRIGGER_FILLER};

/// Every phrase that matched, in evaluation order, before normalisation.
pub fn matched_conditions(text: &str) -> Vec<&'static str> {
    let lowercase_text = text.to_lowercase();

    TRIGGER_CONDITIONS
        .iter()
        .filter(|(markers, _)| markers.iter().any(|m| lowercase_text.contains(m)))
        .map(|(_, phrase)| *phrase)
        .collect()
}

pub fn extract_conflict_triggers(text: &str) -> [&'static str; 2] {
    let matched = matched_conditions(text);
    tracing::debug!(matched = matched.len(), "conflict triggers");

    match matched.as_slice() {
        [] => TRIGGER_FALLBACK,
        [only] => [*only, TRIGGER_FILLER],
        [first, second, ..] => [*first, *second],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{
        TRIGGER_ABSOLUTE, TRIGGER_CLARIFICATION, TRIGGER_ERRORS, TRIGGER_PUNCTUATION,
    };

    #[test]
    fn test_no_match_uses_fallback_pair() {
        assert_eq!(
            extract_conflict_triggers("The meeting is scheduled for 3pm."),
            ["Professional tone detected", "Clear communication observed"]
        );
    }

    #[test]
    fn test_single_match_is_padded() {
        assert_eq!(
            extract_conflict_triggers("This is absolutely terrible and awful, I hate it!!!"),
            [TRIGGER_PUNCTUATION, "Neutral sentiment with measured response"]
        );
    }

    #[test]
    fn test_all_four_keep_first_two() {
        let text = "You never explain anything, it's always a mistake!";
        assert_eq!(
            matched_conditions(text),
            vec![TRIGGER_ABSOLUTE, TRIGGER_PUNCTUATION, TRIGGER_ERRORS, TRIGGER_CLARIFICATION]
        );
        assert_eq!(extract_conflict_triggers(text), [TRIGGER_ABSOLUTE, TRIGGER_PUNCTUATION]);
    }

    #[test]
    fn test_order_follows_conditions_not_text() {
        // Clarification appears first in the text but is evaluated after errors.
        let text = "Please clarify the error in the report";
        assert_eq!(extract_conflict_triggers(text), [TRIGGER_ERRORS, TRIGGER_CLARIFICATION]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            extract_conflict_triggers("NEVER AGAIN"),
            [TRIGGER_ABSOLUTE, TRIGGER_FILLER]
        );
    }

    #[test]
    fn test_always_two_entries() {
        for text in [
            "",
            "ok",
            "why?",
            "wrong, never, explain!",
            "understanding errors is always hard?!",
        ] {
            assert_eq!(extract_conflict_triggers(text).len(), 2);
        }
    }
}
