//! Tone classification by prioritised pattern groups.

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::lexicon::TONE_GROUPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Tone {
    Angry,
    Confused,
    Rude,
    Calm,
    Professional,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Angry,
        Tone::Confused,
        Tone::Rude,
        Tone::Calm,
        Tone::Professional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Angry => "Angry",
            Tone::Confused => "Confused",
            Tone::Rude => "Rude",
            Tone::Calm => "Calm",
            Tone::Professional => "Professional",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the tone of the first group with any pattern contained in `text`,
/// or `Professional` when nothing matches.
pub fn classify_tone(text: &str) -> Tone {
    let lowercase_text = text.to_lowercase();

    let tone = TONE_GROUPS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| lowercase_text.contains(p)))
        .map(|(tone, _)| *tone)
        .unwrap_or(Tone::Professional);

    tracing::debug!(%tone, "tone classification");
    tone
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_group() {
        assert_eq!(classify_tone("I am FURIOUS about this"), Tone::Angry);
        assert_eq!(classify_tone("This is unclear to me"), Tone::Confused);
        assert_eq!(classify_tone("That was a dumb move"), Tone::Rude);
        assert_eq!(classify_tone("Could you kindly send it over"), Tone::Calm);
        assert_eq!(classify_tone("The meeting is scheduled for 3pm."), Tone::Professional);
    }

    #[test]
    fn test_aggressive_beats_calm() {
        assert_eq!(classify_tone("Please stop, I hate this"), Tone::Angry);
        assert_eq!(classify_tone("please!!!"), Tone::Angry);
    }

    #[test]
    fn test_confused_beats_rude_and_calm() {
        assert_eq!(classify_tone("Why are you so rude, please?"), Tone::Confused);
    }

    #[test]
    fn test_rude_beats_calm() {
        assert_eq!(classify_tone("Thank you for the stupid report"), Tone::Rude);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "somewhat" contains "what".
        assert_eq!(classify_tone("It is somewhat late"), Tone::Confused);
        // "thanks" contains "thank".
        assert_eq!(classify_tone("Thanks for the update"), Tone::Calm);
    }

    #[test]
    fn test_two_exclamations_are_not_aggressive() {
        assert_eq!(classify_tone("Done!!"), Tone::Professional);
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for tone in Tone::ALL {
            let json = serde_json::to_string(&tone).unwrap();
            assert_eq!(json, format!("\"{}\"", tone));
        }
    }
}
