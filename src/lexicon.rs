//! Keyword lexicons and reply templates.
//!
//! Everything here is read-only data, built once on first use and shared by
//! every request. Order matters for the tone groups, trigger conditions and
//! rewrite table: callers walk them front to back.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::rewrite::RewriteMode;
use crate::tone::Tone;

// ============================================================================
// Sentiment
// ============================================================================

pub static POSITIVE_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "great", "excellent", "wonderful", "amazing", "fantastic",
        "love", "happy", "pleased", "satisfied", "perfect",
    ]
});

pub static NEGATIVE_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "terrible", "awful", "horrible", "angry", "frustrated",
        "disappointed", "hate", "worst", "bad", "useless",
    ]
});

// ============================================================================
// Tone
// ============================================================================

/// Tone pattern groups in priority order. The first group with any hit wins.
pub static TONE_GROUPS: Lazy<Vec<(Tone, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (Tone::Angry, vec!["!!!", "hate", "angry", "furious", "disgusting"]),
        (Tone::Confused, vec!["?", "??", "???", "confused", "unclear", "what", "why"]),
        (Tone::Rude, vec!["rude", "disrespectful", "ignorant", "stupid", "dumb"]),
        (Tone::Calm, vec!["please", "thank", "appreciate", "kindly", "would you"]),
    ]
});

// ============================================================================
// Conflict triggers
// ============================================================================

pub const TRIGGER_ABSOLUTE: &str = "Use of absolute language (never/always)";
pub const TRIGGER_PUNCTUATION: &str = "Strong punctuation indicating emotional intensity";
pub const TRIGGER_ERRORS: &str = "Focus on errors or problems";
pub const TRIGGER_CLARIFICATION: &str = "Request for clarification or explanation";

/// Second entry when only one condition matched.
pub const TRIGGER_FILLER: &str = "Neutral sentiment with measured response";

/// Pair used when no condition matched.
pub const TRIGGER_FALLBACK: [&str; 2] = ["Professional tone detected", "Clear communication observed"];

/// Trigger conditions in evaluation order: any marker present adds the phrase.
pub static TRIGGER_CONDITIONS: Lazy<Vec<(Vec<&'static str>, &'static str)>> = Lazy::new(|| {
    vec![
        (vec!["never", "always"], TRIGGER_ABSOLUTE),
        (vec!["!", "?"], TRIGGER_PUNCTUATION),
        (vec!["wrong", "mistake", "error"], TRIGGER_ERRORS),
        (vec!["understand", "clarify", "explain"], TRIGGER_CLARIFICATION),
    ]
});

// ============================================================================
// Replies
// ============================================================================

pub const FALLBACK_REPLY: &str = "Thank you for your message. I understand your concern. I appreciate your feedback and would like to address this matter professionally.";

pub const NEGATIVE_SUFFIX: &str = " Let me propose next steps to address this issue.";
pub const POSITIVE_SUFFIX: &str = " Thank you again for your positive feedback.";

/// Words softened to "firm" in every generated reply, matched case-insensitively.
pub const SOFTENED_WORDS: [&str; 3] = ["aggressive", "negative", "hostile"];
pub const SOFTENED_REPLACEMENT: &str = "firm";

pub static TONE_REPLIES: Lazy<HashMap<Tone, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Tone::Angry, "I understand this situation is frustrating. Let's work together to find a solution that addresses your concerns."),
        (Tone::Confused, "I appreciate you reaching out. Let me clarify the situation and provide the information you need."),
        (Tone::Rude, "I respect your perspective. I'm committed to having a productive conversation and finding common ground."),
        (Tone::Calm, "Thank you for your thoughtful message. I agree with your approach and appreciate your professionalism."),
        (Tone::Professional, "I appreciate your input. This is valuable feedback that will help improve our working relationship."),
    ])
});

pub static REWRITTEN_REPLIES: Lazy<Vec<(RewriteMode, &'static str)>> = Lazy::new(|| {
    vec![
        (RewriteMode::Formal, "I appreciate your message and would like to provide a formal response. After careful consideration of your points, I believe we can address this matter professionally and efficiently."),
        (RewriteMode::Friendly, "Thanks for reaching out! I really appreciate you taking the time to share your thoughts. I'd love to help you with this and find a great solution together."),
        (RewriteMode::Calm, "I understand your perspective and would like to discuss this calmly. Let's work together to find a peaceful resolution that works for everyone involved."),
        (RewriteMode::Assertive, "I want to be clear about my position on this matter. While I respect your viewpoint, I believe it's important to establish clear boundaries and expectations moving forward."),
        (RewriteMode::Apologetic, "I sincerely apologize for any inconvenience this may have caused. I take full responsibility and want to make things right. Please let me know how I can better address your concerns."),
    ]
});
