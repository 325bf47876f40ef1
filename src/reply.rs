//! Professional reply generation from tone and sentiment templates.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{
    FALLBACK_REPLY, NEGATIVE_SUFFIX, POSITIVE_SUFFIX, SOFTENED_REPLACEMENT, SOFTENED_WORDS,
    TONE_REPLIES,
};
use crate::sentiment::Sentiment;
use crate::tone::Tone;

// Substring-level on purpose: "negatively" becomes "firmly".
static SOFTENED_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = SOFTENED_WORDS.join("|");
    Regex::new(&format!("(?i){}", alternation)).expect("softened word pattern is valid")
});

/// Base paragraph for a tone, or the generic fallback when the table has none.
pub fn template_for(tone: Tone) -> &'static str {
    lookup_template(|t| TONE_REPLIES.get(&t).copied(), tone)
}

fn lookup_template(table: impl Fn(Tone) -> Option<&'static str>, tone: Tone) -> &'static str {
    table(tone).unwrap_or_else(|| {
        tracing::warn!(%tone, "no reply template for tone, using fallback");
        FALLBACK_REPLY
    })
}

fn suffix_for(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Negative => NEGATIVE_SUFFIX,
        Sentiment::Positive => POSITIVE_SUFFIX,
        Sentiment::Neutral => "",
    }
}

/// Replaces every case-insensitive occurrence of the softened words with "firm".
pub fn soften(reply: &str) -> String {
    SOFTENED_RE.replace_all(reply, SOFTENED_REPLACEMENT).into_owned()
}

pub fn generate_reply(tone: Tone, sentiment: Sentiment) -> String {
    let mut reply = String::from(template_for(tone));
    reply.push_str(suffix_for(sentiment));
    soften(&reply)
}
