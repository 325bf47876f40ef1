//! Message analysis: runs the classifiers and assembles the result record.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use utoipa::ToSchema;

use crate::reply::generate_reply;
use crate::sentiment::{analyze_sentiment, Sentiment};
use crate::tone::{classify_tone, Tone};
use crate::triggers::extract_conflict_triggers;

pub const LANGUAGE: &str = "English";

/// Percentage per tone. Serialised in order: winning tone, "Professional",
/// "Neutral". A Professional winner shares its key, leaving two entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneBreakdown {
    pub tone: Tone,
}

impl ToneBreakdown {
    pub fn entries(&self) -> Vec<(&'static str, u8)> {
        let mut entries = Vec::with_capacity(3);
        if self.tone == Tone::Professional {
            entries.push((Tone::Professional.as_str(), 85));
        } else {
            entries.push((self.tone.as_str(), 75));
            entries.push((Tone::Professional.as_str(), 15));
        }
        entries.push(("Neutral", 10));
        entries
    }
}

impl Serialize for ToneBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Emotions {
    pub calm: u8,
    pub confident: u8,
    pub happy: u8,
    pub frustrated: u8,
}

impl Emotions {
    pub fn from_classification(tone: Tone, sentiment: Sentiment) -> Self {
        Self {
            calm: if tone == Tone::Calm { 80 } else { 40 },
            confident: if tone == Tone::Professional { 70 } else { 30 },
            happy: if sentiment == Sentiment::Positive { 60 } else { 20 },
            frustrated: if tone == Tone::Angry { 70 } else { 10 },
        }
    }
}

/// Full assessment of one message.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// 0.7, -0.7 or 0
    pub sentiment_score: f64,
    pub tone: Tone,
    #[schema(value_type = Object)]
    pub tone_breakdown: ToneBreakdown,
    pub emotions: Emotions,
    /// Always "English"
    #[schema(value_type = String)]
    pub language: &'static str,
    /// 70, 80 or 85
    pub confidence_score: u8,
    /// Exactly two phrases
    #[schema(value_type = Vec<String>)]
    pub conflict_triggers: [&'static str; 2],
    pub professional_reply: String,
}

/// Analyzes a message. Callers validate that it is non-blank beforehand; the
/// classifiers themselves accept any string.
pub fn analyze_message(message: &str) -> AnalysisResult {
    let sentiment = analyze_sentiment(message);
    let tone = classify_tone(message);
    let conflict_triggers = extract_conflict_triggers(message);
    let professional_reply = generate_reply(tone, sentiment.sentiment);

    AnalysisResult {
        sentiment: sentiment.sentiment,
        sentiment_score: sentiment.sentiment.score(),
        tone,
        tone_breakdown: ToneBreakdown { tone },
        emotions: Emotions::from_classification(tone, sentiment.sentiment),
        language: LANGUAGE,
        confidence_score: sentiment.confidence_score,
        conflict_triggers,
        professional_reply,
    }
}
