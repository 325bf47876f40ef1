//! Simple keyword-based Sentiment Analysis module.
//!
//! Classifies a message as Positive, Negative or Neutral by counting how many
//! distinct lexicon words appear in it. No weighting, no ML.

use serde::Serialize;
use utoipa::ToSchema;

use crate::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Fixed score reported alongside the label.
    pub fn score(self) -> f64 {
        match self {
            Sentiment::Positive => 0.7,
            Sentiment::Negative => -0.7,
            Sentiment::Neutral => 0.0,
        }
    }

    /// Confidence of the branch that produced this label.
    pub fn confidence(self) -> u8 {
        match self {
            Sentiment::Positive => 80,
            Sentiment::Negative => 85,
            Sentiment::Neutral => 70,
        }
    }
}

/// Result of sentiment analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub confidence_score: u8,
    pub positive_count: usize,
    pub negative_count: usize,
}

/// Number of distinct lexicon entries found anywhere in `text` (substring match).
fn count_hits(text: &str, lexicon: &[&str]) -> usize {
    lexicon.iter().filter(|word| text.contains(*word)).count()
}

/// Analyzes the sentiment of the provided text using keyword matching.
///
/// Strictly more positive hits wins Positive, strictly more negative hits wins
/// Negative, and any tie (including 0-0) is Neutral.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let lowercase_text = text.to_lowercase();

    let positive_count = count_hits(&lowercase_text, &POSITIVE_WORDS);
    let negative_count = count_hits(&lowercase_text, &NEGATIVE_WORDS);

    let sentiment = if positive_count > negative_count {
        Sentiment::Positive
    } else if negative_count > positive_count {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    tracing::debug!(
        positive = positive_count,
        negative = negative_count,
        ?sentiment,
        "sentiment analysis"
    );

    SentimentResult {
        sentiment,
        confidence_score: sentiment.confidence(),
        positive_count,
        negative_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sentiment() {
        let result = analyze_sentiment("This product is amazing and wonderful. I love it so much.");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence_score, 80);
        assert_eq!(result.positive_count, 3);
    }

    #[test]
    fn test_negative_sentiment() {
        let result = analyze_sentiment("This is absolutely terrible and awful, I hate it!!!");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.confidence_score, 85);
        assert_eq!(result.negative_count, 3);
    }

    #[test]
    fn test_neutral_sentiment() {
        let result = analyze_sentiment("The meeting is scheduled for 3pm.");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence_score, 70);
        assert_eq!(result.positive_count, 0);
        assert_eq!(result.negative_count, 0);
    }

    #[test]
    fn test_equal_nonzero_hits_are_neutral() {
        let result = analyze_sentiment("Great start, bad ending.");
        assert_eq!(result.positive_count, 1);
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_repeated_word_counts_once() {
        // Three "bad" against two distinct positives still loses to positives.
        let result = analyze_sentiment("bad bad bad, but great and perfect");
        assert_eq!(result.negative_count, 1);
        assert_eq!(result.positive_count, 2);
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        // "BADGE" contains "bad"; "LOVELY" contains "love".
        let result = analyze_sentiment("LOVELY BADGE");
        assert_eq!(result.positive_count, 1);
        assert_eq!(result.negative_count, 1);
    }

    #[test]
    fn test_scores_follow_label() {
        assert_eq!(Sentiment::Positive.score(), 0.7);
        assert_eq!(Sentiment::Negative.score(), -0.7);
        assert_eq!(Sentiment::Neutral.score(), 0.0);
    }
}
