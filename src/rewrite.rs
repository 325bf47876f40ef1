//! Canned reply rewriting.
//!
//! A mode selects one fixed paragraph. The original message and the current
//! reply are never read for a recognised mode; an unknown mode hands the
//! current reply back untouched.

use serde::Serialize;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::lexicon::REWRITTEN_REPLIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RewriteMode {
    Formal,
    Friendly,
    Calm,
    Assertive,
    Apologetic,
}

impl RewriteMode {
    pub const ALL: [RewriteMode; 5] = [
        RewriteMode::Formal,
        RewriteMode::Friendly,
        RewriteMode::Calm,
        RewriteMode::Assertive,
        RewriteMode::Apologetic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RewriteMode::Formal => "formal",
            RewriteMode::Friendly => "friendly",
            RewriteMode::Calm => "calm",
            RewriteMode::Assertive => "assertive",
            RewriteMode::Apologetic => "apologetic",
        }
    }

    pub fn paragraph(self) -> &'static str {
        REWRITTEN_REPLIES
            .iter()
            .find(|(mode, _)| *mode == self)
            .map(|(_, text)| *text)
            .unwrap_or_default()
    }
}

/// Mode names are exact and case-sensitive.
impl FromStr for RewriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RewriteMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown rewrite mode: {}", s))
    }
}

/// Rewrites a reply into the register named by `mode`.
///
/// `_original_message` is accepted for interface stability and ignored. The
/// current reply is handed back as-is, whatever its type, when `mode` is absent
/// or not one of the known names.
pub fn rewrite_reply<R: From<&'static str>>(
    mode: Option<&str>,
    _original_message: Option<&str>,
    current_reply: Option<R>,
) -> Option<R> {
    match mode.map(RewriteMode::from_str) {
        Some(Ok(mode)) => Some(R::from(mode.paragraph())),
        _ => {
            tracing::debug!(?mode, "unrecognised rewrite mode, keeping current reply");
            current_reply
        }
    }
}
