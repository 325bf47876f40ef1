//! Keyword-driven message analysis.
//!
//! Scores a message for sentiment and tone, lists the phrases most likely to
//! escalate a conversation, and suggests a professional reply that can be
//! rewritten into one of a few fixed registers.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod reply;
pub mod rewrite;
pub mod sentiment;
pub mod tone;
pub mod triggers;

pub use analysis::{analyze_message, AnalysisResult};
pub use api::create_router;
pub use config::ServerConfig;
pub use error::ApiError;
pub use rewrite::{rewrite_reply, RewriteMode};
