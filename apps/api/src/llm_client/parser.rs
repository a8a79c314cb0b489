//! Strategies for turning model message content into a JSON value.
//!
//! Groq runs in JSON-object mode, so `DirectJson` is the normal path.
//! `BraceBlock` tolerates prose around the object but is fragile: it spans from
//! the first `{` to the last `}`, so stray braces in trailing prose break it.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::LlmError;

/// How an endpoint reads JSON out of the model's content.
pub trait ContentParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<Value, LlmError>;
}

/// Parses the whole content as JSON. Fails if the model wrapped it in prose.
pub struct DirectJson;

impl ContentParser for DirectJson {
    fn parse(&self, content: &str) -> Result<Value, LlmError> {
        serde_json::from_str(content).map_err(LlmError::Content)
    }
}

/// Extracts the first `{ ... }` span (greedy, first `{` to last `}`) and parses it.
pub struct BraceBlock;

impl ContentParser for BraceBlock {
    fn parse(&self, content: &str) -> Result<Value, LlmError> {
        let block = brace_block_regex()
            .find(content)
            .ok_or(LlmError::NoJsonFound)?;
        serde_json::from_str(block.as_str()).map_err(LlmError::Content)
    }
}

fn brace_block_regex() -> &'static Regex {
    static BRACE_BLOCK: OnceLock<Regex> = OnceLock::new();
    BRACE_BLOCK
        .get_or_init(|| Regex::new(r"\{[\s\S]*\}").expect("brace block pattern is a valid regex"))
}
