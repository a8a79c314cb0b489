//! Resume Scorer: ATS-style scoring of raw resume text.
//!
//! This is the only endpoint that post-processes the model's output: the score
//! is pulled from whichever synonym key the model used and normalized onto a
//! 0–100 integer scale, and missing list fields are defaulted.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::analysis::fields::{
    fill_template, first_present, is_present, is_truthy, join_values, render_value,
};
use crate::analysis::prompts::RESUME_SCORE_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{BraceBlock, LlmClient};

pub const TEMPERATURE: f64 = 0.6;

/// Keys the model may use for the score, in priority order.
pub const SCORE_KEYS: &[&str] = &["score", "total_score", "ats_score", "compatibility_score"];

const DEFAULT_SCORE: f64 = 50.0;
const SUMMARY_FALLBACK: &str = "Summary not provided by AI.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeScoreRequest {
    pub resume_text: Option<Value>,
}

/// Stable response contract for the resume score screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeScore {
    pub score: u8,
    pub summary: Value,
    pub strengths: Value,
    pub missing_keywords: Value,
    pub suggestions: Value,
}

impl ResumeScoreRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_present(self.resume_text.as_ref()) {
            return Err(AppError::Validation("Resume text missing".to_string()));
        }
        Ok(())
    }
}

pub fn build_prompt(request: &ResumeScoreRequest) -> String {
    let resume_text = render_value(request.resume_text.as_ref());
    fill_template(RESUME_SCORE_TEMPLATE, &[("resume_text", &resume_text)])
}

/// Scores a resume: validate → prompt → one LLM call → brace-block extraction → normalize.
pub async fn score_resume(
    llm: &LlmClient,
    request: &ResumeScoreRequest,
) -> Result<ResumeScore, AppError> {
    request.validate()?;

    let prompt = build_prompt(request);
    let parsed = llm.call_json(&prompt, TEMPERATURE, &BraceBlock).await?;

    let result = normalize(&parsed);
    tracing::info!("Resume scored: {}", result.score);
    Ok(result)
}

/// Reshapes the model's object into a [`ResumeScore`], defaulting absent fields.
pub fn normalize(parsed: &Value) -> ResumeScore {
    ResumeScore {
        score: normalize_score(parsed),
        summary: summary_of(parsed),
        strengths: list_or_empty(parsed, "strengths"),
        missing_keywords: list_or_empty(parsed, "missing_keywords"),
        suggestions: list_or_empty(parsed, "suggestions"),
    }
}

/// Maps whatever score the model produced onto an integer in `0..=100`.
///
/// 1. First non-null of [`SCORE_KEYS`], else 50.
/// 2. Strings use their leading integer; unparseable or zero falls back to 50.
/// 3. `<= 1` is a fraction (×100); `(1, 10]` is a ten-point scale (×10).
/// 4. Clamp to `[0, 100]` and round.
pub fn normalize_score(parsed: &Value) -> u8 {
    let raw = match first_present(parsed, SCORE_KEYS) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(DEFAULT_SCORE),
        Some(Value::String(s)) => parse_leading_int(s)
            .filter(|v| *v != 0.0)
            .unwrap_or(DEFAULT_SCORE),
        _ => DEFAULT_SCORE,
    };

    let scaled = if raw <= 1.0 {
        raw * 100.0
    } else if raw <= 10.0 {
        raw * 10.0
    } else {
        raw
    };

    scaled.clamp(0.0, 100.0).round() as u8
}

/// Leading integer of a string: optional whitespace, optional sign, digits.
/// `"85/100"` → 85, `" -3 pts"` → -3, `"N/A"` → None.
fn parse_leading_int(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: f64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// The model's `summary` when truthy (passed through as-is), else the joined
/// `keyarea` list, else a fixed fallback string.
fn summary_of(parsed: &Value) -> Value {
    if let Some(summary) = parsed.get("summary").filter(|v| is_truthy(v)) {
        return summary.clone();
    }

    // Older prompts asked for a `keyarea` list instead of a summary.
    if let Some(Value::Array(areas)) = parsed.get("keyarea") {
        let joined = join_values(areas, " ");
        if !joined.is_empty() {
            return Value::String(joined);
        }
    }

    json!(SUMMARY_FALLBACK)
}

fn list_or_empty(parsed: &Value, key: &str) -> Value {
    parsed
        .get(key)
        .filter(|v| is_truthy(v))
        .cloned()
        .unwrap_or_else(|| json!([]))
}
