//! JD Matcher: recruiter-style comparison of a saved profile against a job description.

use serde::Deserialize;
use serde_json::Value;

use crate::analysis::fields::{fill_template, is_present, join_values, render_value};
use crate::analysis::prompts::JD_MATCH_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{DirectJson, LlmClient};

pub const TEMPERATURE: f64 = 0.6;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JdMatchRequest {
    /// `{ name, bio, skills[], projects[], experience[], certifications[] }`.
    /// Kept loose so the list fields can be type-checked with a useful message.
    pub profile: Option<Value>,
    pub jd_text: Option<Value>,
}

impl JdMatchRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_present(self.profile.as_ref()) || !is_present(self.jd_text.as_ref()) {
            return Err(AppError::Validation("Profile or JD missing".to_string()));
        }
        Ok(())
    }
}

/// Joins a profile list field. Anything other than a JSON array is rejected.
fn profile_list(profile: &Value, key: &str, separator: &str) -> Result<String, AppError> {
    match profile.get(key) {
        Some(Value::Array(items)) => Ok(join_values(items, separator)),
        _ => Err(AppError::Type(format!("profile.{key} must be an array"))),
    }
}

pub fn build_prompt(request: &JdMatchRequest) -> Result<String, AppError> {
    let profile = request.profile.as_ref().unwrap_or(&Value::Null);

    let skills = profile_list(profile, "skills", ", ")?;
    let projects = profile_list(profile, "projects", " | ")?;
    let experience = profile_list(profile, "experience", " | ")?;
    let certifications = profile_list(profile, "certifications", ", ")?;
    let name = render_value(profile.get("name"));
    let bio = render_value(profile.get("bio"));
    let jd_text = render_value(request.jd_text.as_ref());

    Ok(fill_template(
        JD_MATCH_TEMPLATE,
        &[
            ("name", &name),
            ("bio", &bio),
            ("skills", &skills),
            ("projects", &projects),
            ("experience", &experience),
            ("certifications", &certifications),
            ("jd_text", &jd_text),
        ],
    ))
}

/// Returns the model's match object exactly as parsed.
pub async fn match_jd(llm: &LlmClient, request: &JdMatchRequest) -> Result<Value, AppError> {
    request.validate()?;

    let prompt = build_prompt(request)?;
    Ok(llm.call_json(&prompt, TEMPERATURE, &DirectJson).await?)
}
