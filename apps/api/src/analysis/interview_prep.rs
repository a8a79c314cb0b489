//! Interview Prep: company-specific question bank with sample answers.

use serde::Deserialize;
use serde_json::Value;

use crate::analysis::fields::{fill_template, is_present, render_value};
use crate::analysis::prompts::INTERVIEW_PREP_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{DirectJson, LlmClient};

pub const TEMPERATURE: f64 = 0.5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPrepRequest {
    pub role: Option<Value>,
    pub company: Option<Value>,
    pub experience_level: Option<Value>,
    pub skills: Option<Value>,
    pub interview_type: Option<Value>,
    pub weak_areas: Option<Value>,
}

impl InterviewPrepRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            self.role.as_ref(),
            self.company.as_ref(),
            self.interview_type.as_ref(),
        ];
        if required.into_iter().any(|field| !is_present(field)) {
            return Err(AppError::Validation(
                "Role, company name, and interview type required".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn build_prompt(request: &InterviewPrepRequest) -> String {
    let company = render_value(request.company.as_ref());
    let role = render_value(request.role.as_ref());
    let experience_level = render_value(request.experience_level.as_ref());
    let interview_type = render_value(request.interview_type.as_ref());
    let skills = render_value(request.skills.as_ref());
    let weak_areas = render_value(request.weak_areas.as_ref());

    fill_template(
        INTERVIEW_PREP_TEMPLATE,
        &[
            ("company", &company),
            ("role", &role),
            ("experience_level", &experience_level),
            ("interview_type", &interview_type),
            ("skills", &skills),
            ("weak_areas", &weak_areas),
        ],
    )
}

/// Returns the model's prep object exactly as parsed.
pub async fn prepare_interview(
    llm: &LlmClient,
    request: &InterviewPrepRequest,
) -> Result<Value, AppError> {
    request.validate()?;

    let prompt = build_prompt(request);
    Ok(llm.call_json(&prompt, TEMPERATURE, &DirectJson).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> InterviewPrepRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_validate_requires_role_company_and_type() {
        let no_company = request(json!({ "role": "SDE II", "interviewType": "System Design" }));
        assert!(matches!(
            no_company.validate(),
            Err(AppError::Validation(ref m))
                if m == "Role, company name, and interview type required"
        ));

        let blank_type = request(json!({
            "role": "SDE II",
            "company": "Stripe",
            "interviewType": ""
        }));
        assert!(blank_type.validate().is_err());
    }

    #[test]
    fn test_build_prompt_substitutes_candidate_details() {
        let prompt = build_prompt(&request(json!({
            "role": "SDE II",
            "company": "Stripe",
            "experienceLevel": "Mid-level",
            "skills": ["Go", "Distributed systems"],
            "interviewType": "System Design",
            "weakAreas": "Capacity estimation"
        })));

        assert!(prompt.contains("- Target Company: Stripe"));
        assert!(prompt.contains("- Job Role: SDE II"));
        assert!(prompt.contains("- Experience Level: Mid-level"));
        assert!(prompt.contains("- Interview Type: System Design"));
        assert!(prompt.contains("- Skills: Go,Distributed systems"));
        assert!(prompt.contains("- Weak Areas: Capacity estimation"));
        assert!(prompt.contains("\"confidence_advice\": string"));
    }
}
