//! Career Coach: builds a phased roadmap from the user's current and target role.

use serde::Deserialize;
use serde_json::Value;

use crate::analysis::fields::{fill_template, is_present, render_value};
use crate::analysis::prompts::CAREER_COACH_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{DirectJson, LlmClient};

pub const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerCoachRequest {
    pub current_role: Option<Value>,
    pub target_role: Option<Value>,
    pub experience_years: Option<Value>,
    pub current_skills: Option<Value>,
    pub career_goals: Option<Value>,
    pub timeline: Option<Value>,
}

impl CareerCoachRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            self.current_role.as_ref(),
            self.target_role.as_ref(),
            self.current_skills.as_ref(),
        ];
        if required.into_iter().any(|field| !is_present(field)) {
            return Err(AppError::Validation("Missing required fields".to_string()));
        }
        Ok(())
    }
}

pub fn build_prompt(request: &CareerCoachRequest) -> String {
    let current_role = render_value(request.current_role.as_ref());
    let target_role = render_value(request.target_role.as_ref());
    let experience_years = render_value(request.experience_years.as_ref());
    let current_skills = render_value(request.current_skills.as_ref());
    let career_goals = render_value(request.career_goals.as_ref());
    let timeline = render_value(request.timeline.as_ref());

    fill_template(
        CAREER_COACH_TEMPLATE,
        &[
            ("current_role", &current_role),
            ("target_role", &target_role),
            ("experience_years", &experience_years),
            ("current_skills", &current_skills),
            ("career_goals", &career_goals),
            ("timeline", &timeline),
        ],
    )
}

/// Returns the model's roadmap object exactly as parsed. Absent fields stay absent.
pub async fn coach_career(
    llm: &LlmClient,
    request: &CareerCoachRequest,
) -> Result<Value, AppError> {
    request.validate()?;

    let prompt = build_prompt(request);
    Ok(llm.call_json(&prompt, TEMPERATURE, &DirectJson).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CareerCoachRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_validate_requires_roles_and_skills() {
        let missing_skills = request(json!({
            "currentRole": "QA Engineer",
            "targetRole": "SDET"
        }));
        assert!(matches!(
            missing_skills.validate(),
            Err(AppError::Validation(ref m)) if m == "Missing required fields"
        ));

        let ok = request(json!({
            "currentRole": "QA Engineer",
            "targetRole": "SDET",
            "currentSkills": ["Selenium", "Java"]
        }));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        let ok = request(json!({
            "currentRole": "Analyst",
            "targetRole": "Data Scientist",
            "currentSkills": "SQL, Excel"
        }));
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_build_prompt_substitutes_profile() {
        let prompt = build_prompt(&request(json!({
            "currentRole": "Support Engineer",
            "targetRole": "Backend Engineer",
            "experienceYears": 2,
            "currentSkills": ["Python", "SQL"],
            "careerGoals": "Ship production APIs",
            "timeline": "6 months"
        })));

        assert!(prompt.contains("- Current Role: Support Engineer"));
        assert!(prompt.contains("- Target Role: Backend Engineer"));
        assert!(prompt.contains("- Experience: 2 years"));
        assert!(prompt.contains("- Current Skills: Python,SQL"));
        assert!(prompt.contains("- Career Goals: Ship production APIs"));
        assert!(prompt.contains("- Timeline: 6 months"));
        assert!(prompt.contains("\"daily_plan\": [\"step1\", \"step2\"]"));
    }

    #[test]
    fn test_build_prompt_marks_missing_optionals() {
        let prompt = build_prompt(&request(json!({
            "currentRole": "Support Engineer",
            "targetRole": "Backend Engineer",
            "currentSkills": "Python"
        })));
        assert!(prompt.contains("- Timeline: Not specified"));
    }
}
