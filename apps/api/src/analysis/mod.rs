// Career analysis endpoints: resume scoring, career coaching, JD matching, interview prep.
// Each endpoint is stateless: validate → prompt → one LLM call → parse → (normalize).
// All LLM calls go through llm_client; no direct Groq calls here.

pub mod career_coach;
pub mod fields;
pub mod handlers;
pub mod interview_prep;
pub mod jd_match;
pub mod prompts;
pub mod resume_score;
