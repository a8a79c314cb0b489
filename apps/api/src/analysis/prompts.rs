// All LLM prompt templates for the analysis endpoints.
// Placeholders are `{snake_case}` names filled by `fields::fill_template`;
// any other braces (the JSON schemas) are left untouched.

/// ATS resume scoring prompt. Replace `{resume_text}` before sending.
pub const RESUME_SCORE_TEMPLATE: &str = r#"
You are an ATS Resume Scoring Engine.

IMPORTANT:
- Start from a BASE SCORE of 50
- Add or subtract points strictly based on resume quality
- Do NOT cluster scores around 80
- Poor resumes should score below 60
- Excellent resumes may score above 85

SCORING RULES:
+ Skills clearly listed & relevant: +10 to +25
+ Relevant experience/projects: +10 to +25
+ Clear structure & formatting: +5 to +15
- Missing key skills: -5 to -20
- Weak or no projects: -5 to -15
- Poor structure or vague content: -5 to -15

RESUME:
"""{resume_text}"""

TASKS:
1. Generate an overall ATS compatibility score.
2. Generate a "summary": a short, 2-sentence professional profile summary of the resume.
3. Generate 5 strengths, the missing keywords, and 5 suggestions.

Return ONLY JSON:
{
  "score": number,
  "summary": string,
  "strengths": string[],
  "missing_keywords": string[],
  "suggestions": string[]
}
"#;

/// Career roadmap prompt.
/// Replace: {current_role}, {target_role}, {experience_years}, {current_skills},
///          {career_goals}, {timeline}
pub const CAREER_COACH_TEMPLATE: &str = r#"
You are a REALISTIC AI Career Coach.

User Profile:
- Current Role: {current_role}
- Target Role: {target_role}
- Experience: {experience_years} years
- Current Skills: {current_skills}
- Career Goals: {career_goals}
- Timeline: {timeline}

TASK:
Create a personalized, actionable career roadmap.

Rules:
- Be practical and realistic
- Avoid generic advice
- Include learning order and priorities
- Suggest projects, certifications, and practice strategy
- Adapt advice to experience level

Return ONLY valid JSON in this format:

{
  "summary": "short 2-line career direction",
  "skill_gaps": ["skill1", "skill2"],
  "roadmap": [
    {
      "phase": "Phase name",
      "duration": "time",
      "focus": ["items"],
      "actions": ["steps"]
    }
  ],
  "daily_plan": ["step1", "step2"],
  "project_ideas": ["idea1", "idea2"],
  "certifications": ["cert1", "cert2"]
}
"#;

/// Recruiter-style JD match prompt.
/// Replace: {name}, {bio}, {skills}, {projects}, {experience}, {certifications}, {jd_text}
pub const JD_MATCH_TEMPLATE: &str = r#"
You are an AI Job Description Matcher acting like a recruiter.

USER PROFILE:
- Name: {name}
- Summary: {bio}
- Skills: {skills}
- Projects: {projects}
- Experience: {experience}
- Certifications: {certifications}

JOB DESCRIPTION:
"""
{jd_text}
"""

TASKS:
1. Calculate JD match score (0-100)
2. Identify matched skills
3. Identify missing / weak skills
4. Give a verdict: Strong Fit / Moderate Fit / Weak Fit
5. Give 3-5 clear improvement recommendations

Return ONLY valid JSON:
{
  "match_score": number,
  "verdict": string,
  "matched_skills": [],
  "missing_skills": [],
  "recommendations": []
}
"#;

/// Company-specific interview prep prompt.
/// Replace: {company}, {role}, {experience_level}, {interview_type}, {skills}, {weak_areas}
pub const INTERVIEW_PREP_TEMPLATE: &str = r#"
You are an AI Interview Preparation Expert.

Candidate Details:
- Target Company: {company}
- Job Role: {role}
- Experience Level: {experience_level}
- Interview Type: {interview_type}
- Skills: {skills}
- Weak Areas: {weak_areas}

IMPORTANT INSTRUCTIONS:
- Generate questions based on commonly reported interview experiences
- Focus on frequently repeated and high-probability questions
- Questions should reflect real interview patterns (Glassdoor-style insights)
- Avoid claiming access to private/internal data
- Be realistic, practical, and role-specific

TASKS:
1. Brief company-specific interview pattern insight (key: company_insight)
2. 5 frequently asked or repeated interview questions for this company & role (key: repeated_questions)
3. Short but strong sample answers (part of repeated_questions)
4. What this company typically looks for in candidates (key: what_they_look_for)
5. Targeted preparation tips (key: tips)
6. Final confidence advice (key: confidence_advice)

Return ONLY valid JSON:
{
  "company_insight": string,
  "repeated_questions": [
    {
      "question": string,
      "answer": string
    }
  ],
  "what_they_look_for": string[],
  "tips": string[],
  "confidence_advice": string
}
"#;
