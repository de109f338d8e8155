//! Prompt construction for skill extraction and analysis generation

/// Closed category list offered to the model. Intentionally coarser than the
/// taxonomy's categories; the two classification schemes are independent.
pub const SKILL_CATEGORIES: &[&str] = &[
    "Programming Languages",
    "Frameworks & Libraries",
    "Development Tools",
    "Databases",
    "Cloud Platforms",
    "Technical Concepts",
    "Professional Skills",
];

pub const JOB_EXTRACTION_SYSTEM: &str =
    "You are an expert technical recruiter with deep knowledge of industry skill requirements.";

pub const RESUME_EXTRACTION_SYSTEM: &str =
    "You are an expert technical recruiter with deep knowledge of candidate skill assessment.";

pub const SUMMARY_SYSTEM: &str =
    "You are an expert executive recruiter specializing in technical talent assessment.";

pub const REQUIREMENTS_SYSTEM: &str =
    "You are an expert technical recruiter specializing in job requirement analysis.";

pub const RECOMMENDATION_SYSTEM: &str =
    "You are an expert career coach. Provide complete, actionable recommendations without cutoff.";

pub const DEVELOPMENT_SYSTEM: &str =
    "You are an expert technical career advisor with deep knowledge of skill development pathways.";

pub const COMPREHENSIVE_SYSTEM: &str =
    "You are a professional HR analyst and career coach. Provide detailed, actionable, and \
     recruiter-focused skill gap analysis. Always complete your responses without cutoff.";

/// Bound input to a character prefix, respecting char boundaries. A cost and
/// latency cap, not a correctness requirement.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

pub fn job_extraction_prompt(jd_text: &str, max_chars: usize) -> String {
    let processed = truncate_chars(jd_text, max_chars);
    format!(
        "As an expert technical recruiter, extract all required skills from this job description. \
         Categorize each skill into one of: {categories:?}. \
         For each skill, provide: skill name, category, \
         importance level (Critical/High/Medium/Low), and must_have status (true/false). \
         Return only a well-formatted JSON object:\n\
         {{ \"skill_name\": {{ \"category\": \"Programming Languages\", \"importance\": \"Critical\", \"must_have\": true }} }}\n\n\
         Job Description:\n{processed}\n\nResponse (JSON only):",
        categories = SKILL_CATEGORIES,
    )
}

pub fn resume_extraction_prompt(resume_text: &str, max_chars: usize) -> String {
    let processed = truncate_chars(resume_text, max_chars);
    format!(
        "As an expert technical recruiter, extract all skills demonstrated in this resume. \
         Categorize each skill into one of: {categories:?}. \
         For each skill, provide: skill name, category, and \
         proficiency level (Expert/Advanced/Intermediate/Basic). \
         Return only a well-formatted JSON object:\n\
         {{ \"skill_name\": {{ \"category\": \"Programming Languages\", \"proficiency\": \"Advanced\" }} }}\n\n\
         Resume:\n{processed}\n\nResponse (JSON only):",
        categories = SKILL_CATEGORIES,
    )
}

pub fn summary_prompt(resume_text: &str, skills_json: &str) -> String {
    let processed = truncate_chars(resume_text, 1000);
    format!(
        "Based on the following resume and extracted skill analysis, \
         write a professional 2-3 sentence executive summary highlighting the candidate's \
         key technical strengths, experience level, and primary areas of expertise. \
         Focus on concrete skills and measurable capabilities.\n\n\
         Resume Content:\n{processed}\n\n\
         Skill Analysis:\n{skills_json}\n\n\
         Professional Executive Summary:",
    )
}

pub fn requirements_prompt(jd_text: &str, skills_json: &str) -> String {
    format!(
        "Given the following job description and extracted skill requirements, \
         provide a concise professional analysis (2-3 sentences) highlighting: \
         1) The most critical technical requirements, \
         2) Must-have vs nice-to-have skills, and \
         3) The overall technical focus and seniority level expected.\n\n\
         Job Description:\n{jd_text}\n\n\
         Extracted Skill Requirements:\n{skills_json}\n\n\
         Requirements Analysis:",
    )
}

pub fn recommendation_prompt(skill: &str, jd_context: &str) -> String {
    let mut prompt = format!(
        "Suggest a concise, actionable way for a candidate to learn or demonstrate the skill '{skill}'. \
         Provide specific, practical recommendations. Keep it under 200 words and ensure you complete \
         all points without cutoff. Focus on 2-3 key actionable steps.",
    );
    if !jd_context.trim().is_empty() {
        prompt.push_str(&format!(
            " The job description context is: {}",
            truncate_chars(jd_context, 500)
        ));
    }
    prompt
}

pub fn development_plan_prompt(resume_json: &str, jd_json: &str, missing: &[&str]) -> String {
    format!(
        "As a technical career advisor, provide specific, actionable skill development \
         recommendations for this candidate based on their current skills and job requirements. \
         Focus on the most impactful skills to learn and suggest learning priorities. \
         Provide 2-3 concrete recommendations with brief rationale.\n\n\
         Current Candidate Skills:\n{resume_json}\n\n\
         Job Requirements:\n{jd_json}\n\n\
         Skills Gap Identified:\n{missing:?}\n\n\
         Development Recommendations:",
    )
}

pub fn comprehensive_prompt(task: &str) -> String {
    format!(
        "{task}\n\n\
         IMPORTANT: Keep your response under 400 words and ensure you complete all points without \
         cutoff. Provide 3-4 key actionable recommendations with brief explanations.",
    )
}
