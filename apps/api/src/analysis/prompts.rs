//! Analysis prompt for the AI result-analysis tier.

/// Result analysis prompt template. Placeholders: `{skills}`, `{score}`,
/// `{total_questions}`, `{correct_answers}`, `{assessment_id}`.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the assessment results:
- Skills tested: {skills}
- Score: {score}%
- Total questions: {total_questions}
- Correct answers: {correct_answers}

Identify weak skills and provide video recommendations. Return JSON format:
{
    "assessment_id": "{assessment_id}",
    "score": {score},
    "weak_skills": ["skill1", "skill2"],
    "recommendations": [
        {
            "skill": "skill_name",
            "video_title": "Video Title",
            "video_url": "https://youtube.com/watch?v=...",
            "description": "Why this video is recommended"
        }
    ],
    "improvement_plan": "Personalized improvement suggestions"
}

Focus on skills where the user scored poorly or showed gaps. Return ONLY the JSON, no additional text."#;

pub fn build_analysis_prompt(
    assessment_id: &str,
    skills: &[String],
    score: f64,
    total_questions: usize,
    correct_answers: usize,
) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{skills}", &skills.join(", "))
        .replace("{score}", &format!("{score:.1}"))
        .replace("{total_questions}", &total_questions.to_string())
        .replace("{correct_answers}", &correct_answers.to_string())
        .replace("{assessment_id}", assessment_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_fills_all_placeholders() {
        let skills = vec!["Python".to_string(), "SQL".to_string()];
        let prompt = build_analysis_prompt("abc-123", &skills, 40.0, 5, 2);

        assert!(prompt.contains("Skills tested: Python, SQL"));
        assert!(prompt.contains("Score: 40.0%"));
        assert!(prompt.contains("Total questions: 5"));
        assert!(prompt.contains("Correct answers: 2"));
        assert!(prompt.contains(r#""assessment_id": "abc-123""#));
        assert!(!prompt.contains("{skills}"));
        assert!(!prompt.contains("{assessment_id}"));
    }
}
