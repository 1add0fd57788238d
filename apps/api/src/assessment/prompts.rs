//! Generation prompt for the AI assessment tier.

use crate::assessment::models::Difficulty;

/// Assessment generation prompt template. Placeholders: `{skills}`,
/// `{difficulty}`, `{question_count}`, `{skills_json}`.
const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"Create a comprehensive technical assessment for the following skills: {skills}
Difficulty level: {difficulty}

Generate a SINGLE assessment with EXACTLY 2 questions per skill (total of {question_count} questions) with the following format:
{
    "assessment_id": "unique_id_here",
    "title": "Comprehensive Technical Skills Assessment",
    "difficulty": "{difficulty}",
    "skills_tested": {skills_json},
    "questions": [
        {
            "id": "q1",
            "skill": "skill_name",
            "question": "Question text here?",
            "options": ["A", "B", "C", "D"],
            "correct_answer": "A",
            "explanation": "Why this is correct"
        }
    ]
}

IMPORTANT REQUIREMENTS:
1. Create EXACTLY 2 questions for EACH skill in the skills list
2. Make questions practical and relevant to real-world scenarios
3. Ensure questions test different aspects of each skill (basic and advanced)
4. Include a mix of difficulty levels to properly assess skill proficiency
5. The assessment must be able to categorize skills as STRONG (score >= 80%), AVERAGE (score 50-79%), or WEAK (score < 50%)

Return ONLY the JSON, no additional text."#;

pub fn build_assessment_prompt(skills: &[String], difficulty: Difficulty) -> String {
    ASSESSMENT_PROMPT_TEMPLATE
        .replace("{skills}", &skills.join(", "))
        .replace("{difficulty}", &difficulty.to_string())
        .replace("{question_count}", &(skills.len() * 2).to_string())
        .replace(
            "{skills_json}",
            &serde_json::to_string(skills).unwrap_or_else(|_| "[]".to_string()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_fills_all_placeholders() {
        let skills = vec!["Rust".to_string(), "Go".to_string()];
        let prompt = build_assessment_prompt(&skills, Difficulty::Advanced);

        assert!(prompt.contains("skills: Rust, Go"));
        assert!(prompt.contains("Difficulty level: advanced"));
        assert!(prompt.contains("total of 4 questions"));
        assert!(prompt.contains(r#"["Rust","Go"]"#));
        assert!(!prompt.contains("{skills}"));
        assert!(!prompt.contains("{question_count}"));
    }
}
