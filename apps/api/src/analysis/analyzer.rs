//! Result analyzer — scores a graded answer set and assembles weak skills,
//! video recommendations and an improvement plan.
//!
//! Mirrors the provider's tier shape: an AI analysis attempt with a
//! deterministic fallback. Unlike assessment generation, analysis never
//! hard-fails on a missing credential — the deterministic path always
//! produces a result.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::grading::{score_percentage, Verdict};
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::videos::{self, VideoRecommendation};
use crate::llm_client::{extract_json, LlmError, TextGenerator};

/// Below this score every tested skill is classified weak; at or above it,
/// none are. Strict less-than. Deliberately decoupled from
/// `videos::VIDEO_SCORE_THRESHOLD` even though both currently sit at 40.
pub const WEAK_SKILL_THRESHOLD: f64 = 40.0;

const ANALYSIS_MAX_TOKENS: u32 = 800;
const ANALYSIS_TEMPERATURE: f32 = 0.5;

/// Derived result returned to the caller. Not stored anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub assessment_id: String,
    pub score: f64,
    pub weak_skills: Vec<String>,
    pub recommendations: Vec<VideoRecommendation>,
    pub improvement_plan: String,
}

/// What the AI analysis tier is expected to return. The score and assessment
/// id it echoes back are ignored — the locally computed values are
/// authoritative.
#[derive(Debug, Deserialize)]
struct GeneratedAnalysis {
    #[serde(default)]
    weak_skills: Vec<String>,
    #[serde(default)]
    recommendations: Vec<VideoRecommendation>,
    #[serde(default)]
    improvement_plan: String,
}

pub async fn analyze(
    assessment_id: &str,
    graded: &HashMap<String, Verdict>,
    skills_tested: &[String],
    generator: &dyn TextGenerator,
) -> AnalysisResult {
    let score = score_percentage(graded);
    let correct = graded.values().filter(|v| **v == Verdict::Correct).count();

    match analyze_with_ai(
        assessment_id,
        skills_tested,
        score,
        graded.len(),
        correct,
        generator,
    )
    .await
    {
        Ok(result) => {
            info!("AI analysis complete, score {score:.1}%");
            result
        }
        Err(e) => {
            warn!("AI analysis unavailable, using deterministic fallback: {e}");
            structured_analysis(assessment_id, score, skills_tested)
        }
    }
}

async fn analyze_with_ai(
    assessment_id: &str,
    skills_tested: &[String],
    score: f64,
    total: usize,
    correct: usize,
    generator: &dyn TextGenerator,
) -> Result<AnalysisResult, LlmError> {
    let prompt = build_analysis_prompt(assessment_id, skills_tested, score, total, correct);
    let output = generator
        .generate(&prompt, ANALYSIS_MAX_TOKENS, ANALYSIS_TEMPERATURE)
        .await?;

    let generated: GeneratedAnalysis = extract_json(&output).ok_or(LlmError::Unparsable)?;

    let mut recommendations = generated.recommendations;
    if recommendations.is_empty() {
        // The model identified nothing to watch; fill in from the curated
        // lookup for every tested skill at the achieved score.
        for skill in skills_tested {
            recommendations.extend(videos::recommend(skill, score));
        }
    }

    Ok(AnalysisResult {
        assessment_id: assessment_id.to_string(),
        score,
        weak_skills: generated.weak_skills,
        recommendations,
        improvement_plan: generated.improvement_plan,
    })
}

/// Deterministic analysis used whenever the AI tier is unavailable.
pub fn structured_analysis(assessment_id: &str, score: f64, skills: &[String]) -> AnalysisResult {
    let weak_skills: Vec<String> = if score < WEAK_SKILL_THRESHOLD {
        skills.to_vec()
    } else {
        Vec::new()
    };

    let mut recommendations = Vec::new();
    for skill in &weak_skills {
        recommendations.extend(videos::recommend(skill, score));
    }

    let improvement_plan = if score >= 80.0 {
        "Excellent performance! Keep practicing to maintain your high level of expertise."
            .to_string()
    } else if score >= 60.0 {
        "Good foundation! Continue practicing to strengthen your skills further.".to_string()
    } else if score >= 40.0 {
        "Average performance. Consider additional practice to improve your skills.".to_string()
    } else {
        format!(
            "Need improvement in {}. Start with the recommended beginner videos and practice regularly.",
            weak_skills.join(", ")
        )
    };

    AnalysisResult {
        assessment_id: assessment_id.to_string(),
        score,
        weak_skills,
        recommendations,
        improvement_plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Unconfigured;

    #[async_trait]
    impl TextGenerator for Unconfigured {
        async fn generate(&self, _: &str, _: u32, _: f32) -> Result<String, LlmError> {
            Err(LlmError::NotConfigured)
        }

        fn is_configured(&self) -> bool {
            false
        }
    }

    struct Canned(&'static str);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _: &str, _: u32, _: f32) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn graded(correct: usize, incorrect: usize) -> HashMap<String, Verdict> {
        let mut map = HashMap::new();
        for i in 0..correct {
            map.insert(format!("c{i}"), Verdict::Correct);
        }
        for i in 0..incorrect {
            map.insert(format!("i{i}"), Verdict::Incorrect);
        }
        map
    }

    #[test]
    fn test_weak_skill_boundary_is_strict() {
        // Exactly 40.0 is not weak; the boundary is strict less-than.
        let at_boundary = structured_analysis("a1", 40.0, &skills(&["Python"]));
        assert!(at_boundary.weak_skills.is_empty());
        assert!(at_boundary.recommendations.is_empty());

        let below = structured_analysis("a1", 39.9, &skills(&["Python"]));
        assert_eq!(below.weak_skills, skills(&["Python"]));
        assert_eq!(below.recommendations.len(), 2);
    }

    #[test]
    fn test_improvement_plan_bands() {
        let plan = |score: f64| structured_analysis("a1", score, &skills(&["SQL"])).improvement_plan;

        assert!(plan(85.0).contains("Excellent performance"));
        assert!(plan(80.0).contains("Excellent performance"));
        assert!(plan(65.0).contains("Good foundation"));
        assert!(plan(60.0).contains("Good foundation"));
        assert!(plan(45.0).contains("Average performance"));
        assert!(plan(40.0).contains("Average performance"));
        assert!(plan(20.0).contains("Need improvement in SQL"));
    }

    #[test]
    fn test_low_score_recommendations_cover_all_weak_skills() {
        let result = structured_analysis("a1", 10.0, &skills(&["Python", "COBOL"]));
        assert_eq!(result.weak_skills.len(), 2);
        // Two curated Python entries plus one generic COBOL entry.
        assert_eq!(result.recommendations.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_credential_falls_through_to_deterministic() {
        let result = analyze("a1", &graded(2, 3), &skills(&["Python"]), &Unconfigured).await;
        assert_eq!(result.score, 40.0);
        assert!(result.weak_skills.is_empty());
        assert!(result.improvement_plan.contains("Average performance"));
    }

    #[tokio::test]
    async fn test_unparsable_ai_output_falls_through_to_deterministic() {
        let result = analyze(
            "a1",
            &graded(0, 4),
            &skills(&["Python"]),
            &Canned("no json here"),
        )
        .await;
        assert_eq!(result.score, 0.0);
        assert_eq!(result.weak_skills, skills(&["Python"]));
    }

    #[tokio::test]
    async fn test_ai_analysis_is_parsed_with_local_score_kept() {
        let canned = r#"{
            "assessment_id": "model-invented-id",
            "score": 99.9,
            "weak_skills": ["Python"],
            "recommendations": [
                {"skill": "Python", "video_title": "T", "video_url": "u", "description": "d"}
            ],
            "improvement_plan": "Practice more."
        }"#;
        let result = analyze("a1", &graded(1, 4), &skills(&["Python"]), &Canned(canned)).await;

        // Locally computed values win over what the model echoed.
        assert_eq!(result.assessment_id, "a1");
        assert_eq!(result.score, 20.0);
        assert_eq!(result.weak_skills, skills(&["Python"]));
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.improvement_plan, "Practice more.");
    }

    #[tokio::test]
    async fn test_empty_ai_recommendations_are_synthesized_from_curated_lookup() {
        let canned = r#"{"weak_skills": ["Python"], "recommendations": [], "improvement_plan": "p"}"#;
        let result = analyze(
            "a1",
            &graded(1, 4),
            &skills(&["Python", "COBOL"]),
            &Canned(canned),
        )
        .await;

        // Score 20: two curated Python entries plus one generic COBOL entry.
        assert_eq!(result.recommendations.len(), 3);
    }

    #[tokio::test]
    async fn test_no_answers_scores_zero() {
        let result = analyze("a1", &HashMap::new(), &skills(&["Python"]), &Unconfigured).await;
        assert_eq!(result.score, 0.0);
        assert_eq!(result.weak_skills, skills(&["Python"]));
    }
}
