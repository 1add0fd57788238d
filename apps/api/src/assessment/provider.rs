//! Assessment provider — walks the tier chain to produce one assessment:
//! cache hit, predefined bank, external AI generation, structured fallback.
//!
//! Tiers are ordered cheapest/most-specific first and each is attempted only
//! when the prior one is inapplicable or fails. Single-skill requests walk
//! the whole chain; multi-skill requests go straight to the generation tier.

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::bank;
use crate::assessment::cache::AssessmentCache;
use crate::assessment::models::{Assessment, AssessmentSource, Difficulty, Question};
use crate::assessment::prompts::build_assessment_prompt;
use crate::errors::AppError;
use crate::llm_client::{extract_json, LlmError, TextGenerator};

/// The structured fallback builds at most this many questions.
pub const MAX_FALLBACK_QUESTIONS: usize = 5;

pub const GENERIC_FALLBACK_OPTIONS: [&str; 4] = [
    "Web development",
    "Data analysis",
    "System programming",
    "All of the above",
];

const GENERATION_MAX_TOKENS: u32 = 1000;
const GENERATION_TEMPERATURE: f32 = 0.7;

/// What the generation tier is expected to return. Model-supplied ids and
/// difficulty are not trusted; the provider re-stamps them. Deserialization
/// fails (→ tier miss) when the questions array is missing.
#[derive(Debug, Deserialize)]
struct GeneratedAssessment {
    #[serde(default)]
    title: Option<String>,
    questions: Vec<Question>,
}

/// Produces one assessment for a non-empty ordered list of skills.
pub async fn produce(
    skills: &[String],
    difficulty: Difficulty,
    generator: &dyn TextGenerator,
    cache: &AssessmentCache,
) -> Result<Assessment, AppError> {
    if skills.is_empty() {
        return Err(AppError::Validation("No skills provided".to_string()));
    }

    if let [skill] = skills {
        // Tier 1: cache. Served verbatim; the entry keeps the source it was
        // stamped with at write time.
        if let Some(cached) = cache.lookup(skill, difficulty) {
            info!("serving cached assessment for {skill}");
            return Ok(cached);
        }

        // Tier 2: predefined bank, with write-through to the cache.
        if let Some(questions) = bank::predefined_questions(skill) {
            info!("serving predefined assessment for {skill}");
            let assessment = Assessment {
                assessment_id: format!("predef_{}_{}", skill.to_lowercase(), short_id()),
                title: format!("{skill} Skills Assessment"),
                difficulty,
                skills_tested: skills.to_vec(),
                questions,
                created_at: Utc::now().timestamp(),
                source: AssessmentSource::Predefined,
            };
            cache.store(skill, difficulty, &assessment);
            return Ok(assessment);
        }
    }

    // Tier 3: external generation.
    match generate_with_ai(skills, difficulty, generator).await {
        Ok(assessment) => {
            info!("generated AI assessment for {} skill(s)", skills.len());
            if let [skill] = skills {
                cache.store(skill, difficulty, &assessment);
            }
            Ok(assessment)
        }
        // A missing credential on a single-skill request is the one tier
        // failure surfaced to the caller instead of degraded away.
        Err(LlmError::NotConfigured) if skills.len() == 1 => Err(AppError::Llm(
            "AI generation is required for this assessment. Please configure a valid API key."
                .to_string(),
        )),
        // Tier 4: structured fallback for every other failure.
        Err(e) => {
            warn!("AI assessment generation failed, using structured fallback: {e}");
            Ok(structured_fallback(skills, difficulty))
        }
    }
}

async fn generate_with_ai(
    skills: &[String],
    difficulty: Difficulty,
    generator: &dyn TextGenerator,
) -> Result<Assessment, LlmError> {
    let prompt = build_assessment_prompt(skills, difficulty);
    let output = generator
        .generate(&prompt, GENERATION_MAX_TOKENS, GENERATION_TEMPERATURE)
        .await?;

    let generated: GeneratedAssessment = extract_json(&output).ok_or(LlmError::Unparsable)?;
    if generated.questions.is_empty() {
        return Err(LlmError::Unparsable);
    }

    Ok(Assessment {
        assessment_id: Uuid::new_v4().to_string(),
        title: generated
            .title
            .unwrap_or_else(|| "Comprehensive Technical Skills Assessment".to_string()),
        difficulty,
        skills_tested: skills.to_vec(),
        questions: generated.questions,
        created_at: Utc::now().timestamp(),
        source: AssessmentSource::AiGenerated,
    })
}

/// Deterministic last-resort assessment: one fixed seed question per skill,
/// capped at `MAX_FALLBACK_QUESTIONS`; skills without a seed entry get the
/// generic templated question. Not written to the cache.
pub fn structured_fallback(skills: &[String], difficulty: Difficulty) -> Assessment {
    let questions = skills
        .iter()
        .take(MAX_FALLBACK_QUESTIONS)
        .enumerate()
        .map(|(i, skill)| {
            let id = format!("q{}", i + 1);
            match bank::seed_question(skill) {
                Some(seed) => Question {
                    id,
                    skill: skill.clone(),
                    question: seed.question.to_string(),
                    options: seed.options.iter().map(|o| o.to_string()).collect(),
                    correct_answer: seed.correct_answer.to_string(),
                    explanation: seed.explanation.to_string(),
                },
                None => Question {
                    id,
                    skill: skill.clone(),
                    question: format!("What is {skill} primarily used for?"),
                    options: GENERIC_FALLBACK_OPTIONS
                        .iter()
                        .map(|o| o.to_string())
                        .collect(),
                    correct_answer: "All of the above".to_string(),
                    explanation: format!("{skill} can be used in various contexts"),
                },
            }
        })
        .collect();

    Assessment {
        assessment_id: Uuid::new_v4().to_string(),
        title: "Technical Skills Assessment".to_string(),
        difficulty,
        skills_tested: skills.to_vec(),
        questions,
        created_at: Utc::now().timestamp(),
        source: AssessmentSource::StructuredFallback,
    }
}

fn short_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_string()
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

    struct Failing;

    #[async_trait]
    impl TextGenerator for Failing {
        async fn generate(&self, _: &str, _: u32, _: f32) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "upstream unavailable".to_string(),
            })
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const CANNED_ASSESSMENT: &str = r#"Sure, here it is:
{
    "assessment_id": "unique_id_here",
    "title": "Comprehensive Technical Skills Assessment",
    "difficulty": "intermediate",
    "skills_tested": ["Rust", "Go"],
    "questions": [
        {"id": "q1", "skill": "Rust", "question": "Which keyword declares an immutable binding?",
         "options": ["let", "mut", "const", "static"], "correct_answer": "let",
         "explanation": "let bindings are immutable by default"},
        {"id": "q2", "skill": "Rust", "question": "What does the ? operator do?",
         "options": ["Propagates errors", "Panics", "Loops", "Awaits"],
         "correct_answer": "Propagates errors", "explanation": "? returns early on Err"},
        {"id": "q3", "skill": "Go", "question": "Which keyword starts a goroutine?",
         "options": ["go", "async", "spawn", "run"], "correct_answer": "go",
         "explanation": "go launches a goroutine"},
        {"id": "q4", "skill": "Go", "question": "What is a channel used for?",
         "options": ["Communication", "Inheritance", "Reflection", "Macros"],
         "correct_answer": "Communication", "explanation": "channels pass values between goroutines"}
    ]
}"#;

    #[tokio::test]
    async fn test_known_single_skill_uses_predefined_bank() {
        let cache = AssessmentCache::new();
        let assessment = produce(
            &skills(&["Python"]),
            Difficulty::Intermediate,
            &Unconfigured,
            &cache,
        )
        .await
        .unwrap();

        assert_eq!(assessment.source, AssessmentSource::Predefined);
        assert_eq!(assessment.questions.len(), 5);
        assert_eq!(assessment.questions[0].id, "py_1");
        assert!(assessment.assessment_id.starts_with("predef_python_"));
        assert_eq!(assessment.title, "Python Skills Assessment");
    }

    #[tokio::test]
    async fn test_predefined_assessment_is_written_through_to_cache() {
        let cache = AssessmentCache::new();
        let first = produce(
            &skills(&["Python"]),
            Difficulty::Intermediate,
            &Unconfigured,
            &cache,
        )
        .await
        .unwrap();
        let second = produce(
            &skills(&["Python"]),
            Difficulty::Intermediate,
            &Unconfigured,
            &cache,
        )
        .await
        .unwrap();

        // Same id proves the second call was a cache hit, not a fresh build.
        assert_eq!(first.assessment_id, second.assessment_id);
    }

    #[tokio::test]
    async fn test_unknown_single_skill_without_credential_is_hard_error() {
        let cache = AssessmentCache::new();
        let result = produce(
            &skills(&["COBOL"]),
            Difficulty::Intermediate,
            &Unconfigured,
            &cache,
        )
        .await;

        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[tokio::test]
    async fn test_multi_skill_without_credential_degrades_to_fallback() {
        let cache = AssessmentCache::new();
        let assessment = produce(
            &skills(&["COBOL", "Fortran"]),
            Difficulty::Beginner,
            &Unconfigured,
            &cache,
        )
        .await
        .unwrap();

        assert_eq!(assessment.source, AssessmentSource::StructuredFallback);
        assert_eq!(assessment.questions.len(), 2);
    }

    #[tokio::test]
    async fn test_service_error_on_single_skill_degrades_to_fallback() {
        let cache = AssessmentCache::new();
        let assessment = produce(
            &skills(&["Haskell"]),
            Difficulty::Intermediate,
            &Failing,
            &cache,
        )
        .await
        .unwrap();

        assert_eq!(assessment.source, AssessmentSource::StructuredFallback);
    }

    #[tokio::test]
    async fn test_unparsable_output_degrades_to_fallback() {
        let cache = AssessmentCache::new();
        let assessment = produce(
            &skills(&["Rust", "Go"]),
            Difficulty::Intermediate,
            &Canned("I cannot produce JSON today, sorry."),
            &cache,
        )
        .await
        .unwrap();

        assert_eq!(assessment.source, AssessmentSource::StructuredFallback);
    }

    #[tokio::test]
    async fn test_ai_generation_success_is_parsed_and_restamped() {
        let cache = AssessmentCache::new();
        let assessment = produce(
            &skills(&["Rust", "Go"]),
            Difficulty::Intermediate,
            &Canned(CANNED_ASSESSMENT),
            &cache,
        )
        .await
        .unwrap();

        assert_eq!(assessment.source, AssessmentSource::AiGenerated);
        assert_eq!(assessment.questions.len(), 4);
        assert_eq!(assessment.skills_tested, skills(&["Rust", "Go"]));
        // The model-supplied id is replaced with a fresh unique one.
        assert_ne!(assessment.assessment_id, "unique_id_here");
    }

    #[tokio::test]
    async fn test_ai_generated_single_skill_is_cached() {
        let cache = AssessmentCache::new();
        let generated = produce(
            &skills(&["Rust"]),
            Difficulty::Advanced,
            &Canned(CANNED_ASSESSMENT),
            &cache,
        )
        .await
        .unwrap();

        let cached = cache.lookup("Rust", Difficulty::Advanced).unwrap();
        assert_eq!(cached.assessment_id, generated.assessment_id);
        assert_eq!(cached.source, AssessmentSource::AiGenerated);
    }

    #[tokio::test]
    async fn test_empty_skills_is_a_validation_error() {
        let cache = AssessmentCache::new();
        let result = produce(&[], Difficulty::Intermediate, &Unconfigured, &cache).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_structured_fallback_generic_question_for_unknown_skill() {
        let assessment = structured_fallback(&skills(&["COBOL"]), Difficulty::Intermediate);

        assert_eq!(assessment.questions.len(), 1);
        let q = &assessment.questions[0];
        assert_eq!(q.question, "What is COBOL primarily used for?");
        assert_eq!(
            q.options,
            vec![
                "Web development",
                "Data analysis",
                "System programming",
                "All of the above"
            ]
        );
        assert_eq!(q.correct_answer, "All of the above");
    }

    #[test]
    fn test_structured_fallback_uses_seed_questions_for_known_skills() {
        let assessment = structured_fallback(&skills(&["Java"]), Difficulty::Intermediate);
        assert_eq!(
            assessment.questions[0].correct_answer,
            "public static void main(String[] args)"
        );
    }

    #[test]
    fn test_structured_fallback_caps_at_five_questions() {
        let many = skills(&["A", "B", "C", "D", "E", "F", "G"]);
        let assessment = structured_fallback(&many, Difficulty::Intermediate);
        assert_eq!(assessment.questions.len(), MAX_FALLBACK_QUESTIONS);
        // skills_tested still lists every requested skill.
        assert_eq!(assessment.skills_tested.len(), 7);
    }
}
