use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Requested difficulty of an assessment. Defaults to intermediate when the
/// caller omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// Which tier produced an assessment. An assessment served from the cache
/// retains the source it was stamped with at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    Predefined,
    AiGenerated,
    StructuredFallback,
    Cached,
}

/// A single multiple-choice question. Immutable once created;
/// `correct_answer` always equals one of the four options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub skill: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// A generated quiz document tied to one or more skills. Created once by the
/// provider, never mutated, held in the in-memory registry for the lifetime
/// of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub assessment_id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub skills_tested: Vec<String>,
    pub questions: Vec<Question>,
    pub created_at: i64,
    pub source: AssessmentSource,
}

impl Assessment {
    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// A submitted answer set. Transient; not persisted anywhere.
#[derive(Debug, Deserialize)]
pub struct AssessmentSubmission {
    pub assessment_id: String,
    /// question id → submitted answer text
    pub answers: HashMap<String, String>,
    /// in minutes
    pub time_taken: u32,
}
