//! Answer grading — the boundary between submission handling and analysis.
//!
//! Grading happens before analysis: each submitted answer is matched against
//! the stored question's correct answer by exact string equality. Answers for
//! question ids that do not exist in the assessment grade incorrect.

use std::collections::HashMap;

use serde::Serialize;

use crate::assessment::models::Assessment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

pub fn grade_answers(
    assessment: &Assessment,
    answers: &HashMap<String, String>,
) -> HashMap<String, Verdict> {
    answers
        .iter()
        .map(|(question_id, answer)| {
            let verdict = match assessment.find_question(question_id) {
                Some(question) if question.correct_answer == *answer => Verdict::Correct,
                _ => Verdict::Incorrect,
            };
            (question_id.clone(), verdict)
        })
        .collect()
}

/// Percentage of correct verdicts, 0–100. An empty answer set scores 0.
pub fn score_percentage(graded: &HashMap<String, Verdict>) -> f64 {
    if graded.is_empty() {
        return 0.0;
    }
    let correct = graded.values().filter(|v| **v == Verdict::Correct).count();
    (correct as f64 / graded.len() as f64) * 100.0
}
