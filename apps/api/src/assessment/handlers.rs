//! Axum route handlers for assessment generation.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::assessment::models::{Assessment, AssessmentRequest};
use crate::assessment::provider::produce;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub success: bool,
    pub assessment: Assessment,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SkillAssessmentItem {
    pub skill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AllSkillAssessmentsResponse {
    pub success: bool,
    pub assessments: Vec<SkillAssessmentItem>,
    pub message: String,
}

/// POST /generate_assessment
///
/// One combined assessment covering every requested skill.
pub async fn handle_generate_assessment(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    if request.skills.is_empty() {
        return Err(AppError::Validation("No skills provided".to_string()));
    }

    let assessment = produce(
        &request.skills,
        request.difficulty,
        state.generator.as_ref(),
        &state.cache,
    )
    .await?;
    state.assessments.insert(assessment.clone());

    Ok(Json(AssessmentResponse {
        success: true,
        message: format!("Assessment generated for {} skills", request.skills.len()),
        assessment,
    }))
}

/// POST /generate_skill_assessment
///
/// Individual assessment for exactly one skill.
pub async fn handle_generate_skill_assessment(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    if request.skills.len() != 1 {
        return Err(AppError::Validation(
            "Please provide exactly one skill for individual assessment".to_string(),
        ));
    }

    let skill = &request.skills[0];
    let assessment = produce(
        &request.skills,
        request.difficulty,
        state.generator.as_ref(),
        &state.cache,
    )
    .await?;
    state.assessments.insert(assessment.clone());

    Ok(Json(AssessmentResponse {
        success: true,
        message: format!("Individual assessment generated for {skill}"),
        assessment,
    }))
}

/// POST /generate_all_skill_assessments
///
/// One single-skill assessment per requested skill. A failure for one skill
/// is recorded on its item instead of failing the whole batch.
pub async fn handle_generate_all_skill_assessments(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AllSkillAssessmentsResponse>, AppError> {
    if request.skills.is_empty() {
        return Err(AppError::Validation("No skills provided".to_string()));
    }

    let mut items = Vec::with_capacity(request.skills.len());
    for skill in &request.skills {
        match produce(
            std::slice::from_ref(skill),
            request.difficulty,
            state.generator.as_ref(),
            &state.cache,
        )
        .await
        {
            Ok(assessment) => {
                state.assessments.insert(assessment.clone());
                items.push(SkillAssessmentItem {
                    skill: skill.clone(),
                    assessment_id: Some(assessment.assessment_id.clone()),
                    assessment: Some(assessment),
                    error: None,
                });
            }
            Err(e) => {
                warn!("assessment generation failed for {skill}: {e}");
                items.push(SkillAssessmentItem {
                    skill: skill.clone(),
                    assessment_id: None,
                    assessment: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(Json(AllSkillAssessmentsResponse {
        success: true,
        message: format!("Generated {} individual skill assessments", items.len()),
        assessments: items,
    }))
}
