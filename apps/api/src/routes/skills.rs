//! Axum route handlers for the Skills API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub count: usize,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: SkillSet,
}

/// GET /api/v1/skills
///
/// Returns the active skill vocabulary in its configured order.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    let vocabulary = state.analyzer.nlp().vocabulary();
    Json(SkillListResponse {
        count: vocabulary.len(),
        skills: vocabulary.entries().to_vec(),
    })
}

/// POST /api/v1/skills/extract
///
/// Extracts vocabulary skills from a single text. Empty text yields an empty set.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Json<ExtractSkillsResponse> {
    let skills = state.analyzer.nlp().extract_skills(&request.text);
    Json(ExtractSkillsResponse { skills })
}
