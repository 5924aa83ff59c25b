use axum::{extract::State, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extractor::extract_text;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub skills: Vec<String>,
}

/// POST /parse
/// Body: raw PDF bytes (no multipart wrapping). Extracts the document text
/// and responds with the distinct skill phrases found in it.
pub async fn parse_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ParseResponse>, AppError> {
    if body.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let text = extract_text(&body)?;
    let skills: Vec<String> = state.matcher.find_skills(&text).into_iter().collect();
    info!(count = skills.len(), "Extracted skills: {skills:?}");

    Ok(Json(ParseResponse { skills }))
}
