//! Axum route handler for resume upload and job recommendation.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::job::Job;
use crate::skills::extract_skills;
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

pub const NO_MATCH_MESSAGE: &str = "No matching jobs found";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResumeMatchResponse {
    Matched {
        skills: Vec<String>,
        jobs: Vec<Job>,
    },
    NoMatch {
        message: &'static str,
        jobs: Vec<Job>,
    },
}

/// POST /upload-resume
///
/// Pipeline: read `resume` field → extract PDF text → match skill vocabulary →
/// fetch jobs sharing any matched skill. No matched skills is a normal 200.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeMatchResponse>, AppError> {
    let multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    let document = read_resume_field(multipart).await?;
    info!("Resume received ({} bytes)", document.len());

    match_resume(&state, document)
        .await
        .map(Json)
        .map_err(|e| e.with_public_message("Error processing resume"))
}

async fn match_resume(state: &AppState, document: Bytes) -> Result<ResumeMatchResponse, AppError> {
    let text = state.extractor.extract_text(document).await?;
    let skills = extract_skills(&text, &state.skills);

    if skills.is_empty() {
        debug!("No vocabulary skills found in resume");
        return Ok(ResumeMatchResponse::NoMatch {
            message: NO_MATCH_MESSAGE,
            jobs: vec![],
        });
    }

    let jobs = state.jobs.find_by_any_skill(&skills).await?;
    info!("Resume matched {} skills, {} jobs", skills.len(), jobs.len());
    Ok(ResumeMatchResponse::Matched { skills, jobs })
}

/// Returns the bytes of the first `resume` field; other fields are drained.
async fn read_resume_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(RESUME_FIELD) {
            return field.bytes().await.map_err(multipart_error);
        }
        field.bytes().await.map_err(multipart_error)?;
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{RESUME_FIELD}'"
    )))
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}
