//! Axum route handler for the Screening API.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::errors::AppError;
use crate::screening::models::{summarize_job_description, ResumeFile, ScreeningResponse};
use crate::screening::orchestrator::screen_resumes;
use crate::state::AppState;

/// Upper bound on resumes per request. More than this is a 413, not a
/// truncated batch.
pub const MAX_RESUME_FILES: usize = 10;
/// Per-file upload cap.
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// POST /api/v1/screening
///
/// Accepts a multipart request with a `job_description` text field and one or
/// more `resumes` PDF files, and returns candidates ranked by match score.
/// Request-shape problems (empty JD, too many files, non-PDF uploads) are
/// client errors; a resume that merely fails to screen is silently absent
/// from the ranking — an empty ranking is still a 200.
pub async fn handle_screen_resumes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut job_description = String::new();
    let mut files: Vec<ResumeFile> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or("") {
            "job_description" => {
                job_description = field.text().await?;
            }
            "resumes" => {
                let file_name = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let data = field.bytes().await?;
                check_resume_upload(&file_name, content_type.as_deref(), data.len())?;
                files.push(ResumeFile { file_name, data });
            }
            // Unknown fields are drained and ignored
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    validate_screening_request(&job_description, files.len())?;

    let ranked_candidates = screen_resumes(
        state.extractor.clone(),
        state.analyzer.clone(),
        &job_description,
        files,
    )
    .await?;

    Ok(Json(ScreeningResponse {
        job_description_summary: summarize_job_description(&job_description),
        ranked_candidates,
    }))
}

fn check_resume_upload(
    file_name: &str,
    content_type: Option<&str>,
    size: usize,
) -> Result<(), AppError> {
    if content_type != Some("application/pdf") {
        return Err(AppError::Validation(format!(
            "File '{file_name}' is not a PDF. Only PDF files are accepted."
        )));
    }
    if size > MAX_RESUME_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "File '{file_name}' exceeds the 10MB per-file limit."
        )));
    }
    Ok(())
}

fn validate_screening_request(job_description: &str, file_count: usize) -> Result<(), AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if file_count > MAX_RESUME_FILES {
        return Err(AppError::PayloadTooLarge(format!(
            "You can upload a maximum of {MAX_RESUME_FILES} resumes at a time."
        )));
    }
    Ok(())
}
