//! Axum route handlers for the Screening API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::ScoreBreakdown;
use crate::errors::AppError;
use crate::notifications::ShortlistNotice;
use crate::screening::pdf::{ensure_pdf, extract_text};
use crate::screening::shortlist::{is_shortlisted, screen_candidate};
use crate::state::AppState;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub score: u32,
    pub skills: Vec<String>,
    pub breakdown: ScoreBreakdown,
    pub shortlisted: bool,
    pub threshold: u32,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub upload_id: Uuid,
    pub score: u32,
    pub skills: Vec<String>,
    pub shortlisted: bool,
    pub analyzed_at: DateTime<Utc>,
}

struct ResumeUpload {
    file_name: String,
    data: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Scores already-extracted résumé text. Reports the shortlist decision
/// without notifying anyone.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let breakdown = state.analyzer.breakdown(&request.text);
    let threshold = state.config.resume_score_threshold;

    Ok(Json(AnalyzeResponse {
        score: breakdown.total,
        skills: breakdown.skills_found.clone(),
        shortlisted: is_shortlisted(breakdown.total, threshold),
        threshold,
        breakdown,
    }))
}

/// POST /api/v1/resumes/upload
///
/// Full intake pipeline: multipart PDF → text extraction → analysis → shortlist.
/// The uploaded file itself is not retained.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let upload = read_resume_field(&mut multipart, state.config.max_upload_bytes).await?;
    let upload_id = Uuid::new_v4();
    info!(
        upload_id = %upload_id,
        file_name = %upload.file_name,
        bytes = upload.data.len(),
        "Resume received"
    );

    let text = extract_text(upload.data).await?;
    let result = state.analyzer.analyze(&text);
    info!(upload_id = %upload_id, score = result.score, "Resume analyzed");

    let shortlisted = screen_candidate(
        state.notifier.as_ref(),
        ShortlistNotice {
            upload_id,
            file_name: upload.file_name,
            score: result.score,
            threshold: state.config.resume_score_threshold,
            skills: result.skills.clone(),
        },
    )
    .await;

    Ok(Json(UploadResponse {
        message: "Resume uploaded and analyzed successfully".to_string(),
        upload_id,
        score: result.score,
        skills: result.skills,
        shortlisted,
        analyzed_at: Utc::now(),
    }))
}

/// Finds the `resume` field, checks its content type, and buffers it.
async fn read_resume_field(
    multipart: &mut Multipart,
    limit: usize,
) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        ensure_pdf(field.content_type())?;
        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        // An empty part is left to the PDF parser, which rejects it
        let data = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
        return Ok(ResumeUpload { file_name, data });
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(limit)
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
