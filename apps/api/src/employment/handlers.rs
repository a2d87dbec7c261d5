//! Axum route handlers for employee status updates.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::employment::status::{apply_status_change, CandidateRecord, EmployeeStatus};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub candidate: CandidateRecord,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    /// Full name of the employee behind `candidate.referred_by`, when known.
    #[serde(default)]
    pub referrer_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub message: String,
    pub candidate_id: Uuid,
    pub candidate: CandidateRecord,
    pub referral_notified: bool,
}

/// PUT /api/v1/candidates/:id/status
///
/// Applies the transition and tells payroll about a newly payable referral.
/// A payroll failure fails the request so the caller does not persist a
/// record marked paid.
pub async fn handle_status_update(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<StatusUpdateResponse>, AppError> {
    let transition = apply_status_change(
        request.candidate,
        request.status,
        request.joining_date,
        request.referrer_name.as_deref(),
    )?;

    let referral_notified = match &transition.referral_payout {
        Some(payout) => {
            state.payroll.notify_referral(payout).await?;
            true
        }
        None => false,
    };

    info!(
        candidate_id = %candidate_id,
        status = ?transition.record.status,
        referral_notified,
        "Employee status updated"
    );

    Ok(Json(StatusUpdateResponse {
        message: "Employee status updated successfully".to_string(),
        candidate_id,
        candidate: transition.record,
        referral_notified,
    }))
}
