//! Outbound notifications — pluggable, trait-based sinks.
//!
//! `HrNotifier` hears about shortlisted candidates; `PayrollNotifier` hears
//! about referral bonuses that became payable. Defaults emit structured log
//! records. `AppState` holds one `Arc<dyn _>` of each, chosen at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// HR
// ────────────────────────────────────────────────────────────────────────────

/// What HR is told about a candidate who met the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistNotice {
    pub upload_id: Uuid,
    pub file_name: String,
    pub score: u32,
    pub threshold: u32,
    pub skills: Vec<String>,
}

/// Implement this to deliver shortlist notices somewhere other than the log.
#[async_trait]
pub trait HrNotifier: Send + Sync {
    async fn notify(&self, notice: &ShortlistNotice) -> Result<(), AppError>;
}

pub struct LogNotifier;

#[async_trait]
impl HrNotifier for LogNotifier {
    async fn notify(&self, notice: &ShortlistNotice) -> Result<(), AppError> {
        info!(
            upload_id = %notice.upload_id,
            file_name = %notice.file_name,
            score = notice.score,
            threshold = notice.threshold,
            skills = %notice.skills.join(", "),
            "Candidate shortlisted for HR review"
        );
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Payroll
// ────────────────────────────────────────────────────────────────────────────

/// A referral bonus owed to `referrer_name` for bringing in the employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralPayout {
    pub referrer_name: String,
    pub employee_name: String,
    pub employee_email: String,
}

#[async_trait]
pub trait PayrollNotifier: Send + Sync {
    async fn notify_referral(&self, payout: &ReferralPayout) -> Result<(), AppError>;
}

pub struct LogPayrollNotifier;

#[async_trait]
impl PayrollNotifier for LogPayrollNotifier {
    async fn notify_referral(&self, payout: &ReferralPayout) -> Result<(), AppError> {
        info!(
            referrer = %payout.referrer_name,
            employee = %payout.employee_name,
            employee_email = %payout.employee_email,
            "Referral payment due"
        );
        Ok(())
    }
}
