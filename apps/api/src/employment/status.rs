//! Employee status transitions.
//!
//! `apply_status_change` is pure: it returns the updated record and, when a
//! referral bonus just became payable, the payout payroll must hear about.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::notifications::ReferralPayout;

/// Length of the probation period that starts on the joining date.
pub const PROBATION_MONTHS: u32 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Pending,
    Probation,
    Permanent,
    Rejected,
}

/// A candidate or employee as tracked by HR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    #[serde(default)]
    pub probation_end_date: Option<NaiveDate>,
    /// Email of the employee who referred this candidate.
    #[serde(default)]
    pub referred_by: Option<String>,
    #[serde(default)]
    pub referral_paid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    pub record: CandidateRecord,
    /// Set only on the transition that makes the referral bonus payable.
    pub referral_payout: Option<ReferralPayout>,
}

pub fn probation_end(joining_date: NaiveDate) -> Option<NaiveDate> {
    joining_date.checked_add_months(Months::new(PROBATION_MONTHS))
}

/// Moves `record` to `status`.
///
/// - `Probation` with a joining date records it and sets the probation end.
/// - `Permanent` for a referred, unpaid candidate whose referrer is known
///   (`referrer_name`) yields a payout and marks the referral paid.
///
/// Any other combination only changes the status.
pub fn apply_status_change(
    mut record: CandidateRecord,
    status: EmployeeStatus,
    joining_date: Option<NaiveDate>,
    referrer_name: Option<&str>,
) -> Result<StatusTransition, AppError> {
    record.status = status;
    let mut referral_payout = None;

    match status {
        EmployeeStatus::Probation => {
            if let Some(joined) = joining_date {
                let end = probation_end(joined).ok_or_else(|| {
                    AppError::Validation(format!("Joining date {joined} is out of range"))
                })?;
                record.joining_date = Some(joined);
                record.probation_end_date = Some(end);
            }
        }
        EmployeeStatus::Permanent => {
            if record.referred_by.is_some() && !record.referral_paid {
                if let Some(referrer) = referrer_name {
                    referral_payout = Some(ReferralPayout {
                        referrer_name: referrer.to_string(),
                        employee_name: record.full_name.clone(),
                        employee_email: record.email.clone(),
                    });
                    record.referral_paid = true;
                }
            }
        }
        EmployeeStatus::Pending | EmployeeStatus::Rejected => {}
    }

    Ok(StatusTransition {
        record,
        referral_payout,
    })
}
