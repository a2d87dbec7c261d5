use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::notifications::{HrNotifier, PayrollNotifier};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill catalog and section query, built once at startup.
    pub analyzer: ResumeAnalyzer,
    /// Pluggable HR notifier. Default: LogNotifier.
    pub notifier: Arc<dyn HrNotifier>,
    /// Referral payouts. Default: LogPayrollNotifier.
    pub payroll: Arc<dyn PayrollNotifier>,
}
