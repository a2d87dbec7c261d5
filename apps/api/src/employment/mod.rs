// Employee lifecycle
// Implements: status transitions (probation dates, referral payouts).
// Records are supplied by the caller; nothing is stored here.

pub mod handlers;
pub mod status;
