// Résumé screening service
// Implements: PDF intake, analysis, shortlist decision.
// Scoring itself lives in `analysis`; this module only hosts it.

pub mod handlers;
pub mod pdf;
pub mod shortlist;
