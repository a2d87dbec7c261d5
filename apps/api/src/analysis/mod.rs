// Résumé analysis engine
// Implements: section extraction, skill matching, rule scoring, aggregation.
// Pure functions over text — no I/O happens below this module.

pub mod analyzer;
pub mod catalog;
pub mod patterns;
pub mod rules;
pub mod sections;
pub mod skills;

pub use analyzer::{ResumeAnalyzer, ScoreBreakdown};
pub use catalog::SkillCatalog;
