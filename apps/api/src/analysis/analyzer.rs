//! Résumé analyzer — turns extracted résumé text into a bounded score and a skill list.
//!
//! Pure and synchronous: no I/O, no shared mutable state. The catalog is
//! passed in explicitly; the fixed rule patterns are compiled once.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::catalog::SkillCatalog;
use crate::analysis::rules::{
    certification_points, detect_education, education_points, experience_points,
    max_experience_years, project_bonus_points, skill_points, unique_certifications,
    EducationLevel, QualitySignals,
};
use crate::analysis::sections::SectionQuery;
use crate::analysis::skills::{match_skills, Haystack};

pub const MAX_SCORE: u32 = 100;

static PROJECT_QUERY: Lazy<SectionQuery> = Lazy::new(SectionQuery::project_experience);

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// The contract consumed by callers: a 0–100 score and the detected skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32,
    /// Canonical names, catalog order, no duplicates.
    pub skills: Vec<String>,
}

/// Per-rule contributions and the raw measurements behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub project_bonus: u32,
    pub experience: u32,
    pub education: u32,
    pub certifications: u32,
    pub quality: u32,
    pub total: u32,

    pub skills_found: Vec<String>,
    pub skills_in_projects: usize,
    pub max_years: u32,
    pub education_level: Option<EducationLevel>,
    pub unique_certifications: usize,
    pub quality_signals: QualitySignals,
}

impl From<ScoreBreakdown> for AnalysisResult {
    fn from(breakdown: ScoreBreakdown) -> Self {
        AnalysisResult {
            score: breakdown.total,
            skills: breakdown.skills_found,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer
// ────────────────────────────────────────────────────────────────────────────

/// Holds the skill catalog built at startup. Cheap to clone; shared across requests.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    catalog: Arc<SkillCatalog>,
}

impl ResumeAnalyzer {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        analyze_resume(&self.catalog, text)
    }

    pub fn breakdown(&self, text: &str) -> ScoreBreakdown {
        score_text(&self.catalog, text)
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new(SkillCatalog::builtin())
    }
}

/// Scores `text` against `catalog`. Never fails; `""` scores 0 with no skills.
pub fn analyze_resume(catalog: &SkillCatalog, text: &str) -> AnalysisResult {
    score_text(catalog, text).into()
}

fn score_text(catalog: &SkillCatalog, text: &str) -> ScoreBreakdown {
    let document = Haystack::new(text);
    let project_section = PROJECT_QUERY.extract(text);
    let section = Haystack::new(&project_section);

    // Skills found anywhere, with a bonus for those backed by project work
    let hits = match_skills(catalog, &document, &section);
    let skills_in_projects = hits.iter().filter(|h| h.in_project).count();
    let skills_found: Vec<String> = hits.into_iter().map(|h| h.name).collect();
    let skills = skill_points(skills_found.len());
    let project_bonus = project_bonus_points(skills_in_projects);
    debug!(
        total = skills_found.len(),
        used_in_projects = skills_in_projects,
        "Skills analysis"
    );

    let max_years = max_experience_years(text);
    let experience = experience_points(max_years);

    let education_level = detect_education(document.lower());
    let education = education_points(education_level);

    let unique_certifications = unique_certifications(text);
    let certifications = certification_points(unique_certifications);

    let quality_signals = QualitySignals::detect(text, document.lower());
    let quality = quality_signals.points();

    let total = (skills + project_bonus + experience + education + certifications + quality)
        .min(MAX_SCORE);
    debug!(
        score = total,
        skills = skills_found.len(),
        words = quality_signals.word_count,
        "Resume analysis"
    );

    ScoreBreakdown {
        skills,
        project_bonus,
        experience,
        education,
        certifications,
        quality,
        total,
        skills_found,
        skills_in_projects,
        max_years,
        education_level,
        unique_certifications,
        quality_signals,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
