#![allow(dead_code)]

//! Individual scoring rules. Each rule returns a non-negative, capped contribution.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::patterns::{ascii_fold, fixed, non_space, space, SPACE_CHARS};

pub const SKILL_POINTS_EACH: u32 = 4;
pub const SKILL_POINTS_CAP: u32 = 30;
pub const PROJECT_BONUS_EACH: u32 = 3;
pub const PROJECT_BONUS_CAP: u32 = 20;
pub const EXPERIENCE_POINTS_PER_YEAR: u32 = 2;
pub const EXPERIENCE_POINTS_CAP: u32 = 20;
pub const CERTIFICATION_POINTS_EACH: u32 = 5;
pub const CERTIFICATION_POINTS_CAP: u32 = 10;
pub const QUALITY_POINTS_CAP: u32 = 10;

/// Ideal résumé length in words (inclusive).
pub const IDEAL_WORD_RANGE: (usize, usize) = (300, 1000);
/// Anything longer than this but outside the ideal range still earns partial credit.
pub const MIN_SUBSTANTIAL_WORDS: usize = 200;

const LINK_MARKERS: &[&str] = &["linkedin", "github", "portfolio", "website", "bitbucket"];
const SECTION_MARKERS: &[&str] = &["experience", "education", "skills", "projects"];

static EXPERIENCE_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    let ws = space();
    let years = ascii_fold("years?|yrs?");
    let experience = ascii_fold("experience|exp");
    let of = ascii_fold("of");
    let in_ = ascii_fold("in");
    [
        fixed(&format!(r"([0-9]+)\+?{ws}*{years}{ws}*(?:{of}{ws}*)?{experience}")),
        fixed(&format!(r"{experience}(?:{ws}*:)?{ws}*([0-9]+)\+?{ws}*{years}")),
        fixed(&format!(r"([0-9]+)\+?{ws}*{years}{ws}+{in_}{ws}+")),
    ]
});

static CERTIFICATION: Lazy<Regex> = Lazy::new(|| {
    let keyword = ascii_fold("certified|certification");
    fixed(&format!(r"{keyword}(?:{}+[0-9A-Za-z_]+){{0,5}}", space()))
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| fixed(&format!("{}+", space())));
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    let ns = non_space();
    fixed(&format!(r"{ns}+@{ns}+\.{ns}+"))
});
static PHONE: Lazy<Regex> =
    Lazy::new(|| fixed(&format!(r"\+?[0-9][0-9{SPACE_CHARS}\-()]{{8,}}")));
static LINKS: Lazy<Regex> = Lazy::new(|| fixed(&ascii_fold(&LINK_MARKERS.join("|"))));

pub fn skill_points(found: usize) -> u32 {
    capped(found, SKILL_POINTS_EACH, SKILL_POINTS_CAP)
}

pub fn project_bonus_points(used_in_projects: usize) -> u32 {
    capped(used_in_projects, PROJECT_BONUS_EACH, PROJECT_BONUS_CAP)
}

fn capped(count: usize, each: u32, cap: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(each)
        .min(cap)
}

/// Largest year count stated anywhere in the text, across all phrasings.
/// Overlapping phrasings are all considered; the maximum wins.
pub fn max_experience_years(text: &str) -> u32 {
    EXPERIENCE_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        // digits only, so a parse failure means overflow
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .max()
        .unwrap_or(0)
}

pub fn experience_points(years: u32) -> u32 {
    years
        .saturating_mul(EXPERIENCE_POINTS_PER_YEAR)
        .min(EXPERIENCE_POINTS_CAP)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Doctorate,
    Master,
    Bachelor,
    Diploma,
}

impl EducationLevel {
    /// Highest level first.
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Doctorate,
        EducationLevel::Master,
        EducationLevel::Bachelor,
        EducationLevel::Diploma,
    ];

    pub fn points(self) -> u32 {
        match self {
            EducationLevel::Doctorate => 20,
            EducationLevel::Master => 18,
            EducationLevel::Bachelor => 15,
            EducationLevel::Diploma => 10,
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            EducationLevel::Doctorate => &["phd", "ph.d", "ph d", "doctorate", "doctoral"],
            EducationLevel::Master => &["master", "m.s", "m.sc", "mba", "m.tech", "mca"],
            EducationLevel::Bachelor => &["bachelor", "b.s", "b.sc", "b.tech", "b.e", "b.com", "bca"],
            EducationLevel::Diploma => &["diploma", "associate"],
        }
    }
}

/// Highest education level mentioned. `lower` must already be lowercased.
pub fn detect_education(lower: &str) -> Option<EducationLevel> {
    EducationLevel::ALL
        .into_iter()
        .find(|level| level.keywords().iter().any(|kw| lower.contains(kw)))
}

pub fn education_points(level: Option<EducationLevel>) -> u32 {
    level.map(EducationLevel::points).unwrap_or(0)
}

/// Distinct certification mentions ("certified" / "certification" plus up to five words).
pub fn unique_certifications(text: &str) -> usize {
    CERTIFICATION
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

pub fn certification_points(unique: usize) -> u32 {
    capped(unique, CERTIFICATION_POINTS_EACH, CERTIFICATION_POINTS_CAP)
}

/// Number of pieces left after splitting on whitespace runs (see
/// [`SPACE_CHARS`](crate::analysis::patterns::SPACE_CHARS)). Leading or
/// trailing whitespace produces an empty piece, so `""` counts as one.
pub fn word_count(text: &str) -> usize {
    WHITESPACE_RUN.split(text).count()
}

/// Document-completeness signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitySignals {
    pub word_count: usize,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_links: bool,
    pub has_sections: bool,
}

impl QualitySignals {
    pub fn detect(text: &str, lower: &str) -> Self {
        Self {
            word_count: word_count(text),
            has_email: EMAIL.is_match(text),
            has_phone: PHONE.is_match(text),
            has_links: LINKS.is_match(text),
            has_sections: SECTION_MARKERS.iter().any(|m| lower.contains(m)),
        }
    }

    pub fn points(&self) -> u32 {
        let (min_ideal, max_ideal) = IDEAL_WORD_RANGE;
        let mut points = 0;
        if (min_ideal..=max_ideal).contains(&self.word_count) {
            points += 3;
        } else if self.word_count > MIN_SUBSTANTIAL_WORDS {
            points += 2;
        }
        if self.has_email {
            points += 2;
        }
        if self.has_phone {
            points += 2;
        }
        if self.has_links {
            points += 2;
        }
        if self.has_sections {
            points += 1;
        }
        points.min(QUALITY_POINTS_CAP)
    }
}
