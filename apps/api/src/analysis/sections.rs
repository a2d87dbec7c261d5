#![allow(dead_code)]

//! Section extraction — isolates the text under a named résumé heading.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::analysis::patterns::{ascii_fold, fixed, space};

/// Headers that locate the project / work-experience part of a résumé.
pub const PROJECT_SECTION_HEADERS: &[&str] = &[
    "projects?",
    "project experience",
    "work experience",
    "professional experience",
    "experience",
    "employment",
    "roles? and responsibilities",
];

/// Lines containing one of these are treated as experience when no header matched.
const ACTION_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "designed",
    "built",
    "created",
    "led",
    "managed",
    "worked on",
    "responsible for",
    "collaborated",
];

/// A heading that closes whatever section precedes it.
static SECTION_TERMINATOR: Lazy<Regex> = Lazy::new(|| {
    let ws = space();
    let heading =
        ascii_fold("education|skills|certifications?|awards?|references?|hobbies|interests?");
    fixed(&format!(r"\n{ws}*{heading}{ws}*:?{ws}*\n"))
});

/// Compiled, ordered set of section headers.
#[derive(Debug, Clone)]
pub struct SectionQuery {
    headers: Vec<Regex>,
}

impl SectionQuery {
    /// Compiles each header fragment. Fragments that are not valid regex are skipped.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers = headers
            .into_iter()
            .filter_map(|header| {
                let header = header.as_ref();
                let pattern = format!(
                    r"(?:^|\n){ws}*{}{ws}*:?{ws}*\n",
                    ascii_fold(header),
                    ws = space()
                );
                match Regex::new(&pattern) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!("Skipping section header '{header}': {e}");
                        None
                    }
                }
            })
            .collect();
        Self { headers }
    }

    pub fn project_experience() -> Self {
        Self::new(PROJECT_SECTION_HEADERS)
    }

    /// Returns the text under every matching header (each followed by a newline),
    /// or the action-verb lines when no header matched. Empty when neither finds anything.
    pub fn extract(&self, text: &str) -> String {
        let mut extracted = String::new();

        for header in &self.headers {
            let Some(m) = header.find(text) else {
                continue;
            };
            let start = m.end();
            let end = SECTION_TERMINATOR
                .find_at(text, start)
                .map(|t| t.start())
                .unwrap_or(text.len());
            let body = &text[start..end];
            if !body.is_empty() {
                extracted.push_str(body);
                extracted.push('\n');
            }
        }

        if extracted.is_empty() {
            extracted = action_verb_lines(text);
        }

        extracted
    }
}

/// Convenience form of [`SectionQuery::extract`] for one-off header lists.
pub fn extract_section(text: &str, headers: &[&str]) -> String {
    SectionQuery::new(headers).extract(text)
}

fn action_verb_lines(text: &str) -> String {
    let mut kept = String::new();
    for line in text.split('\n') {
        let line_lower = line.to_lowercase();
        if ACTION_VERBS.iter().any(|verb| line_lower.contains(verb)) {
            kept.push_str(line);
            kept.push('\n');
        }
    }
    kept
}
