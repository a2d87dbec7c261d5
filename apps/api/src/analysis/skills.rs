use serde::{Deserialize, Serialize};

use crate::analysis::catalog::SkillCatalog;

/// A piece of text prepared for synonym matching.
pub struct Haystack<'a> {
    original: &'a str,
    lower: String,
}

impl<'a> Haystack<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lower: original.to_lowercase(),
        }
    }

    pub fn original(&self) -> &str {
        self.original
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }
}

/// A catalog skill detected in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillHit {
    pub name: String,
    /// Also mentioned inside the project/experience section.
    pub in_project: bool,
}

/// Tests every catalog skill against the document, then each found skill
/// against the project section. Hits come back in catalog order, one per skill.
pub fn match_skills(
    catalog: &SkillCatalog,
    document: &Haystack<'_>,
    project_section: &Haystack<'_>,
) -> Vec<SkillHit> {
    catalog
        .entries()
        .iter()
        .filter(|entry| {
            entry
                .synonyms
                .iter()
                .any(|s| s.is_match(document.original(), document.lower()))
        })
        .map(|entry| SkillHit {
            name: entry.name.clone(),
            in_project: entry
                .synonyms
                .iter()
                .any(|s| s.is_match(project_section.original(), project_section.lower())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(document: &str, section: &str) -> Vec<SkillHit> {
        let catalog = SkillCatalog::builtin();
        match_skills(&catalog, &Haystack::new(document), &Haystack::new(section))
    }

    #[test]
    fn test_hits_follow_catalog_order() {
        let found = hits("Docker, Python and React", "");
        let names: Vec<_> = found.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["React", "Python", "Docker"]);
    }

    #[test]
    fn test_multiple_synonyms_yield_one_hit() {
        let found = hits("mysql and postgresql", "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "SQL");
    }

    #[test]
    fn test_in_project_flag_uses_section_text() {
        let found = hits("Kubernetes and Redis", "Kubernetes operator");
        assert_eq!(
            found,
            vec![
                SkillHit {
                    name: "Kubernetes".to_string(),
                    in_project: true
                },
                SkillHit {
                    name: "Redis".to_string(),
                    in_project: false
                },
            ]
        );
    }

    #[test]
    fn test_pattern_synonym_matches_in_section() {
        let found = hits("Java", "services in JAVA");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Java");
        assert!(found[0].in_project);
    }

    #[test]
    fn test_nothing_found_in_plain_text() {
        assert!(hits("lorem ipsum dolor", "lorem").is_empty());
    }
}
