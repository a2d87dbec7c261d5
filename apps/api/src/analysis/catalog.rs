//! Skill catalog — canonical skill names and the synonyms that detect them.
//!
//! Every synonym carries its matching strategy explicitly: a `Literal` is a
//! case-insensitive substring, a `Pattern` is a regex run against the
//! original-case text (word boundaries, escaped symbols) that folds ASCII
//! case only.

use regex::Regex;
use thiserror::Error;

use crate::analysis::patterns::ascii_fold;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Skill '{0}' has no synonyms")]
    EmptySynonyms(String),

    #[error("Skill '{0}' is defined more than once")]
    DuplicateSkill(String),

    #[error("Invalid pattern '{pattern}' for skill '{skill}': {source}")]
    InvalidPattern {
        skill: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A single surface form used to detect a skill.
#[derive(Debug, Clone)]
pub enum Synonym {
    /// Stored lowercase; tested against the lowercased text.
    Literal(String),
    /// Compiled ASCII case-insensitive; tested against the original text.
    Pattern(Regex),
}

impl Synonym {
    pub fn literal(text: &str) -> Self {
        Synonym::Literal(text.to_lowercase())
    }

    pub fn pattern(fragment: &str) -> Result<Self, regex::Error> {
        Regex::new(&ascii_fold(fragment)).map(Synonym::Pattern)
    }

    /// `lower` must be `original.to_lowercase()`.
    pub fn is_match(&self, original: &str, lower: &str) -> bool {
        match self {
            Synonym::Literal(needle) => lower.contains(needle.as_str()),
            Synonym::Pattern(re) => re.is_match(original),
        }
    }
}

/// Table form of a synonym, used to declare catalogs as constants.
#[derive(Debug, Clone, Copy)]
pub enum SynonymSpec {
    L(&'static str),
    P(&'static str),
}

use SynonymSpec::{L, P};

#[derive(Debug, Clone)]
pub struct SkillEntry {
    pub name: String,
    pub synonyms: Vec<Synonym>,
}

/// Ordered, immutable skill table. Iteration order is declaration order.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    entries: Vec<SkillEntry>,
}

impl SkillCatalog {
    pub fn new(entries: Vec<SkillEntry>) -> Result<Self, CatalogError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.synonyms.is_empty() {
                return Err(CatalogError::EmptySynonyms(entry.name.clone()));
            }
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(CatalogError::DuplicateSkill(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_table(table: &[(&str, &[SynonymSpec])]) -> Result<Self, CatalogError> {
        let mut entries = Vec::with_capacity(table.len());
        for (name, specs) in table {
            let mut synonyms = Vec::with_capacity(specs.len());
            for spec in specs.iter() {
                let synonym = match spec {
                    L(text) => Synonym::literal(text),
                    P(fragment) => {
                        Synonym::pattern(fragment).map_err(|source| CatalogError::InvalidPattern {
                            skill: name.to_string(),
                            pattern: fragment.to_string(),
                            source,
                        })?
                    }
                };
                synonyms.push(synonym);
            }
            entries.push(SkillEntry {
                name: name.to_string(),
                synonyms,
            });
        }
        Self::new(entries)
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Self {
        Self::from_table(BUILTIN_SKILLS).expect("built-in skill catalog is valid")
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

pub const BUILTIN_SKILLS: &[(&str, &[SynonymSpec])] = &[
    ("JavaScript", &[L("javascript"), L("js"), L("ecmascript"), L("es6"), L("es2015")]),
    ("TypeScript", &[L("typescript"), L("ts")]),
    ("React", &[L("react"), L("reactjs"), L("react.js"), L("react native")]),
    ("Angular", &[L("angular"), L("angularjs")]),
    ("Vue", &[L("vue"), L("vuejs"), L("vue.js")]),
    ("Node.js", &[L("node"), L("nodejs"), L("node.js"), L("express")]),
    ("Python", &[L("python"), L("py"), L("django"), L("flask")]),
    // word boundary keeps "javascript" from counting as Java
    ("Java", &[P(r"\bjava\b"), L("spring"), L("hibernate")]),
    ("C++", &[P(r"c\+\+"), L("cpp")]),
    ("SQL", &[L("sql"), L("mysql"), L("postgresql"), L("oracle"), L("mssql"), L("t-sql")]),
    ("MongoDB", &[L("mongodb"), L("mongo"), L("nosql")]),
    ("AWS", &[L("aws"), L("amazon web services"), L("ec2"), L("s3"), L("lambda")]),
    ("Docker", &[L("docker"), L("containerization"), L("containers")]),
    ("Kubernetes", &[L("kubernetes"), L("k8s")]),
    ("Git", &[L("git"), L("github"), L("gitlab"), L("bitbucket"), L("version control")]),
    ("Agile", &[L("agile"), L("scrum"), L("kanban"), L("sprint")]),
    ("HTML", &[L("html"), L("html5")]),
    ("CSS", &[L("css"), L("css3"), L("sass"), L("scss"), L("less")]),
    ("REST", &[L("rest"), L("restful"), L("rest api")]),
    ("GraphQL", &[L("graphql"), L("apollo")]),
    ("CI/CD", &[L("ci/cd"), L("jenkins"), L("travis"), L("circleci"), L("github actions")]),
    ("Redis", &[L("redis"), L("cache"), L("caching")]),
    ("Microservices", &[L("microservices"), L("microservice architecture")]),
    ("Leadership", &[L("leadership"), L("team lead"), L("led team"), L("managed team")]),
    ("Communication", &[L("communication"), L("presentation"), L("stakeholder")]),
    ("Problem Solving", &[L("problem solving"), L("analytical"), L("troubleshoot")]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_preserves_declaration_order() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_SKILLS.len());
        assert_eq!(catalog.entries()[0].name, "JavaScript");
        assert_eq!(catalog.entries()[7].name, "Java");
        assert_eq!(catalog.entries().last().unwrap().name, "Problem Solving");
    }

    #[test]
    fn test_literal_is_case_insensitive() {
        let syn = Synonym::literal("GraphQL");
        let text = "Shipped a GRAPHQL gateway";
        assert!(syn.is_match(text, &text.to_lowercase()));
    }

    #[test]
    fn test_java_pattern_skips_javascript() {
        let syn = Synonym::pattern(r"\bjava\b").unwrap();
        let js = "Expert in JavaScript";
        let java = "Backend services in Java, Kotlin";
        assert!(!syn.is_match(js, &js.to_lowercase()));
        assert!(syn.is_match(java, &java.to_lowercase()));
    }

    #[test]
    fn test_cpp_pattern_matches_escaped_plus() {
        let syn = Synonym::pattern(r"c\+\+").unwrap();
        let text = "Wrote C++ daemons";
        assert!(syn.is_match(text, &text.to_lowercase()));
    }

    #[test]
    fn test_empty_synonyms_rejected() {
        let err = SkillCatalog::new(vec![SkillEntry {
            name: "Rust".to_string(),
            synonyms: vec![],
        }])
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptySynonyms(ref s) if s == "Rust"));
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        let table: &[(&str, &[SynonymSpec])] = &[("Rust", &[L("rust")]), ("Rust", &[L("cargo")])];
        let err = SkillCatalog::from_table(table).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSkill(_)));
    }

    #[test]
    fn test_invalid_pattern_reports_skill() {
        let table: &[(&str, &[SynonymSpec])] = &[("Broken", &[P("(unclosed")])];
        let err = SkillCatalog::from_table(table).unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }
}
