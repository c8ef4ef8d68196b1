//! The author list generator.
//!
//! [`AuthorListGenerator`] turns history text into the generated Go source in
//! one pass. All work after the history query is pure, and nothing is
//! returned unless every step succeeded.

use tracing::{info, instrument};

use crate::authors::CanonicalAuthorMap;
use crate::config::GeneratorConfig;
use crate::errors::CoreError;
use crate::history::{parse_author_history, AuthorHistory};
use crate::identity::AliasTable;
use crate::render::{render_source, DEFAULT_PACKAGE};

/// Builds the contributor list source from a history adapter.
pub struct AuthorListGenerator {
    history: Box<dyn AuthorHistory>,
    aliases: AliasTable,
    package: String,
}

impl AuthorListGenerator {
    /// Create a generator with the built-in aliases and the default package.
    pub fn new(history: Box<dyn AuthorHistory>) -> Self {
        Self {
            history,
            aliases: AliasTable::builtin(),
            package: DEFAULT_PACKAGE.to_string(),
        }
    }

    /// Create a generator from a validated [`GeneratorConfig`].
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let aliases = config.alias_table()?;
        Ok(Self::new(config.history())
            .with_aliases(aliases)
            .with_package(config.package.clone()))
    }

    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Query the history and return the sorted (name, email) pairs.
    pub fn sorted_authors(&self) -> Result<Vec<(String, String)>, CoreError> {
        let text = self.history.fetch_author_history()?;
        sorted_authors_from_text(&text, &self.aliases)
    }

    /// Query the history and render the complete generated file.
    #[instrument(skip(self), fields(package = %self.package))]
    pub fn generate(&self) -> Result<String, CoreError> {
        let authors = self.sorted_authors()?;
        info!(count = authors.len(), "rendering author list");
        Ok(render_source(&self.package, &authors))
    }
}

/// Parse, normalize, fold and sort history text.
pub fn sorted_authors_from_text(
    text: &str,
    aliases: &AliasTable,
) -> Result<Vec<(String, String)>, CoreError> {
    let records = parse_author_history(text)?;
    Ok(CanonicalAuthorMap::from_records(&records, aliases).into_sorted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{HistoryError, ParseError};

    struct FailingHistory;

    impl AuthorHistory for FailingHistory {
        fn fetch_author_history(&self) -> Result<String, HistoryError> {
            Err(HistoryError::BinaryNotFound("git".into()))
        }
    }

    fn generator(text: &str) -> AuthorListGenerator {
        AuthorListGenerator::new(Box::new(text.to_string()))
    }

    fn item_lines(source: &str) -> Vec<&str> {
        source
            .lines()
            .filter(|l| l.starts_with("        \""))
            .map(str::trim)
            .collect()
    }

    #[test]
    fn test_scenario_aliases_and_seed() {
        let out = generator("brl  -  b@x.com\nSandy  -  s@y.com\nUnaliased Name  -  u@z.com\n")
            .generate()
            .unwrap();
        assert_eq!(
            item_lines(&out),
            vec![
                "\"Adam Langley\",",
                "\"Bruce Leidl  -  b@x.com\",",
                "\"Sandy Acurio  -  s@y.com\",",
                "\"Unaliased Name  -  u@z.com\",",
            ]
        );
    }

    #[test]
    fn test_scenario_last_write_wins() {
        let authors = generator("sacurio  -  old@y.com\nSandy  -  new@y.com\n")
            .sorted_authors()
            .unwrap();
        assert_eq!(
            authors,
            vec![
                ("Adam Langley".to_string(), String::new()),
                ("Sandy Acurio".to_string(), "new@y.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_scenario_empty_history() {
        let out = generator("").generate().unwrap();
        assert_eq!(
            out,
            "package gui\n\nfunc authors() []string {\n    return []string{\n        \"Adam Langley\",\n\n    }\n}\n"
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "mvelasco  -  m@v.com\nbrl  -  b@x.com\nZoe  -  z@z.com\n";
        assert_eq!(generator(text).generate().unwrap(), generator(text).generate().unwrap());
    }

    #[test]
    fn test_sorted_and_unique() {
        let text = "fanjiang  -  f1@x\nFab Torchz  -  f2@x\nFan Jiang Torchz  -  f3@x\nAaron  -  a@x\n";
        let authors = generator(text).sorted_authors().unwrap();
        let names: Vec<&str> = authors.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Aaron", "Adam Langley", "Fan Jiang"]);
        assert_eq!(authors[2].1, "f3@x");
    }

    #[test]
    fn test_history_failure_produces_nothing() {
        let result = AuthorListGenerator::new(Box::new(FailingHistory)).generate();
        assert!(matches!(result, Err(CoreError::History(_))));
    }

    #[test]
    fn test_malformed_line_fails() {
        let result = generator("brl  -  b@x.com\nnot a record\n").generate();
        assert!(matches!(
            result,
            Err(CoreError::Parse(ParseError::MalformedLine { line_number: 2, .. }))
        ));
    }

    #[test]
    fn test_custom_package_and_aliases() {
        let aliases = AliasTable::from_pairs([("agl", "Adam Langley")]).unwrap();
        let out = generator("agl  -  agl@x.com\nbrl  -  b@x.com\n")
            .with_aliases(aliases)
            .with_package("about")
            .generate()
            .unwrap();
        assert!(out.starts_with("package about\n"));
        assert_eq!(
            item_lines(&out),
            vec!["\"Adam Langley  -  agl@x.com\",", "\"brl  -  b@x.com\","]
        );
    }

    #[test]
    fn test_from_config_rejects_bad_package() {
        let config = GeneratorConfig {
            package: "not-valid".into(),
            ..Default::default()
        };
        assert!(matches!(
            AuthorListGenerator::from_config(&config),
            Err(CoreError::Config(_))
        ));
    }
}
