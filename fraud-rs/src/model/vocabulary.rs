//! Canonical feature ordering

use std::collections::HashMap;
use std::path::Path;

use crate::error::{FraudError, Result};

/// Ordered, duplicate-free list of terms. Position `i` is feature dimension `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from terms in their canonical order
    pub fn from_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(terms.len());

        for (position, term) in terms.iter().enumerate() {
            if term.is_empty() {
                return Err(FraudError::malformed(
                    "feature list",
                    format!("empty term at line {}", position + 1),
                ));
            }
            if index.insert(term.clone(), position).is_some() {
                return Err(FraudError::malformed(
                    "feature list",
                    format!("duplicate term '{}' at line {}", term, position + 1),
                ));
            }
        }

        if terms.is_empty() {
            return Err(FraudError::malformed("feature list", "no terms"));
        }

        Ok(Self { terms, index })
    }

    /// Parse newline-delimited content, one term per line
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_terms(content.lines().map(str::trim))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FraudError::MissingArtifact(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Feature dimension of `term`, if it is part of the vocabulary
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let vocab = Vocabulary::parse("zeta\nalpha\nmid\n").unwrap();
        assert_eq!(vocab.terms(), &["zeta", "alpha", "mid"]);
        assert_eq!(vocab.position("zeta"), Some(0));
        assert_eq!(vocab.position("mid"), Some(2));
        assert_eq!(vocab.position("beta"), None);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let vocab = Vocabulary::parse("  alpha \r\nbeta\r\n").unwrap();
        assert_eq!(vocab.terms(), &["alpha", "beta"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Vocabulary::parse("alpha\nbeta\nalpha\n").unwrap_err();
        assert!(err.to_string().contains("duplicate term 'alpha'"));
    }

    #[test]
    fn test_blank_line_rejected() {
        assert!(Vocabulary::parse("alpha\n\nbeta\n").is_err());
        assert!(Vocabulary::parse("").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Vocabulary::load("/nonexistent/feature_list.txt").unwrap_err();
        assert!(matches!(err, FraudError::MissingArtifact(_)));
    }
}
