//! TF-IDF vectorization over a closed vocabulary
//!
//! The vectorizer state (term → column index, IDF weights) comes from the
//! training run. Its column order is not necessarily the feature-list order
//! the classifier was fitted against, so every vector is gathered into
//! feature-list order before it leaves this module.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::vocabulary::Vocabulary;
use crate::error::{FraudError, Result};

/// Dense feature vector in canonical vocabulary order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of non-zero dimensions
    pub fn nnz(&self) -> usize {
        self.0.iter().filter(|v| **v != 0.0).count()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Row normalization applied after TF-IDF weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Serialized vectorizer state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term → column index
    pub vocabulary: HashMap<String, usize>,
    /// IDF weight per column
    pub idf: Vec<f64>,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    #[serde(default)]
    pub sublinear_tf: bool,
}

impl TfidfVectorizer {
    /// Check internal consistency: one IDF weight per column, every column used once
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.idf.len() {
            return Err(FraudError::DimensionMismatch {
                context: "vectorizer idf table",
                expected: self.vocabulary.len(),
                found: self.idf.len(),
            });
        }

        let mut seen = vec![false; self.idf.len()];
        for (term, &column) in &self.vocabulary {
            if column >= seen.len() {
                return Err(FraudError::malformed(
                    "vectorizer",
                    format!("term '{}' maps to column {} of {}", term, column, seen.len()),
                ));
            }
            if std::mem::replace(&mut seen[column], true) {
                return Err(FraudError::malformed(
                    "vectorizer",
                    format!("column {} is assigned to more than one term", column),
                ));
            }
        }

        if let Some(bad) = self.idf.iter().position(|w| !w.is_finite()) {
            return Err(FraudError::malformed(
                "vectorizer",
                format!("non-finite idf weight at column {}", bad),
            ));
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// Weight a token stream into this vectorizer's own column order
    pub fn transform<'a, I>(&self, tokens: I) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut row = vec![0.0f64; self.idf.len()];

        for token in tokens {
            if let Some(&column) = self.vocabulary.get(token) {
                row[column] += 1.0;
            }
        }

        for (value, idf) in row.iter_mut().zip(&self.idf) {
            if *value > 0.0 {
                let tf = if self.sublinear_tf {
                    1.0 + value.ln()
                } else {
                    *value
                };
                *value = tf * idf;
            }
        }

        let norm = match self.norm {
            Some(Norm::L2) => row.iter().map(|v| v * v).sum::<f64>().sqrt(),
            Some(Norm::L1) => row.iter().map(|v| v.abs()).sum::<f64>(),
            None => 0.0,
        };
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }

        row
    }
}

/// TF-IDF vectorizer bound to the canonical feature list
pub struct FeatureVectorizer {
    tfidf: TfidfVectorizer,
    vocabulary: Vocabulary,
    /// `alignment[i]` is the vectorizer column feeding feature `i`
    alignment: Vec<usize>,
    token_pattern: Regex,
}

impl FeatureVectorizer {
    /// Bind vectorizer state to the feature list.
    ///
    /// Fails when the two disagree on size or on any term: a silently
    /// misaligned vector would produce wrong predictions.
    pub fn new(tfidf: TfidfVectorizer, vocabulary: Vocabulary) -> Result<Self> {
        tfidf.validate()?;

        if tfidf.len() != vocabulary.len() {
            return Err(FraudError::DimensionMismatch {
                context: "vectorizer vocabulary",
                expected: vocabulary.len(),
                found: tfidf.len(),
            });
        }

        let mut alignment = Vec::with_capacity(vocabulary.len());
        let mut missing = Vec::new();
        for term in vocabulary.iter() {
            match tfidf.vocabulary.get(term) {
                Some(&column) => alignment.push(column),
                None => missing.push(term),
            }
        }

        if let Some(first) = missing.first() {
            return Err(FraudError::VocabularyDrift {
                missing: missing.len(),
                first: first.to_string(),
            });
        }

        let token_pattern = Regex::new(r"\b\w\w+\b")
            .map_err(|e| FraudError::Config(format!("token pattern: {}", e)))?;

        Ok(Self {
            tfidf,
            vocabulary,
            alignment,
            token_pattern,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// Tokens the vectorizer would count, in order of appearance
    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.token_pattern.find_iter(text).map(|m| m.as_str())
    }

    /// Vectorize normalized text into feature-list order
    pub fn vectorize(&self, normalized: &str) -> FeatureVector {
        if normalized.is_empty() {
            return FeatureVector::zeros(self.dimension());
        }

        let row = self.tfidf.transform(self.tokenize(normalized));
        self.alignment.iter().map(|&column| row[column]).collect::<Vec<_>>().into()
    }
}
