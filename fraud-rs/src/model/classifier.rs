//! Base classifier abstraction

use serde::{Deserialize, Serialize};
use std::fmt;

use super::vectorizer::FeatureVector;
use crate::error::{FraudError, Result};

/// Binary verdict. Serialized as `"safe"` / `"fraud"`; numerically 0 / 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Safe,
    Fraud,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Safe => 0,
            Label::Fraud => 1,
        }
    }

    pub fn is_fraud(self) -> bool {
        self == Label::Fraud
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Safe => write!(f, "SAFE"),
            Label::Fraud => write!(f, "FRAUDULENT"),
        }
    }
}

/// Raw classifier verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierOutput {
    pub label: Label,
    /// Confidence in `label`, not necessarily in fraud
    pub probability: f64,
}

impl ClassifierOutput {
    /// Probability of the fraud class
    pub fn fraud_probability(&self) -> f64 {
        match self.label {
            Label::Fraud => self.probability,
            Label::Safe => 1.0 - self.probability,
        }
    }
}

/// Scoring capability consumed by the engine.
///
/// Implementations must be deterministic: the same vector always yields the
/// same output.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Length of the feature vectors this classifier accepts
    fn input_dim(&self) -> usize;

    /// Score a feature vector of length [`Classifier::input_dim`]
    fn score(&self, features: &FeatureVector) -> ClassifierOutput;
}

/// Binary logistic regression, `p(fraud) = sigmoid(coef · x + intercept)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    coef: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coef: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self { coef, intercept };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.coef.is_empty() {
            return Err(FraudError::malformed("classifier", "empty coefficient vector"));
        }
        if let Some(bad) = self.coef.iter().position(|w| !w.is_finite()) {
            return Err(FraudError::malformed(
                "classifier",
                format!("non-finite coefficient at index {}", bad),
            ));
        }
        if !self.intercept.is_finite() {
            return Err(FraudError::malformed("classifier", "non-finite intercept"));
        }
        Ok(())
    }

    pub fn coef(&self) -> &[f64] {
        &self.coef
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Signed distance to the decision boundary
    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        self.coef
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl Classifier for LogisticRegression {
    fn input_dim(&self) -> usize {
        self.coef.len()
    }

    fn score(&self, features: &FeatureVector) -> ClassifierOutput {
        let z = self.decision_function(features);
        let p_fraud = 1.0 / (1.0 + (-z).exp());

        if z > 0.0 {
            ClassifierOutput {
                label: Label::Fraud,
                probability: p_fraud,
            }
        } else {
            ClassifierOutput {
                label: Label::Safe,
                probability: 1.0 - p_fraud,
            }
        }
    }
}
