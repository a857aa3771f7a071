//! Scoring engine
//!
//! Owns every piece of immutable model state and runs the linear pipeline:
//! normalize, vectorize, classify, adjust. An engine is built once and shared
//! behind an [`Arc`](std::sync::Arc); replacing the model means building a
//! new engine (see [`EngineHandle`]).

pub mod handle;
pub mod result;

pub use handle::EngineHandle;
pub use result::PredictionResult;

use tracing::debug;

use crate::config::ModelConfig;
use crate::error::{FraudError, Result};
use crate::heuristics::HeuristicAdjuster;
use crate::model::{Classifier, FeatureVectorizer, Label, ModelArtifacts};
use crate::text::TextNormalizer;

/// Immutable prediction pipeline
pub struct ScoringEngine {
    normalizer: TextNormalizer,
    vectorizer: FeatureVectorizer,
    classifier: Box<dyn Classifier>,
    adjuster: HeuristicAdjuster,
}

impl ScoringEngine {
    /// Assemble an engine, checking that the classifier accepts the
    /// vectorizer's output dimension
    pub fn new(
        vectorizer: FeatureVectorizer,
        classifier: Box<dyn Classifier>,
        adjuster: HeuristicAdjuster,
    ) -> Result<Self> {
        if classifier.input_dim() != vectorizer.dimension() {
            return Err(FraudError::DimensionMismatch {
                context: "classifier",
                expected: vectorizer.dimension(),
                found: classifier.input_dim(),
            });
        }

        Ok(Self {
            normalizer: TextNormalizer::new(),
            vectorizer,
            classifier,
            adjuster,
        })
    }

    pub fn from_artifacts(artifacts: ModelArtifacts) -> Result<Self> {
        let vectorizer = FeatureVectorizer::new(artifacts.vectorizer, artifacts.feature_list)?;
        Self::new(
            vectorizer,
            Box::new(artifacts.classifier),
            HeuristicAdjuster::default(),
        )
    }

    /// Load artifacts from disk and build an engine
    pub fn load(config: &ModelConfig) -> Result<Self> {
        Self::from_artifacts(ModelArtifacts::load(config)?)
    }

    /// Number of features in the canonical feature list
    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }

    pub fn adjuster(&self) -> &HeuristicAdjuster {
        &self.adjuster
    }

    /// Score raw email text
    pub fn predict(&self, raw: &str) -> PredictionResult {
        let text = self.normalizer.normalize(raw);
        if text.is_empty() {
            debug!("Empty text after normalization, skipping classifier");
            return PredictionResult::empty();
        }

        let features = self.vectorizer.vectorize(&text);
        let output = self.classifier.score(&features);
        let base = output.fraud_probability();

        let adjustment = self.adjuster.adjust(base, &text);

        debug!(
            label = %adjustment.label,
            confidence = adjustment.confidence,
            base,
            active_features = features.nnz(),
            "Prediction complete"
        );

        PredictionResult::from_adjustment(base, adjustment)
    }

    /// Final `(label, confidence)` only
    pub fn predict_email(&self, raw: &str) -> (Label, f64) {
        let result = self.predict(raw);
        (result.label, result.confidence)
    }
}
