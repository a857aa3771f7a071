//! Loading of the immutable model artifacts

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

use super::classifier::LogisticRegression;
use super::vectorizer::TfidfVectorizer;
use super::vocabulary::Vocabulary;
use crate::config::ModelConfig;
use crate::error::{FraudError, Result};

/// The three artifacts produced by a training run
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub classifier: LogisticRegression,
    pub vectorizer: TfidfVectorizer,
    pub feature_list: Vocabulary,
}

impl ModelArtifacts {
    /// Load every artifact named in `config`. Any missing or malformed file is fatal.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let classifier: LogisticRegression = read_json(&config.classifier_path, "classifier")?;
        classifier.validate()?;

        let vectorizer: TfidfVectorizer = read_json(&config.vectorizer_path, "vectorizer")?;
        vectorizer.validate()?;

        let feature_list = Vocabulary::load(&config.feature_list_path)?;

        info!(
            features = feature_list.len(),
            classifier = %config.classifier_path.display(),
            "Loaded model artifacts"
        );

        Ok(Self {
            classifier,
            vectorizer,
            feature_list,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, artifact: &'static str) -> Result<T> {
    if !path.exists() {
        return Err(FraudError::MissingArtifact(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| FraudError::malformed(artifact, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_model(dir: &TempDir, classifier: &str, vectorizer: &str, features: &str) -> ModelConfig {
        fs::write(dir.path().join("classifier.json"), classifier).unwrap();
        fs::write(dir.path().join("vectorizer.json"), vectorizer).unwrap();
        fs::write(dir.path().join("feature_list.txt"), features).unwrap();
        ModelConfig::with_model_dir(dir.path())
    }

    #[test]
    fn test_load_valid_model() {
        let dir = TempDir::new().unwrap();
        let config = write_model(
            &dir,
            r#"{"coef": [0.5, -0.5], "intercept": 0.1}"#,
            r#"{"vocabulary": {"alpha": 0, "beta": 1}, "idf": [1.0, 2.0]}"#,
            "alpha\nbeta\n",
        );

        let artifacts = ModelArtifacts::load(&config).unwrap();
        assert_eq!(artifacts.classifier.coef(), &[0.5, -0.5]);
        assert_eq!(artifacts.vectorizer.len(), 2);
        assert_eq!(artifacts.feature_list.terms(), &["alpha", "beta"]);
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = ModelConfig::with_model_dir(dir.path());

        let err = ModelArtifacts::load(&config).unwrap_err();
        assert!(matches!(err, FraudError::MissingArtifact(ref p) if p.ends_with("classifier.json")));
    }

    #[test]
    fn test_malformed_json_names_artifact() {
        let dir = TempDir::new().unwrap();
        let config = write_model(
            &dir,
            r#"{"coef": [0.5, -0.5], "intercept": 0.1}"#,
            r#"{"vocabulary": ["alpha"]}"#,
            "alpha\n",
        );

        match ModelArtifacts::load(&config) {
            Err(FraudError::MalformedArtifact { artifact, .. }) => assert_eq!(artifact, "vectorizer"),
            other => panic!("expected malformed vectorizer, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_coefficients_rejected() {
        let dir = TempDir::new().unwrap();
        let config = write_model(
            &dir,
            r#"{"coef": [], "intercept": 0.0}"#,
            r#"{"vocabulary": {"alpha": 0}, "idf": [1.0]}"#,
            "alpha\n",
        );
        assert!(ModelArtifacts::load(&config).is_err());
    }
}
