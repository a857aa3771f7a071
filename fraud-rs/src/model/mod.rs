//! Model artifacts and the statistical half of the pipeline
//!
//! - [`vocabulary`]: canonical feature ordering (the feature list)
//! - [`vectorizer`]: TF-IDF weighting aligned to that ordering
//! - [`classifier`]: the base classifier capability and its logistic regression implementation
//! - [`artifacts`]: loading the three immutable artifacts from disk

pub mod artifacts;
pub mod classifier;
pub mod vectorizer;
pub mod vocabulary;

pub use artifacts::ModelArtifacts;
pub use classifier::{Classifier, ClassifierOutput, Label, LogisticRegression};
pub use vectorizer::{FeatureVector, FeatureVectorizer, Norm, TfidfVectorizer};
pub use vocabulary::Vocabulary;
