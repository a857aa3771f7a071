//! fraud-rs: Email fraud scoring engine
//!
//! Classifies email text as fraudulent or safe with a TF-IDF + logistic
//! regression model, then adjusts the result with keyword heuristics.
//!
//! # Features
//!
//! - **Model**: immutable artifacts (classifier, vectorizer, feature list) loaded once
//! - **Heuristics**: weighted boost/reduce keyword categories and borderline flattening
//! - **Ingestion**: `.txt` and `.eml` files
//! - **HTTP API**: prediction endpoints with atomic model reload
//!
//! # Example
//!
//! ```no_run
//! use fraud_rs::config::ModelConfig;
//! use fraud_rs::engine::ScoringEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = ScoringEngine::load(&ModelConfig::with_model_dir("models"))?;
//!
//!     let result = engine.predict("Your PayPal account has been restricted.");
//!     println!("{} ({:.2}%)", result.label, result.confidence * 100.0);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`text`]: Text normalization
//! - [`model`]: Vocabulary, vectorizer and classifier
//! - [`heuristics`]: Rule-based score adjustment
//! - [`engine`]: The prediction pipeline and its reloadable handle
//! - [`ingest`]: Email file reading
//! - [`batch`]: Labelled regression cases
//! - [`api`]: REST API
//! - [`logging`]: Tracing subscriber setup
//! - [`utils`]: Utility functions

pub mod api;
pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod text;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use engine::{EngineHandle, PredictionResult, ScoringEngine};
pub use error::{FraudError, Result};
pub use model::Label;
