//! Shared, reloadable engine

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::ScoringEngine;
use crate::config::ModelConfig;
use crate::error::{FraudError, Result};

/// Process-wide access point to the current engine.
///
/// Callers take an `Arc` snapshot and predict against it without holding the
/// lock. A reload builds the replacement completely before swapping it in.
pub struct EngineHandle {
    model: ModelConfig,
    engine: RwLock<Arc<ScoringEngine>>,
}

impl EngineHandle {
    pub fn new(model: ModelConfig, engine: ScoringEngine) -> Self {
        Self {
            model,
            engine: RwLock::new(Arc::new(engine)),
        }
    }

    /// Load the initial engine from `model`
    pub fn load(model: ModelConfig) -> Result<Self> {
        let engine = ScoringEngine::load(&model)?;
        Ok(Self::new(model, engine))
    }

    pub fn model_config(&self) -> &ModelConfig {
        &self.model
    }

    /// Snapshot of the engine currently serving
    pub async fn current(&self) -> Arc<ScoringEngine> {
        self.engine.read().await.clone()
    }

    /// Rebuild from the configured artifact paths and swap in the result.
    ///
    /// Returns the new feature count. On failure the previous engine stays
    /// in place.
    pub async fn reload(&self) -> Result<usize> {
        let model = self.model.clone();
        let built = tokio::task::spawn_blocking(move || ScoringEngine::load(&model))
            .await
            .map_err(|e| FraudError::Config(format!("reload task failed: {}", e)))?;

        match built {
            Ok(engine) => {
                let features = engine.dimension();
                *self.engine.write().await = Arc::new(engine);
                info!(features, "Model reloaded");
                Ok(features)
            }
            Err(e) => {
                warn!(error = %e, "Model reload failed, keeping current model");
                Err(e)
            }
        }
    }
}
