use fraud_rs::api::ApiServer;
use fraud_rs::config::Config;
use fraud_rs::engine::EngineHandle;
use fraud_rs::logging;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, source) = if let Some(config_path) = std::env::args().nth(1) {
        (Config::from_file(Path::new(&config_path))?, config_path)
    } else if Path::new("config.toml").exists() {
        (Config::from_file("config.toml")?, "config.toml".to_string())
    } else {
        (Config::default(), "defaults".to_string())
    };

    logging::init(&config.logging);

    info!("Starting fraud-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded from {}", source);
    info!("  API listening on: {}", config.server.listen_addr);
    info!("  Classifier: {}", config.model.classifier_path.display());
    info!("  Vectorizer: {}", config.model.vectorizer_path.display());
    info!("  Feature list: {}", config.model.feature_list_path.display());

    // Artifacts are required: refuse to start without a usable model
    let engine = match EngineHandle::load(config.model.clone()) {
        Ok(engine) => Arc::new(engine),
        Err(e) => {
            error!("Failed to load model: {}", e);
            return Err(e.into());
        }
    };

    let server = ApiServer::new(engine, &config.server);
    server.run().await?;

    Ok(())
}
