use crate::error::{FraudError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub model: ModelConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the three model artifacts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub classifier_path: PathBuf,
    pub vectorizer_path: PathBuf,
    pub feature_list_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8600".to_string()
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024 // 5MB
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ModelConfig {
    /// Point all three artifacts at their conventional names inside `dir`
    pub fn with_model_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            classifier_path: dir.join("classifier.json"),
            vectorizer_path: dir.join("vectorizer.json"),
            feature_list_path: dir.join("feature_list.txt"),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::with_model_dir("models")
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FraudError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| FraudError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("model.classifier_path", &self.model.classifier_path),
            ("model.vectorizer_path", &self.model.vectorizer_path),
            ("model.feature_list_path", &self.model.feature_list_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(FraudError::Config(format!("{} must not be empty", name)));
            }
        }

        self.server
            .listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| {
                FraudError::Config(format!(
                    "Invalid server.listen_addr '{}': {}",
                    self.server.listen_addr, e
                ))
            })?;

        if self.server.max_upload_bytes == 0 {
            return Err(FraudError::Config(
                "server.max_upload_bytes must be greater than zero".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(FraudError::Config(format!(
                "Unknown logging.format '{}' (expected 'pretty' or 'json')",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.model.feature_list_path,
            PathBuf::from("models").join("feature_list.txt")
        );
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[model]
classifier_path = "/srv/model/classifier.json"
vectorizer_path = "/srv/model/vectorizer.json"
feature_list_path = "/srv/model/feature_list.txt"

[logging]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:8600");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_listen_addr() {
        let mut config = Config::default();
        config.server.listen_addr = "not-an-address".to_string();
        assert!(matches!(config.validate(), Err(FraudError::Config(_))));
    }

    #[test]
    fn test_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[model]\nclassifier_path = \"c.json\"\nvectorizer_path = \"v.json\"\nfeature_list_path = \"f.txt\"\n\n[server]\nlisten_addr = \"0.0.0.0:9000\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.model.classifier_path, PathBuf::from("c.json"));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/nonexistent/fraud-rs.toml");
        assert!(matches!(result, Err(FraudError::Config(_))));
    }
}
