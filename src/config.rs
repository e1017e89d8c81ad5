use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub top_k: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub meals_path: PathBuf,
    pub max_upload_bytes: usize,
    /// `None` disables the food photo endpoint.
    pub classifier: Option<ClassifierConfig>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let meals_path = std::env::var("MEALS_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/meals.json"));
        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(10 * 1024 * 1024);
        let classifier = std::env::var("CLASSIFIER_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|endpoint| ClassifierConfig {
                endpoint,
                timeout_secs: std::env::var("CLASSIFIER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(10),
                top_k: std::env::var("CLASSIFIER_TOP_K")
                    .ok()
                    .and_then(|v| v.parse::<usize>().ok())
                    .filter(|k| *k > 0)
                    .unwrap_or(3),
            });
        Ok(Self {
            database_url,
            meals_path,
            max_upload_bytes,
            classifier,
        })
    }
}
