use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ClassifierConfig;

/// One candidate label for an image; `confidence` is in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    #[serde(alias = "score")]
    pub confidence: f64,
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("food classifier is not configured")]
    NotConfigured,
    #[error("classifier request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("classifier responded with status {0}")]
    Status(u16),
    #[error("classifier response is not valid: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Image recognition backend. Predictions come back best first.
#[async_trait]
pub trait FoodClassifier: Send + Sync {
    async fn classify(
        &self,
        image: Bytes,
        content_type: &str,
    ) -> Result<Vec<Prediction>, ClassifierError>;
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    predictions: Vec<Prediction>,
}

/// Talks to an inference server over HTTP: raw image bytes in, JSON
/// `{"predictions": [{"label", "score"}]}` out.
#[derive(Clone)]
pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
    top_k: usize,
}

impl RemoteClassifier {
    pub fn new(config: &ClassifierConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("build classifier http client")?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            top_k: config.top_k,
        })
    }
}

#[async_trait]
impl FoodClassifier for RemoteClassifier {
    async fn classify(
        &self,
        image: Bytes,
        content_type: &str,
    ) -> Result<Vec<Prediction>, ClassifierError> {
        let res = self
            .client
            .post(&self.endpoint)
            .query(&[("top_k", self.top_k)])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(image)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ClassifierError::Status(status.as_u16()));
        }

        let mut body: ClassifyResponse = res.json().await.map_err(ClassifierError::Decode)?;
        body.predictions
            .sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        body.predictions.truncate(self.top_k);
        debug!(count = body.predictions.len(), "classifier predictions received");
        Ok(body.predictions)
    }
}

/// Stand-in used when no classifier endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClassifier;

#[async_trait]
impl FoodClassifier for DisabledClassifier {
    async fn classify(
        &self,
        _image: Bytes,
        _content_type: &str,
    ) -> Result<Vec<Prediction>, ClassifierError> {
        Err(ClassifierError::NotConfigured)
    }
}
