use async_trait::async_trait;
use pulse_core::model::Response;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::client::{ResponseStore, StoreError};

/// Default endpoint of the local response store.
pub const DEFAULT_STORE_URL: &str = "http://localhost:5000/api/store";

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub base_url: Url,
}

impl StoreConfig {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}

/// Store adapter talking to the HTTP endpoint.
///
/// Submissions are POSTed as a JSON array of responses; prior submissions
/// are read with a GET against the same URL.
#[derive(Clone)]
pub struct HttpStore {
    client: Client,
    config: StoreConfig,
}

impl HttpStore {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.config.base_url
    }
}

#[async_trait]
impl ResponseStore for HttpStore {
    async fn append_responses(&self, responses: &[Response]) -> Result<String, StoreError> {
        let response = self
            .client
            .post(self.config.base_url.clone())
            .json(responses)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }

    async fn list_submissions(&self) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .get(self.config.base_url.clone())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}
