use super::SiteClient;
use crate::{Result, config::ClientConfig};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

pub struct HttpSiteClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSiteClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SiteClient for HttpSiteClient {
    async fn get_json(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {} with {} query parameters", url, query.len());

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        // Read the body first so a bad payload surfaces as a parse error
        // rather than a transport error.
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}
