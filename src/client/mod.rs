mod http;
mod types;

pub use http::HttpSiteClient;
pub use types::{Comment, Session};

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

pub const DATA_ENDPOINT: &str = "/data";
pub const LOGIN_ENDPOINT: &str = "/login";

/// Read access to the site's JSON endpoints.
#[async_trait]
pub trait SiteClient: Send + Sync {
    /// GETs `endpoint` with the given query pairs and decodes the body as JSON.
    async fn get_json(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value>;

    async fn fetch_comments(&self, category: &str, count: u32) -> Result<Vec<Comment>> {
        let value = self
            .get_json(DATA_ENDPOINT, &comment_query(category, count))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn login_status(&self) -> Result<Session> {
        let value = self.get_json(LOGIN_ENDPOINT, &[]).await?;
        Ok(serde_json::from_value(value)?)
    }
}

pub fn comment_query(category: &str, count: u32) -> Vec<(String, String)> {
    vec![
        ("num".to_string(), count.to_string()),
        ("post".to_string(), category.to_string()),
    ]
}
