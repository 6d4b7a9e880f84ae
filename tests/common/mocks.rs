use async_trait::async_trait;
use portfolio_site::{Error, Result, client::SiteClient};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned reply for one endpoint.
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    /// Raw body that goes through the JSON decoder.
    Body(String),
    Fail(Error),
}

/// Mock site client keyed by endpoint path.
#[derive(Debug, Default)]
pub struct MockSiteClient {
    replies: Mutex<HashMap<String, MockReply>>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl MockSiteClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, endpoint: &str, reply: MockReply) -> Self {
        self.set_reply(endpoint, reply);
        self
    }

    pub fn set_reply(&self, endpoint: &str, reply: MockReply) {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), reply);
    }

    pub fn get_requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn query_values(&self, key: &str) -> Vec<String> {
        self.get_requests()
            .into_iter()
            .flat_map(|(_, query)| query)
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .collect()
    }
}

#[async_trait]
impl SiteClient for MockSiteClient {
    async fn get_json(&self, endpoint: &str, query: &[(String, String)]) -> Result<Value> {
        self.requests
            .lock()
            .unwrap()
            .push((endpoint.to_string(), query.to_vec()));

        let reply = self.replies.lock().unwrap().get(endpoint).cloned();
        match reply {
            Some(MockReply::Json(value)) => Ok(value),
            Some(MockReply::Body(body)) => Ok(serde_json::from_str(&body)?),
            Some(MockReply::Fail(error)) => Err(error),
            None => Err(Error::internal(format!("no mock reply for {}", endpoint))),
        }
    }
}
