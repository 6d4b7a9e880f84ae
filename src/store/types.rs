use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A comment as stored and served by `/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredComment {
    pub id: Option<i64>,
    pub text: String,
    pub post: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub nickname: String,
}

impl StoredComment {
    pub fn new(post: String, text: String, nickname: String) -> Self {
        Self {
            id: None,
            text,
            post,
            timestamp: Utc::now().timestamp_millis(),
            nickname,
        }
    }
}
