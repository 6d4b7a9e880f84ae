use crate::map::{MapView, Marker};
use serde::{Deserialize, Serialize};

/// `GET /data` query. Both fields are validated by the handler so bad input
/// gets a JSON error body.
#[derive(Debug, Deserialize)]
pub struct DataQuery {
    #[serde(default)]
    pub num: Option<String>,
    #[serde(default)]
    pub post: Option<String>,
}

/// Comment form posted from the blog page.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(rename = "text-input")]
    pub text: String,
    pub post: String,
}

#[derive(Debug, Deserialize)]
pub struct NicknameForm {
    pub nickname: String,
}

#[derive(Debug, Serialize)]
pub struct MarkersResponse {
    pub view: MapView,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
