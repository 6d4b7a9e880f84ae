use serde::{Deserialize, Serialize};

/// A comment as the pages see it. The server sends more fields; only these
/// two are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub nickname: String,
}

/// Visitor identity as reported by `/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logout_url: Option<String>,
}

impl Session {
    pub fn anonymous(login_url: impl Into<String>) -> Self {
        Self {
            login_url: Some(login_url.into()),
            ..Self::default()
        }
    }

    pub fn identified(
        id: impl Into<String>,
        nickname: Option<String>,
        logout_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            nickname,
            login_url: None,
            logout_url: Some(logout_url.into()),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.id.is_none()
    }
}
