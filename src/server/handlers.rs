use super::types::{CommentForm, DataQuery, ErrorResponse, MarkersResponse, NicknameForm};
use crate::{
    Error,
    client::Session,
    config::Config,
    store::{CommentStore, StoredComment},
};
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Json, Redirect},
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CommentStore>,
    pub config: Arc<Config>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl AppState {
    /// Visitor id forwarded by the auth proxy, if any.
    pub fn visitor_id(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get(self.config.auth.identity_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    fn require_visitor(&self, headers: &HeaderMap) -> Result<String, ApiError> {
        self.visitor_id(headers)
            .ok_or_else(|| error_response(Error::Unauthorized))
    }

    fn is_admin(&self, id: &str) -> bool {
        self.config.site.admin_id.as_deref() == Some(id)
    }
}

pub fn error_response(err: Error) -> ApiError {
    let status = match err {
        Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        Error::Unauthorized => StatusCode::UNAUTHORIZED,
        Error::Forbidden(_) => StatusCode::FORBIDDEN,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        debug!("Request rejected: {}", err);
    }
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Parses `num`. Zero or a negative count means no limit.
fn parse_count(num: Option<&str>) -> Result<Option<u32>, Error> {
    let num = num.ok_or_else(|| Error::invalid_request("missing 'num' parameter"))?;
    let count = num.trim().parse::<i64>().map_err(|_| {
        Error::invalid_request(format!("'num' must be an integer, got '{}'", num))
    })?;
    Ok(u32::try_from(count).ok().filter(|&count| count > 0))
}

/// `GET /data?num=&post=` — newest comments for a post.
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> Result<Json<Vec<StoredComment>>, ApiError> {
    let count = parse_count(query.num.as_deref()).map_err(error_response)?;
    let post = query
        .post
        .filter(|p| !p.is_empty())
        .ok_or_else(|| error_response(Error::invalid_request("missing 'post' parameter")))?;

    let comments = state
        .store
        .list(&post, count)
        .await
        .map_err(error_response)?;

    debug!("Serving {} comments for post '{}'", comments.len(), post);
    Ok(Json(comments))
}

/// `POST /data` — stores a comment under the visitor's nickname.
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    axum::Form(form): axum::Form<CommentForm>,
) -> Result<Redirect, ApiError> {
    let visitor = state.require_visitor(&headers)?;

    if form.text.trim().is_empty() {
        return Err(error_response(Error::invalid_request("comment text is empty")));
    }
    if form.post.trim().is_empty() {
        return Err(error_response(Error::invalid_request("missing 'post' field")));
    }

    let nickname = state
        .store
        .nickname_or_default(&visitor)
        .await
        .map_err(error_response)?;
    state
        .store
        .save(StoredComment::new(form.post.clone(), form.text, nickname))
        .await
        .map_err(error_response)?;

    info!("Comment added to post '{}'", form.post);
    Ok(Redirect::to(&state.config.site.blog_path))
}

/// `GET /login` — login status for the current visitor.
pub async fn login_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Session>, ApiError> {
    let auth = &state.config.auth;
    let Some(visitor) = state.visitor_id(&headers) else {
        return Ok(Json(Session::anonymous(auth.login_url.clone())));
    };

    let nickname = state
        .store
        .nickname(&visitor)
        .await
        .map_err(error_response)?;
    Ok(Json(Session::identified(
        visitor,
        nickname,
        auth.logout_url.clone(),
    )))
}

/// `POST /nickname` — sets the visitor's display name.
pub async fn set_nickname(
    State(state): State<AppState>,
    headers: HeaderMap,
    axum::Form(form): axum::Form<NicknameForm>,
) -> Result<Redirect, ApiError> {
    let visitor = state.require_visitor(&headers)?;
    let nickname = form.nickname.trim();
    if nickname.is_empty() {
        return Err(error_response(Error::invalid_request("nickname is empty")));
    }

    state
        .store
        .set_nickname(&visitor, nickname)
        .await
        .map_err(error_response)?;
    Ok(Redirect::to(&state.config.site.account_path))
}

/// `POST /delete-data` — administrator only.
pub async fn delete_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Redirect, ApiError> {
    let visitor = state.require_visitor(&headers)?;
    if !state.is_admin(&visitor) {
        warn!("Non-admin visitor attempted to delete comments");
        return Err(error_response(Error::Forbidden(
            "only the site administrator can delete comments".to_string(),
        )));
    }

    state.store.delete_all().await.map_err(error_response)?;
    Ok(Redirect::to(&state.config.site.blog_path))
}

/// `GET /markers` — what the ski map plots.
pub async fn markers(State(state): State<AppState>) -> Json<MarkersResponse> {
    let map = &state.config.map;
    Json(MarkersResponse {
        view: map.view,
        markers: map.stacked_markers().into_iter().cloned().collect(),
    })
}
