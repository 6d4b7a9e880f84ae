pub mod handlers;
mod types;

pub use types::{CommentForm, DataQuery, ErrorResponse, MarkersResponse, NicknameForm};

use crate::{Result, config::Config, store::CommentStore};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route(
            "/data",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .route("/login", get(handlers::login_status))
        .route("/nickname", post(handlers::set_nickname))
        .route("/delete-data", post(handlers::delete_comments))
        .route("/markers", get(handlers::markers))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize comment storage
    let db_path =
        std::env::var("PORTFOLIO_DB_PATH").unwrap_or_else(|_| config.server.database_path.clone());
    let store = CommentStore::new(&db_path).await?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let app = router(AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    });

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
