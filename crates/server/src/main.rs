//! Guardians dev API server.
//!
//! Implements the gateway contract the web client consumes, over
//! seeded in-memory demo data, and serves the built frontend. Stands
//! in for the external backend during local development.

mod routes;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use routes::{
    get_family, list_approvals, list_questions, list_unanswered_notifications, reply_approval,
    reply_notification,
};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let state = AppState::seeded();

    // the client is served from another origin during trunk development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/approvals", get(list_approvals))
        .route("/approvals/:id/reply", post(reply_approval))
        .route("/notifications/unanswered", get(list_unanswered_notifications))
        .route("/notifications/:id/reply", post(reply_notification))
        .route("/questions", get(list_questions))
        .route("/family", get(get_family));

    let app = Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new("../frontend/dist").append_index_html_on_directories(true))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 5980));
    tracing::info!("server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_builds() {
        let state = AppState::seeded();
        // Basic smoke test
        assert!(!state.questions.is_empty());
    }
}
