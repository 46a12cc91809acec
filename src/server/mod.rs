//! HTTP surface: the dashboard page, rebuilt on every request.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use crate::{core::RadarError, dashboard::Dashboard};

/// Shared state for all handlers.
pub struct AppState {
    pub dashboard: Dashboard,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .with_state(state)
}

/// Serve `router` on `listener` until Ctrl-C.
///
/// # Errors
///
/// Returns [`RadarError::Io`] if the server fails.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), RadarError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "dashboard listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// GET / - the dashboard
async fn index(State(state): State<Arc<AppState>>) -> Response {
    let page = state.dashboard.build().await;
    render_page(page.to_html())
}

fn render_page(rendered: Result<String, RadarError>) -> Response {
    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template render error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response()
        }
    }
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}
