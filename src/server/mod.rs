//! Read API server
//!
//! Exposes the essay collection as JSON and serves static site assets as a
//! fallback. Every request re-runs the loader; there is no cross-request
//! cache, so edits to the content directory are visible immediately.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::{render_body, ContentLoader, LoadError};
use crate::Site;

/// Start the read API server
pub async fn start(site: Site, ip: &str, port: u16) -> Result<()> {
    let app = router(Arc::new(site));

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
pub fn router(site: Arc<Site>) -> Router {
    let public_dir = site.public_dir.clone();

    let mut app = Router::new()
        .route("/essays", get(list_essays))
        .route("/essays/:slug", get(get_essay))
        .route("/essays/:slug/html", get(get_essay_html))
        .with_state(site);

    // Serve site assets alongside the API when a public dir exists
    if public_dir.is_dir() {
        app = app.fallback_service(
            ServeDir::new(&public_dir).append_index_html_on_directories(true),
        );
    }

    app.layer(TraceLayer::new_for_http())
}

/// GET /essays - the full collection, date-descending
async fn list_essays(State(site): State<Arc<Site>>) -> Response {
    match ContentLoader::new(&site).load_all() {
        Ok(essays) => Json(essays).into_response(),
        Err(e) => load_failure(e),
    }
}

/// GET /essays/{slug} - a single essay or 404
async fn get_essay(State(site): State<Arc<Site>>, Path(slug): Path<String>) -> Response {
    match ContentLoader::new(&site).load_by_slug(&slug) {
        Ok(Some(essay)) => Json(essay).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "essay not found").into_response(),
        Err(e) => load_failure(e),
    }
}

/// GET /essays/{slug}/html - the body rendered to display markup
async fn get_essay_html(State(site): State<Arc<Site>>, Path(slug): Path<String>) -> Response {
    match ContentLoader::new(&site).load_by_slug(&slug) {
        Ok(Some(essay)) => axum::response::Html(render_body(&essay.content)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "essay not found").into_response(),
        Err(e) => load_failure(e),
    }
}

fn load_failure(e: LoadError) -> Response {
    tracing::error!("failed to load essays: {e}");
    (StatusCode::INTERNAL_SERVER_ERROR, "failed to load essays").into_response()
}
