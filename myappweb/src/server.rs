//! Web server module for myappweb.
//!
//! Serves the greeting page on the root path. Routing and error handling
//! beyond the single route are left to axum's defaults (unknown paths get a
//! plain 404).
//!
use std::net::SocketAddr;

use axum::{Router, response::Html, routing::get};

use crate::{config::CONFIG, html::home_page};

/// Build the application router with the single root route
pub fn create_router() -> Router {
    Router::new().route("/", get(index_page))
}

/// Start the web server on the configured port
pub async fn run() -> anyhow::Result<()> {
    let app = create_router();

    let addr: SocketAddr = format!("0.0.0.0:{}", CONFIG.port).parse()?;
    tracing::info!("Web server listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Display the greeting page
async fn index_page() -> Html<String> {
    Html(home_page())
}
