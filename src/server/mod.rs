//! HTTP endpoint for quicknote
//!
//! One route, `GET /generate_summary`, served with axum.

pub mod client;
pub mod routes;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerSettings;
use crate::llm::Summarizer;
use crate::VERSION;

pub use client::SummaryClient;
pub use routes::{SummaryParams, SummaryResponse, INVOCATION_FAILED};

/// Path of the single summary route.
pub const SUMMARY_PATH: &str = "/generate_summary";

/// State shared by request handlers.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Summarizer,
}

/// Build the router with its state injected.
pub fn build_router(summarizer: Summarizer) -> Router {
    Router::new()
        .route(SUMMARY_PATH, get(routes::generate_summary))
        .with_state(AppState { summarizer })
        .layer(middleware::from_fn(log_http_request))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(settings: &ServerSettings, summarizer: Summarizer) -> Result<()> {
    let addr = settings.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(addr = %addr, version = VERSION, "quicknote listening");

    axum::serve(listener, build_router(summarizer))
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    info!("quicknote shutting down");
    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let response = next.run(req).await;
    info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "http request"
    );
    response
}
