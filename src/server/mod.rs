//! Web front end for phishing verdicts.
//!
//! Provides two endpoints:
//! - `GET /` - The URL form
//! - `POST /predict` - Extracts features for the submitted `url`, classifies
//!   them and renders the verdict with its reasons

mod handlers;
mod render;
mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::fetch::PageFetcher;
use crate::verdict::Classifier;
use crate::whois::WhoisLookup;

use handlers::{index_handler, predict_handler};
pub use render::render_page;
pub use types::{AppState, PageView, PredictForm};

/// Builds the router for the web front end.
pub fn router<F, W, C>(state: AppState<F, W, C>) -> Router
where
    F: PageFetcher + 'static,
    W: WhoisLookup + 'static,
    C: Classifier + ?Sized + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/predict", post(predict_handler::<F, W, C>))
        .with_state(state)
}

/// Binds `bind:port` and serves the web front end until the process stops.
pub async fn start_server<F, W, C>(
    bind: &str,
    port: u16,
    state: AppState<F, W, C>,
) -> Result<(), anyhow::Error>
where
    F: PageFetcher + 'static,
    W: WhoisLookup + 'static,
    C: Classifier + ?Sized + 'static,
{
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web server to {}:{}: {}", bind, port, e))?;

    log::info!("Web server listening on http://{}:{}/", bind, port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Web server error: {}", e))?;

    Ok(())
}
