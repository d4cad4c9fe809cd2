//! Liveness endpoint for external uptime monitors.
//!
//! A single HTTP route, `GET /`, always answering `200` with a fixed body.
//! The responder runs on its own tokio task (spawned by the bot before the
//! Matrix sync loop starts) and never touches any bot state, so a monitor
//! gets an answer even while the sync loop is busy.

use axum::{Router, routing::get};
use log::info;
use tokio::net::TcpListener;

/// Body returned by the liveness route.
const ALIVE_BODY: &str = "Bot is alive";

/// Builds the single-route liveness router.
fn router() -> Router {
    Router::new().route("/", get(alive))
}

/// Answers the liveness probe.
async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Binds the liveness listener on `host:port`.
///
/// Binding is separated from serving so the caller can report bind errors at
/// startup and tests can bind an ephemeral port.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener, anyhow::Error> {
    let listener = TcpListener::bind((host, port)).await?;
    info!("liveness responder listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serves the liveness route on the given listener until the process ends.
pub async fn serve(listener: TcpListener) -> Result<(), anyhow::Error> {
    axum::serve(listener, router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_alive_returns_fixed_body() {
        assert_eq!(alive().await, "Bot is alive");
    }

    #[tokio::test]
    async fn test_bind_on_ephemeral_port() {
        let listener = bind("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_get_root_answers_alive() {
        let listener = bind("127.0.0.1", 0).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener));

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "Bot is alive");
    }

    #[tokio::test]
    async fn test_get_unknown_path_is_not_found() {
        let listener = bind("127.0.0.1", 0).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener));

        let response = reqwest::get(format!("http://{}/other", addr)).await.unwrap();

        assert_eq!(response.status(), 404);
    }
}
