//! Health check endpoint
//!
//! A tiny HTTP server so container platforms can probe liveness. Serves
//! plain `OK` on `/` and `/health`.

use axum::routing::get;
use axum::Router;

use crate::error::{BotError, BotResult};

async fn ok() -> &'static str {
    "OK"
}

/// Build the health router
pub fn router() -> Router {
    Router::new().route("/", get(ok)).route("/health", get(ok))
}

/// Serve the health endpoint until the process exits
pub async fn serve(port: u16) -> BotResult<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "health endpoint listening");

    axum::serve(listener, router())
        .await
        .map_err(|e| BotError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_routes_respond_ok() {
        for path in ["/", "/health"] {
            let response = router()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
