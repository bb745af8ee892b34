use crate::AppState;
use axum::{Json, Router, routing::get};
use serde_json::json;

/// Public Router Module
///
/// Unauthenticated endpoints: the service banner and the health probe used by
/// monitoring and load balancer checks. No data retrieval happens here.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // Service banner.
        .route(
            "/",
            get(|| async { Json(json!({ "message": "Loan application service is running" })) }),
        )
        // GET /health
        // Returns "ok" immediately to verify the service is responsive.
        .route("/health", get(|| async { "ok" }))
}
