//! Health and identity-echo endpoints.

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::context::PrincipalContext;

/// GET /health — liveness probe, no auth.
pub async fn health() -> axum::response::Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

/// GET /whoami — echo the verified principal.
pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> axum::response::Response {
    let authorities: Vec<&str> = principal.authorities().iter().map(|a| a.as_str()).collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "username": principal.username(),
            "authorities": authorities,
        })),
    )
        .into_response()
}
