//! Registration and login endpoints.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use crate::app::dto::{
    EmployeeResponse, LoginRequest, RegisterEmployeeRequest, TokenResponse,
};
use crate::app::{errors, services::AppServices};
use crate::context::PrincipalContext;

/// Authority required for employee administration.
pub const ADMIN: &str = "ADMIN";

/// POST /auth/register — register employees (admin bearer token required).
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(requests): Json<Vec<RegisterEmployeeRequest>>,
) -> axum::response::Response {
    if !principal.has_authority(ADMIN) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", "ADMIN authority required");
    }

    register_batch(&services, requests)
}

/// POST /auth/register-admin — bootstrap registration path (no bearer token).
///
/// The original deployment kept this endpoint off the public network; it
/// exists so a fresh install can mint its first admin.
pub async fn register_admin(
    Extension(services): Extension<Arc<AppServices>>,
    Json(requests): Json<Vec<RegisterEmployeeRequest>>,
) -> axum::response::Response {
    register_batch(&services, requests)
}

/// POST /auth/login — verify credentials, return a signed access token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(request): Json<LoginRequest>,
) -> axum::response::Response {
    match services
        .directory
        .login(&request.username, &request.password, Utc::now())
    {
        Ok(token) => (StatusCode::OK, Json(TokenResponse { token })).into_response(),
        Err(e) => errors::directory_error_to_response(e),
    }
}

fn register_batch(
    services: &AppServices,
    requests: Vec<RegisterEmployeeRequest>,
) -> axum::response::Response {
    let requests = requests.into_iter().map(Into::into).collect();

    match services.directory.register(requests) {
        Ok(employees) => {
            let body: Vec<EmployeeResponse> = employees.iter().map(Into::into).collect();
            (
                StatusCode::CREATED,
                Json(serde_json::json!({ "employees": body })),
            )
                .into_response()
        }
        Err(e) => errors::directory_error_to_response(e),
    }
}
