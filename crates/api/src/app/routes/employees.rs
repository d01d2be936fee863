//! Employee update/delete endpoints.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::put,
};

use crewdesk_core::EmployeeId;

use crate::app::dto::{EmployeeResponse, UpdateEmployeeRequest};
use crate::app::routes::auth::ADMIN;
use crate::app::{errors, services::AppServices};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/:id", put(update_employee).delete(delete_employee))
}

/// PUT /employees/:id — update fields; a non-empty role list replaces the
/// employee's role set wholesale.
pub async fn update_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> axum::response::Response {
    if !principal.has_authority(ADMIN) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", "ADMIN authority required");
    }

    let id = match id.parse::<EmployeeId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.directory.update(id, request.into()) {
        Ok(employee) => (
            StatusCode::OK,
            Json(EmployeeResponse::from(&employee)),
        )
            .into_response(),
        Err(e) => errors::directory_error_to_response(e),
    }
}

/// DELETE /employees/:id — soft-delete the record.
pub async fn delete_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if !principal.has_authority(ADMIN) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", "ADMIN authority required");
    }

    let id = match id.parse::<EmployeeId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.directory.delete(id) {
        Ok(id) => (
            StatusCode::OK,
            Json(serde_json::json!({ "deleted": id.to_string() })),
        )
            .into_response(),
        Err(e) => errors::directory_error_to_response(e),
    }
}
