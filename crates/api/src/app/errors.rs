use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crewdesk_core::DomainError;
use crewdesk_employees::DirectoryError;

pub fn directory_error_to_response(err: DirectoryError) -> axum::response::Response {
    match err {
        DirectoryError::UsernameTaken(username) => json_error(
            StatusCode::CONFLICT,
            "username_taken",
            format!("username '{username}' is taken"),
        ),
        DirectoryError::NoRoles => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "no_roles",
            "an employee must have at least one role",
        ),
        DirectoryError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DirectoryError::InvalidCredentials => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid credentials",
        ),
        DirectoryError::Password(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "hash_error", e.to_string())
        }
        DirectoryError::Auth(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "auth_error", e.to_string())
        }
        DirectoryError::Domain(e) => domain_error_to_response(e),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Unauthorized => {
            json_error(StatusCode::FORBIDDEN, "unauthorized", "unauthorized")
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
