use axum::{Router, routing::get};

pub mod auth;
pub mod employees;
pub mod system;

/// Router for endpoints reachable without a bearer token: credential login
/// and the bootstrap admin-registration path.
pub fn open_router() -> Router {
    Router::new()
        .route("/auth/login", axum::routing::post(auth::login))
        .route(
            "/auth/register-admin",
            axum::routing::post(auth::register_admin),
        )
}

/// Router for endpoints that require a verified principal.
pub fn protected_router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/auth/register", axum::routing::post(auth::register))
        .nest("/employees", employees::router())
}
