//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: collaborator wiring (store, hasher, issuer, directory)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crewdesk_auth::{Hs256TokenVerifier, SigningKey};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Application configuration, passed explicitly at composition time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub key: SigningKey,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn new(key: SigningKey) -> Self {
        Self {
            key,
            bcrypt_cost: crewdesk_employees::DEFAULT_COST,
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: AppConfig) -> Router {
    let verifier = Arc::new(Hs256TokenVerifier::new(config.key.clone()));
    let auth_state = middleware::AuthState { verifier };

    let services = Arc::new(services::build_services(config));

    // Protected routes: require a verified bearer token.
    let protected = routes::protected_router()
        .layer(Extension(services.clone()))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::open_router().layer(Extension(services)))
        .merge(protected)
}
