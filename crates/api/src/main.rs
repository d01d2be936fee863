use crewdesk_api::app::{AppConfig, build_app};
use crewdesk_auth::SigningKey;

#[tokio::main]
async fn main() {
    crewdesk_observability::init();

    // The process must not serve authentication requests without a valid key.
    let encoded = match std::env::var("CREWDESK_JWT_KEY") {
        Ok(v) => v,
        Err(_) => {
            tracing::error!("CREWDESK_JWT_KEY is not set (expected a base64-encoded 256-bit secret)");
            std::process::exit(1);
        }
    };

    let key = match SigningKey::from_base64(&encoded) {
        Ok(key) => key,
        Err(e) => {
            tracing::error!(error = %e, "refusing to start with invalid signing key");
            std::process::exit(1);
        }
    };

    let app = build_app(AppConfig::new(key));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
