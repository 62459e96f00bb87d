use std::sync::Arc;

use userd_api::app::{self, services};

#[tokio::main]
async fn main() {
    userd_observability::init();

    let svc = Arc::new(services::build_services());

    match (
        std::env::var("ADMIN_USERNAME"),
        std::env::var("ADMIN_PASSWORD"),
    ) {
        (Ok(username), Ok(password)) => {
            if let Err(e) = services::bootstrap_admin(&svc, &username, &password) {
                tracing::error!("admin bootstrap failed: {e}");
            }
        }
        _ => {
            tracing::warn!(
                "ADMIN_USERNAME/ADMIN_PASSWORD not set; role endpoints stay unreachable until an ADMIN user exists"
            );
        }
    }

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = app::build_app(svc);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
