mod api;
mod app;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::sync::Arc;

use memora_core::{AppCore, ServiceConfig, llm, paths};

#[tokio::main]
async fn main() {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,memora_server=debug".into()),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting Memora backend server");

    let db_path =
        paths::ensure_database_path_string().expect("Failed to determine Memora database path");

    let client = llm::client_from_env().expect("Failed to configure LLM client");
    tracing::info!(
        provider = client.provider(),
        model = client.model(),
        "LLM client ready"
    );

    let core = Arc::new(
        AppCore::new(&db_path, client, ServiceConfig::from_env())
            .expect("Failed to initialize app core"),
    );

    let app = app::router(core);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to port 3000");

    tracing::info!("Memora running on http://localhost:3000");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
