use std::sync::Arc;

use linkboard_api::database::{ListStore, MemoryListStore, PgListStore};
use linkboard_api::routes::app;
use linkboard_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkboard_api=info,tower_http=info".into()),
        )
        .init();

    let config = linkboard_api::config::config();
    tracing::info!("starting linkboard-api in {:?} mode", config.environment);

    let store: Arc<dyn ListStore> = match std::env::var("LINKBOARD_STORE").as_deref() {
        Ok("memory") => {
            tracing::warn!("using in-memory store; data will not survive a restart");
            Arc::new(MemoryListStore::new())
        }
        _ => Arc::new(
            PgListStore::connect()
                .await
                .unwrap_or_else(|e| panic!("failed to connect to database: {}", e)),
        ),
    };

    let app = app(AppState::new(store));

    // Allow tests or deployments to override port via env
    let port = std::env::var("LINKBOARD_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("linkboard-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
