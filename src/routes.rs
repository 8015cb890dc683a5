use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::handlers::{items, lists};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Assemble the full application router.
///
/// Lives in the library (rather than `main`) so integration tests can drive
/// the exact production router in-process.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .merge(item_routes())
        .merge(list_routes())
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware));

    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Token-protected API
        .merge(protected)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config::config().security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn item_routes() -> Router<AppState> {
    use axum::routing::patch;

    Router::new()
        .route("/items/:list_id", get(items::index).post(items::create))
        .route(
            "/items/:list_id/:item_id",
            patch(items::update).delete(items::destroy),
        )
}

fn list_routes() -> Router<AppState> {
    Router::new()
        .route("/lists", get(lists::index).post(lists::create))
        .route(
            "/lists/:list_id",
            get(lists::show).patch(lists::update).delete(lists::destroy),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Linkboard API",
        "version": version,
        "description": "User-owned bookmark lists with embedded link items",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "lists": "/lists[/:list_id] (bearer token required)",
            "items": "/items/:list_id[/:item_id] (bearer token required)",
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string()
            })),
        ),
    }
}
