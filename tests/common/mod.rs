use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use linkboard_api::auth::{generate_jwt, Claims};
use linkboard_api::database::{ListStore, MemoryListStore};
use linkboard_api::models::{Item, ItemDraft, List, ListDraft};
use linkboard_api::routes::app;
use linkboard_api::state::AppState;

/// The production router wired to an in-memory store, plus a handle on the
/// store so tests can seed and inspect persisted state directly.
pub struct TestApp {
    pub router: Router,
    pub store: MemoryListStore,
}

pub fn test_app() -> TestApp {
    let store = MemoryListStore::new();
    let router = app(AppState::new(Arc::new(store.clone())));
    TestApp { router, store }
}

pub fn bearer(user_id: Uuid) -> String {
    let token = generate_jwt(Claims::new("tester".to_string(), user_id))
        .expect("test token generation should succeed");
    format!("Bearer {}", token)
}

/// Send one request through the router, returning status and parsed body
/// (Null for empty bodies such as 204 responses).
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router should produce a response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };

    (status, value)
}

/// Seed a list with `item_titles` items, all owned by `owner`
pub async fn seed_list(store: &MemoryListStore, owner: Uuid, item_titles: &[&str]) -> List {
    let mut list = List::from_draft(
        ListDraft {
            title: "Bookmarks".to_string(),
            custom_url: "bookmarks".to_string(),
        },
        owner,
    );
    for title in item_titles {
        list.push_item(Item::from_draft(
            ItemDraft {
                title: title.to_string(),
                link: format!("http://example.com/{}", title),
                icon: None,
            },
            owner,
        ));
    }
    store.insert(&list).await.expect("seed insert");
    list
}
