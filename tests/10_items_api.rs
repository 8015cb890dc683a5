mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use common::{bearer, seed_list, send, test_app};
use linkboard_api::database::ListStore;

#[tokio::test]
async fn listing_requires_a_token() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["a"]).await;

    let (status, body) = send(
        &app.router,
        Method::GET,
        &format!("/items/{}", list.id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn listing_a_missing_list_is_404() -> Result<()> {
    let app = test_app();
    let token = bearer(Uuid::new_v4());

    let (status, body) = send(
        &app.router,
        Method::GET,
        &format!("/items/{}", Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn listing_returns_items_in_insertion_order_and_is_idempotent() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["first", "second", "third"]).await;

    // Any authenticated user may read, not just the owner
    let token = bearer(Uuid::new_v4());
    let uri = format!("/items/{}", list.id);

    let (status, body) = send(&app.router, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);

    // A repeated read with no intervening writes returns the same sequence
    let (_, again) = send(&app.router, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(body, again);
    Ok(())
}

#[tokio::test]
async fn create_appends_item_owned_by_requester() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &[]).await;
    let token = bearer(owner);

    let (status, body) = send(
        &app.router,
        Method::POST,
        &format!("/items/{}", list.id),
        Some(&token),
        Some(json!({ "item": { "title": "A", "link": "http://a" } })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item"]["title"], "A");
    assert_eq!(body["item"]["owner"], json!(owner));
    assert!(body["item"]["id"].is_string(), "created item carries its id");

    let saved = app.store.find(list.id).await?.expect("list persisted");
    assert_eq!(saved.items.len(), 1);
    assert_eq!(saved.items[0].owner, owner);
    Ok(())
}

#[tokio::test]
async fn create_ignores_client_supplied_owner() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &[]).await;
    let token = bearer(owner);

    let (status, _) = send(
        &app.router,
        Method::POST,
        &format!("/items/{}", list.id),
        Some(&token),
        Some(json!({
            "item": { "title": "A", "link": "http://a", "owner": Uuid::new_v4() }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let saved = app.store.find(list.id).await?.unwrap();
    assert_eq!(saved.items[0].owner, owner);
    Ok(())
}

#[tokio::test]
async fn create_against_a_missing_list_is_404() -> Result<()> {
    let app = test_app();
    let token = bearer(Uuid::new_v4());

    let (status, _) = send(
        &app.router,
        Method::POST,
        &format!("/items/{}", Uuid::new_v4()),
        Some(&token),
        Some(json!({ "item": { "title": "A", "link": "http://a" } })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn create_rejects_blank_required_fields() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &[]).await;
    let token = bearer(owner);

    let (status, body) = send(
        &app.router,
        Method::POST,
        &format!("/items/{}", list.id),
        Some(&token),
        Some(json!({ "item": { "title": "", "link": "http://a" } })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["title"].is_string());

    // Nothing was appended
    let saved = app.store.find(list.id).await?.unwrap();
    assert!(saved.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_by_non_owner_is_401_and_leaves_item_untouched() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["A"]).await;
    let item_id = list.items[0].id;

    let intruder = bearer(Uuid::new_v4());
    let (status, body) = send(
        &app.router,
        Method::PATCH,
        &format!("/items/{}/{}", list.id, item_id),
        Some(&intruder),
        Some(json!({ "item": { "title": "B" } })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let saved = app.store.find(list.id).await?.unwrap();
    assert_eq!(saved.items[0].title, "A");
    Ok(())
}

#[tokio::test]
async fn update_merges_fields_but_never_the_owner() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["A"]).await;
    let item_id = list.items[0].id;
    let token = bearer(owner);

    let (status, body) = send(
        &app.router,
        Method::PATCH,
        &format!("/items/{}/{}", list.id, item_id),
        Some(&token),
        Some(json!({ "item": { "title": "B", "owner": Uuid::new_v4() } })),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null, "204 carries no body");

    let saved = app.store.find(list.id).await?.unwrap();
    assert_eq!(saved.items[0].title, "B");
    assert_eq!(saved.items[0].owner, owner, "owner is immutable post-creation");
    Ok(())
}

#[tokio::test]
async fn update_drops_blank_fields_instead_of_overwriting() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["A"]).await;
    let item_id = list.items[0].id;
    let token = bearer(owner);

    let (status, _) = send(
        &app.router,
        Method::PATCH,
        &format!("/items/{}/{}", list.id, item_id),
        Some(&token),
        Some(json!({ "item": { "title": "", "icon": "star" } })),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let saved = app.store.find(list.id).await?.unwrap();
    assert_eq!(saved.items[0].title, "A", "blank title must not overwrite");
    assert_eq!(saved.items[0].icon.as_deref(), Some("star"));
    Ok(())
}

#[tokio::test]
async fn update_with_unknown_item_id_is_404() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["A"]).await;
    let token = bearer(owner);

    let (status, _) = send(
        &app.router,
        Method::PATCH,
        &format!("/items/{}/{}", list.id, Uuid::new_v4()),
        Some(&token),
        Some(json!({ "item": { "title": "B" } })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_by_non_owner_is_401_and_keeps_the_item() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["A"]).await;
    let item_id = list.items[0].id;

    let intruder = bearer(Uuid::new_v4());
    let (status, _) = send(
        &app.router,
        Method::DELETE,
        &format!("/items/{}/{}", list.id, item_id),
        Some(&intruder),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let saved = app.store.find(list.id).await?.unwrap();
    assert_eq!(saved.items.len(), 1);
    Ok(())
}

#[tokio::test]
async fn delete_removes_exactly_the_targeted_item() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["A", "B", "C"]).await;
    let target = list.items[1].id;
    let token = bearer(owner);

    let (status, body) = send(
        &app.router,
        Method::DELETE,
        &format!("/items/{}/{}", list.id, target),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let saved = app.store.find(list.id).await?.unwrap();
    assert_eq!(saved.items.len(), 2);
    assert!(saved.items.iter().all(|i| i.id != target));
    let titles: Vec<&str> = saved.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C"], "other items untouched, order kept");
    Ok(())
}

#[tokio::test]
async fn delete_with_unknown_item_id_is_404() -> Result<()> {
    let app = test_app();
    let owner = Uuid::new_v4();
    let list = seed_list(&app.store, owner, &["A"]).await;
    let token = bearer(owner);

    let (status, _) = send(
        &app.router,
        Method::DELETE,
        &format!("/items/{}/{}", list.id, Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
