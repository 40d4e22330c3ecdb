use crate::helpers::{assert_envelope, spawn_app};
use serde_json::json;

#[tokio::test]
async fn delete_returns_204_and_removes_the_row() {
    let test_app = spawn_app().await;
    let user = test_app.store_user().await;
    let stored = test_app.store_subscription(&user, "Ivi", 100, None).await;

    let response = test_app.delete_subscription(&stored.id.to_string()).await;

    assert_eq!(204, response.status().as_u16());
    assert_eq!("", response.text().await.unwrap());
    assert!(test_app.find_stored_subscription(stored.id).await.is_none());
}

#[tokio::test]
async fn delete_of_an_unknown_id_still_returns_204() {
    let test_app = spawn_app().await;

    let response = test_app.delete_subscription("31337").await;

    assert_eq!(204, response.status().as_u16());
}

#[tokio::test]
async fn delete_returns_400_for_malformed_ids() {
    let test_app = spawn_app().await;

    let response = test_app.delete_subscription("not-a-number").await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn create_then_delete_then_read_is_not_found() {
    let test_app = spawn_app().await;
    let user = test_app.store_user().await;

    let response = test_app
        .post_subscription(&json!({
            "user_id": user.id,
            "service_name": "Okko",
            "price": 100,
        }))
        .await;
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let subscription = &assert_envelope(&body)["subscription"];
    assert_eq!(subscription["price"], 100);
    let id = subscription["id"].as_i64().unwrap().to_string();

    assert_eq!(204, test_app.delete_subscription(&id).await.status().as_u16());
    assert_eq!(404, test_app.get_subscription(&id).await.status().as_u16());
}
