use crate::helpers::spawn_app;
use reqwest::Method;
use serde_json::json;

#[tokio::test]
async fn updates_return_405_whether_or_not_the_subscription_exists() {
    let test_app = spawn_app().await;
    let user = test_app.store_user().await;
    let stored = test_app.store_subscription(&user, "Ivi", 100, None).await;
    let existing = stored.id.to_string();

    for method in [Method::PATCH, Method::PUT] {
        for id in [existing.as_str(), "999999"] {
            let response = test_app
                .modify_subscription(method.clone(), id, &json!({"price": 1}))
                .await;
            assert_eq!(
                405,
                response.status().as_u16(),
                "{} /subscriptions/{} was not refused",
                method,
                id
            );
        }
    }

    let unchanged = test_app
        .find_stored_subscription(stored.id)
        .await
        .expect("Subscription disappeared");
    assert_eq!(unchanged.price, 100);
}
