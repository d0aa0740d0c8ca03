use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_empty_list_initially() {
    let app = TestApp::new().await;

    let response = app.get_users().await;

    assert_eq!(response.status().as_u16(), 200);
    let users: Vec<Value> = response.json().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn should_list_every_account_without_hashes() {
    let app = TestApp::new().await;
    let mut registered_ids = Vec::new();
    for _ in 0..3 {
        let (body, _) = app.register_random().await;
        registered_ids.push(body["id"].clone());
    }

    let users: Vec<Value> = app.get_users().await.json().await.unwrap();

    assert_eq!(users.len(), 3);
    for id in &registered_ids {
        assert!(users.iter().any(|user| &user["id"] == id));
    }
    for user in &users {
        let fields = user.as_object().unwrap();
        assert!(fields.keys().all(|key| !key.to_lowercase().contains("password")));
    }
}
