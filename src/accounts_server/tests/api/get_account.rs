use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_200_with_redacted_account() {
    let app = TestApp::new().await;
    let (registered, _) = app.register_random().await;
    let id = registered["id"].as_str().unwrap();

    let response = app.get_user(id).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], registered["id"]);
    assert_eq!(body["email"], registered["email"]);
    assert_eq!(body["name"], registered["name"]);
    assert!(body["createdAt"].is_string());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn should_return_404_if_account_absent() {
    let app = TestApp::new().await;

    let response = app.get_user(&uuid::Uuid::new_v4().to_string()).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_400_if_id_malformed() {
    let app = TestApp::new().await;

    let response = app.get_user("12345").await;

    assert_eq!(response.status().as_u16(), 400);
}
