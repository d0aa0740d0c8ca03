use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_200_with_fresh_token_if_credentials_match() {
    let app = TestApp::new().await;
    let (registered, password) = app.register_random().await;

    let response = app
        .post_login(&json!({ "email": registered["email"], "password": password }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], registered["id"]);
    assert_eq!(body["name"], registered["name"]);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn should_return_401_with_same_message_for_wrong_password_and_unknown_email() {
    let app = TestApp::new().await;
    let (registered, password) = app.register_random().await;

    let wrong_password = app
        .post_login(&json!({ "email": registered["email"], "password": format!("{password}x") }))
        .await;
    let unknown_email = app
        .post_login(&json!({ "email": "nobody@example.com", "password": password }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);
    let first: Value = wrong_password.json().await.unwrap();
    let second: Value = unknown_email.json().await.unwrap();
    assert_eq!(first["error"], "invalid email or password");
    assert_eq!(first, second);
}

#[tokio::test]
async fn should_return_400_if_fields_missing() {
    let app = TestApp::new().await;

    let response = app.post_login(&json!({ "email": "a@x.com" })).await;

    assert_eq!(response.status().as_u16(), 400);
}
