use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn account_lifecycle() {
    let app = TestApp::new().await;
    let email = format!("{}-a@x.com", uuid::Uuid::new_v4().simple());

    let registered = app
        .post_user(&json!({ "email": email, "name": "Ann", "password": "secret1" }))
        .await;
    assert_eq!(registered.status().as_u16(), 201);
    let registered: Value = registered.json().await.unwrap();
    assert!(registered["token"].is_string());
    let id = registered["id"].as_str().unwrap().to_owned();

    let fetched = app.get_user(&id).await;
    assert_eq!(fetched.status().as_u16(), 200);
    let fetched: Value = fetched.json().await.unwrap();
    assert_eq!(fetched["email"], email.as_str());
    assert!(fetched.get("passwordHash").is_none());

    let duplicate = app
        .post_user(&json!({ "email": email, "name": "Ann2", "password": "secret2" }))
        .await;
    assert_eq!(duplicate.status().as_u16(), 400);

    assert_eq!(app.delete_user(&id).await.status().as_u16(), 204);
    assert_eq!(app.delete_user(&id).await.status().as_u16(), 204);
    assert_eq!(app.get_user(&id).await.status().as_u16(), 404);
}
