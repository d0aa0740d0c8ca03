use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_204_and_remove_account() {
    let app = TestApp::new().await;
    let (registered, _) = app.register_random().await;
    let id = registered["id"].as_str().unwrap();

    let response = app.delete_user(id).await;

    assert_eq!(response.status().as_u16(), 204);
    assert!(response.bytes().await.unwrap().is_empty());
    assert_eq!(app.get_user(id).await.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_204_if_account_absent() {
    let app = TestApp::new().await;

    let response = app.delete_user(&uuid::Uuid::new_v4().to_string()).await;

    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
async fn should_allow_reregistering_deleted_email() {
    let app = TestApp::new().await;
    let (registered, password) = app.register_random().await;
    let id = registered["id"].as_str().unwrap();

    app.delete_user(id).await;

    let response = app
        .post_user(&serde_json::json!({
            "email": registered["email"],
            "name": "Returning",
            "password": password,
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);
}
