use accounts_adapters::JwtTokenIssuer;
use accounts_core::{AccountId, TokenClaims, TokenIssuer};
use chrono::{Duration, Utc};
use secrecy::{ExposeSecret, Secret};
use serde_json::{Value, json};

use crate::helpers::{TEST_JWT_SECRET, TestApp};

#[tokio::test]
async fn should_return_claims_for_issued_token() {
    let app = TestApp::new().await;
    let (registered, _) = app.register_random().await;

    let response = app
        .post_verify_token(&json!({ "token": registered["token"] }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], registered["email"]);
    assert_eq!(body["id"], registered["id"]);

    let expires_at: chrono::DateTime<Utc> =
        serde_json::from_value(body["expiresAt"].clone()).unwrap();
    let remaining = expires_at - Utc::now();
    assert!(remaining > Duration::minutes(59));
    assert!(remaining <= Duration::hours(1));
}

#[tokio::test]
async fn should_return_401_token_expired() {
    let app = TestApp::new().await;
    let issuer = JwtTokenIssuer::new(Secret::from(TEST_JWT_SECRET.to_owned())).unwrap();
    let claims = TokenClaims {
        email: "a@x.com".to_owned(),
        id: AccountId::new(),
    };
    let token = issuer.issue(&claims, Duration::minutes(-1)).unwrap();

    let response = app
        .post_verify_token(&json!({ "token": token.as_ref().expose_secret() }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "token expired");
}

#[tokio::test]
async fn should_return_401_invalid_token_for_foreign_signature() {
    let app = TestApp::new().await;
    let issuer = JwtTokenIssuer::new(Secret::from("some-other-secret".to_owned())).unwrap();
    let claims = TokenClaims {
        email: "a@x.com".to_owned(),
        id: AccountId::new(),
    };
    let token = issuer.issue(&claims, Duration::hours(1)).unwrap();

    for candidate in [token.as_ref().expose_secret().as_str(), "garbage"] {
        let response = app.post_verify_token(&json!({ "token": candidate })).await;
        assert_eq!(response.status().as_u16(), 401);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "invalid token");
    }
}
