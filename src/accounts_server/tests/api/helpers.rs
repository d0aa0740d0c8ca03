use accounts_adapters::{
    Argon2PasswordHasher, HashMapAccountStore, JwtTokenIssuer, config::test,
};
use accounts_application::AccountService;
use accounts_server::AccountsServer;
use fake::Fake;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::Name;
use secrecy::Secret;
use serde_json::{Value, json};

pub const TEST_JWT_SECRET: &str = "api-test-secret";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let account_service = AccountService::new(
            HashMapAccountStore::new(),
            // cheap parameters keep the suite fast
            Argon2PasswordHasher::new(4096, 1, 1).expect("valid argon2 params"),
            JwtTokenIssuer::new(Secret::from(TEST_JWT_SECRET.to_owned()))
                .expect("non-empty secret"),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let server = AccountsServer::new(account_service);
        tokio::spawn(server.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_user<B: serde::Serialize>(&self, body: &B) -> reqwest::Response {
        self.http_client
            .post(format!("{}/users", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_users(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/users", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/users/{id}", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/users/{id}", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<B: serde::Serialize>(&self, body: &B) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_verify_token<B: serde::Serialize>(&self, body: &B) -> reqwest::Response {
        self.http_client
            .post(format!("{}/verify-token", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Register a random account and return the 201 body.
    pub async fn register_random(&self) -> (Value, String) {
        let password: String = Password(8..20).fake();
        let body = json!({
            "email": get_random_email(),
            "name": Name().fake::<String>(),
            "password": password,
        });
        let response = self.post_user(&body).await;
        assert_eq!(response.status().as_u16(), 201);
        (response.json().await.unwrap(), password)
    }
}

pub fn get_random_email() -> String {
    format!(
        "{}.{}",
        uuid::Uuid::new_v4().simple(),
        SafeEmail().fake::<String>()
    )
}
