//! Black-box tests for the authentication surface.
//!
//! Spins up the production router on an ephemeral port and drives it over
//! HTTP, so the access filter, extractors, and error envelope are exercised
//! exactly as deployed.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use marketplace_api::app;
use marketplace_api::config::{AppEnv, Config};
use marketplace_api::services::auth::{Claims, TokenService, TokenType};

const TEST_SECRET: &str = "black-box-test-secret";

fn test_config() -> Config {
    Config {
        addr: SocketAddr::from_str("127.0.0.1:0").unwrap(),
        app_env: AppEnv::Development,
        cors_allowed_origins: Vec::new(),
        token_secret: TEST_SECRET.to_string(),
        access_token_ttl_ms: 3_600_000,
        refresh_token_ttl_ms: 604_800_000,
    }
}

struct TestServer {
    base_url: String,
    tokens: Arc<TokenService>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same wiring as prod, but bound to an ephemeral port.
        let config = test_config();
        let state = app::build_state(&config);
        let tokens = state.tokens.clone();
        let router = app::build_app(state, &config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url,
            tokens,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_expired_access_token(user_id: Uuid) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        email: "a@b.com".to_string(),
        role: "seller".to_string(),
        token_type: TokenType::Access,
        iat: now - 7200,
        exp: now - 3600,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("failed to encode test jwt")
}

#[tokio::test]
async fn missing_header_leaves_request_unauthenticated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Public route answers normally, just without an identity.
    let res = client.get(srv.url("/api/v1/session")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["authenticated"], json!(false));
    assert!(body.get("identity").is_none());

    // Protected route rejects with the uniform envelope.
    let res = client.get(srv.url("/api/v1/me")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], json!("UNAUTHORIZED"));
}

#[tokio::test]
async fn invalid_bearer_tokens_behave_like_no_header() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let expired = mint_expired_access_token(Uuid::new_v4());
    let bad_tokens = ["garbage", "a.b.c", expired.as_str()];

    for token in bad_tokens {
        let res = client
            .get(srv.url("/api/v1/session"))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["authenticated"], json!(false));

        let res = client
            .get(srv.url("/api/v1/me"))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn access_token_authenticates_and_derives_authority() {
    let srv = TestServer::spawn().await;
    let user_id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
    let token = srv
        .tokens
        .issue_access_token(user_id, "a@b.com", "seller")
        .unwrap();

    let res = reqwest::Client::new()
        .get(srv.url("/api/v1/me"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["user_id"], json!("123e4567-e89b-12d3-a456-426614174000"));
    assert_eq!(body["email"], json!("a@b.com"));
    assert_eq!(body["role"], json!("seller"));
    assert_eq!(body["authority"], json!("ROLE_SELLER"));
}

#[tokio::test]
async fn session_reports_identity_when_authenticated() {
    let srv = TestServer::spawn().await;
    let user_id = Uuid::new_v4();
    let token = srv
        .tokens
        .issue_access_token(user_id, "s@example.com", "buyer")
        .unwrap();

    let res = reqwest::Client::new()
        .get(srv.url("/api/v1/session"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["authenticated"], json!(true));
    assert_eq!(body["identity"]["user_id"], json!(user_id.to_string()));
    assert_eq!(body["identity"]["authority"], json!("ROLE_BUYER"));
}

#[tokio::test]
async fn refresh_token_never_authenticates_requests() {
    let srv = TestServer::spawn().await;
    let refresh = srv
        .tokens
        .issue_refresh_token(Uuid::new_v4(), "a@b.com", "seller")
        .unwrap();

    let client = reqwest::Client::new();

    let res = client
        .get(srv.url("/api/v1/me"))
        .bearer_auth(&refresh)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(srv.url("/api/v1/session"))
        .bearer_auth(&refresh)
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["authenticated"], json!(false));
}

#[tokio::test]
async fn refresh_flow_issues_working_access_token() {
    let srv = TestServer::spawn().await;
    let user_id = Uuid::new_v4();
    let refresh = srv
        .tokens
        .issue_refresh_token(user_id, "s@example.com", "buyer")
        .unwrap();

    let client = reqwest::Client::new();
    let res = client
        .post(srv.url("/api/v1/auth/refresh"))
        .json(&json!({"grant_type": "refresh_token", "refresh_token": &refresh}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["token_type"], json!("Bearer"));
    assert_eq!(body["expires_in"], json!(3600));
    assert_eq!(body["refresh_token"], json!(refresh));

    // The minted access token authenticates requests for the same subject.
    let access = body["access_token"].as_str().unwrap();
    let res = client
        .get(srv.url("/api/v1/me"))
        .bearer_auth(access)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let me: Value = res.json().await.unwrap();
    assert_eq!(me["user_id"], json!(user_id.to_string()));
    assert_eq!(me["email"], json!("s@example.com"));
    assert_eq!(me["role"], json!("buyer"));
}

#[tokio::test]
async fn access_token_cannot_renew_a_session() {
    let srv = TestServer::spawn().await;
    let access = srv
        .tokens
        .issue_access_token(Uuid::new_v4(), "a@b.com", "seller")
        .unwrap();

    let res = reqwest::Client::new()
        .post(srv.url("/api/v1/auth/refresh"))
        .json(&json!({"grant_type": "refresh_token", "refresh_token": access}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], json!("UNAUTHORIZED"));
}

#[tokio::test]
async fn unsupported_grant_type_is_rejected() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(srv.url("/api/v1/auth/refresh"))
        .json(&json!({"grant_type": "password", "refresh_token": "irrelevant"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(srv.url("/api/v1/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], json!("ok"));
}
