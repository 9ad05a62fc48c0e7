//! Integration tests per l'endpoint di login
//!
//! - POST /api/login

mod common;

#[cfg(test)]
mod auth_tests {
    use super::common::*;
    use chrono::Utc;
    use product_catalog::dtos::TokenDTO;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let (state, server) = spawn_app().await;

        let response = server
            .post("/api/login")
            .json(&json!({ "username": "testuser", "password": "password123" }))
            .await;

        response.assert_status_ok();
        let body: TokenDTO = response.json();
        let claims = state
            .issuer
            .verify_token(&body.token)
            .expect("token should verify");

        assert_eq!(claims.sub, "testuser");
        assert_eq!(claims.iss, TEST_ISSUER);
        assert_eq!(claims.aud, TEST_AUDIENCE);
    }

    #[tokio::test]
    async fn test_login_body_uses_token_field() {
        let (_state, server) = spawn_app().await;

        let response = server
            .post("/api/login")
            .json(&json!({ "username": "testuser", "password": "password123" }))
            .await;

        let body: serde_json::Value = response.json();
        assert!(body["token"].is_string(), "Response should contain a token string");
    }

    #[tokio::test]
    async fn test_login_expiration_matches_configuration() {
        let (state, server) = spawn_app().await;
        let before = Utc::now().timestamp();

        let response = server
            .post("/api/login")
            .json(&json!({ "username": "testuser", "password": "password123" }))
            .await;
        let after = Utc::now().timestamp();

        let body: TokenDTO = response.json();
        let claims = state.issuer.verify_token(&body.token).unwrap();
        let lifetime = (TEST_EXPIRATION_MINUTES * 60.0) as i64;

        let exp = claims.exp as i64;
        assert!(exp >= before + lifetime && exp <= after + lifetime);
    }

    #[tokio::test]
    async fn test_login_twice_gives_distinct_jti() {
        let (state, server) = spawn_app().await;
        let body = json!({ "username": "testuser", "password": "password123" });

        let first: TokenDTO = server.post("/api/login").json(&body).await.json();
        let second: TokenDTO = server.post("/api/login").json(&body).await.json();

        let first = state.issuer.verify_token(&first.token).unwrap();
        let second = state.issuer.verify_token(&second.token).unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (_state, server) = spawn_app().await;

        let response = server
            .post("/api/login")
            .json(&json!({ "username": "testuser", "password": "wrongpassword" }))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (_state, server) = spawn_app().await;

        let response = server
            .post("/api/login")
            .json(&json!({ "username": "alice", "password": "password123" }))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let (_state, server) = spawn_app().await;

        let response = server
            .post("/api/login")
            .json(&json!({ "username": "testuser" }))
            .await;

        // 422 Unprocessable Entity quando manca un campo obbligatorio
        response.assert_status_unprocessable_entity();
    }
}
