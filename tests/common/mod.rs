#![allow(dead_code)]

use axum_test::TestServer;
use product_catalog::config::JwtSettings;
use product_catalog::core::AppState;
use product_catalog::db::memory_pool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";
pub const TEST_ISSUER: &str = "product-catalog-tests";
pub const TEST_AUDIENCE: &str = "product-catalog-clients";
pub const TEST_EXPIRATION_MINUTES: f64 = 60.0;

/// JwtSettings shared by every test
pub fn test_jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: TEST_SECRET.to_string(),
        issuer: TEST_ISSUER.to_string(),
        audience: TEST_AUDIENCE.to_string(),
        expiration_minutes: TEST_EXPIRATION_MINUTES,
    }
}

/// AppState over a migrated in-memory SQLite database
pub async fn create_test_state() -> Arc<AppState> {
    let pool = memory_pool()
        .await
        .expect("Failed to open in-memory database");
    Arc::new(AppState::new(pool, test_jwt_settings()))
}

/// TestServer wrapping the application router
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = product_catalog::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

pub async fn spawn_app() -> (Arc<AppState>, TestServer) {
    let state = create_test_state().await;
    let server = create_test_server(state.clone());
    (state, server)
}
