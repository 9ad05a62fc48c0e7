//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod category;
pub mod product;

// Re-exports per facilitare l'import
pub use auth::login_user;
pub use category::{create_category, delete_category, get_category, list_categories, update_category};
pub use product::{create_product, delete_product, get_product, list_products, update_product};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
