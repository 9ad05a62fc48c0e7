//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository e l'emettitore di token condivisi tra tutte le route.

use crate::core::auth::TokenIssuer;
use crate::core::config::JwtSettings;
use crate::repositories::{CategoryRepository, ProductRepository};
use sqlx::SqlitePool;

/// Application state shared by every route
pub struct AppState {
    /// Category repository
    pub category: CategoryRepository,

    /// Product repository
    pub product: ProductRepository,

    /// Login check and JWT signing
    pub issuer: TokenIssuer,
}

impl AppState {
    /// Builds every repository on the given pool and an issuer backed by the
    /// hardcoded credential
    pub fn new(pool: SqlitePool, jwt: JwtSettings) -> Self {
        Self::with_issuer(pool, TokenIssuer::new(jwt))
    }

    pub fn with_issuer(pool: SqlitePool, issuer: TokenIssuer) -> Self {
        Self {
            category: CategoryRepository::new(pool.clone()),
            product: ProductRepository::new(pool),
            issuer,
        }
    }
}
