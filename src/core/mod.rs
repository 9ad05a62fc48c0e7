//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! - Login ed emissione dei token JWT
//! - Configurazione
//! - Pool SQLite e migrazioni
//! - Gestione errori
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AuthError, Claims, CredentialVerifier, FixedCredentialVerifier, TokenIssuer};
pub use config::{Config, ConfigError, JwtSettings};
pub use error::AppError;
pub use state::AppState;
