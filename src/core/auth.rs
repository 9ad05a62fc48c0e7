//! Credential issuer - login con credenziale fissa ed emissione dei token JWT
//!
//! L'issuer riceve i `JwtSettings` alla costruzione e delega il controllo di
//! username/password a un [`CredentialVerifier`]: un verificatore reale si può
//! sostituire senza toccare il contratto del token.

use crate::core::config::JwtSettings;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    Unauthorized,
    #[error("invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("token expiry is out of range")]
    ExpiryOutOfRange,
}

// struct che codifica il contenuto del token jwt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String, // username
    pub jti: String, // identificativo casuale, non tracciato lato server
    pub iss: String,
    pub aud: String,
    pub exp: usize, // scadenza del token
    pub iat: usize, // istante di emissione
}

/// Decide whether a username/password pair may obtain a token
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one hardcoded pair, compared as plain strings.
///
/// Passwords are neither hashed nor stored: this is placeholder logic and should
/// be replaced by a real verifier before any production use.
#[derive(Debug, Clone)]
pub struct FixedCredentialVerifier {
    username: String,
    password: String,
}

impl FixedCredentialVerifier {
    pub const USERNAME: &'static str = "testuser";
    pub const PASSWORD: &'static str = "password123";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for FixedCredentialVerifier {
    fn default() -> Self {
        Self::new(Self::USERNAME, Self::PASSWORD)
    }
}

impl CredentialVerifier for FixedCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

pub struct TokenIssuer {
    settings: JwtSettings,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    verifier: Box<dyn CredentialVerifier>,
}

impl TokenIssuer {
    /// Issuer backed by the hardcoded `testuser` credential
    pub fn new(settings: JwtSettings) -> Self {
        Self::with_verifier(settings, FixedCredentialVerifier::default())
    }

    pub fn with_verifier(settings: JwtSettings, verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            settings,
            verifier: Box::new(verifier),
        }
    }

    pub fn settings(&self) -> &JwtSettings {
        &self.settings
    }

    /// Checks the credential and returns a signed HS256 token for `username`
    #[instrument(skip(self, password), fields(username = %username))]
    pub fn issue_token(&self, username: &str, password: &str) -> Result<String, AuthError> {
        self.issue_token_at(username, password, Utc::now())
    }

    /// Same as [`issue_token`](Self::issue_token) with an explicit issuance instant
    pub fn issue_token_at(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        if !self.verifier.verify(username, password) {
            warn!("Rejected login for user {}", username);
            return Err(AuthError::Unauthorized);
        }

        let expires_at = self
            .settings
            .lifetime()
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                error!(
                    "Cannot compute token expiry for {} minutes",
                    self.settings.expiration_minutes
                );
                AuthError::ExpiryOutOfRange
            })?;

        debug!("Encoding JWT token for user");
        let claims = Claims {
            sub: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.settings.issuer.clone(),
            aud: self.settings.audience.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map(|token| {
                info!("JWT token issued for user {}", username);
                token
            })
            .map_err(|e| {
                error!("Failed to encode JWT token: {:?}", e);
                AuthError::Signing(e)
            })
    }

    /// Decodes a token signed with the configured secret, checking signature,
    /// issuer, audience and expiry
    #[instrument(skip(self, token))]
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.settings.issuer]);
        validation.set_audience(&[&self.settings.audience]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!("Failed to decode JWT token: {:?}", e);
                AuthError::InvalidToken(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn settings() -> JwtSettings {
        JwtSettings {
            secret: "unit-test-secret-that-is-long-enough!".to_string(),
            issuer: "catalog".to_string(),
            audience: "catalog-clients".to_string(),
            expiration_minutes: 30.0,
        }
    }

    #[test]
    fn valid_credential_yields_token_for_subject() {
        let issuer = TokenIssuer::new(settings());

        let token = issuer.issue_token("testuser", "password123").unwrap();
        let claims = issuer.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "testuser");
        assert_eq!(claims.iss, "catalog");
        assert_eq!(claims.aud, "catalog-clients");
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn any_other_pair_is_unauthorized() {
        let issuer = TokenIssuer::new(settings());

        for (user, pass) in [
            ("testuser", "wrong"),
            ("someone", "password123"),
            ("TestUser", "password123"),
            ("testuser", "password123 "),
            ("", ""),
        ] {
            assert!(
                matches!(issuer.issue_token(user, pass), Err(AuthError::Unauthorized)),
                "{user:?}/{pass:?} should be rejected"
            );
        }
    }

    #[test]
    fn every_token_gets_a_fresh_jti() {
        let issuer = TokenIssuer::new(settings());

        let first = issuer.issue_token("testuser", "password123").unwrap();
        let second = issuer.issue_token("testuser", "password123").unwrap();

        let first = issuer.verify_token(&first).unwrap();
        let second = issuer.verify_token(&second).unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn expiration_is_issuance_plus_configured_minutes() {
        let issuer = TokenIssuer::new(settings());
        let now = Utc::now();

        let token = issuer.issue_token_at("testuser", "password123", now).unwrap();
        let claims = issuer.verify_token(&token).unwrap();

        assert_eq!(claims.iat, now.timestamp() as usize);
        assert_eq!(claims.exp, (now + Duration::minutes(30)).timestamp() as usize);
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let issuer = TokenIssuer::new(settings());
        let mut other = settings();
        other.secret = "a-completely-different-secret-value".to_string();
        let forged = TokenIssuer::new(other)
            .issue_token("testuser", "password123")
            .unwrap();

        assert!(matches!(issuer.verify_token(&forged), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn issuer_and_audience_must_match() {
        let issuer = TokenIssuer::new(settings());

        let mut wrong_iss = settings();
        wrong_iss.issuer = "someone-else".to_string();
        let token = TokenIssuer::new(wrong_iss).issue_token("testuser", "password123").unwrap();
        assert!(issuer.verify_token(&token).is_err());

        let mut wrong_aud = settings();
        wrong_aud.audience = "other-clients".to_string();
        let token = TokenIssuer::new(wrong_aud).issue_token("testuser", "password123").unwrap();
        assert!(issuer.verify_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new(settings());
        let long_ago = Utc::now() - Duration::hours(2);

        let token = issuer.issue_token_at("testuser", "password123", long_ago).unwrap();

        assert!(matches!(issuer.verify_token(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn out_of_range_expiry_is_an_error_not_a_panic() {
        let mut huge = settings();
        huge.expiration_minutes = 1e12;
        let issuer = TokenIssuer::new(huge);

        assert!(matches!(
            issuer.issue_token("testuser", "password123"),
            Err(AuthError::ExpiryOutOfRange)
        ));
    }

    struct AllowAll;

    impl CredentialVerifier for AllowAll {
        fn verify(&self, _username: &str, _password: &str) -> bool {
            true
        }
    }

    #[test]
    fn verifier_can_be_substituted() {
        let issuer = TokenIssuer::with_verifier(settings(), AllowAll);

        let token = issuer.issue_token("alice", "anything").unwrap();

        assert_eq!(issuer.verify_token(&token).unwrap().sub, "alice");
    }
}
