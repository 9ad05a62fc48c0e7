//! Auth DTOs - corpo della richiesta di login e risposta con il token

use serde::{Deserialize, Serialize};

/// Credentials posted to `POST /api/login`
#[derive(Deserialize, Debug)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

/// Envelope returned on a successful login
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenDTO {
    pub token: String,
}
