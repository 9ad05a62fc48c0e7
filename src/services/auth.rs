//! Auth services - Login ed emissione del token

use crate::core::{AppError, AppState};
use crate::dtos::{LoginDTO, TokenDTO};
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<Json<TokenDTO>, AppError> {
    debug!("Login attempt");
    // 1. Verificare la coppia username/password tramite il CredentialVerifier dell'issuer
    // 2. Se non valida, ritornare UNAUTHORIZED (nessun retry, nessun lockout)
    // 3. Ritornare il token firmato nell'envelope { token }
    let token = state.issuer.issue_token(&body.username, &body.password)?;

    Ok(Json(TokenDTO { token }))
}
