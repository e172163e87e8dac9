use axum::{Json, extract::State, http::StatusCode};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Basic};
use tracing::info;

use crate::auth;
use crate::error::JourneyError;
use crate::feed::ListingsResponse;
use crate::middleware::Session;
use crate::server::router::JourneyState;

/// GET /auth
///
/// Exchanges basic-auth credentials for an opaque bearer token. The token
/// is the entire response body, verbatim; clients must not parse it.
pub async fn login(
    State(state): State<JourneyState>,
    basic: Option<TypedHeader<Authorization<Basic>>>,
) -> Result<String, JourneyError> {
    let Some(TypedHeader(Authorization(credentials))) = basic else {
        return Err(JourneyError::InvalidCredentials);
    };

    let user = state
        .store
        .user_by_email(credentials.username())
        .await?
        .ok_or(JourneyError::InvalidCredentials)?;

    if !auth::verify_password(credentials.password(), &user.password_hash)? {
        return Err(JourneyError::InvalidCredentials);
    }

    let token = auth::generate_token();
    state.store.insert_session(&token, user.id).await?;
    info!(user = %user.email, "issued session token");
    Ok(token)
}

/// POST /auth/logout
///
/// Revokes the presented bearer token. Idempotent from the client's point
/// of view: an already-revoked token simply fails the session extractor.
pub async fn logout(
    session: Session,
    State(state): State<JourneyState>,
) -> Result<StatusCode, JourneyError> {
    state.store.delete_session(&session.token).await?;
    info!(user = %session.user.email, "revoked session token");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /listings
///
/// The unparameterized feed query: every listing with its nested company,
/// ordered by id.
pub async fn listings(
    _session: Session,
    State(state): State<JourneyState>,
) -> Result<Json<ListingsResponse>, JourneyError> {
    let rows = state.store.list_listings().await?;
    Ok(Json(ListingsResponse {
        listings: rows.into_iter().map(Into::into).collect(),
    }))
}

pub async fn health() -> &'static str {
    "ok"
}
