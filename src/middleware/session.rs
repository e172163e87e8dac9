use axum::extract::{FromRef, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use crate::db::models::DbUser;
use crate::error::JourneyError;
use crate::server::router::JourneyState;

/// Extract the bearer token from an `Authorization` header.
/// Accepts `Bearer <token>` and `bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth = headers.get("authorization")?.to_str().ok()?.trim();
    auth.strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
}

/// Authenticated session, resolved from the bearer token against the
/// sessions table. Rejects with 401 when the token is absent or unknown.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: DbUser,
    pub token: String,
}

impl<S> FromRequestParts<S> for Session
where
    JourneyState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = JourneyState::from_ref(state);

        let Some(token) = bearer_token(&parts.headers) else {
            return Err(JourneyError::InvalidSession.into_response());
        };

        match state.store.session_with_user(token).await {
            Ok(Some((session, user)))
                if bool::from(session.token.as_bytes().ct_eq(token.as_bytes())) =>
            {
                Ok(Session {
                    user,
                    token: session.token,
                })
            }
            Ok(_) => Err(JourneyError::InvalidSession.into_response()),
            Err(e) => Err(e.into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));

        headers.insert("authorization", HeaderValue::from_static("bearer xyz"));
        assert_eq!(bearer_token(&headers), Some("xyz"));
    }

    #[test]
    fn rejects_other_schemes_and_absence() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert("authorization", HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert_eq!(bearer_token(&headers), None);
    }
}
