use axum::{
    Router,
    routing::{get, post},
};

use crate::db::JourneyStore;
use crate::server::handlers;

#[derive(Clone)]
pub struct JourneyState {
    pub store: JourneyStore,
}

impl JourneyState {
    pub fn new(store: JourneyStore) -> Self {
        Self { store }
    }
}

/// Build the HTTP surface:
/// - `GET /auth`: basic-auth credential exchange, plaintext token body
/// - `POST /auth/logout`: revoke the presented bearer token
/// - `GET /listings`: the feed, bearer-protected
/// - `GET /healthz`: liveness probe
pub fn journey_router(state: JourneyState) -> Router {
    Router::new()
        .route("/auth", get(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        .route("/listings", get(handlers::listings))
        .route("/healthz", get(handlers::health))
        .with_state(state)
}
