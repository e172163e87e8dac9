//! Client data layer: the programmatic counterpart of the browser page.
//!
//! Holds the client-local logged-in flag in memory, mirrors the issued
//! token into a persistent single-key store, and talks to the service
//! over HTTP.

pub mod token_store;

pub use token_store::TokenStore;

use crate::error::{ApiErrorResponse, JourneyError};
use crate::feed::{Listing, ListingsResponse};
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

const AUTH_PATH: &str = "/auth";
const LOGOUT_PATH: &str = "/auth/logout";
const LISTINGS_PATH: &str = "/listings";

pub struct JourneyClient {
    http: reqwest::Client,
    base_url: Url,
    token_store: TokenStore,
    token: Option<String>,
    logged_in: bool,
}

impl JourneyClient {
    /// Build a client against `base_url`, persisting the token at
    /// `token_path`. The logged-in flag initializes from token presence:
    /// absence implies logged-out.
    pub fn new(base_url: &str, token_path: PathBuf) -> Result<Self, JourneyError> {
        let base_url = Url::parse(base_url)?;
        let token_store = TokenStore::new(token_path);
        let token = token_store.load()?;
        let logged_in = token.is_some();
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token_store,
            token,
            logged_in,
        })
    }

    /// The client-local session flag.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Exchange credentials for a bearer token.
    ///
    /// On a 2xx response the body is stored verbatim as the token and the
    /// flag flips true. On any other status nothing changes and the
    /// failure is returned to the caller.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), JourneyError> {
        let url = self.base_url.join(AUTH_PATH)?;
        let response = self
            .http
            .get(url)
            .basic_auth(email, Some(password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JourneyError::LoginFailed(status));
        }

        let token = response.text().await?;
        self.token_store.save(&token)?;
        self.token = Some(token);
        self.logged_in = true;
        info!(email, "logged in");
        Ok(())
    }

    /// Fetch the listings feed. Query failures carry the raw error
    /// message for verbatim rendering.
    pub async fn listings(&self) -> Result<Vec<Listing>, JourneyError> {
        let token = self.token.as_deref().ok_or(JourneyError::NotLoggedIn)?;
        let url = self.base_url.join(LISTINGS_PATH)?;
        let response = self.http.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(JourneyError::ListingsQuery(message));
        }

        let feed: ListingsResponse = response.json().await?;
        Ok(feed.listings)
    }

    /// Clear the stored token and flip the flag false, regardless of
    /// prior state. Server-side revocation is best-effort.
    pub async fn logout(&mut self) -> Result<(), JourneyError> {
        let token = self.token.take();
        self.logged_in = false;
        self.token_store.clear()?;

        if let Some(token) = token {
            match self.base_url.join(LOGOUT_PATH) {
                Ok(url) => match self.http.post(url).bearer_auth(&token).send().await {
                    Ok(response) if !response.status().is_success() => {
                        warn!(status = %response.status(), "server-side logout failed");
                    }
                    Ok(_) => info!("logged out"),
                    Err(e) => warn!(error = %e, "server-side logout failed"),
                },
                Err(e) => warn!(error = %e, "server-side logout failed"),
            }
        }
        Ok(())
    }
}
