//! Authenticated request gateway.

use std::fmt;
use std::sync::Arc;

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use ledger_core::error::{AuthError, Error};
use ledger_core::{
    AccessToken, ApiUrl, Credentials, KeyValueStore, RefreshToken, Registration, Result,
    UserProfile,
};

use crate::client::{self, ApiClient};
use crate::config::ClientConfig;
use crate::endpoints::{self, AuthResponse};
use crate::request::PendingRequest;
use crate::session::SessionStore;

/// Entry point for every call against the ledger API.
///
/// Cloning is cheap and clones share the same HTTP client and session store.
/// Each [`send`](Self::send) refreshes at most once and replays the request at
/// most once; concurrent calls do not coordinate their refreshes.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    client: ApiClient,
    session: SessionStore,
}

impl Gateway {
    pub fn new(config: ClientConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(GatewayInner {
                client: ApiClient::new(&config)?,
                session: SessionStore::new(storage),
            }),
        })
    }

    pub fn api_url(&self) -> &ApiUrl {
        self.inner.client.api_url()
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Send a request with the stored access token.
    ///
    /// With no access token a refresh is attempted first. A 401 triggers one
    /// refresh and one replay, whose response is returned whatever its status.
    /// When a needed refresh fails the tokens are cleared and
    /// [`AuthError::Unauthenticated`] is returned. Every other response,
    /// error statuses included, is handed back untouched.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: PendingRequest) -> Result<Response> {
        let token = match self.session().access_token() {
            Some(token) => token,
            None => {
                debug!("No access token stored, refreshing before the request");
                match self.refresh().await {
                    Some(token) => token,
                    None => return Err(self.end_session()),
                }
            }
        };

        let response = self.inner.client.execute(&request, &token).await?;
        if !client::is_unauthorized(&response) {
            return Ok(response);
        }

        info!("Access token rejected, refreshing");
        match self.refresh().await {
            Some(token) => self.inner.client.execute(&request, &token).await,
            None => Err(self.end_session()),
        }
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Only the access token is persisted. On any failure the stored tokens
    /// are left as they were and `None` is returned.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Option<AccessToken> {
        let Some(refresh_token) = self.session().refresh_token() else {
            debug!("No refresh token stored");
            return None;
        };

        match self.inner.client.refresh(&refresh_token).await {
            Ok(access) => {
                self.session().set_access_token(&access);
                debug!("Access token refreshed");
                Some(access)
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                None
            }
        }
    }

    /// Check that the stored session is still accepted by the server.
    ///
    /// Makes at most two profile fetches around one explicit refresh. The
    /// fetches bypass [`send`](Self::send) so a 401 never triggers a refresh
    /// of its own. A session that cannot be validated is cleared entirely.
    #[instrument(skip(self))]
    pub async fn is_authenticated(&self) -> bool {
        if self.session().stored_user().is_none() {
            debug!("No stored session");
            return false;
        }
        let Some(token) = self.session().access_token() else {
            debug!("No stored session");
            return false;
        };

        match self.load_profile(&token).await {
            Ok(_) => return true,
            Err(e) => debug!(error = %e, "Profile fetch failed"),
        }

        if let Some(token) = self.refresh().await {
            match self.load_profile(&token).await {
                Ok(_) => return true,
                Err(e) => debug!(error = %e, "Profile fetch failed after refresh"),
            }
        }

        info!("Stored session is no longer valid");
        self.session().clear();
        false
    }

    /// Log in and store the returned tokens and profile.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile> {
        let response = self
            .inner
            .client
            .post_public(endpoints::LOGIN, credentials)
            .await?;

        let auth: AuthResponse = client::read_json(response, "Invalid credentials")
            .await
            .map_err(|e| match e {
                Error::Protocol(p) if matches!(p.status, 400 | 401) => {
                    AuthError::InvalidCredentials(p.message).into()
                }
                other => other,
            })?;

        info!(user_id = auth.user.id, "Logged in");
        Ok(self.start_session(auth))
    }

    /// Create an account and store the returned tokens and profile.
    ///
    /// Mismatched passwords are rejected before any request is made.
    #[instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile> {
        registration.validate()?;

        let response = self
            .inner
            .client
            .post_public(endpoints::REGISTER, registration)
            .await?;
        let auth: AuthResponse = client::read_json(response, "Failed to register").await?;

        info!(user_id = auth.user.id, "Registered");
        Ok(self.start_session(auth))
    }

    /// Forget the session locally. No request is made.
    pub fn logout(&self) {
        self.session().clear();
        info!("Logged out");
    }

    /// Fetch the profile of the logged-in user and cache it.
    pub async fn current_user(&self) -> Result<UserProfile> {
        let user: UserProfile = self
            .fetch(PendingRequest::get(endpoints::ME), "Failed to get current user")
            .await?;
        self.session().set_stored_user(Some(&user));
        Ok(user)
    }

    /// Send and decode a JSON response.
    pub async fn fetch<R: DeserializeOwned>(&self, request: PendingRequest, fallback: &str) -> Result<R> {
        let response = self.send(request).await?;
        client::read_json(response, fallback).await
    }

    /// Send and discard the body of a successful response.
    pub async fn execute(&self, request: PendingRequest, fallback: &str) -> Result<()> {
        let response = self.send(request).await?;
        client::ensure_success(response, fallback).await?;
        Ok(())
    }

    async fn load_profile(&self, token: &AccessToken) -> Result<UserProfile> {
        let request = PendingRequest::get(endpoints::ME);
        let response = self.inner.client.execute(&request, token).await?;
        let user: UserProfile = client::read_json(response, "Failed to get current user").await?;
        self.session().set_stored_user(Some(&user));
        Ok(user)
    }

    fn start_session(&self, auth: AuthResponse) -> UserProfile {
        self.session().set_tokens(
            &AccessToken::new(auth.access),
            &RefreshToken::new(auth.refresh),
        );
        self.session().set_stored_user(Some(&auth.user));
        auth.user
    }

    fn end_session(&self) -> Error {
        warn!("Session expired, clearing tokens");
        self.session().clear_tokens();
        AuthError::Unauthenticated.into()
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("api_url", self.api_url())
            .field("session", &self.inner.session)
            .finish()
    }
}
