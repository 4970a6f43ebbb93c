//! HTTP client implementation.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use ledger_core::error::{Error, InvalidInputError, ProtocolError, TransportError};
use ledger_core::{AccessToken, ApiUrl, RefreshToken, Result};

use crate::config::ClientConfig;
use crate::endpoints::{self, RefreshRequest, RefreshResponse};
use crate::request::PendingRequest;

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let kind = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() {
        TransportError::Decode { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(kind)
}

/// Pass a 2xx response through, turn anything else into a [`ProtocolError`].
pub(crate) async fn ensure_success(response: Response, fallback: &str) -> Result<Response> {
    let status = response.status();
    trace!(%status, "API response");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    Err(ProtocolError::from_body(status.as_u16(), &body, fallback).into())
}

/// Decode a 2xx JSON body, or the error carried by any other status.
pub(crate) async fn read_json<R: DeserializeOwned>(response: Response, fallback: &str) -> Result<R> {
    let response = ensure_success(response, fallback).await?;
    response.json::<R>().await.map_err(transport)
}

/// Thin HTTP client for the ledger API. Knows nothing about sessions.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    http: reqwest::Client,
    api_url: ApiUrl,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ledger/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(transport)?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Send a request with the given bearer token.
    #[instrument(skip(self, request, token), fields(method = %request.method, path = %request.path))]
    pub async fn execute(&self, request: &PendingRequest, token: &AccessToken) -> Result<Response> {
        let url = self.api_url.endpoint(&request.path);
        debug!(%url, "Sending authenticated request");

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .headers(self.headers(request, token)?);

        if !request.query.is_empty() {
            trace!(query = ?request.query, "query parameters");
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        builder.send().await.map_err(transport)
    }

    /// POST a JSON body without credentials (login, register, refresh).
    #[instrument(skip(self, body), fields(api = %self.api_url))]
    pub async fn post_public<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.api_url.endpoint(path);
        debug!(%url, "Sending unauthenticated request");

        self.http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)
    }

    /// Exchange a refresh token for a new access token.
    pub async fn refresh(&self, token: &RefreshToken) -> Result<AccessToken> {
        let response = self
            .post_public(
                endpoints::REFRESH,
                &RefreshRequest {
                    refresh: token.as_str(),
                },
            )
            .await?;

        let body: RefreshResponse = read_json(response, "Token refresh failed").await?;
        if body.access.is_empty() {
            return Err(Error::Transport(TransportError::Decode {
                message: "refresh response carried an empty access token".to_string(),
            }));
        }
        Ok(AccessToken::new(body.access))
    }

    /// Default headers, caller headers, then the bearer token.
    fn headers(&self, request: &PendingRequest, token: &AccessToken) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for name in request.headers.keys() {
            headers.remove(name);
            for value in request.headers.get_all(name) {
                headers.append(name.clone(), value.clone());
            }
        }

        let bearer = HeaderValue::from_str(&token.bearer()).map_err(|_| InvalidInputError::Other {
            message: "access token contains characters not allowed in a header".to_string(),
        })?;
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

/// True for the one status that triggers a refresh.
pub(crate) fn is_unauthorized(response: &Response) -> bool {
    response.status() == StatusCode::UNAUTHORIZED
}
