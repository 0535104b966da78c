//! API client with the cross-cutting request/response pipeline
//!
//! Every facade call funnels through [`ApiClient::send`]:
//! - outgoing: the bearer token is read from the injected session manager
//!   and attached when present; this step cannot fail the request
//! - incoming: non-success statuses are classified into [`ApiError`]; an
//!   exact 401 additionally tears down the session and sends the
//!   navigator to the auth route before the error propagates

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use styleverse_common::SessionManager;
use styleverse_core::{Navigator, Route};
use styleverse_domain::constants::DEFAULT_API_URL;
use styleverse_domain::ApiConfig;
use tracing::{debug, instrument, warn};

use super::body::RequestBody;
use super::errors::{ApiError, StatusError};
use super::query::Filters;
use crate::http::HttpClient;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API (e.g. `http://localhost:8000/api`)
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_string(), timeout: Duration::from_secs(30) }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// Shared API client
///
/// One instance per app; facades hold it behind an `Arc`.
pub struct ApiClient {
    http: HttpClient,
    session: Arc<SessionManager>,
    navigator: Arc<dyn Navigator>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built
    pub fn new(
        config: ApiClientConfig,
        session: Arc<SessionManager>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { http, session, navigator, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The session manager this client reads tokens from
    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Execute a GET request
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// deserialized
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::GET, path, &Filters::new(), RequestBody::Empty).await
    }

    /// Execute a GET request with query filters
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// deserialized
    pub async fn get_with<R: DeserializeOwned>(
        &self,
        path: &str,
        filters: &Filters,
    ) -> Result<R, ApiError> {
        self.send(Method::GET, path, filters, RequestBody::Empty).await
    }

    /// Execute a POST request
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// deserialized
    pub async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        self.send(Method::POST, path, &Filters::new(), body).await
    }

    /// Execute a PUT request
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// deserialized
    pub async fn put<R: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        self.send(Method::PUT, path, &Filters::new(), body).await
    }

    /// Execute a DELETE request
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// deserialized
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::DELETE, path, &Filters::new(), RequestBody::Empty).await
    }

    /// Dispatch a request through the full pipeline
    ///
    /// # Errors
    /// Returns error if the request fails, the status is non-success, or
    /// the response cannot be deserialized. A 401 clears the session and
    /// signals the navigator before the error is returned; callers must
    /// still handle the failure.
    #[instrument(skip(self, filters, body), fields(path = %path))]
    pub async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        filters: &Filters,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        let mut url = format!("{}{}", self.config.base_url, path);
        if let Some(query) = filters.encode() {
            url.push('?');
            url.push_str(&query);
        }

        debug!(%method, url = %url, "dispatching API request");

        let mut request = self.http.request(method, &url);

        // Request pipeline: attach the bearer credential when a session
        // exists. An absent token simply leaves the request anonymous.
        if let Some(token) = self.session.token().await {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request = match body {
            RequestBody::Empty => request.header(header::CONTENT_TYPE, "application/json"),
            RequestBody::Json(value) => request.json(&value),
            // The transport owns the multipart content type so the
            // boundary parameter stays intact.
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();

            // Response pipeline: an expired or rejected session ends the
            // authenticated state for every operation alike.
            if status == StatusCode::UNAUTHORIZED {
                self.expire_session().await;
            }

            return Err(map_status_error(status, &body_text));
        }

        // 204/205 carry no body by spec
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "no-content response ({}) cannot populate the expected type",
                    status.as_u16()
                ))
            });
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(format!("failed to parse response: {err}")))
    }

    async fn expire_session(&self) {
        warn!("received 401, discarding session and returning to the auth page");

        if let Err(err) = self.session.clear().await {
            warn!(error = %err, "failed to clear persisted session entries");
        }

        self.navigator.navigate(Route::Auth);
    }
}

/// Builder for the API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    session: Option<Arc<SessionManager>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ApiClientBuilder {
    /// Set the client configuration
    #[must_use]
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session manager
    #[must_use]
    pub fn session(mut self, session: Arc<SessionManager>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the navigator signaled on session expiry
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    /// Returns error if required collaborators are missing or client
    /// creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let session =
            self.session.ok_or_else(|| ApiError::Config("session manager not set".to_string()))?;
        let navigator =
            self.navigator.ok_or_else(|| ApiError::Config("navigator not set".to_string()))?;

        ApiClient::new(config, session, navigator)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|parsed| parsed.message)
}

fn map_status_error(status: StatusCode, body: &str) -> ApiError {
    let err = StatusError::new(status.as_u16(), extract_message(body));

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ApiError::Auth(err)
    } else if status.is_server_error() {
        ApiError::Server(err)
    } else {
        ApiError::Client(err)
    }
}
