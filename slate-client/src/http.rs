//! HTTP transports
//!
//! [`HttpClient`] abstracts the wire so the typed API in [`crate::api`]
//! works both over the network and against an in-process router.

use crate::error::{ClientError, ClientResult};
use crate::ClientConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Transport trait for the typed API
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn delete_with_body<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    /// Replace the bearer token used on subsequent requests
    fn set_token(&mut self, token: Option<String>);

    /// Current bearer token
    fn token(&self) -> Option<String>;
}

/// Map a non-2xx status to a client error
fn status_error(status: StatusCode, text: String) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST => ClientError::Validation(text),
        _ => ClientError::Internal(text),
    }
}

// ============================================================================
// NetworkHttpClient - HTTP over reqwest
// ============================================================================

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn build(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request_id = uuid::Uuid::new_v4();
        tracing::debug!(%method, path, %request_id, "admin api request");

        let mut request = self
            .client
            .request(method, &url)
            .header("x-request-id", request_id.to_string());

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        request
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> ClientResult<T> {
        let response = self.build(method, path).send().await?;
        Self::handle_response(response).await
    }

    async fn send_json<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.build(method, path).json(body).send().await?;
        Self::handle_response(response).await
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(reqwest::Method::GET, path).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(reqwest::Method::POST, path, body).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(reqwest::Method::POST, path).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(reqwest::Method::PUT, path, body).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(reqwest::Method::PUT, path).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(reqwest::Method::DELETE, path).await
    }

    async fn delete_with_body<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(reqwest::Method::DELETE, path, body).await
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

// ============================================================================
// OneshotHttpClient - in-process calls via tower oneshot
// ============================================================================

/// In-process HTTP client
///
/// Calls an axum `Router` directly through the Tower `Service` interface,
/// with zero network overhead. Used to test the typed API against a mock
/// of the admin backend.
#[cfg(feature = "in-process")]
#[derive(Clone)]
pub struct OneshotHttpClient {
    router: axum::Router,
    token: Option<String>,
}

#[cfg(feature = "in-process")]
impl OneshotHttpClient {
    /// Create a client around an already-built router
    pub fn new(router: axum::Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<T> {
        use axum::body::Body;
        use tower::ServiceExt;

        let mut builder = http::Request::builder().method(method).uri(path);

        if let Some(token) = &self.token {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
        }

        if body.is_some() {
            builder = builder.header(http::header::CONTENT_TYPE, "application/json");
        }

        let request = builder
            .body(Body::from(body.unwrap_or_default()))
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            return Err(status_error(status, text));
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn request_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: http::Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        self.request(method, path, Some(bytes)).await
    }
}

#[cfg(feature = "in-process")]
#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(http::Method::GET, path, None).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.request_json(http::Method::POST, path, body).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(http::Method::POST, path, None).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.request_json(http::Method::PUT, path, body).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(http::Method::PUT, path, None).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(http::Method::DELETE, path, None).await
    }

    async fn delete_with_body<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.request_json(http::Method::DELETE, path, body).await
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}
