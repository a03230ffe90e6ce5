//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use reqwest::multipart::Part;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, FileUpload, LoginResponse, User};

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::session::SharedSession;

/// HTTP client for communicating with the backend API server.
///
/// Holds the connection pool and a handle on the session: every request
/// carries `Authorization: Bearer <token>` while a session exists, and no
/// header otherwise. The client never refuses a request for lack of a
/// token; the backend answers 401.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: SharedSession,
}

impl ApiClient {
    /// Create a client for `base_url` (trailing slash ignored).
    pub fn new(base_url: impl Into<String>, timeout: Duration, session: SharedSession) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            session,
        }
    }

    pub fn from_config(config: &ClientConfig, session: SharedSession) -> Self {
        Self::new(config.api_base_url.clone(), config.timeout, session)
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request builder with the bearer header attached when a session exists.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        // Short read guard, released before the request is sent
        let token = self.session.read().bearer_token().map(str::to_string);
        match token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Send `request` and return the response if its status is 2xx.
    ///
    /// Non-2xx answers become [`AppError::Api`] with the message from the
    /// error payload, or `failure` when the payload has none.
    pub(crate) async fn send(&self, request: RequestBuilder, failure: &str) -> Result<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let start = Instant::now();

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                method = %method,
                path = %path,
                duration_ms = start.elapsed().as_millis(),
                "Request network error"
            );
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request completed"
            );
            return Ok(response);
        }

        let error = response.json::<ErrorResponse>().await.unwrap_or_default();
        let message = error.best_message().unwrap_or(failure).to_string();
        tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            error = %message,
            duration_ms = duration.as_millis(),
            "{}",
            failure
        );
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Percent-encode an id for use as one path segment.
pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Parse a 2xx body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        AppError::MalformedResponse(format!("Failed to parse response: {}", e))
    })
}

/// Multipart file part; the MIME type is guessed from the file name unless given.
pub(crate) fn file_part(upload: &FileUpload) -> Result<Part> {
    let mime = match &upload.content_type {
        Some(mime) => mime.clone(),
        None => mime_guess::from_path(&upload.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    };
    Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(&mime)
        .map_err(|e| AppError::Validation(format!("Invalid content type '{}': {}", mime, e)))
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn login_with_google(&self, id_token: &str) -> Result<LoginResponse> {
        crate::services::api::auth::login_with_google(self, id_token).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<User> {
        crate::services::api::users::get_user_by_id(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, SessionStore};

    fn client(base_url: &str) -> ApiClient {
        let session = SessionStore::new(MemoryStorage::new()).shared();
        ApiClient::new(base_url, Duration::from_secs(1), session)
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = client("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/api/posts/"),
            "http://localhost:8000/api/posts/"
        );
    }

    #[test]
    fn test_no_bearer_header_without_session() {
        let client = client("http://localhost:8000");
        let request = client.get("/api/posts/").build().unwrap();
        assert!(request.headers().get("Authorization").is_none());
    }

    #[test]
    fn test_segment_escapes_path_separators() {
        assert_eq!(segment("0b8f-42"), "0b8f-42");
        assert_eq!(segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(segment("caf\u{e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_file_part_rejects_bad_mime() {
        let mut upload = FileUpload::new("flow.json", b"{}".to_vec());
        assert!(file_part(&upload).is_ok());

        upload.content_type = Some("not a mime".to_string());
        assert!(matches!(file_part(&upload), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            api_base_url: "https://blog.example.com".to_string(),
            ..ClientConfig::from_lookup(|_| None)
        };
        let session = SessionStore::new(MemoryStorage::new()).shared();
        let client = ApiClient::from_config(&config, session);
        assert_eq!(client.base_url(), "https://blog.example.com");
    }
}
