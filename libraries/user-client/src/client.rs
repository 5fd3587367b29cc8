//! Main user service client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, HealthStatus};
use crate::users::UsersClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the user service.
///
/// Holds one reusable HTTP connection pool; cloning the client is cheap.
///
/// # Example
///
/// ```ignore
/// use user_client::{ClientConfig, Environment, UserServiceClient};
///
/// let client = UserServiceClient::new(ClientConfig::for_environment(Environment::Staging))?;
/// client.health().await?;
/// let page = client.users().list_users(Default::default()).await?;
/// println!("{} users", page.total);
/// ```
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    http: Client,
    base_url: String,
}

impl UserServiceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.normalized_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .default_headers(headers)
            .user_agent(format!("user-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// User CRUD operations.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.base_url)
    }

    /// Liveness probe (`GET /health`).
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Checking health");

        let response = send(self.http.get(&url)).await?;
        expect_json(response, StatusCode::OK).await
    }

    /// Readiness probe (`GET /status`); fails when the store is unreachable.
    pub async fn status(&self) -> Result<HealthStatus> {
        let url = format!("{}/status", self.base_url);
        debug!(url = %url, "Checking readiness");

        let response = send(self.http.get(&url)).await?;
        let status = expect_json(response, StatusCode::OK).await?;

        info!(url = %self.base_url, "Service ready");
        Ok(status)
    }
}

/// Send a request, reporting connection failures as `ServerUnreachable`.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
    request.send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            ClientError::ServerUnreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    })
}

/// Check the status and parse the JSON body.
pub(crate) async fn expect_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let response = expect_status(response, expected).await?;
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|e| {
        ClientError::ParseError(format!(
            "{e} (body: {})",
            String::from_utf8_lossy(&bytes)
        ))
    })
}

/// Check the status, keeping the body of an unexpected response.
pub(crate) async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), expected = expected.as_u16(), body = %body, "Unexpected status");

    Err(ClientError::UnexpectedStatus {
        status: status.as_u16(),
        expected: expected.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(UserServiceClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(UserServiceClient::new(ClientConfig::new("http://localhost:8002")).is_ok());

        assert!(UserServiceClient::new(ClientConfig::new("")).is_err());
        assert!(UserServiceClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(UserServiceClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            UserServiceClient::new(ClientConfig::new("https://example.com/")).expect("valid url");
        assert_eq!(client.url(), "https://example.com");
    }
}
