//! HTTP plumbing for backend API calls
//!
//! Wraps reqwest with the backend's `ApiResponse` envelope, bearer auth,
//! and a per-request trace id.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;

/// Header carrying the per-request trace id
const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for making requests to the Xquisito backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn prepare(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string());
        match &self.token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Make a GET request, unwrapping the response envelope
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.get_with_query(path, &[]).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = self.endpoint_url(path);
        tracing::debug!(%url, "GET");
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.prepare(request).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.endpoint_url(path);
        tracing::debug!(%url, "POST");
        let request = self.client.post(&url).json(body);
        let response = self.prepare(request).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.endpoint_url(path);
        tracing::debug!(%url, "PUT");
        let request = self.client.put(&url).json(body);
        let response = self.prepare(request).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, checking only the envelope code
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.endpoint_url(path);
        tracing::debug!(%url, "DELETE");
        let request = self.client.delete(&url);
        let response = self.prepare(request).send().await?;
        let envelope: ApiResponse<serde_json::Value> = Self::check_status(response).await?;
        if envelope.is_success() {
            Ok(())
        } else {
            Err(ClientError::Internal(envelope.message))
        }
    }

    /// Handle the HTTP response, unwrapping the envelope data
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let envelope: ApiResponse<T> = Self::check_status(response).await?;
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }

    /// Map non-2xx statuses to typed errors and parse the envelope
    async fn check_status<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(%status, "backend request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_without_double_slash() {
        let client = ClientConfig::new("http://localhost:8080/").build_http_client();
        assert_eq!(
            client.endpoint_url("/api/analytics/restaurants"),
            "http://localhost:8080/api/analytics/restaurants"
        );
        assert_eq!(
            client.endpoint_url("api/super-admin/stats"),
            "http://localhost:8080/api/super-admin/stats"
        );
    }

    #[test]
    fn test_token_attachment() {
        let client = ClientConfig::new("http://localhost:8080")
            .build_http_client()
            .with_token("abc");
        assert_eq!(client.token(), Some("abc"));
    }
}
