//! HTTP access helpers - thin wrapper over reqwest.

use crate::domain::{FetchError, Result};
use crate::repositories::credentials::CredentialProvider;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Client for the attendance service. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET `path` and decode the body as JSON.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self
            .authorize(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))
    }

    /// POST a JSON `body` to `path` with the given query string and decode
    /// the response body as JSON.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<Value> {
        let response = self
            .authorize(self.http.post(self.url(path)).query(query).json(body))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))
    }
}
