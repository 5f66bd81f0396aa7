//! Credential provider seam for the API client.
//!
//! The bearer token is injected at client construction instead of looked up
//! from ambient storage, so the fetcher stays testable without a real
//! session store.

/// Source of the bearer token attached to outbound requests.
pub trait CredentialProvider: Send + Sync {
    /// Current session token, `None` when the client runs anonymously.
    fn token(&self) -> Option<String>;
}

/// Fixed token taken from configuration at startup.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No authentication.
#[derive(Debug, Clone, Default)]
pub struct NoToken;

impl CredentialProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}
