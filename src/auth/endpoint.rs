use crate::error::AuthError;

/// A provider URI split into its host part and resource path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub base_uri: &'static str,
    pub resource: &'static str,
}

impl Endpoint {
    pub const fn new(base_uri: &'static str, resource: &'static str) -> Self {
        Self { base_uri, resource }
    }

    /// Absolute URI with exactly one slash between base and resource.
    pub fn uri(&self) -> String {
        format!(
            "{}/{}",
            self.base_uri.trim_end_matches('/'),
            self.resource.trim_start_matches('/')
        )
    }

    pub fn url(&self) -> Result<reqwest::Url, AuthError> {
        reqwest::Url::parse(&self.uri())
            .map_err(|e| AuthError::InvalidEndpoint(format!("{}: {e}", self.uri())))
    }
}
