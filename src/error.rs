#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Missing or invalid field: {0}")]
    MissingField(&'static str),

    #[error("Provider not supported: {0}")]
    ProviderNotSupported(String),

    #[error("Invalid provider config: {0}")]
    InvalidConfig(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
