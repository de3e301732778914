pub mod telldus_live;

use serde::{Deserialize, Serialize};

use super::endpoint::Endpoint;
use crate::error::AuthError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarInfo {
    pub small: String,
    pub normal: String,
    pub large: String,
}

/// User identity extracted from a provider callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar: AvatarInfo,
}

/// Client credentials registered with the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub redirect_uri: String,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Static endpoint set of a provider; needs no client credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub name: &'static str,
    pub request_token: Endpoint,
    pub login: Endpoint,
    pub access_token: Endpoint,
}

pub trait OAuthProvider: Send + Sync {
    /// Friendly name of the provider.
    fn name(&self) -> &str;

    /// Service called to obtain a request token.
    fn request_token_endpoint(&self) -> Endpoint;

    /// Service the user is sent to in order to start authentication.
    fn login_endpoint(&self) -> Endpoint;

    /// Service that issues access tokens.
    fn access_token_endpoint(&self) -> Endpoint;

    fn client_config(&self) -> &ClientConfig;

    /// Parses the body of the callback issued by the provider.
    fn parse_user_info(&self, content: &str) -> Result<UserInfo, AuthError>;
}

pub fn create_provider(
    provider_id: &str,
    config: &serde_json::Value,
) -> Result<Box<dyn OAuthProvider>, AuthError> {
    let provider: Box<dyn OAuthProvider> = match provider_id {
        telldus_live::PROVIDER_ID => {
            Box::new(telldus_live::TelldusLiveProvider::from_config(config)?)
        }
        _ => return Err(AuthError::ProviderNotSupported(provider_id.to_string())),
    };

    tracing::debug!(provider = provider.name(), "OAuth provider created");
    Ok(provider)
}

pub fn provider_endpoints(provider_id: &str) -> Result<ProviderEndpoints, AuthError> {
    match provider_id {
        telldus_live::PROVIDER_ID => Ok(telldus_live::TELLDUS_LIVE),
        _ => Err(AuthError::ProviderNotSupported(provider_id.to_string())),
    }
}
