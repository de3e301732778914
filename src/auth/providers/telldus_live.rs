use serde_json::Value;

use super::{AvatarInfo, ClientConfig, OAuthProvider, ProviderEndpoints, UserInfo};
use crate::auth::endpoint::Endpoint;
use crate::error::AuthError;

pub const PROVIDER_ID: &str = "telldus_live";
pub const PROVIDER_NAME: &str = "TelldusLive";

const BASE_URI: &str = "http://api.telldus.com";

pub const REQUEST_TOKEN_ENDPOINT: Endpoint = Endpoint::new(BASE_URI, "/oauth/requestToken");
pub const LOGIN_ENDPOINT: Endpoint = Endpoint::new(BASE_URI, "/oauth/authorize");
pub const ACCESS_TOKEN_ENDPOINT: Endpoint = Endpoint::new(BASE_URI, "/oauth/accessToken");

pub const TELLDUS_LIVE: ProviderEndpoints = ProviderEndpoints {
    name: PROVIDER_NAME,
    request_token: REQUEST_TOKEN_ENDPOINT,
    login: LOGIN_ENDPOINT,
    access_token: ACCESS_TOKEN_ENDPOINT,
};

#[derive(Debug, Clone)]
pub struct TelldusLiveProvider {
    config: ClientConfig,
}

impl TelldusLiveProvider {
    pub fn from_config(config: &Value) -> Result<Self, AuthError> {
        let client_config: ClientConfig = serde_json::from_value(config.clone())
            .map_err(|e| AuthError::InvalidConfig(format!("Invalid Telldus Live config: {e}")))?;

        if client_config.client_id.is_empty() {
            return Err(AuthError::InvalidConfig(
                "Telldus Live config requires a non-empty client_id".to_string(),
            ));
        }

        Ok(Self {
            config: client_config,
        })
    }
}

impl OAuthProvider for TelldusLiveProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn request_token_endpoint(&self) -> Endpoint {
        REQUEST_TOKEN_ENDPOINT
    }

    fn login_endpoint(&self) -> Endpoint {
        LOGIN_ENDPOINT
    }

    fn access_token_endpoint(&self) -> Endpoint {
        ACCESS_TOKEN_ENDPOINT
    }

    fn client_config(&self) -> &ClientConfig {
        &self.config
    }

    fn parse_user_info(&self, content: &str) -> Result<UserInfo, AuthError> {
        parse_user_info(content)
    }
}

/// Builds a [`UserInfo`] from the callback body.
///
/// The payload must be a JSON object with string fields `id`, `name` and
/// `profile_image_url`. The name is split on its first space only, and the
/// small and large avatars are derived by swapping the first `normal` in the
/// image URL for `mini` and `bigger`. The provider never reports an email.
pub fn parse_user_info(content: &str) -> Result<UserInfo, AuthError> {
    let payload: Value = serde_json::from_str(content)
        .map_err(|e| AuthError::MalformedPayload(format!("invalid JSON: {e}")))?;
    let payload = payload
        .as_object()
        .ok_or_else(|| AuthError::MalformedPayload("expected a JSON object".to_string()))?;

    let field = move |name: &'static str| {
        payload
            .get(name)
            .and_then(Value::as_str)
            .ok_or(AuthError::MissingField(name))
    };

    let id = field("id")?;
    let name = field("name")?;
    let (first_name, last_name) = match name.split_once(' ') {
        Some((first, last)) => (first, Some(last.to_string())),
        None => (name, None),
    };
    let image_url = field("profile_image_url")?;

    Ok(UserInfo {
        id: id.to_string(),
        email: None,
        first_name: first_name.to_string(),
        last_name,
        avatar: AvatarInfo {
            small: image_url.replacen("normal", "mini", 1),
            normal: image_url.to_string(),
            large: image_url.replacen("normal", "bigger", 1),
        },
    })
}
