use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub provider: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            provider: Self::provider_from_env(),
            client_id: env::var("OAUTH_CLIENT_ID")?,
            client_secret: env::var("OAUTH_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: env::var("OAUTH_REDIRECT_URI")
                .unwrap_or_else(|_| "http://localhost:3000/callback".to_string()),
            scope: env::var("OAUTH_SCOPE").ok().filter(|s| !s.is_empty()),
        })
    }

    /// Provider id alone, for commands that need no credentials.
    pub fn provider_from_env() -> String {
        env::var("AUTH_PROVIDER").unwrap_or_else(|_| "telldus_live".to_string())
    }

    /// Client configuration in the shape `create_provider` expects.
    pub fn provider_config(&self) -> serde_json::Value {
        serde_json::json!({
            "client_id": self.client_id,
            "client_secret": self.client_secret,
            "redirect_uri": self.redirect_uri,
            "scope": self.scope,
        })
    }
}
