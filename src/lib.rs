pub mod auth;
pub mod cli;
pub mod config;
pub mod error;

pub use auth::endpoint::Endpoint;
pub use auth::providers::telldus_live::{parse_user_info, TelldusLiveProvider};
pub use auth::providers::{
    create_provider, provider_endpoints, AvatarInfo, ClientConfig, OAuthProvider,
    ProviderEndpoints, UserInfo,
};
pub use error::AuthError;
