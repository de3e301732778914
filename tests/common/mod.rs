#![allow(dead_code)]

use telldus_auth::{TelldusLiveProvider, UserInfo};

pub const AVATAR_URL: &str = "http://x.com/avatar_normal.png";

/// Callback body in the shape Telldus Live returns after login.
pub fn payload(id: &str, name: &str, profile_image_url: &str) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "profile_image_url": profile_image_url,
    })
    .to_string()
}

pub fn client_config() -> serde_json::Value {
    serde_json::json!({
        "client_id": "test-client",
        "client_secret": "test-secret",
        "redirect_uri": "https://example.com/cb",
    })
}

pub fn provider() -> TelldusLiveProvider {
    TelldusLiveProvider::from_config(&client_config()).expect("valid test config")
}

pub fn parse_ok(content: &str) -> UserInfo {
    telldus_auth::parse_user_info(content)
        .unwrap_or_else(|e| panic!("Expected payload to parse: {e}\nBody: {content}"))
}
