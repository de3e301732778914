use std::error::Error;
use std::io::{Read, Write};

use crate::auth::providers::{create_provider, provider_endpoints, ProviderEndpoints};
use crate::config::Config;

pub const USAGE: &str = "usage: telldus-auth <endpoints | parse [FILE]>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Endpoints,
    /// Payload from a file, or from stdin when `path` is `None`.
    Parse { path: Option<String> },
}

impl Command {
    /// Reads the subcommand from process args (program name first).
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args.get(1).map(|s| s.as_str()) {
            Some("endpoints") if args.len() == 2 => Some(Self::Endpoints),
            Some("parse") if args.len() <= 3 => {
                let path = match args.get(2).map(|s| s.as_str()) {
                    None | Some("-") => None,
                    Some(path) => Some(path.to_string()),
                };
                Some(Self::Parse { path })
            }
            _ => None,
        }
    }
}

pub fn run(
    command: &Command,
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Endpoints => {
            let endpoints = provider_endpoints(&Config::provider_from_env())?;
            write_endpoints(&endpoints, output)
        }
        Command::Parse { path } => {
            let config = Config::from_env().map_err(|e| format!("OAUTH_CLIENT_ID: {e}"))?;
            let provider = create_provider(&config.provider, &config.provider_config())?;

            let content = match path {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    input.read_to_string(&mut buf)?;
                    buf
                }
            };

            let user = provider.parse_user_info(&content).map_err(|e| {
                tracing::error!("Failed to parse {} callback: {e}", provider.name());
                e
            })?;
            tracing::info!(user_id = %user.id, "Parsed user info");
            writeln!(output, "{}", serde_json::to_string_pretty(&user)?)?;
            Ok(())
        }
    }
}

fn write_endpoints(
    endpoints: &ProviderEndpoints,
    output: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    writeln!(output, "{}", endpoints.name)?;
    for (label, endpoint) in [
        ("request_token", endpoints.request_token),
        ("login", endpoints.login),
        ("access_token", endpoints.access_token),
    ] {
        writeln!(output, "  {label}: {}", endpoint.url()?)?;
    }
    Ok(())
}
