use std::io::BufRead;

use anyhow::Context;
use serde::Serialize;

use aud_client::ApiClient;
use aud_config::AudConfig;
use aud_core::access::{self, Route};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;
use crate::progress;

const PASSWORD_ENV_VAR: &str = "AUD_PASSWORD";

#[derive(Serialize)]
struct LoginResponse {
    authenticated: bool,
    name: Option<String>,
    role: Option<&'static str>,
    company_id: Option<i64>,
    initial_route: &'static str,
    links: Vec<&'static str>,
}

pub async fn handle(args: &AuthLoginArgs, flags: &GlobalFlags, config: &AudConfig) -> anyhow::Result<()> {
    let password = resolve_password(args.password.as_deref())?;
    let api = ApiClient::from_config(&config.api).context("failed to build HTTP client")?;

    let claims = progress::track(
        "signing in",
        aud_auth::login::login_and_store(api.http(), api.base_url(), &args.username, &password),
    )
    .await?;

    let role = claims.role();
    tracing::info!(username = %args.username, role = ?role, "signed in");
    output(
        &LoginResponse {
            authenticated: true,
            name: claims.name,
            role: role.map(aud_core::enums::Role::as_str),
            company_id: claims.company_id,
            initial_route: access::initial_route(role).path(),
            links: access::nav_links(role).iter().map(|r: &Route| r.path()).collect(),
        },
        flags.format,
    )
}

fn resolve_password(flag: Option<&str>) -> anyhow::Result<String> {
    if let Some(password) = flag {
        return Ok(password.to_string());
    }
    if let Ok(password) = std::env::var(PASSWORD_ENV_VAR) {
        return Ok(password);
    }
    eprint!("password: ");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("a password is required (--password, {PASSWORD_ENV_VAR} or stdin)");
    }
    Ok(password)
}
