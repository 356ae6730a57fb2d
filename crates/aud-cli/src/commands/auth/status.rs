use serde::Serialize;

use aud_auth::session::{self, SessionState};
use aud_auth::token_store;
use aud_core::access::{self, Action};

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize, Default)]
struct AuthStatusResponse {
    authenticated: bool,
    name: Option<String>,
    role_id: Option<i64>,
    role: Option<&'static str>,
    user_id: Option<i64>,
    company_id: Option<i64>,
    expires_at: Option<String>,
    expired: bool,
    token_source: Option<&'static str>,
    links: Vec<&'static str>,
    actions: Vec<Action>,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let located = token_store::locate();
    let source = located.as_ref().map(|(_, source)| source.as_str());

    let status = match session::evaluate(located.as_ref().map(|(token, _)| token.as_str())) {
        SessionState::Active(claims) => {
            let role = claims.role();
            AuthStatusResponse {
                authenticated: true,
                expired: claims.is_expired(),
                name: claims.name,
                role_id: claims.role_id,
                role: role.map(aud_core::enums::Role::as_str),
                user_id: claims.user_id,
                company_id: claims.company_id,
                expires_at: claims.expires_at.map(|exp| exp.to_rfc3339()),
                token_source: source,
                links: access::nav_links(role).iter().map(|route| route.path()).collect(),
                actions: access::granted_actions(role),
                note: role.is_none().then(|| "token carries no recognised role".to_string()),
            }
        }
        SessionState::Missing => AuthStatusResponse {
            note: Some("no token found; run `aud auth login`".to_string()),
            ..AuthStatusResponse::default()
        },
        SessionState::Invalid(error) => AuthStatusResponse {
            token_source: source,
            note: Some(format!("stored token is unreadable: {error}")),
            ..AuthStatusResponse::default()
        },
    };

    output(&status, flags.format)
}
