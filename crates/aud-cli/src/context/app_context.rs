use anyhow::Context;
use chrono::Local;

use aud_auth::AudClaims;
use aud_client::ApiClient;
use aud_config::AudConfig;
use aud_core::access::{self, Action, Route, RouteDecision};
use aud_core::dashboard::ReportOptions;
use aud_core::enums::Role;
use aud_core::identity::SessionIdentity;

/// Shared resources for every command that talks to the backend.
pub struct AppContext {
    pub api: ApiClient,
    pub config: AudConfig,
    pub claims: AudClaims,
    pub identity: SessionIdentity,
}

impl AppContext {
    /// Resolve the stored session and build an authenticated API client.
    pub fn init(config: AudConfig) -> anyhow::Result<Self> {
        let claims = aud_auth::session::current()?;
        let api = ApiClient::from_config(&config.api)
            .context("failed to build HTTP client")?
            .with_token(claims.raw_jwt.clone());
        let identity = claims.to_identity();
        tracing::debug!(
            role = ?identity.role_id,
            user = ?identity.user_id,
            base_url = api.base_url(),
            "session resolved"
        );
        Ok(Self {
            api,
            config,
            claims,
            identity,
        })
    }

    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.identity.role()
    }

    /// Fail unless the session role may perform `action`.
    pub fn require(&self, action: Action) -> anyhow::Result<()> {
        access::ensure(self.role(), action)?;
        Ok(())
    }

    /// Fail unless the route guard lets the session open `route`.
    pub fn open(&self, route: Route) -> anyhow::Result<()> {
        check_route(route, &self.identity)
    }

    /// Presentation settings for dashboard summaries.
    #[must_use]
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::new(
            Local::now().date_naive(),
            self.config.general.currency_symbol.clone(),
        )
    }
}

fn check_route(route: Route, identity: &SessionIdentity) -> anyhow::Result<()> {
    match access::guard(route, Some(identity)) {
        RouteDecision::Allow => Ok(()),
        RouteDecision::Redirect(target) => anyhow::bail!(
            "{} ({}) is not available to role '{}'; start from {} instead",
            route.label(),
            route.path(),
            identity
                .role()
                .map_or("unknown", Role::as_str),
            target.path()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::check_route;
    use aud_core::access::Route;
    use aud_core::identity::SessionIdentity;

    fn identity(role_id: i64) -> SessionIdentity {
        SessionIdentity {
            role_id: Some(role_id),
            user_id: Some(1),
            company_id: Some(1),
            display_name: None,
        }
    }

    #[test]
    fn internal_roles_open_administrative_routes() {
        for role in 1..=3 {
            assert!(check_route(Route::Companies, &identity(role)).is_ok());
        }
    }

    #[test]
    fn client_roles_are_pointed_to_welcome() {
        let err = check_route(Route::Users, &identity(5)).expect_err("should be refused");
        let message = err.to_string();
        assert!(message.contains("/usuarios"));
        assert!(message.contains("/welcomeB"));
        assert!(message.contains("client_viewer"));
    }

    #[test]
    fn findings_open_to_every_role() {
        for role in 1..=5 {
            assert!(check_route(Route::Findings, &identity(role)).is_ok());
        }
    }
}
