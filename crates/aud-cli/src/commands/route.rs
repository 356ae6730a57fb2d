use serde::Serialize;

use aud_core::access::{self, Route, RouteDecision};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::output::output;

#[derive(Serialize)]
struct RouteResponse {
    path: String,
    route: Route,
    #[serde(flatten)]
    decision: RouteDecision,
    target_path: Option<&'static str>,
}

/// Handle `aud route <path>`.
pub fn handle(args: &RouteArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(&args.path)
        .ok_or_else(|| anyhow::anyhow!("unknown route '{}'", args.path))?;
    let identity = aud_auth::session::optional()?.map(|claims| claims.to_identity());
    let decision = access::guard(route, identity.as_ref());

    output(
        &RouteResponse {
            path: args.path.clone(),
            route,
            target_path: match decision {
                RouteDecision::Allow => None,
                RouteDecision::Redirect(target) => Some(target.path()),
            },
            decision,
        },
        flags.format,
    )
}
