use serde::Serialize;

use aud_core::access::{self, Route};

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct NavLink {
    label: &'static str,
    path: &'static str,
}

#[derive(Serialize)]
struct NavResponse {
    role: Option<&'static str>,
    links: Vec<NavLink>,
}

/// Handle `aud nav`. Without a session the shell offers no links.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = aud_auth::session::optional()?.and_then(|claims| claims.role());
    output(
        &NavResponse {
            role: role.map(aud_core::enums::Role::as_str),
            links: links(access::nav_links(role)),
        },
        flags.format,
    )
}

fn links(routes: &[Route]) -> Vec<NavLink> {
    routes
        .iter()
        .map(|route| NavLink {
            label: route.label(),
            path: route.path(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use aud_core::access::nav_links;
    use aud_core::enums::Role;

    use super::links;

    #[test]
    fn client_links_are_findings_and_welcome() {
        let paths: Vec<&str> = links(nav_links(Some(Role::ClientResponsible)))
            .iter()
            .map(|link| link.path)
            .collect();
        assert_eq!(paths, vec!["/hallazgos", "/welcomeB"]);
    }
}
