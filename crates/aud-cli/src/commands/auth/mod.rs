mod login;
mod logout;
mod status;

use aud_config::AudConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `aud auth <subcommand>`.
pub async fn handle(action: &AuthCommands, flags: &GlobalFlags, config: &AudConfig) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags),
    }
}
