use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Company { action } => commands::company::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Role { action } => commands::role::handle(&action, ctx, flags).await,
        Commands::Audit { action } => commands::audit::handle(&action, ctx, flags).await,
        Commands::Plan { action } => commands::plan::handle(&action, ctx, flags).await,
        Commands::Process { action } => commands::process::handle(&action, ctx, flags).await,
        Commands::Activity { action } => commands::activity::handle(&action, ctx, flags).await,
        Commands::Finding { action } => commands::finding::handle(&action, ctx, flags).await,
        Commands::Dashboard { action } => commands::dashboard::handle(&action, ctx, flags).await,
        Commands::Auth { .. } | Commands::Nav | Commands::Route(_) | Commands::Schema(_) => {
            anyhow::bail!("auth/nav/route/schema are handled before the session is resolved")
        }
    }
}
