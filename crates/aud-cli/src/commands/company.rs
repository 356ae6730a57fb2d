use serde_json::json;

use aud_core::access::{Action, Route};
use aud_core::entities::Company;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompanyCommands;
use crate::commands::shared::confirm::require_yes;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::upload::read_base64;
use crate::context::AppContext;
use crate::output::output;

/// Handle `aud company`.
pub async fn handle(
    action: &CompanyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompanyCommands::List { all } => {
            ctx.open(Route::Companies)?;
            let companies = if *all {
                ctx.api.list_all_companies().await?
            } else {
                ctx.api.list_companies().await?
            };
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            output(&apply_limit(companies, limit), flags.format)
        }
        CompanyCommands::Get { id } => {
            ctx.open(Route::CompanyForm)?;
            output(&ctx.api.get_company(*id).await?, flags.format)
        }
        CompanyCommands::Create { name, logo } => {
            ctx.require(Action::ManageCompanies)?;
            let company = Company {
                id: 0,
                name: required_name(name)?,
                logo_base64: logo.as_deref().map(read_base64).transpose()?,
            };
            output(&ctx.api.create_company(&company).await?, flags.format)
        }
        CompanyCommands::Update { id, name, logo } => {
            ctx.require(Action::ManageCompanies)?;
            let mut company = ctx.api.get_company(*id).await?;
            if let Some(name) = name {
                company.name = required_name(name)?;
            }
            if let Some(path) = logo {
                company.logo_base64 = Some(read_base64(path)?);
            }
            ctx.api.update_company(*id, &company).await?;
            output(&json!({ "updated": true, "company": company }), flags.format)
        }
        CompanyCommands::Delete { id, yes } => {
            ctx.require(Action::ManageCompanies)?;
            require_yes(*yes, &format!("delete company {id}"))?;
            ctx.api.delete_company(*id).await?;
            output(&json!({ "deleted": true, "id": id }), flags.format)
        }
    }
}

fn required_name(raw: &str) -> anyhow::Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        anyhow::bail!("company name must not be empty");
    }
    Ok(name.to_string())
}
