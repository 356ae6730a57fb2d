use serde::Serialize;
use serde_json::json;

use aud_core::access::{Action, Route};
use aud_core::entities::{Company, RoleRecord, User, resolve_name};
use aud_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{UserCommands, UserFieldArgs};
use crate::commands::shared::confirm::require_yes;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::upload::read_base64;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct UserRow {
    #[serde(flatten)]
    user: User,
    role_name: String,
    company_name: String,
    has_photo: bool,
}

/// Handle `aud user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::List { all } => {
            ctx.open(Route::Users)?;
            let users = async {
                if *all {
                    ctx.api.list_all_users().await
                } else {
                    ctx.api.list_users().await
                }
            };
            let (users, roles, companies) =
                tokio::try_join!(users, ctx.api.list_roles(), ctx.api.list_all_companies())?;
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            output(&apply_limit(user_rows(users, &roles, &companies), limit), flags.format)
        }
        UserCommands::Get { id } => {
            ctx.open(Route::Users)?;
            let (user, roles, companies) = tokio::try_join!(
                ctx.api.get_user(*id),
                ctx.api.list_roles(),
                ctx.api.list_all_companies()
            )?;
            let mut rows = user_rows(vec![user], &roles, &companies);
            output(&rows.pop(), flags.format)
        }
        UserCommands::Create {
            name,
            username,
            password,
            role,
            company,
            fields,
        } => {
            ctx.require(Action::ManageUsers)?;
            let mut user = User {
                id: 0,
                name: name.trim().to_string(),
                username: username.trim().to_string(),
                email: String::new(),
                password: password.clone(),
                role_id: known_role(*role)?,
                active: true,
                phone: String::new(),
                failed_attempts: 0,
                photo_base64: None,
                company_id: *company,
            };
            apply_fields(&mut user, fields)?;
            let created = ctx.api.create_user(&user).await?;
            output(&created, flags.format)
        }
        UserCommands::Update {
            id,
            name,
            username,
            password,
            role,
            company,
            active,
            fields,
        } => {
            ctx.require(Action::ManageUsers)?;
            let mut user = ctx.api.get_user(*id).await?;
            if let Some(name) = name {
                user.name = name.trim().to_string();
            }
            if let Some(username) = username {
                user.username = username.trim().to_string();
            }
            user.password = password.clone().unwrap_or_default();
            if let Some(role) = role {
                user.role_id = known_role(*role)?;
            }
            if let Some(company) = company {
                user.company_id = *company;
            }
            if let Some(active) = active {
                user.active = *active;
            }
            apply_fields(&mut user, fields)?;
            ctx.api.update_user(*id, &user).await?;
            user.password.clear();
            output(&json!({ "updated": true, "user": user }), flags.format)
        }
        UserCommands::Deactivate { id, yes } => {
            ctx.require(Action::ManageUsers)?;
            require_yes(*yes, &format!("deactivate user {id}"))?;
            ctx.api.deactivate_user(*id).await?;
            output(&json!({ "deactivated": true, "id": id }), flags.format)
        }
    }
}

fn known_role(role_id: i64) -> anyhow::Result<i64> {
    Role::from_id(role_id)
        .map(Role::id)
        .ok_or_else(|| anyhow::anyhow!("unknown role id {role_id}; expected 1-5"))
}

fn apply_fields(user: &mut User, fields: &UserFieldArgs) -> anyhow::Result<()> {
    if let Some(email) = &fields.email {
        user.email = email.trim().to_string();
    }
    if let Some(phone) = &fields.phone {
        user.phone = phone.trim().to_string();
    }
    if let Some(path) = &fields.photo {
        user.photo_base64 = Some(read_base64(path)?);
    }
    Ok(())
}

fn user_rows(users: Vec<User>, roles: &[RoleRecord], companies: &[Company]) -> Vec<UserRow> {
    users
        .into_iter()
        .map(|mut user| {
            let role_name = resolve_name(roles, user.role_id, |r| r.id, |r| r.name.as_str()).to_string();
            let company_name =
                resolve_name(companies, user.company_id, |c| c.id, |c| c.name.as_str()).to_string();
            let has_photo = user.photo_base64.take().is_some_and(|photo| !photo.is_empty());
            UserRow {
                user,
                role_name,
                company_name,
                has_photo,
            }
        })
        .collect()
}
