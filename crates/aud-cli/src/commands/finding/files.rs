//! Follow-up files and annexes of a finding.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::json;

use aud_core::access::{self, FindingField, Route};
use aud_core::entities::Attachment;
use aud_core::enums::{AttachmentKind, Role};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FileCommands;
use crate::commands::shared::confirm::require_yes;
use crate::commands::shared::upload::guess_content_type;
use crate::context::AppContext;
use crate::output::output;

pub(super) async fn handle(
    action: &FileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.open(Route::Findings)?;
    super::ensure_visible(action.finding(), ctx).await?;
    match action {
        FileCommands::List { finding, kind } => {
            let files = ctx.api.list_attachments(*finding, (*kind).into()).await?;
            output(&files, flags.format)
        }
        FileCommands::Upload {
            finding,
            path,
            kind,
            content_type,
        } => {
            let kind = AttachmentKind::from(*kind);
            check_kind(ctx.role(), kind)?;
            let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .with_context(|| format!("{} has no usable file name", path.display()))?;
            let content_type = content_type.as_deref().unwrap_or_else(|| guess_content_type(path));
            let uploaded = ctx
                .api
                .upload_attachment(*finding, kind, file_name, Some(content_type), data)
                .await?;
            output(&uploaded, flags.format)
        }
        FileCommands::Delete {
            finding,
            file,
            kind,
            yes,
        } => {
            let kind = AttachmentKind::from(*kind);
            check_kind(ctx.role(), kind)?;
            require_yes(*yes, &format!("delete {kind} file {file} of finding {finding}"))?;
            ctx.api.delete_attachment(*finding, kind, *file).await?;
            output(&json!({ "deleted": true, "finding": finding, "file": file }), flags.format)
        }
        FileCommands::Download {
            finding,
            file,
            kind,
            output: destination,
        } => {
            let files = ctx.api.list_attachments(*finding, (*kind).into()).await?;
            let attachment = files
                .iter()
                .find(|attachment| attachment.id == *file)
                .with_context(|| format!("finding {finding} has no file {file}"))?;
            let bytes = ctx.api.download_attachment(attachment).await?;
            let target = destination.clone().unwrap_or_else(|| default_target(attachment));
            std::fs::write(&target, &bytes).with_context(|| format!("failed to write {}", target.display()))?;
            output(
                &json!({
                    "file": attachment.file_name,
                    "path": target.display().to_string(),
                    "bytes": bytes.len(),
                }),
                flags.format,
            )
        }
    }
}

/// Follow-up evidence belongs to the client responsible, annexes to staff.
fn check_kind(role: Option<Role>, kind: AttachmentKind) -> anyhow::Result<()> {
    let field = match kind {
        AttachmentKind::FollowUp => FindingField::FollowUpFiles,
        AttachmentKind::Annex => FindingField::Annexes,
    };
    if access::field_editable(role, field) {
        return Ok(());
    }
    anyhow::bail!(
        "role '{}' may not manage {kind} files",
        role.map_or("unknown", Role::as_str)
    )
}

/// Stored name without any directory part, in the working directory.
fn default_target(attachment: &Attachment) -> PathBuf {
    Path::new(&attachment.file_name)
        .file_name()
        .map_or_else(|| PathBuf::from(format!("file-{}", attachment.id)), PathBuf::from)
}
