use schemars::{JsonSchema, Schema, schema_for};

use aud_core::entities::{
    Activity, Attachment, Audit, AuditPlan, Company, Finding, FindingView, Process, RoleRecord,
    User,
};
use aud_core::identity::SessionIdentity;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaEntity};
use crate::output::output;

/// Handle `aud schema <entity>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.entity), flags.format)
}

fn schema(entity: SchemaEntity) -> Schema {
    match entity {
        SchemaEntity::Company => of::<Company>(),
        SchemaEntity::User => of::<User>(),
        SchemaEntity::Role => of::<RoleRecord>(),
        SchemaEntity::Audit => of::<Audit>(),
        SchemaEntity::Plan => of::<AuditPlan>(),
        SchemaEntity::Process => of::<Process>(),
        SchemaEntity::Activity => of::<Activity>(),
        SchemaEntity::Finding => of::<Finding>(),
        SchemaEntity::FindingView => of::<FindingView>(),
        SchemaEntity::Attachment => of::<Attachment>(),
        SchemaEntity::Session => of::<SessionIdentity>(),
    }
}

fn of<T: JsonSchema>() -> Schema {
    schema_for!(T)
}
