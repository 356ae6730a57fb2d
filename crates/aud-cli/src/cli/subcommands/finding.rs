use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use aud_core::enums::AttachmentKind;

/// Finding commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FindingCommands {
    /// List findings visible to the signed-in role.
    List {
        /// Only findings of this audit name (internal roles).
        #[arg(long)]
        audit: Option<String>,
    },
    /// Get a finding by ID.
    Get { id: i64 },
    /// Create a finding.
    Create {
        /// Audit plan id.
        #[arg(long)]
        plan: i64,
        #[arg(long)]
        activity: i64,
        /// Client responsible user id.
        #[arg(long)]
        responsible: i64,
        #[command(flatten)]
        fields: FindingFieldArgs,
    },
    /// Update a finding. Fields a role may not edit are rejected.
    Update {
        id: i64,
        #[arg(long)]
        plan: Option<i64>,
        #[arg(long)]
        activity: Option<i64>,
        #[arg(long)]
        responsible: Option<i64>,
        #[command(flatten)]
        fields: FindingFieldArgs,
        /// Follow-up notes from the client responsible.
        #[arg(long)]
        follow_up: Option<String>,
    },
    /// Delete a finding.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
    /// Follow-up files and annexes.
    Files {
        #[command(subcommand)]
        action: FileCommands,
    },
}

/// Finding form fields shared by create and update.
#[derive(Clone, Debug, Default, Args)]
pub struct FindingFieldArgs {
    #[arg(long)]
    pub impact: Option<f64>,
    /// Semaforo rating: NCA, NCM, NCB, OM or C.
    #[arg(long)]
    pub rating: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub risk: Option<String>,
    #[arg(long)]
    pub recommendations: Option<String>,
    #[arg(long)]
    pub action_plan: Option<String>,
    /// Commitment date (YYYY-MM-DD).
    #[arg(long)]
    pub commitment_date: Option<String>,
    #[arg(long)]
    pub compliant: Option<bool>,
}

/// Attachment collection selector.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum FileKindArg {
    #[default]
    FollowUp,
    Annex,
}

impl From<FileKindArg> for AttachmentKind {
    fn from(value: FileKindArg) -> Self {
        match value {
            FileKindArg::FollowUp => Self::FollowUp,
            FileKindArg::Annex => Self::Annex,
        }
    }
}

/// Attachment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FileCommands {
    /// List attachments of a finding.
    List {
        finding: i64,
        #[arg(long, default_value = "follow-up")]
        kind: FileKindArg,
    },
    /// Upload a file.
    Upload {
        finding: i64,
        path: PathBuf,
        #[arg(long, default_value = "follow-up")]
        kind: FileKindArg,
        /// MIME type; guessed from the extension when omitted.
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Delete an attachment.
    Delete {
        finding: i64,
        file: i64,
        #[arg(long, default_value = "follow-up")]
        kind: FileKindArg,
        #[arg(long)]
        yes: bool,
    },
    /// Download an attachment.
    Download {
        finding: i64,
        file: i64,
        #[arg(long, default_value = "follow-up")]
        kind: FileKindArg,
        /// Destination path; defaults to the stored file name.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl FileCommands {
    /// Finding the attachment command targets.
    #[must_use]
    pub const fn finding(&self) -> i64 {
        match self {
            Self::List { finding, .. }
            | Self::Upload { finding, .. }
            | Self::Delete { finding, .. }
            | Self::Download { finding, .. } => *finding,
        }
    }
}
