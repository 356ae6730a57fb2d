use std::path::PathBuf;

use clap::Subcommand;

/// Company commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// List companies.
    List {
        /// Include companies hidden from the default listing.
        #[arg(long)]
        all: bool,
    },
    /// Get a company by ID.
    Get { id: i64 },
    /// Create a company.
    Create {
        #[arg(long)]
        name: String,
        /// Logo image file, sent base64-encoded.
        #[arg(long)]
        logo: Option<PathBuf>,
    },
    /// Update a company.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        logo: Option<PathBuf>,
    },
    /// Delete a company.
    Delete {
        id: i64,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}
