//! Terminal capabilities, resolved once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Tables narrower than this ignore `COLUMNS`.
const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Colour plan statuses and ratings in table cells.
    pub table_color: bool,
    /// Show a stderr spinner during backend round trips.
    pub spinner: bool,
    pub table_width: Option<usize>,
}

/// What the process can observe about its terminal.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal<'a> {
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<&'a str>,
}

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, terminal: Terminal<'_>) -> Self {
        let table = flags.format == OutputFormat::Table;
        let table_color = table
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => terminal.stdout_tty && !terminal.no_color && !flags.quiet,
            };
        Self {
            table_color,
            spinner: terminal.stderr_tty && !flags.quiet && flags.format != OutputFormat::Json,
            table_width: terminal
                .columns
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|width| *width >= MIN_TABLE_WIDTH),
        }
    }
}

static PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let terminal = Terminal {
        stdout_tty: std::io::stdout().is_terminal(),
        stderr_tty: std::io::stderr().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: columns.as_deref(),
    };
    let _ = PREFS.set(UiPrefs::resolve(flags, terminal));
}

/// Resolved preferences; plain output until [`init`] runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    PREFS.get().copied().unwrap_or_default()
}
