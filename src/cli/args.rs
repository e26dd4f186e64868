//! CLI argument definitions and `SessionConfig` construction.
use std::path::PathBuf;

use clap::builder::TypedValueParser as _;
use clap::{ArgAction, Parser};

use super::{ProfileSettings, SessionConfig, ShellDialect};
use crate::support::{errors::FatalError, paths};

/// Command-line arguments.
///
/// The automatic `-h` help short flag is disabled because `-h` selects the
/// home directory; `--help` remains available.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dropterm",
    version,
    about = "Open a new session in a running drop-down terminal",
    disable_help_flag = true,
    long_about = None
)]
pub struct SessionArgs {
    /// Print usage information.
    #[arg(long, action = ArgAction::HelpLong)]
    help: Option<bool>,
    /// Use the home directory as the working directory (overrides --workdir).
    #[arg(short = 'h', long = "homedir")]
    pub homedir: bool,
    /// Working directory for the new session; defaults to the caller's.
    ///
    /// The empty missing-value stands for "use the default", so the parser
    /// must accept empty strings, which clap's `PathBuf` parser rejects.
    #[arg(
        short = 'w',
        long = "workdir",
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = "",
        value_parser = clap::builder::StringValueParser::new().map(PathBuf::from)
    )]
    pub workdir: Option<PathBuf>,
    /// Profile property applied inside the session (repeatable).
    #[arg(short = 'p', long = "profile", value_name = "PROP=VAL", action = ArgAction::Append)]
    pub profile: Vec<String>,
    /// Tab title for the new session.
    #[arg(short = 't', long = "title", value_name = "TITLE")]
    pub title: Option<String>,
    /// Do not raise the terminal window after setup.
    #[arg(short = 'q')]
    pub quiet: bool,
    /// Keep the session open after the command exits.
    #[arg(long, visible_alias = "noclose")]
    pub hold: bool,
    /// The session shell is fish; chain commands with `; and`.
    #[arg(long, overrides_with = "nofish")]
    pub fish: bool,
    /// The session shell is not fish (the default).
    #[arg(long, overrides_with = "fish")]
    pub nofish: bool,
    /// Show the composed script and confirm before any remote call.
    #[arg(long)]
    pub debug: bool,
    /// Command to run in the session; consumes every remaining argument.
    #[arg(
        short = 'e',
        long = "execute",
        value_name = "CMD",
        num_args = 1..,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl SessionArgs {
    /// Build the immutable `SessionConfig` from parsed arguments.
    pub fn into_config(self) -> Result<SessionConfig, FatalError> {
        let profile = ProfileSettings::parse(&self.profile).map_err(FatalError::Usage)?;
        let workdir = paths::resolve_workdir(self.homedir, self.workdir)?;
        let command = if self.command.is_empty() {
            None
        } else {
            Some(self.command)
        };
        let dialect = if self.fish {
            ShellDialect::Fish
        } else {
            ShellDialect::Posix
        };

        Ok(SessionConfig {
            workdir: workdir.path,
            workdir_explicit: workdir.explicit,
            title: self.title,
            command,
            hold: self.hold,
            show: !self.quiet,
            dialect,
            profile,
            debug: self.debug,
        })
    }
}
