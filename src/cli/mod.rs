//! CLI entrypoint module structure.
use std::path::PathBuf;

pub mod args;
pub mod profile;

pub use args::SessionArgs;
pub use profile::ProfileSettings;

/// Command-chaining dialect of the shell running inside the new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    Posix,
    Fish,
}

impl ShellDialect {
    /// Operator joining the directory change and the user command.
    pub const fn chain_operator(&self) -> &'static str {
        match self {
            ShellDialect::Posix => "&&",
            ShellDialect::Fish => "; and",
        }
    }
}

/// Immutable per-invocation configuration, built once from parsed arguments.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Working directory for the new session.
    pub workdir: PathBuf,
    /// Whether the working directory was supplied by the caller rather than
    /// defaulted; only explicit directories are validated before any IPC.
    pub workdir_explicit: bool,
    /// Tab title, set only when requested.
    pub title: Option<String>,
    /// Command to run inside the session, captured verbatim after `-e`.
    pub command: Option<Vec<String>>,
    /// Keep the session open after the command exits.
    pub hold: bool,
    /// Raise the terminal window after setup.
    pub show: bool,
    /// Shell dialect used when composing the session script.
    pub dialect: ShellDialect,
    /// Profile properties applied inside the session.
    pub profile: ProfileSettings,
    /// Dump the composed script and confirm before any remote call.
    pub debug: bool,
}
