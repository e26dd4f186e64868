//! Error taxonomy and exit-code mapping.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while invoking a remote-control bridge tool.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The bridge binary could not be executed at all.
    #[error("failed to invoke `{tool}`: {source}")]
    BridgeInvocation {
        tool: &'static str,
        #[source]
        source: io::Error,
    },
    /// The bridge ran but reported a failed remote call.
    #[error("`{tool}` failed ({status}): {stderr}")]
    BridgeFailed {
        tool: &'static str,
        status: String,
        stderr: String,
    },
    /// The remote call succeeded but returned something unparseable.
    #[error("unexpected reply from {call}: {reply}")]
    MalformedReply { call: &'static str, reply: String },
    /// The call was addressed with a handle this transport cannot resolve.
    #[error("{call} requires an explicit session id")]
    HandleUnsupported { call: &'static str },
}

/// Fatal conditions; each variant maps to a distinct process exit code.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("{0}")]
    Usage(String),
    #[error("working directory {} does not exist", path.display())]
    WorkdirMissing { path: PathBuf },
    #[error("could not create a new session: {source}")]
    AddSessionFailed {
        #[source]
        source: TransportError,
    },
    #[error("could not run the command in the new session: {source}")]
    RunCommandFailed {
        #[source]
        source: TransportError,
    },
    #[error("`{app}` is not installed")]
    AppNotInstalled { app: &'static str },
    #[error("required helper tool `{tool}` is not installed")]
    HelperMissing { tool: &'static str },
    #[error("cannot connect to the terminal application over D-Bus or DCOP")]
    NoTransport,
    #[error("cancelled")]
    DebugCancelled,
    #[error("failed to launch `{app}`: {source}")]
    LaunchFailed {
        app: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("failed to write the session script: {source}")]
    ScriptWrite {
        #[source]
        source: io::Error,
    },
}

impl FatalError {
    /// Process exit code for this condition.
    pub fn exit_code(&self) -> u8 {
        match self {
            FatalError::Usage(_) | FatalError::ScriptWrite { .. } => 1,
            FatalError::WorkdirMissing { .. } => 2,
            FatalError::AddSessionFailed { .. } => 4,
            FatalError::RunCommandFailed { .. } => 7,
            FatalError::AppNotInstalled { .. } => 20,
            FatalError::HelperMissing { .. } => 21,
            FatalError::NoTransport => 22,
            FatalError::DebugCancelled => 120,
            FatalError::LaunchFailed { .. } => 126,
        }
    }
}
