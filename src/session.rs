//! Session bootstrap orchestration and exit reporting.

use std::{path::Path, process::ExitCode};

use anyhow::Error;
use tracing::{debug, info};

use crate::{
    cli::SessionConfig,
    script,
    support::{dialog, errors::FatalError},
    transport::{self, SessionTransport, TitleOutcome, TransportKind, TransportProbe},
};

/// Bundles a fatal message with its process exit code.
#[derive(Debug)]
pub struct SessionExit {
    message: String,
    exit_code: ExitCode,
}

impl SessionExit {
    pub fn usage(message: String) -> Self {
        Self {
            message,
            exit_code: ExitCode::from(1),
        }
    }

    pub fn from_fatal(err: FatalError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: ExitCode::from(err.exit_code()),
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        Self {
            message: format!("{:?}", err.into()),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Show the message through the dialog helper and yield the exit code.
    pub fn report(self) -> ExitCode {
        dialog::report_error(&self.message);
        self.exit_code
    }
}

/// Drive the whole bootstrap against the real system.
pub fn run(config: &SessionConfig) -> Result<(), FatalError> {
    let mut probe = transport::SystemTransportProbe;
    open_session(config, &mut probe, transport::bind)
}

/// Bootstrap sequence with injectable transport detection and binding.
///
/// Linear: validate the working directory, write the session script, resolve
/// a transport, then create the session, inject the source directive, and
/// apply title and window visibility. Nothing is retried; the first fatal
/// error ends the run.
pub fn open_session<F>(
    config: &SessionConfig,
    probe: &mut dyn TransportProbe,
    bind: F,
) -> Result<(), FatalError>
where
    F: FnOnce(TransportKind) -> Box<dyn SessionTransport>,
{
    if config.workdir_explicit && !config.workdir.is_dir() {
        return Err(FatalError::WorkdirMissing {
            path: config.workdir.clone(),
        });
    }

    let (script_path, body) = script::write_script(config)?;
    debug!(script = %script_path.display(), "wrote session script");

    if config.debug && !confirm_script(&script_path, &body) {
        // The remote shell will never get to delete it.
        let _ = std::fs::remove_file(&script_path);
        return Err(FatalError::DebugCancelled);
    }

    let kind = transport::resolve_transport(probe)?;
    debug!(?kind, "transport resolved");
    let mut bound = bind(kind);
    drive_transport(config, bound.as_mut(), &script_path)
}

fn drive_transport(
    config: &SessionConfig,
    transport: &mut dyn SessionTransport,
    script_path: &Path,
) -> Result<(), FatalError> {
    let session = transport
        .add_session()
        .map_err(|source| FatalError::AddSessionFailed { source })?;

    let directive = script::source_directive(script_path);
    transport
        .run_command(&session, &directive)
        .map_err(|source| FatalError::RunCommandFailed { source })?;

    if let Some(title) = &config.title {
        match transport.set_title(&session, title) {
            Ok(TitleOutcome::Applied) => {}
            Ok(TitleOutcome::Unsupported) => {
                dialog::report_warning("this transport cannot rename tabs; title left unchanged");
            }
            Err(err) => {
                dialog::report_warning(&format!("could not set the tab title: {err}"));
            }
        }
    }

    if config.show {
        if let Err(err) = transport.show_window() {
            dialog::report_warning(&format!("could not raise the terminal window: {err}"));
        }
    }

    info!(workdir = %config.workdir.display(), "session ready");
    Ok(())
}

fn confirm_script(script_path: &Path, body: &str) -> bool {
    eprintln!("session script at {}:\n{body}", script_path.display());
    dialog::confirm_on_stdin("issue the remote calls?")
}
