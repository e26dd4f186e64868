//! Session script composition and temp-file placement.
//!
//! The script is sourced once by the shell inside the new session and deletes
//! itself on first use; this process never removes it on the success path.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    cli::SessionConfig,
    support::errors::FatalError,
};

/// Helper invoked inside the session to apply profile properties.
const PROFILE_HELPER: &str = "konsoleprofile";

/// Compose the script body and write it to a uniquely named file. Returns the
/// script path and the body (the latter for `--debug` display).
pub fn write_script(config: &SessionConfig) -> Result<(PathBuf, String), FatalError> {
    let mut file = tempfile::Builder::new()
        .prefix("dropterm-")
        .suffix(".sh")
        .tempfile()
        .map_err(|source| FatalError::ScriptWrite { source })?;

    let body = compose_body(config, file.path());
    file.write_all(body.as_bytes())
        .map_err(|source| FatalError::ScriptWrite { source })?;

    let (_, path) = file
        .keep()
        .map_err(|err| FatalError::ScriptWrite { source: err.error })?;
    Ok((path, body))
}

/// Build the statements sourced by the remote shell: clear the screen, delete
/// the script, apply profile properties, then change directory and run the
/// command joined by the dialect's chaining operator.
pub fn compose_body(config: &SessionConfig, script_path: &Path) -> String {
    let mut body = String::from("clear\n");
    body.push_str(&format!(
        "rm -f -- {} 2>/dev/null\n",
        shell_quote(&script_path.display().to_string())
    ));
    if !config.profile.is_empty() {
        body.push_str(&format!(
            "{PROFILE_HELPER} {}\n",
            shell_quote(&config.profile.render())
        ));
    }
    body.push_str(&format!(
        "cd {} {} {}\n",
        shell_quote(&config.workdir.display().to_string()),
        config.dialect.chain_operator(),
        command_segment(config)
    ));
    body
}

/// Line injected into the session to run the script. The leading space keeps
/// it out of the remote shell's interactive history.
pub fn source_directive(script_path: &Path) -> String {
    format!(
        " source {}",
        shell_quote(&script_path.display().to_string())
    )
}

fn command_segment(config: &SessionConfig) -> String {
    match &config.command {
        None => "true".to_string(),
        Some(argv) => {
            let joined = argv.join(" ");
            if config.hold {
                joined
            } else {
                // Replace the shell so the session closes when the command ends.
                format!("exec {joined}")
            }
        }
    }
}

/// Single-quote a string for the shell unless it only contains characters
/// that need no quoting.
pub fn shell_quote(raw: &str) -> String {
    let safe = !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '='));
    if safe {
        raw.to_string()
    } else {
        format!("'{}'", raw.replace('\'', r"'\''"))
    }
}
