//! User-facing reporting through `kdialog`, with a stderr fallback when no
//! display or dialog helper is available.

use std::{
    env,
    io::{self, BufRead, Write},
    process::Command,
};

use tracing::debug;

const DIALOG_TOOL: &str = "kdialog";
const DIALOG_TITLE: &str = "dropterm";

/// Report a fatal error to the user.
pub fn report_error(message: &str) {
    if !present(&["--error", message]) {
        eprintln!("dropterm: {message}");
    }
}

/// Report a non-fatal warning to the user.
pub fn report_warning(message: &str) {
    if !present(&["--sorry", message]) {
        eprintln!("dropterm: warning: {message}");
    }
}

/// Ask for confirmation on stdin; anything other than `y`/`yes` declines.
pub fn confirm_on_stdin(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    let _ = io::stderr().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn present(args: &[&str]) -> bool {
    if env::var_os("DISPLAY").is_none() {
        return false;
    }

    let mut command = Command::new(DIALOG_TOOL);
    // Attach the dialog to the invoking window when the shell exported one.
    if let Ok(window_id) = env::var("WINDOWID") {
        if !window_id.is_empty() {
            command.arg("--attach").arg(window_id);
        }
    }
    command.arg("--title").arg(DIALOG_TITLE).args(args);

    match command.status() {
        Ok(status) => status.success(),
        Err(err) => {
            debug!(tool = DIALOG_TOOL, error = %err, "dialog helper unavailable");
            false
        }
    }
}
