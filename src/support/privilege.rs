//! Pre-flight privilege drop when invoked as the superuser.

use std::{env, os::unix::process::CommandExt, process::Command};

use tracing::debug;

use super::errors::FatalError;

/// Re-execute the whole invocation as the logged-in user when the effective
/// uid is 0. Returns `Ok(())` immediately for unprivileged callers; on a
/// successful re-exec this function never returns.
pub fn ensure_unprivileged() -> Result<(), FatalError> {
    if unsafe { libc::geteuid() } != 0 {
        return Ok(());
    }

    let user = login_user().ok_or_else(|| {
        FatalError::Usage("refusing to run as root: could not determine the logged-in user".into())
    })?;
    debug!(user = %user, "re-executing as the logged-in user");

    let err = Command::new("runuser")
        .arg("-u")
        .arg(&user)
        .arg("--")
        .args(env::args())
        .exec();
    Err(FatalError::Usage(format!(
        "failed to re-execute as {user}: {err}"
    )))
}

fn login_user() -> Option<String> {
    if let Ok(user) = env::var("SUDO_USER") {
        if !user.is_empty() && user != "root" {
            return Some(user);
        }
    }

    let output = Command::new("logname").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!name.is_empty() && name != "root").then_some(name)
}
