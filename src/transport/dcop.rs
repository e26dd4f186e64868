//! Legacy DCOP binding through the `dcop` command-line bridge.
//!
//! DCOP cannot return a session id from the create call and has no rename
//! call at all, so sessions are addressed as "most recent" and rename reports
//! `Unsupported`.

use std::process::Command;

use tracing::debug;

use super::{SessionHandle, SessionTransport, TitleOutcome, TARGET_APP};
use crate::support::errors::TransportError;

const DCOP_INTERFACE: &str = "DCOPInterface";

#[derive(Debug, Default)]
pub struct DcopTransport;

impl DcopTransport {
    pub fn new() -> Self {
        Self
    }
}

impl SessionTransport for DcopTransport {
    fn add_session(&mut self) -> Result<SessionHandle, TransportError> {
        dcop(&["slotAddSession"])?;
        debug!("created session over DCOP");
        Ok(SessionHandle::MostRecent)
    }

    fn run_command(&mut self, _session: &SessionHandle, line: &str) -> Result<(), TransportError> {
        dcop(&["slotRunCommandInSession", line])?;
        Ok(())
    }

    fn set_title(
        &mut self,
        _session: &SessionHandle,
        _title: &str,
    ) -> Result<TitleOutcome, TransportError> {
        Ok(TitleOutcome::Unsupported)
    }

    fn show_window(&mut self) -> Result<(), TransportError> {
        // DCOP has no visibility query; ask the window manager instead so an
        // already-visible window is not toggled away.
        if window_present()? {
            return Ok(());
        }
        dcop(&["slotToggleState"])?;
        Ok(())
    }
}

fn dcop(args: &[&str]) -> Result<String, TransportError> {
    let output = Command::new("dcop")
        .arg(TARGET_APP)
        .arg(DCOP_INTERFACE)
        .args(args)
        .output()
        .map_err(|source| TransportError::BridgeInvocation {
            tool: "dcop",
            source,
        })?;
    if !output.status.success() {
        return Err(TransportError::BridgeFailed {
            tool: "dcop",
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn window_present() -> Result<bool, TransportError> {
    // wmctrl is optional; without it the toggle happens unconditionally.
    let output = Command::new("wmctrl").arg("-l").output();
    match output {
        Ok(out) if out.status.success() => {
            Ok(String::from_utf8_lossy(&out.stdout)
                .to_lowercase()
                .contains(TARGET_APP))
        }
        _ => Ok(false),
    }
}
