//! D-Bus binding through the `qdbus` command-line bridge.

use std::process::Command;

use tracing::debug;

use super::{SessionHandle, SessionTransport, TitleOutcome, DBUS_SERVICE};
use crate::support::errors::TransportError;

const SESSIONS_PATH: &str = "/yakuake/sessions";
const TABS_PATH: &str = "/yakuake/tabs";
const WINDOW_PATH: &str = "/yakuake/window";
const MAIN_WINDOW_PATH: &str = "/yakuake/MainWindow_1";

#[derive(Debug, Default)]
pub struct DbusTransport;

impl DbusTransport {
    pub fn new() -> Self {
        Self
    }

    // This binding always creates sessions with an explicit id; a
    // most-recent handle can only come from misuse.
    fn session_id(
        &self,
        session: &SessionHandle,
        call: &'static str,
    ) -> Result<i32, TransportError> {
        match session {
            SessionHandle::Explicit(id) => Ok(*id),
            SessionHandle::MostRecent => Err(TransportError::HandleUnsupported { call }),
        }
    }
}

impl SessionTransport for DbusTransport {
    fn add_session(&mut self) -> Result<SessionHandle, TransportError> {
        let reply = qdbus(&[SESSIONS_PATH, "org.kde.yakuake.addSession"])?;
        let id = parse_id("addSession", reply)?;
        debug!(session = id, "created session over D-Bus");
        Ok(SessionHandle::Explicit(id))
    }

    fn run_command(&mut self, session: &SessionHandle, line: &str) -> Result<(), TransportError> {
        let id = self.session_id(session, "runCommandInTerminal")?;
        qdbus(&[
            SESSIONS_PATH,
            "org.kde.yakuake.runCommandInTerminal",
            &id.to_string(),
            line,
        ])?;
        Ok(())
    }

    fn set_title(
        &mut self,
        session: &SessionHandle,
        title: &str,
    ) -> Result<TitleOutcome, TransportError> {
        let id = self.session_id(session, "setTabTitle")?;
        qdbus(&[
            TABS_PATH,
            "org.kde.yakuake.setTabTitle",
            &id.to_string(),
            title,
        ])?;
        Ok(TitleOutcome::Applied)
    }

    fn show_window(&mut self) -> Result<(), TransportError> {
        // The application exposes window visibility itself; skip the toggle
        // when it is already on screen. A failed query just means toggle.
        let visible = qdbus(&[MAIN_WINDOW_PATH, "org.qtproject.Qt.QWidget.visible"])
            .map(|reply| reply == "true")
            .unwrap_or(false);
        if visible {
            return Ok(());
        }
        qdbus(&[WINDOW_PATH, "org.kde.yakuake.toggleWindowState"])?;
        Ok(())
    }
}

fn qdbus(args: &[&str]) -> Result<String, TransportError> {
    let output = Command::new("qdbus")
        .arg(DBUS_SERVICE)
        .args(args)
        .output()
        .map_err(|source| TransportError::BridgeInvocation {
            tool: "qdbus",
            source,
        })?;
    if !output.status.success() {
        return Err(TransportError::BridgeFailed {
            tool: "qdbus",
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn parse_id(call: &'static str, reply: String) -> Result<i32, TransportError> {
    reply
        .parse::<i32>()
        .map_err(|_| TransportError::MalformedReply { call, reply })
}
