//! Transport capability detection and application launch.

use std::{
    io,
    process::{Command, Stdio},
    thread,
    time::Duration,
};

use tracing::{debug, warn};

use super::{DBUS_SERVICE, TARGET_APP};
use crate::support::errors::FatalError;

/// How long a freshly launched application gets to register its endpoints
/// before the second probe round.
const STARTUP_GRACE: Duration = Duration::from_millis(1500);

/// Which remote-control channel was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Dbus,
    Dcop,
}

/// Environment access used during transport detection.
pub trait TransportProbe {
    fn dbus_reachable(&mut self) -> Result<bool, FatalError>;
    fn dcop_reachable(&mut self) -> Result<bool, FatalError>;
    fn launch_application(&mut self) -> Result<(), FatalError>;
}

/// Probe each transport once; on a full miss, launch the application and probe
/// one more round. No retry loop: each endpoint is probed at most twice.
pub fn resolve_transport(probe: &mut dyn TransportProbe) -> Result<TransportKind, FatalError> {
    if let Some(kind) = probe_round(probe)? {
        return Ok(kind);
    }

    debug!(app = TARGET_APP, "no transport reachable; launching the application");
    probe.launch_application()?;
    probe_round(probe)?.ok_or(FatalError::NoTransport)
}

fn probe_round(probe: &mut dyn TransportProbe) -> Result<Option<TransportKind>, FatalError> {
    if probe.dbus_reachable()? {
        return Ok(Some(TransportKind::Dbus));
    }
    if probe.dcop_reachable()? {
        return Ok(Some(TransportKind::Dcop));
    }
    Ok(None)
}

/// Probe that operates against the real environment.
pub struct SystemTransportProbe;

impl TransportProbe for SystemTransportProbe {
    fn dbus_reachable(&mut self) -> Result<bool, FatalError> {
        let status = Command::new("qdbus")
            .arg(DBUS_SERVICE)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => Ok(status.success()),
            // qdbus is required for the primary transport; its absence is an
            // environment error, not a plain probe miss.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(FatalError::HelperMissing { tool: "qdbus" })
            }
            Err(err) => {
                warn!(error = %err, "D-Bus probe failed");
                Ok(false)
            }
        }
    }

    fn dcop_reachable(&mut self) -> Result<bool, FatalError> {
        let status = Command::new("dcop")
            .arg(TARGET_APP)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => Ok(status.success()),
            // The legacy bridge is absent on modern systems; treat it as a miss.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("dcop bridge not installed");
                Ok(false)
            }
            Err(err) => {
                warn!(error = %err, "DCOP probe failed");
                Ok(false)
            }
        }
    }

    fn launch_application(&mut self) -> Result<(), FatalError> {
        let spawned = Command::new(TARGET_APP)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(_) => {
                thread::sleep(STARTUP_GRACE);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(FatalError::AppNotInstalled { app: TARGET_APP })
            }
            Err(err) => Err(FatalError::LaunchFailed {
                app: TARGET_APP,
                source: err,
            }),
        }
    }
}
