//! Remote-control transport bindings for the target terminal application.

pub mod dbus;
pub mod dcop;
pub mod probe;

pub use dbus::DbusTransport;
pub use dcop::DcopTransport;
pub use probe::{resolve_transport, SystemTransportProbe, TransportKind, TransportProbe};

use crate::support::errors::TransportError;

/// Target application binary, also used for launching it.
pub const TARGET_APP: &str = "yakuake";
/// D-Bus service name the application registers.
pub const DBUS_SERVICE: &str = "org.kde.yakuake";

/// Handle addressing a session created through a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionHandle {
    /// Session id returned by the create call.
    Explicit(i32),
    /// The transport cannot return an id; calls target the newest session.
    MostRecent,
}

/// Result of a rename attempt; `Unsupported` leaves policy to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleOutcome {
    Applied,
    Unsupported,
}

/// The four operations every transport provides.
pub trait SessionTransport {
    /// Create a new terminal session in the target application.
    fn add_session(&mut self) -> Result<SessionHandle, TransportError>;
    /// Execute one line of shell text inside the session.
    fn run_command(&mut self, session: &SessionHandle, line: &str) -> Result<(), TransportError>;
    /// Rename the session's tab.
    fn set_title(
        &mut self,
        session: &SessionHandle,
        title: &str,
    ) -> Result<TitleOutcome, TransportError>;
    /// Raise the application window unless it is already visible.
    fn show_window(&mut self) -> Result<(), TransportError>;
}

/// Bind the concrete transport for a detected kind.
pub fn bind(kind: TransportKind) -> Box<dyn SessionTransport> {
    match kind {
        TransportKind::Dbus => Box::new(DbusTransport::new()),
        TransportKind::Dcop => Box::new(DcopTransport::new()),
    }
}
