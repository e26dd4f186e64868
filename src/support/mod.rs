//! Shared library modules providing error types, path helpers, user-facing
//! dialogs, privilege handling, and telemetry initialization.

pub mod dialog;
pub mod errors;
pub mod paths;
pub mod privilege;
pub mod telemetry;
