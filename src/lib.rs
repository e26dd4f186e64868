//! Library crate root re-exporting CLI, transport, and session modules.

pub mod cli;
pub mod script;
pub mod session;
pub mod support;
pub mod transport;
