//! Entry point for dropterm.
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use dropterm::{
    cli::SessionArgs,
    session::{self, SessionExit},
    support::{privilege, telemetry},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), SessionExit> {
    let args = match SessionArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(SessionExit::usage(err.to_string())),
    };

    telemetry::init_tracing(args.debug).map_err(SessionExit::from_error)?;
    privilege::ensure_unprivileged().map_err(SessionExit::from_fatal)?;

    let config = args.into_config().map_err(SessionExit::from_fatal)?;
    session::run(&config).map_err(SessionExit::from_fatal)
}
