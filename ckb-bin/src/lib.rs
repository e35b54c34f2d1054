//! ckb-unique executable.
//!
//! This crate is created to keep the command line plumbing out of the builder library.
mod helper;
mod subcommand;

use ckb_unique_app_config::{cli, ExitCode, Setup};
use log::debug;

/// The executable main entry.
///
/// It returns `Ok` when the process exits normally, otherwise the `ExitCode` is converted to the
/// process exit status code.
pub fn run_app() -> Result<(), ExitCode> {
    let app_matches = cli::get_matches();
    let setup = Setup::from_matches(&app_matches)?;
    helper::init_logger(setup.config.logger());
    debug!("ckb-unique version: {}", env!("CARGO_PKG_VERSION"));

    match app_matches.subcommand() {
        Some((cli::CMD_BUILD, matches)) => subcommand::build(setup.build(matches)?),
        Some((cli::CMD_UNIQUE_ID, matches)) => subcommand::unique_id(Setup::unique_id(matches)?),
        _ => {
            eprintln!("unknown subcommand {}", setup.subcommand_name);
            Err(ExitCode::Cli)
        }
    }
}
