//! Command line arguments, network profiles and config options of `ckb-unique`.
mod app_config;
mod args;
pub mod cli;
mod configs;
mod exit_code;

#[cfg(test)]
mod tests;

pub use app_config::{AppConfig, ConfigError, CONFIG_FILE_NAME};
pub use args::{BuildArgs, UniqueIdArgs};
pub use configs::*;
pub use exit_code::ExitCode;

use ckb_unique_jsonrpc_types::JsonBytes;
use ckb_unique_types::{
    core::{Capacity, TokenInfo},
    H256,
};
use clap::ArgMatches;
use std::path::PathBuf;
use std::str::FromStr;

/// The parsed config file and the subcommand to run.
pub struct Setup {
    /// Name of the subcommand.
    pub subcommand_name: String,
    /// Parsed `ckb-unique.toml`, or the defaults.
    pub config: AppConfig,
}

impl Setup {
    /// Boots up the setup from the top level command line matches.
    pub fn from_matches(matches: &ArgMatches) -> Result<Setup, ExitCode> {
        let subcommand_name = match matches.subcommand_name() {
            Some(subcommand_name) => subcommand_name,
            None => {
                eprintln!("expect a subcommand");
                return Err(ExitCode::Cli);
            }
        };

        let root_dir = Self::root_dir_from_matches(matches)?;
        let config = AppConfig::load_from_dir(root_dir)?;

        Ok(Setup {
            subcommand_name: subcommand_name.to_string(),
            config,
        })
    }

    /// Resolves the directory holding `ckb-unique.toml`.
    pub fn root_dir_from_matches(matches: &ArgMatches) -> Result<PathBuf, ExitCode> {
        let config_dir = match matches.get_one::<PathBuf>(cli::ARG_CONFIG_DIR) {
            Some(config_dir) => config_dir.to_owned(),
            None => ::std::env::current_dir()?,
        };
        Ok(config_dir)
    }

    /// Executes `ckb-unique build`.
    pub fn build(self, matches: &ArgMatches) -> Result<BuildArgs, ExitCode> {
        let mut config = self.config;
        if let Some(network) = matches.get_one::<String>(cli::ARG_NETWORK) {
            config.builder.network = NetworkType::from_str(network).map_err(|err| {
                eprintln!("{err}");
                ExitCode::Cli
            })?;
        }
        if let Some(fee_rate) = matches.get_one::<u64>(cli::ARG_FEE_RATE) {
            config.builder.fee_rate = *fee_rate;
        }

        let cells = matches
            .get_one::<PathBuf>(cli::ARG_CELLS)
            .cloned()
            .ok_or(ExitCode::Cli)?;
        let lock_arg = hex_arg(matches, cli::ARG_LOCK_ARG)?;
        if lock_arg.len() != 20 {
            eprintln!(
                "{} expects 20 bytes blake160, got {} bytes",
                cli::ARG_LOCK_ARG,
                lock_arg.len()
            );
            return Err(ExitCode::Cli);
        }
        let data = match (
            matches.get_one::<String>(cli::ARG_TOKEN_NAME),
            matches.get_one::<String>(cli::ARG_TOKEN_SYMBOL),
        ) {
            (Some(name), Some(symbol)) => {
                let decimal = matches
                    .get_one::<u8>(cli::ARG_DECIMAL)
                    .copied()
                    .unwrap_or_default();
                let token_info = TokenInfo::new(decimal, name.as_str(), symbol.as_str());
                let encoded = token_info.encode().map_err(|err| {
                    eprintln!("token info: {err}");
                    ExitCode::Cli
                })?;
                JsonBytes::from_bytes(encoded)
            }
            _ => hex_arg(matches, cli::ARG_DATA)?,
        };
        let capacity = matches
            .get_one::<u64>(cli::ARG_CAPACITY)
            .map(|shannons| Capacity::shannons(*shannons));

        Ok(BuildArgs {
            profile: config.network_profile(),
            config,
            cells,
            lock_arg: lock_arg.into_bytes(),
            data: data.into_bytes(),
            capacity,
        })
    }

    /// Executes `ckb-unique unique-id`, which needs no config file.
    pub fn unique_id(matches: &ArgMatches) -> Result<UniqueIdArgs, ExitCode> {
        let tx_hash = matches
            .get_one::<String>(cli::ARG_TX_HASH)
            .ok_or(ExitCode::Cli)?;
        let tx_hash = tx_hash
            .strip_prefix("0x")
            .and_then(|digits| H256::from_str(digits).ok())
            .ok_or_else(|| {
                eprintln!("{} expects a 0x-prefixed 32 bytes hash", cli::ARG_TX_HASH);
                ExitCode::Cli
            })?;
        let index = matches
            .get_one::<u32>(cli::ARG_INDEX)
            .copied()
            .unwrap_or_default();
        let output_index = matches
            .get_one::<u64>(cli::ARG_OUTPUT_INDEX)
            .copied()
            .unwrap_or_default();

        Ok(UniqueIdArgs {
            tx_hash,
            index,
            output_index,
        })
    }
}

fn hex_arg(matches: &ArgMatches, name: &str) -> Result<JsonBytes, ExitCode> {
    let value = matches.get_one::<String>(name).ok_or(ExitCode::Cli)?;
    JsonBytes::from_hex(value).map_err(|err| {
        eprintln!("{name}: {err}");
        ExitCode::Cli
    })
}
