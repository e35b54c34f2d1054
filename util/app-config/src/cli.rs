//! Command line interface of `ckb-unique`.
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// binary file name(ckb-unique)
pub const BIN_NAME: &str = "ckb-unique";

/// Subcommand `build`.
pub const CMD_BUILD: &str = "build";
/// Subcommand `unique-id`.
pub const CMD_UNIQUE_ID: &str = "unique-id";

/// Command line argument `--config-dir`.
pub const ARG_CONFIG_DIR: &str = "config-dir";
/// Command line argument `--cells`.
pub const ARG_CELLS: &str = "cells";
/// Command line argument `--lock-arg`.
pub const ARG_LOCK_ARG: &str = "lock-arg";
/// Command line argument `--data`.
pub const ARG_DATA: &str = "data";
/// Command line argument `--token-name`.
pub const ARG_TOKEN_NAME: &str = "token-name";
/// Command line argument `--token-symbol`.
pub const ARG_TOKEN_SYMBOL: &str = "token-symbol";
/// Command line argument `--decimal`.
pub const ARG_DECIMAL: &str = "decimal";
/// Command line argument `--capacity`.
pub const ARG_CAPACITY: &str = "capacity";
/// Command line argument `--network`.
pub const ARG_NETWORK: &str = "network";
/// Command line argument `--fee-rate`.
pub const ARG_FEE_RATE: &str = "fee-rate";
/// Command line argument `--tx-hash`.
pub const ARG_TX_HASH: &str = "tx-hash";
/// Command line argument `--index`.
pub const ARG_INDEX: &str = "index";
/// Command line argument `--output-index`.
pub const ARG_OUTPUT_INDEX: &str = "output-index";

/// Root command of `ckb-unique`.
pub fn basic_app() -> Command {
    Command::new(BIN_NAME)
        .author("Nervos Core Dev <dev@nervos.org>")
        .about("Builds the transaction that issues a CKB unique cell")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_CONFIG_DIR)
                .global(true)
                .short('C')
                .long(ARG_CONFIG_DIR)
                .value_name("path")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help(
                    "Looks up ckb-unique.toml in <path> instead of the current working directory",
                ),
        )
        .subcommand(build())
        .subcommand(unique_id())
}

/// Parses the process arguments.
pub fn get_matches() -> ArgMatches {
    basic_app().get_matches()
}

pub(crate) fn build() -> Command {
    Command::new(CMD_BUILD)
        .about("Builds an unsigned unique cell transaction from a live cell snapshot")
        .arg(
            Arg::new(ARG_CELLS)
                .long(ARG_CELLS)
                .value_name("path")
                .required(true)
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("JSON file holding the owner's live cells, as returned by the indexer"),
        )
        .arg(
            Arg::new(ARG_LOCK_ARG)
                .long(ARG_LOCK_ARG)
                .value_name("blake160")
                .required(true)
                .action(ArgAction::Set)
                .help("The secp256k1 blake160 args of the owner lock, 0x-prefixed hex"),
        )
        .arg(
            Arg::new(ARG_DATA)
                .long(ARG_DATA)
                .value_name("hex")
                .default_value("0x")
                .action(ArgAction::Set)
                .help("Data of the unique cell, 0x-prefixed hex"),
        )
        .arg(
            Arg::new(ARG_TOKEN_NAME)
                .long(ARG_TOKEN_NAME)
                .value_name("name")
                .action(ArgAction::Set)
                .requires(ARG_TOKEN_SYMBOL)
                .conflicts_with(ARG_DATA)
                .help("Fills the unique cell data with token info instead of --data"),
        )
        .arg(
            Arg::new(ARG_TOKEN_SYMBOL)
                .long(ARG_TOKEN_SYMBOL)
                .value_name("symbol")
                .action(ArgAction::Set)
                .requires(ARG_TOKEN_NAME),
        )
        .arg(
            Arg::new(ARG_DECIMAL)
                .long(ARG_DECIMAL)
                .default_value("8")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u8))
                .help("Decimal places of the token"),
        )
        .arg(
            Arg::new(ARG_CAPACITY)
                .long(ARG_CAPACITY)
                .value_name("shannons")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("Capacity of the unique cell, defaults to the minimum its data requires"),
        )
        .arg(
            Arg::new(ARG_NETWORK)
                .long(ARG_NETWORK)
                .action(ArgAction::Set)
                .value_parser(["testnet", "mainnet"])
                .help("Overrides builder.network of the config file"),
        )
        .arg(
            Arg::new(ARG_FEE_RATE)
                .long(ARG_FEE_RATE)
                .value_name("shannons/KB")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("Overrides builder.fee_rate of the config file"),
        )
}

pub(crate) fn unique_id() -> Command {
    Command::new(CMD_UNIQUE_ID)
        .about("Derives the unique id seeded by a cell input")
        .arg(
            Arg::new(ARG_TX_HASH)
                .long(ARG_TX_HASH)
                .value_name("hash")
                .required(true)
                .action(ArgAction::Set)
                .help("Transaction hash of the first input's previous output"),
        )
        .arg(
            Arg::new(ARG_INDEX)
                .long(ARG_INDEX)
                .default_value("0")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u32))
                .help("Output index of the first input's previous output"),
        )
        .arg(
            Arg::new(ARG_OUTPUT_INDEX)
                .long(ARG_OUTPUT_INDEX)
                .default_value("0")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("Index of the unique cell in the transaction outputs"),
        )
}
