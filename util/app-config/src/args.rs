use crate::{AppConfig, NetworkProfile};
use ckb_unique_types::{bytes::Bytes, core::Capacity, H256};
use std::path::PathBuf;

/// Parsed command line arguments for `ckb-unique build`.
pub struct BuildArgs {
    /// Parsed `ckb-unique.toml`, with command line overrides applied.
    pub config: AppConfig,
    /// Deployment selected by `builder.network`.
    pub profile: NetworkProfile,
    /// JSON file of live cells.
    pub cells: PathBuf,
    /// Owner lock args.
    pub lock_arg: Bytes,
    /// Unique cell data.
    pub data: Bytes,
    /// Unique cell capacity, `None` to use the minimum the data requires.
    pub capacity: Option<Capacity>,
}

/// Parsed command line arguments for `ckb-unique unique-id`.
pub struct UniqueIdArgs {
    pub tx_hash: H256,
    pub index: u32,
    pub output_index: u64,
}
