//! Wrappers for JSON serialization.
//!
//! Numbers are rendered as 0x-prefixed hexadecimal strings and byte fields as 0x-prefixed hex,
//! which is the format CKB nodes accept on their JSON-RPC interface.
mod blockchain;
mod bytes;
mod cell;
mod uints;


pub use self::blockchain::{
    CellDep, CellInput, CellOutput, DepType, OutPoint, Script, ScriptHashType, Transaction,
    TransactionView,
};
pub use self::bytes::JsonBytes;
pub use self::cell::LiveCell;
pub use self::uints::{Uint32, Uint64};
pub use ckb_unique_types::H256;

/// The capacity of a cell, in shannons.
pub type Capacity = Uint64;
/// The transaction version.
pub type Version = Uint32;
