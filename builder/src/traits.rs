use ckb_unique_jsonrpc_types::{Transaction, TransactionView};
use ckb_unique_types::{
    core::{cell::LiveCell, Script},
    H256,
};
use std::fmt::Display;

/// Fetches the live cells an owner can spend, usually backed by an indexer.
pub trait CellSource {
    type Error: Display;

    /// Live cells locked by `lock`, in the order the selector should try them.
    fn live_cells(&self, lock: &Script) -> Result<Vec<LiveCell>, Self::Error>;
}

/// Fills the placeholder witness of an unsigned transaction.
pub trait Signer {
    type Error: Display;

    fn sign(&self, tx: TransactionView) -> Result<Transaction, Self::Error>;
}

/// Submits a signed transaction to a node.
pub trait Broadcaster {
    type Error: Display;

    /// Returns the hash the node reports for the accepted transaction.
    fn send_transaction(&self, tx: Transaction) -> Result<H256, Self::Error>;
}
