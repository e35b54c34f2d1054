//! The essential rust types for building unique cell transactions.
//!
//! The structures here are plain data. Their canonical bytes live in [`packed`], and
//! [`TransactionView`] caches the bytes and the hash of a finished transaction.
//!
//! [`packed`]: ../packed/index.html

pub mod cell;
pub mod error;

mod advanced_builders;
mod capacity;
mod fee_rate;
mod script;
mod token_info;
mod transaction;
mod views;

pub use advanced_builders::TransactionBuilder;
pub use capacity::{Capacity, Error as CapacityError, Result as CapacityResult};
pub use fee_rate::FeeRate;
pub use script::{DepType, ScriptHashType};
pub use token_info::TokenInfo;
pub use transaction::{
    CellDep, CellInput, CellOutput, OutPoint, RawTransaction, Script, Transaction, WitnessArgs,
};
pub use views::TransactionView;

/// Transaction version.
pub type Version = u32;
