//! The error type for the unique cell builder.

use ckb_unique_types::core::{error::EncodingError, Capacity, CapacityError};
use thiserror::Error;

/// A list specifying the reasons a unique cell transaction can not be built.
///
/// All of them end the build attempt, no partial transaction is returned.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The cell pool is empty.
    #[error("no live cell")]
    NoLiveCell,
    /// The pool can not cover the target and the fee, or the change would be negative.
    #[error("insufficient capacity: required {required}, available {available}")]
    InsufficientCapacity {
        /// Shannons needed.
        required: Capacity,
        /// Shannons found.
        available: Capacity,
    },
    /// A field can not be put into its canonical form.
    #[error("encoding: {0}")]
    Encoding(#[from] EncodingError),
    /// Capacity arithmetic overflowed `u64`.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The cell source failed to fetch live cells.
    #[error("cell source: {0}")]
    Source(String),
    /// The signer rejected the transaction.
    #[error("signer: {0}")]
    Signer(String),
    /// The transaction was not accepted for broadcast.
    #[error("broadcast: {0}")]
    Broadcast(String),
}

impl From<CapacityError> for Error {
    fn from(_: CapacityError) -> Self {
        Error::CapacityOverflow
    }
}
