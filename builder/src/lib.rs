//! Builds the transaction that issues a CKB unique cell.
//!
//! A unique cell carries a type script whose args are derived from the first input of the very
//! transaction creating it. Since a cell can be spent only once, no two unique cells share an id.
//!
//! The build is a sequential pipeline: select inputs, derive the id, assemble with an assumed
//! maximum fee, measure the size and refund the unused fee to the change output.

mod assembler;
mod builder;
mod error;
pub mod fee;
mod selector;
mod traits;
mod unique_id;

#[cfg(test)]
mod tests;

pub use assembler::{assemble, refund, UniqueCell};
pub use builder::{BuiltTransaction, UniqueCellBuilder};
pub use error::Error;
pub use selector::{select, SelectionResult};
pub use traits::{Broadcaster, CellSource, Signer};
pub use unique_id::UniqueId;
