//! All Constants.

use crate::core::Version;

/// Current transaction version.
pub const TX_VERSION: Version = 0;

/// The number of shannons in one CKByte.
pub const BYTE_SHANNONS: u64 = 100_000_000;

/// The size of the offset slot a transaction takes in a block's transaction vector.
///
/// It is counted in the transaction size that fee rates apply to.
pub const TX_VEC_OFFSET_SIZE: usize = 4;
