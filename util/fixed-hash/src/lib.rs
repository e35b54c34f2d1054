//! Provide several simple fixed-sized hash data type and their static constructors.
//!
//! Hash literals known at compile time are built with the [`h160!`] and [`h256!`] macros:
//!
//! ```
//! use ckb_unique_fixed_hash::{h256, H256};
//!
//! const CODE_HASH: H256 =
//!     h256!("0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8");
//! assert_eq!(CODE_HASH.as_bytes()[0], 0x9b);
//! ```
pub mod error;

mod impls;
mod serde;
mod std_fmt;
mod std_str;

#[cfg(test)]
mod tests;

/// The 20 bytes fixed hash type.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct H160(pub [u8; 20]);

/// The 32 bytes fixed hash type.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct H256(pub [u8; 32]);

/// Builds an [`H160`] from a hexadecimal literal at compile time.
///
/// The literal may carry a `0x` prefix. An invalid literal fails the build when used in a
/// constant context.
#[macro_export]
macro_rules! h160 {
    ($input:expr) => {
        $crate::H160::from_hex_const($input)
    };
}

/// Builds an [`H256`] from a hexadecimal literal at compile time.
///
/// The literal may carry a `0x` prefix. An invalid literal fails the build when used in a
/// constant context.
#[macro_export]
macro_rules! h256 {
    ($input:expr) => {
        $crate::H256::from_hex_const($input)
    };
}
