use crate::constants::BYTE_SHANNONS;
use thiserror::Error;

/// CKB capacity.
///
/// It is encoded as the amount of `Shannons` internally.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Capacity(u64);

/// Numeric errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Numeric overflow.
    #[error("OccupiedCapacity: overflow")]
    Overflow,
}

/// Numeric operation result.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Builds a [`Capacity`] from CKBytes, checked at compile time when used in a constant.
///
/// ```
/// use ckb_unique_types::{capacity_bytes, core::Capacity};
///
/// assert_eq!(capacity_bytes!(61), Capacity::shannons(6_100_000_000));
/// ```
#[macro_export]
macro_rules! capacity_bytes {
    ($val:expr) => {
        $crate::core::Capacity::shannons(($val) * $crate::constants::BYTE_SHANNONS)
    };
}

impl Capacity {
    /// Capacity of zero Shannons.
    pub const fn zero() -> Self {
        Capacity(0)
    }

    /// Views the capacity as Shannons.
    pub const fn shannons(val: u64) -> Self {
        Capacity(val)
    }

    /// Views the capacity as CKBytes.
    pub fn bytes(val: usize) -> Result<Self> {
        (val as u64)
            .checked_mul(BYTE_SHANNONS)
            .map(Capacity::shannons)
            .ok_or(Error::Overflow)
    }

    /// Views the capacity as Shannons.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Adds self and rhs and checks overflow error.
    pub fn safe_add<C: Into<Capacity>>(self, rhs: C) -> Result<Self> {
        self.0
            .checked_add(rhs.into().0)
            .map(Capacity::shannons)
            .ok_or(Error::Overflow)
    }

    /// Subtracts self and rhs and checks overflow error.
    pub fn safe_sub<C: Into<Capacity>>(self, rhs: C) -> Result<Self> {
        self.0
            .checked_sub(rhs.into().0)
            .map(Capacity::shannons)
            .ok_or(Error::Overflow)
    }
}

impl From<u64> for Capacity {
    fn from(val: u64) -> Self {
        Self::shannons(val)
    }
}

impl ::std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        self.0.fmt(f)
    }
}
