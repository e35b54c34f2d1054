use crate::core::Capacity;

const KB: u64 = 1000;

/// shannons per kilobytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeRate(u64);

impl FeeRate {
    pub const fn from_u64(fee_per_kb: u64) -> Self {
        FeeRate(fee_per_kb)
    }

    pub const fn zero() -> Self {
        Self::from_u64(0)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The fee for a transaction of `size` bytes, rounded up to the next shannon.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn fee(self, size: usize) -> Capacity {
        let base = self.0.saturating_mul(size as u64);
        Capacity::shannons(base.div_ceil(KB))
    }
}

impl ::std::fmt::Display for FeeRate {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
