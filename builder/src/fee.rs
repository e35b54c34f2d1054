//! Size based fee estimation.
use ckb_unique_app_config::{DEFAULT_FEE_RATE as DEFAULT_SHANNONS_PER_KB, DEFAULT_MAX_FEE};
use ckb_unique_types::{
    capacity_bytes,
    core::{Capacity, CapacityResult, FeeRate, TransactionView},
};

/// Size of the secp256k1 recoverable signature the signer puts into witness 0.
pub const SECP256K1_WITNESS_LOCK_SIZE: usize = 65;

/// The fee assumed by the first assembling pass, 0.2 CKB.
pub const MAX_FEE: Capacity = Capacity::shannons(DEFAULT_MAX_FEE);

/// 1100 shannons per KB.
pub const DEFAULT_FEE_RATE: FeeRate = FeeRate::from_u64(DEFAULT_SHANNONS_PER_KB);

/// A secp256k1 locked cell without type and data occupies 61 CKB.
pub const MIN_CELL_CAPACITY: Capacity = capacity_bytes!(61);

/// Headroom granted to the unique cell on top of [`MIN_CELL_CAPACITY`], enough for the type
/// script.
const UNIQUE_TYPE_CAPACITY: Capacity = capacity_bytes!(65);

/// The fee of `size` bytes at `fee_rate`, rounded up.
pub fn estimate(size: usize, fee_rate: FeeRate) -> Capacity {
    fee_rate.fee(size)
}

/// The fee of `tx` once its first witness carries a secp256k1 signature.
pub fn estimate_tx_fee(tx: &TransactionView, fee_rate: FeeRate) -> Capacity {
    estimate(
        tx.serialized_size() + SECP256K1_WITNESS_LOCK_SIZE,
        fee_rate,
    )
}

/// The capacity given to a unique cell holding `data_len` bytes of data.
pub fn unique_cell_capacity(data_len: usize) -> CapacityResult<Capacity> {
    MIN_CELL_CAPACITY
        .safe_add(UNIQUE_TYPE_CAPACITY)?
        .safe_add(Capacity::bytes(data_len)?)
}
