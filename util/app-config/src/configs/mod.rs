mod builder;
mod logger;
mod profile;

pub use builder::{
    BuilderConfig, NetworkType, DEFAULT_FEE_RATE, DEFAULT_MAX_FEE, DEFAULT_MIN_CELL_CAPACITY,
};
pub use logger::Config as LogConfig;
pub use profile::{NetworkProfile, SECP256K1_BLAKE160_SIGHASH_ALL_TYPE_HASH};
