use ckb_unique_types::core::{Capacity, FeeRate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The default fee rate, in shannons per KB.
pub const DEFAULT_FEE_RATE: u64 = 1_100;
/// 0.2 CKB, the fee assumed by the first assembling pass.
pub const DEFAULT_MAX_FEE: u64 = 20_000_000;
/// 61 CKB, a cell below it can not even hold a secp256k1 lock.
pub const DEFAULT_MIN_CELL_CAPACITY: u64 = 6_100_000_000;

/// The chain the transaction is built for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkType {
    /// Aggron, the public testnet.
    #[default]
    Testnet,
    /// Lina, the mainnet.
    Mainnet,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Testnet => write!(f, "testnet"),
            NetworkType::Mainnet => write!(f, "mainnet"),
        }
    }
}

impl std::str::FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "testnet" => Ok(NetworkType::Testnet),
            "mainnet" => Ok(NetworkType::Mainnet),
            _ => Err(format!("unknown network {s}, expect testnet or mainnet")),
        }
    }
}

/// Fee policy and selection floor of the unique cell builder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderConfig {
    /// Which network profile supplies the cell deps and the unique type script.
    #[serde(default)]
    pub network: NetworkType,
    /// Fee rate in shannons per KB.
    #[serde(default = "default_fee_rate")]
    pub fee_rate: u64,
    /// The fee assumed before the transaction size is known, in shannons.
    #[serde(default = "default_max_fee")]
    pub max_fee: u64,
    /// Pool cells holding less than this, in shannons, are never selected.
    #[serde(default = "default_min_cell_capacity")]
    pub min_cell_capacity: u64,
}

const fn default_fee_rate() -> u64 {
    DEFAULT_FEE_RATE
}

const fn default_max_fee() -> u64 {
    DEFAULT_MAX_FEE
}

const fn default_min_cell_capacity() -> u64 {
    DEFAULT_MIN_CELL_CAPACITY
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            network: NetworkType::default(),
            fee_rate: DEFAULT_FEE_RATE,
            max_fee: DEFAULT_MAX_FEE,
            min_cell_capacity: DEFAULT_MIN_CELL_CAPACITY,
        }
    }
}

impl BuilderConfig {
    pub fn fee_rate(&self) -> FeeRate {
        FeeRate::from_u64(self.fee_rate)
    }

    pub fn max_fee(&self) -> Capacity {
        Capacity::shannons(self.max_fee)
    }

    pub fn min_cell_capacity(&self) -> Capacity {
        Capacity::shannons(self.min_cell_capacity)
    }
}
