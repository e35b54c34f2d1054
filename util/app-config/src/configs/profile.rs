use crate::NetworkType;
use ckb_unique_types::{
    bytes::Bytes,
    core::{CellDep, DepType, OutPoint, Script, ScriptHashType},
    h256, H256,
};

/// Code hash of the secp256k1_blake160_sighash_all lock, the same on both networks.
pub const SECP256K1_BLAKE160_SIGHASH_ALL_TYPE_HASH: H256 =
    h256!("0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8");

/// Deployment of the scripts a unique cell transaction depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkProfile {
    secp256k1_dep: CellDep,
    unique_dep: CellDep,
    unique_type_code_hash: H256,
    unique_type_hash_type: ScriptHashType,
}

impl NetworkProfile {
    pub const fn testnet() -> Self {
        NetworkProfile {
            secp256k1_dep: CellDep::new(
                OutPoint::new(
                    h256!("0xf8de3bb47d055cdf460d93a2a6e1b05f7432f9777c8c474abf4eec1d4aee5d37"),
                    0,
                ),
                DepType::DepGroup,
            ),
            unique_dep: CellDep::new(
                OutPoint::new(
                    h256!("0xff91b063c78ed06f10a1ed436122bd7d671f9a72ef5f5fa28d05252c17cf4cef"),
                    0,
                ),
                DepType::Code,
            ),
            unique_type_code_hash: h256!(
                "0x8e341bcfec6393dcd41e635733ff2dca00a6af546949f70c57a706c0f344df8b"
            ),
            unique_type_hash_type: ScriptHashType::Type,
        }
    }

    pub const fn mainnet() -> Self {
        NetworkProfile {
            secp256k1_dep: CellDep::new(
                OutPoint::new(
                    h256!("0x71a7ba8fc96349fea0ed3a5c47992e3b4084b031a42264a018e0072e8172e46c"),
                    0,
                ),
                DepType::DepGroup,
            ),
            unique_dep: CellDep::new(
                OutPoint::new(
                    h256!("0x67524c01c0cb5492e499c7c7e406f2f9d823e162d6b0cf432eacde0c9808c2ad"),
                    0,
                ),
                DepType::Code,
            ),
            unique_type_code_hash: h256!(
                "0x2c8c11c985da60b0a330c61a85507416d6382c130ba67f0c47ab071e00aec628"
            ),
            unique_type_hash_type: ScriptHashType::Data1,
        }
    }

    pub const fn from_network(network: NetworkType) -> Self {
        match network {
            NetworkType::Testnet => Self::testnet(),
            NetworkType::Mainnet => Self::mainnet(),
        }
    }

    pub fn secp256k1_dep(&self) -> &CellDep {
        &self.secp256k1_dep
    }

    pub fn unique_dep(&self) -> &CellDep {
        &self.unique_dep
    }

    /// The cell deps of a unique cell transaction, the secp256k1 dep group first.
    pub fn cell_deps(&self) -> Vec<CellDep> {
        vec![self.secp256k1_dep.clone(), self.unique_dep.clone()]
    }

    /// The unique type script with empty args, to be filled with the derived id.
    pub fn unique_type_template(&self) -> Script {
        Script::new(
            self.unique_type_code_hash,
            self.unique_type_hash_type,
            Bytes::new(),
        )
    }

    /// A secp256k1_blake160_sighash_all lock over the given blake160 args.
    pub fn secp256k1_lock<B: Into<Bytes>>(&self, args: B) -> Script {
        Script::new(
            SECP256K1_BLAKE160_SIGHASH_ALL_TYPE_HASH,
            ScriptHashType::Type,
            args.into(),
        )
    }
}
