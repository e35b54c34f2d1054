use crate::{
    bytes::Bytes,
    core::{Capacity, CapacityResult, DepType, ScriptHashType, Version},
    H256,
};

/// Reference to a cell via transaction hash and output index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutPoint {
    /// Transaction hash in which the cell is an output.
    pub tx_hash: H256,
    /// The output index of the cell in the transaction specified by `tx_hash`.
    pub index: u32,
}

impl OutPoint {
    pub const fn new(tx_hash: H256, index: u32) -> Self {
        OutPoint { tx_hash, index }
    }
}

/// The input cell of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellInput {
    /// Restrict when the transaction can be committed into the chain.
    pub since: u64,
    /// Reference to the input cell.
    pub previous_output: OutPoint,
}

impl CellInput {
    pub fn new(previous_output: OutPoint, since: u64) -> Self {
        CellInput {
            since,
            previous_output,
        }
    }
}

/// The cell dependency of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellDep {
    /// Reference to the cell.
    pub out_point: OutPoint,
    /// Dependency type.
    pub dep_type: DepType,
}

impl CellDep {
    pub const fn new(out_point: OutPoint, dep_type: DepType) -> Self {
        CellDep {
            out_point,
            dep_type,
        }
    }
}

/// Describes the lock script and type script for a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Script {
    /// The hash used to match the script code.
    pub code_hash: H256,
    /// Specifies how to use the `code_hash` to match the script code.
    pub hash_type: ScriptHashType,
    /// Arguments for script.
    pub args: Bytes,
}

impl Script {
    pub fn new(code_hash: H256, hash_type: ScriptHashType, args: Bytes) -> Self {
        Script {
            code_hash,
            hash_type,
            args,
        }
    }

    /// Returns the same script with `args` replaced.
    pub fn with_args<B: Into<Bytes>>(mut self, args: B) -> Self {
        self.args = args.into();
        self
    }

    /// Calculates the occupied capacity of `Script`.
    ///
    /// Includes `code_hash` (32), `hash_type` (1) and `args` (calculated).
    pub fn occupied_capacity(&self) -> CapacityResult<Capacity> {
        Capacity::bytes(self.args.len() + 32 + 1)
    }
}

/// The fields of an output cell except the cell data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellOutput {
    /// The cell capacity, in shannons.
    pub capacity: Capacity,
    /// The lock script.
    pub lock: Script,
    /// The optional type script.
    pub type_: Option<Script>,
}

impl CellOutput {
    /// Calculates the occupied capacity of `CellOutput`.
    ///
    /// Includes `output_data` (provided), `capacity` (8), `lock` (calculated) and `type` (calculated).
    pub fn occupied_capacity(&self, data_capacity: Capacity) -> CapacityResult<Capacity> {
        let base = Capacity::bytes(8)?
            .safe_add(data_capacity)?
            .safe_add(self.lock.occupied_capacity()?)?;
        match self.type_ {
            Some(ref type_) => base.safe_add(type_.occupied_capacity()?),
            None => Ok(base),
        }
    }

    /// Returns if the `capacity` in `CellOutput` is smaller than the occupied capacity.
    pub fn is_lack_of_capacity(&self, data_capacity: Capacity) -> CapacityResult<bool> {
        self.occupied_capacity(data_capacity)
            .map(|cap| cap > self.capacity)
    }
}

/// The witness layout used by the lock and type scripts.
///
/// A placeholder is a `WitnessArgs` with every field absent. It reserves the slot the signer
/// later fills with the lock signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WitnessArgs {
    /// Witness for the lock script of the input.
    pub lock: Option<Bytes>,
    /// Witness for the type script of the input.
    pub input_type: Option<Bytes>,
    /// Witness for the type script of the output at the same index.
    pub output_type: Option<Bytes>,
}

impl WitnessArgs {
    /// The placeholder witness with all fields empty.
    pub fn placeholder() -> Self {
        Self::default()
    }
}

/// The part of a transaction that is covered by the transaction hash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTransaction {
    pub version: Version,
    pub cell_deps: Vec<CellDep>,
    pub header_deps: Vec<H256>,
    pub inputs: Vec<CellInput>,
    pub outputs: Vec<CellOutput>,
    pub outputs_data: Vec<Bytes>,
}

/// A whole transaction, raw part plus witnesses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transaction {
    pub raw: RawTransaction,
    pub witnesses: Vec<Bytes>,
}
