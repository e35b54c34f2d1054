use crate::{bytes::JsonBytes, Capacity, Uint32, Uint64, Version};
use ckb_unique_types::{core, H256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifies how the script `code_hash` is used to match the script code and how to run the code.
///
/// Allowed kinds: "data", "type", "data1" and "data2".
#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ScriptHashType {
    /// Type "data" matches script code via cell data hash, and run the script code in v0 CKB VM.
    #[default]
    Data = 0,
    /// Type "type" matches script code via cell type script hash.
    Type = 1,
    /// Type "data1" matches script code via cell data hash, and run the script code in v1 CKB VM.
    Data1 = 2,
    /// Type "data2" matches script code via cell data hash, and run the script code in v2 CKB VM.
    Data2 = 4,
}

impl From<ScriptHashType> for core::ScriptHashType {
    fn from(json: ScriptHashType) -> Self {
        match json {
            ScriptHashType::Data => core::ScriptHashType::Data,
            ScriptHashType::Type => core::ScriptHashType::Type,
            ScriptHashType::Data1 => core::ScriptHashType::Data1,
            ScriptHashType::Data2 => core::ScriptHashType::Data2,
        }
    }
}

impl From<core::ScriptHashType> for ScriptHashType {
    fn from(core: core::ScriptHashType) -> ScriptHashType {
        match core {
            core::ScriptHashType::Data => ScriptHashType::Data,
            core::ScriptHashType::Type => ScriptHashType::Type,
            core::ScriptHashType::Data1 => ScriptHashType::Data1,
            core::ScriptHashType::Data2 => ScriptHashType::Data2,
        }
    }
}

impl fmt::Display for ScriptHashType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", core::ScriptHashType::from(*self))
    }
}

/// Describes the lock script and type script for a cell.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_unique_jsonrpc_types::Script>(r#"
/// {
///   "code_hash": "0x8e341bcfec6393dcd41e635733ff2dca00a6af546949f70c57a706c0f344df8b",
///   "hash_type": "type",
///   "args": "0x"
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// The hash used to match the script code.
    pub code_hash: H256,
    /// Specifies how to use the `code_hash` to match the script code.
    pub hash_type: ScriptHashType,
    /// Arguments for script.
    pub args: JsonBytes,
}

impl From<Script> for core::Script {
    fn from(json: Script) -> Self {
        let Script {
            code_hash,
            hash_type,
            args,
        } = json;
        core::Script::new(code_hash, hash_type.into(), args.into_bytes())
    }
}

impl From<core::Script> for Script {
    fn from(input: core::Script) -> Script {
        Script {
            code_hash: input.code_hash,
            hash_type: input.hash_type.into(),
            args: JsonBytes::from_bytes(input.args),
        }
    }
}

/// The fields of an output cell except the cell data.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_unique_jsonrpc_types::CellOutput>(r#"
/// {
///   "capacity": "0x2540be400",
///   "lock": {
///     "code_hash": "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
///     "hash_type": "type",
///     "args": "0x"
///   },
///   "type": null
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellOutput {
    /// The cell capacity.
    ///
    /// The capacity of a cell is the value of the cell in Shannons. It is also the upper limit of
    /// the cell occupied storage size where every 100,000,000 Shannons give 1-byte storage.
    pub capacity: Capacity,
    /// The lock script.
    pub lock: Script,
    /// The optional type script.
    ///
    /// The JSON field name is "type".
    #[serde(rename = "type")]
    pub type_: Option<Script>,
}

impl From<core::CellOutput> for CellOutput {
    fn from(input: core::CellOutput) -> CellOutput {
        CellOutput {
            capacity: input.capacity.into(),
            lock: input.lock.into(),
            type_: input.type_.map(Into::into),
        }
    }
}

impl From<CellOutput> for core::CellOutput {
    fn from(json: CellOutput) -> Self {
        let CellOutput {
            capacity,
            lock,
            type_,
        } = json;
        core::CellOutput {
            capacity: capacity.into(),
            lock: lock.into(),
            type_: type_.map(Into::into),
        }
    }
}

/// Reference to a cell via transaction hash and output index.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct OutPoint {
    /// Transaction hash in which the cell is an output.
    pub tx_hash: H256,
    /// The output index of the cell in the transaction specified by `tx_hash`.
    pub index: Uint32,
}

impl From<core::OutPoint> for OutPoint {
    fn from(input: core::OutPoint) -> OutPoint {
        OutPoint {
            tx_hash: input.tx_hash,
            index: input.index.into(),
        }
    }
}

impl From<OutPoint> for core::OutPoint {
    fn from(json: OutPoint) -> Self {
        core::OutPoint::new(json.tx_hash, json.index.value())
    }
}

/// The input cell of a transaction.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellInput {
    /// Restrict when the transaction can be committed into the chain.
    pub since: Uint64,
    /// Reference to the input cell.
    pub previous_output: OutPoint,
}

impl From<core::CellInput> for CellInput {
    fn from(input: core::CellInput) -> CellInput {
        CellInput {
            since: input.since.into(),
            previous_output: input.previous_output.into(),
        }
    }
}

impl From<CellInput> for core::CellInput {
    fn from(json: CellInput) -> Self {
        core::CellInput::new(json.previous_output.into(), json.since.value())
    }
}

/// The dep cell type. Allowed values: "code" and "dep_group".
#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum DepType {
    /// Type "code".
    ///
    /// Use the cell itself as the dep cell.
    #[default]
    Code,
    /// Type "dep_group".
    ///
    /// The cell is a dep group which members are cells. These members are used as dep cells
    /// instead of the group itself.
    DepGroup,
}

impl From<DepType> for core::DepType {
    fn from(json: DepType) -> Self {
        match json {
            DepType::Code => core::DepType::Code,
            DepType::DepGroup => core::DepType::DepGroup,
        }
    }
}

impl From<core::DepType> for DepType {
    fn from(core: core::DepType) -> DepType {
        match core {
            core::DepType::Code => DepType::Code,
            core::DepType::DepGroup => DepType::DepGroup,
        }
    }
}

/// The cell dependency of a transaction.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct CellDep {
    /// Reference to the cell.
    pub out_point: OutPoint,
    /// Dependency type.
    pub dep_type: DepType,
}

impl From<core::CellDep> for CellDep {
    fn from(input: core::CellDep) -> Self {
        CellDep {
            out_point: input.out_point.into(),
            dep_type: input.dep_type.into(),
        }
    }
}

impl From<CellDep> for core::CellDep {
    fn from(json: CellDep) -> Self {
        core::CellDep::new(json.out_point.into(), json.dep_type.into())
    }
}

/// The transaction.
///
/// Refer to RFC [CKB Transaction Structure](https://github.com/nervosnetwork/rfcs/blob/master/rfcs/0022-transaction-structure/0022-transaction-structure.md).
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    /// Reserved for future usage. It must equal 0 in current version.
    pub version: Version,
    /// An array of cell deps.
    pub cell_deps: Vec<CellDep>,
    /// An array of header deps.
    pub header_deps: Vec<H256>,
    /// An array of input cells.
    pub inputs: Vec<CellInput>,
    /// An array of output cells.
    pub outputs: Vec<CellOutput>,
    /// Output cells data.
    ///
    /// This is a parallel array of outputs. The cell capacity, lock, and type of the output i is
    /// `outputs[i]` and its data is `outputs_data[i]`.
    pub outputs_data: Vec<JsonBytes>,
    /// An array of variable-length binaries.
    ///
    /// This is a parallel array of inputs, the placeholder slots of an unsigned transaction are
    /// filled by the signer.
    pub witnesses: Vec<JsonBytes>,
}

/// The JSON view of a Transaction.
///
/// This structure is serialized into a JSON object with field `hash` and all the fields in
/// [`Transaction`](struct.Transaction.html).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct TransactionView {
    /// All the fields in `Transaction` are included in `TransactionView` in JSON.
    #[serde(flatten)]
    pub inner: Transaction,
    /// The transaction hash.
    pub hash: H256,
}

impl From<core::Transaction> for Transaction {
    fn from(input: core::Transaction) -> Self {
        let core::Transaction { raw, witnesses } = input;
        Self {
            version: raw.version.into(),
            cell_deps: raw.cell_deps.into_iter().map(Into::into).collect(),
            header_deps: raw.header_deps,
            inputs: raw.inputs.into_iter().map(Into::into).collect(),
            outputs: raw.outputs.into_iter().map(Into::into).collect(),
            outputs_data: raw.outputs_data.into_iter().map(Into::into).collect(),
            witnesses: witnesses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Transaction> for core::TransactionBuilder {
    fn from(json: Transaction) -> Self {
        let Transaction {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
            witnesses,
        } = json;
        core::TransactionBuilder::default()
            .version(version.value())
            .cell_deps(cell_deps.into_iter().map(Into::into))
            .header_deps(header_deps)
            .inputs(inputs.into_iter().map(Into::into))
            .outputs(outputs.into_iter().map(Into::into))
            .outputs_data(outputs_data.into_iter().map(Into::into))
            .witnesses(witnesses.into_iter().map(Into::into))
    }
}

impl From<core::TransactionView> for TransactionView {
    fn from(input: core::TransactionView) -> Self {
        Self {
            hash: input.hash(),
            inner: input.data().clone().into(),
        }
    }
}
