use crate::{CellOutput, JsonBytes, OutPoint, Uint32, Uint64};
use ckb_unique_types::core::cell;
use serde::{Deserialize, Serialize};

/// A live cell as returned by the indexer `get_cells` RPC.
///
/// ## Examples
///
/// ```
/// # serde_json::from_str::<ckb_unique_jsonrpc_types::LiveCell>(r#"
/// {
///   "output": {
///     "capacity": "0x2540be400",
///     "lock": {
///       "code_hash": "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8",
///       "hash_type": "type",
///       "args": "0x"
///     },
///     "type": null
///   },
///   "output_data": "0x",
///   "out_point": {
///     "index": "0x0",
///     "tx_hash": "0x365698b50ca0da75dca2c87f9e7b563811d3b5813736b8cc62cc3b106faceb17"
///   },
///   "block_number": "0x10",
///   "tx_index": "0x1"
/// }
/// # "#).unwrap();
/// ```
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub struct LiveCell {
    /// The cell output.
    pub output: CellOutput,
    /// The cell data.
    #[serde(default)]
    pub output_data: JsonBytes,
    /// Where the cell lives.
    pub out_point: OutPoint,
    /// The number of the block that committed the cell.
    #[serde(default)]
    pub block_number: Uint64,
    /// The position of the creating transaction in its block.
    #[serde(default)]
    pub tx_index: Uint32,
}

impl From<LiveCell> for cell::LiveCell {
    fn from(json: LiveCell) -> Self {
        cell::LiveCell::new(
            json.out_point.into(),
            json.output.into(),
            json.output_data.into_bytes(),
        )
    }
}

impl From<cell::LiveCell> for LiveCell {
    fn from(input: cell::LiveCell) -> Self {
        LiveCell {
            output: input.output.into(),
            output_data: input.data.into(),
            out_point: input.out_point.into(),
            block_number: Default::default(),
            tx_index: Default::default(),
        }
    }
}
