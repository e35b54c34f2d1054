//! Live cells, the unspent outputs a transaction may consume.

use crate::{
    bytes::Bytes,
    core::{CellInput, CellOutput, OutPoint},
};

/// A live cell observed on chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveCell {
    /// Where the cell lives.
    pub out_point: OutPoint,
    /// The cell output.
    pub output: CellOutput,
    /// The cell data.
    pub data: Bytes,
}

impl LiveCell {
    pub fn new(out_point: OutPoint, output: CellOutput, data: Bytes) -> Self {
        LiveCell {
            out_point,
            output,
            data,
        }
    }

    /// Returns true if the cell holds nothing but capacity: no type script and no data.
    pub fn is_pure_capacity(&self) -> bool {
        self.output.type_.is_none() && self.data.is_empty()
    }

    /// The input spending this cell, with no `since` restriction.
    pub fn as_input(&self) -> CellInput {
        CellInput::new(self.out_point.clone(), 0)
    }
}
