//! Immutable transaction view with caches (bytes and hash).

use crate::{
    bytes::Bytes,
    constants::TX_VEC_OFFSET_SIZE,
    core::{CellDep, CellInput, CellOutput, Capacity, CapacityResult, Transaction, Version},
    H256,
};

/*
 * Definitions
 *
 * ### Warning
 *
 * Please DO NOT implement `Default`, use builders to construct views.
 */

/// A finished transaction together with its canonical bytes and hash.
#[derive(Debug, Clone)]
pub struct TransactionView {
    pub(crate) data: Transaction,
    pub(crate) packed: Bytes,
    pub(crate) hash: H256,
}

impl ::std::fmt::Display for TransactionView {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(
            f,
            "TransactionView {{ hash: {:#x}, inputs: {}, outputs: {}, size: {} }}",
            self.hash,
            self.data.raw.inputs.len(),
            self.data.raw.outputs.len(),
            self.serialized_size()
        )
    }
}

impl TransactionView {
    /// The underlying transaction.
    pub fn data(&self) -> &Transaction {
        &self.data
    }

    /// The transaction hash, blake2b-256 of the canonical raw transaction.
    pub fn hash(&self) -> H256 {
        self.hash
    }

    /// The canonical bytes of the whole transaction, witnesses included.
    pub fn packed(&self) -> &Bytes {
        &self.packed
    }

    pub fn version(&self) -> Version {
        self.data.raw.version
    }

    pub fn cell_deps(&self) -> &[CellDep] {
        &self.data.raw.cell_deps
    }

    pub fn header_deps(&self) -> &[H256] {
        &self.data.raw.header_deps
    }

    pub fn inputs(&self) -> &[CellInput] {
        &self.data.raw.inputs
    }

    pub fn outputs(&self) -> &[CellOutput] {
        &self.data.raw.outputs
    }

    pub fn outputs_data(&self) -> &[Bytes] {
        &self.data.raw.outputs_data
    }

    pub fn witnesses(&self) -> &[Bytes] {
        &self.data.witnesses
    }

    pub fn output(&self, idx: usize) -> Option<&CellOutput> {
        self.data.raw.outputs.get(idx)
    }

    pub fn output_with_data(&self, idx: usize) -> Option<(&CellOutput, &Bytes)> {
        self.output(idx)
            .and_then(|output| self.data.raw.outputs_data.get(idx).map(|data| (output, data)))
    }

    /// Sums the capacities of all outputs.
    pub fn outputs_capacity(&self) -> CapacityResult<Capacity> {
        self.data
            .raw
            .outputs
            .iter()
            .try_fold(Capacity::zero(), |acc, output| acc.safe_add(output.capacity))
    }

    /// The size the fee rate applies to.
    ///
    /// Counts the offset slot the transaction takes in a block on top of its own bytes.
    pub fn serialized_size(&self) -> usize {
        self.packed.len() + TX_VEC_OFFSET_SIZE
    }
}

impl PartialEq for TransactionView {
    fn eq(&self, other: &Self) -> bool {
        self.packed == other.packed
    }
}

impl Eq for TransactionView {}
