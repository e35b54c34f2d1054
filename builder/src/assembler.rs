use crate::{selector::SelectionResult, unique_id::UniqueId, Error};
use ckb_unique_types::{
    bytes::Bytes,
    core::{Capacity, CellDep, CellOutput, Script, TransactionBuilder, TransactionView, WitnessArgs},
    prelude::*,
};

/// What the unique cell looks like before its id is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniqueCell {
    /// Capacity of the unique cell.
    pub capacity: Capacity,
    /// The owner lock, also used by the change cell.
    pub lock: Script,
    /// The unique type script, its args are replaced by the id.
    pub type_template: Script,
    /// Data of the unique cell.
    pub data: Bytes,
}

/// Assembles the unsigned transaction.
///
/// Output 0 is the unique cell, output 1 is the change holding
/// `total - capacity - assumed_fee`.
pub fn assemble(
    selection: &SelectionResult,
    unique_id: &UniqueId,
    cell: &UniqueCell,
    cell_deps: &[CellDep],
    assumed_fee: Capacity,
) -> Result<TransactionView, Error> {
    if selection.cells.is_empty() {
        return Err(Error::NoLiveCell);
    }
    let change = change_capacity(selection.total_capacity, cell.capacity, assumed_fee)?;

    let unique_output = CellOutput {
        capacity: cell.capacity,
        lock: cell.lock.clone(),
        type_: Some(cell.type_template.clone().with_args(*unique_id)),
    };
    let change_output = CellOutput {
        capacity: change,
        lock: cell.lock.clone(),
        type_: None,
    };

    let placeholder = WitnessArgs::placeholder().pack()?;
    let witnesses = (0..selection.cells.len()).map(|i| {
        if i == 0 {
            placeholder.clone()
        } else {
            Bytes::new()
        }
    });

    let tx = TransactionBuilder::default()
        .cell_deps(cell_deps.iter().cloned())
        .inputs(selection.cells.iter().map(|cell| cell.as_input()))
        .output(unique_output)
        .output_data(cell.data.clone())
        .output(change_output)
        .output_data(Bytes::new())
        .witnesses(witnesses)
        .build()?;
    Ok(tx)
}

/// Sets the change, the last output, to `change`. Nothing else is touched.
pub fn refund(tx: &TransactionView, change: Capacity) -> Result<TransactionView, Error> {
    let last = tx.outputs().len().saturating_sub(1);
    Ok(tx
        .as_advanced_builder()
        .output_capacity(last, change)
        .build()?)
}

/// `total - target - fee`, or `InsufficientCapacity` when that is negative.
pub(crate) fn change_capacity(
    total: Capacity,
    target: Capacity,
    fee: Capacity,
) -> Result<Capacity, Error> {
    let required = target.safe_add(fee)?;
    total
        .safe_sub(required)
        .map_err(|_| Error::InsufficientCapacity {
            required,
            available: total,
        })
}

/// Outputs holding less than their occupied capacity, as `(index, occupied capacity)`.
pub(crate) fn lack_of_capacity_outputs(
    tx: &TransactionView,
) -> Result<Vec<(usize, Capacity)>, Error> {
    let mut lacking = Vec::new();
    for (idx, (output, data)) in tx.outputs().iter().zip(tx.outputs_data()).enumerate() {
        let data_capacity = Capacity::bytes(data.len())?;
        if output.is_lack_of_capacity(data_capacity)? {
            lacking.push((idx, output.occupied_capacity(data_capacity)?));
        }
    }
    Ok(lacking)
}
