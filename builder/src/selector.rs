use crate::Error;
use ckb_unique_types::core::{cell::LiveCell, Capacity};
use log::debug;

/// The inputs chosen for a transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionResult {
    /// Chosen cells in pool order. The first one seeds the unique id.
    pub cells: Vec<LiveCell>,
    /// Sum of the chosen cells' capacity.
    pub total_capacity: Capacity,
}

/// First-fit selection in pool order.
///
/// Cells below `min_cell_capacity` are skipped, then cells are taken until their total reaches
/// `target + fee_reserve`. Fails with `NoLiveCell` when the pool is empty, or when nothing passes
/// the floor and there is nothing to pay.
pub fn select(
    pool: &[LiveCell],
    target: Capacity,
    fee_reserve: Capacity,
    min_cell_capacity: Capacity,
) -> Result<SelectionResult, Error> {
    if pool.is_empty() {
        return Err(Error::NoLiveCell);
    }
    let required = target.safe_add(fee_reserve)?;

    let mut cells = Vec::new();
    let mut total_capacity = Capacity::zero();
    for cell in pool
        .iter()
        .filter(|cell| cell.output.capacity >= min_cell_capacity)
    {
        total_capacity = total_capacity.safe_add(cell.output.capacity)?;
        cells.push(cell.clone());
        if total_capacity >= required {
            debug!(
                "selected {} of {} cells, total {} shannons, required {}",
                cells.len(),
                pool.len(),
                total_capacity,
                required
            );
            return Ok(SelectionResult {
                cells,
                total_capacity,
            });
        }
    }

    if cells.is_empty() && required == Capacity::zero() {
        debug!("no cell of {} reaches the floor {}", pool.len(), min_cell_capacity);
        return Err(Error::NoLiveCell);
    }
    debug!(
        "pool of {} cells holds {} usable shannons, required {}",
        pool.len(),
        total_capacity,
        required
    );
    Err(Error::InsufficientCapacity {
        required,
        available: total_capacity,
    })
}
