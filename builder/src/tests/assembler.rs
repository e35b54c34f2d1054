use crate::{
    assemble,
    assembler::lack_of_capacity_outputs,
    refund,
    tests::util::{owner_lock, pool_of},
    Error, SelectionResult, UniqueCell, UniqueId,
};
use ckb_unique_app_config::NetworkProfile;
use ckb_unique_types::{
    bytes::Bytes,
    capacity_bytes,
    core::{Capacity, WitnessArgs},
    prelude::*,
};
use pretty_assertions::assert_eq;

fn selection(capacities: &[Capacity]) -> SelectionResult {
    let cells = pool_of(capacities);
    let total_capacity = capacities
        .iter()
        .try_fold(Capacity::zero(), |acc, c| acc.safe_add(*c))
        .unwrap();
    SelectionResult {
        cells,
        total_capacity,
    }
}

fn unique_cell(capacity: Capacity) -> UniqueCell {
    UniqueCell {
        capacity,
        lock: owner_lock(),
        type_template: NetworkProfile::testnet().unique_type_template(),
        data: Bytes::from(vec![0x08, 0x12, 0x34]),
    }
}

#[test]
fn layout() {
    let selection = selection(&[capacity_bytes!(300), capacity_bytes!(200)]);
    let id = UniqueId::derive(&selection.cells[0].as_input(), 0);
    let profile = NetworkProfile::testnet();
    let tx = assemble(
        &selection,
        &id,
        &unique_cell(capacity_bytes!(200)),
        &profile.cell_deps(),
        capacity_bytes!(100),
    )
    .unwrap();

    assert_eq!(tx.version(), 0);
    assert_eq!(tx.cell_deps(), &profile.cell_deps()[..]);
    assert!(tx.header_deps().is_empty());
    assert_eq!(tx.inputs().len(), 2);
    assert_eq!(tx.inputs()[1], selection.cells[1].as_input());
    assert_eq!(tx.inputs()[0].since, 0);

    let (unique, data) = tx.output_with_data(0).unwrap();
    assert_eq!(unique.capacity, capacity_bytes!(200));
    assert_eq!(unique.lock, owner_lock());
    let type_ = unique.type_.as_ref().unwrap();
    assert_eq!(type_.code_hash, profile.unique_type_template().code_hash);
    assert_eq!(&type_.args[..], id.as_bytes());
    assert_eq!(&data[..], &[0x08, 0x12, 0x34]);

    let (change, data) = tx.output_with_data(1).unwrap();
    assert_eq!(change.capacity, capacity_bytes!(200));
    assert_eq!(change.lock, owner_lock());
    assert!(change.type_.is_none());
    assert!(data.is_empty());

    assert_eq!(tx.witnesses().len(), tx.inputs().len());
    assert_eq!(tx.witnesses()[0], WitnessArgs::placeholder().pack().unwrap());
    assert!(tx.witnesses()[1].is_empty());
}

#[test]
fn exact_fit_leaves_zero_change() {
    let selection = selection(&[capacity_bytes!(300)]);
    let id = UniqueId::derive(&selection.cells[0].as_input(), 0);
    let tx = assemble(
        &selection,
        &id,
        &unique_cell(capacity_bytes!(200)),
        &NetworkProfile::testnet().cell_deps(),
        capacity_bytes!(100),
    )
    .unwrap();
    assert_eq!(tx.outputs()[1].capacity, Capacity::zero());
}

#[test]
fn negative_change() {
    let selection = selection(&[capacity_bytes!(250)]);
    let id = UniqueId::derive(&selection.cells[0].as_input(), 0);
    assert_eq!(
        assemble(
            &selection,
            &id,
            &unique_cell(capacity_bytes!(200)),
            &[],
            capacity_bytes!(100),
        ),
        Err(Error::InsufficientCapacity {
            required: capacity_bytes!(300),
            available: capacity_bytes!(250),
        })
    );
}

#[test]
fn empty_selection() {
    let selection = selection(&[]);
    assert_eq!(
        assemble(
            &selection,
            &UniqueId::default(),
            &unique_cell(Capacity::zero()),
            &[],
            Capacity::zero(),
        ),
        Err(Error::NoLiveCell)
    );
}

#[test]
fn refund_only_touches_change() {
    let selection = selection(&[capacity_bytes!(500)]);
    let id = UniqueId::derive(&selection.cells[0].as_input(), 0);
    let tx = assemble(
        &selection,
        &id,
        &unique_cell(capacity_bytes!(200)),
        &NetworkProfile::testnet().cell_deps(),
        capacity_bytes!(100),
    )
    .unwrap();
    let refunded = refund(&tx, Capacity::shannons(29_999_999_369)).unwrap();

    assert_ne!(refunded.hash(), tx.hash());
    assert_eq!(refunded.serialized_size(), tx.serialized_size());
    assert_eq!(refunded.outputs()[0], tx.outputs()[0]);
    assert_eq!(refunded.outputs()[1].capacity, Capacity::shannons(29_999_999_369));
    assert_eq!(refunded.outputs()[1].lock, tx.outputs()[1].lock);
    assert_eq!(refunded.inputs(), tx.inputs());
    assert_eq!(refunded.cell_deps(), tx.cell_deps());
    assert_eq!(refunded.outputs_data(), tx.outputs_data());
    assert_eq!(refunded.witnesses(), tx.witnesses());
}

#[test]
fn outputs_below_occupied_capacity() {
    let selection = selection(&[capacity_bytes!(500)]);
    let id = UniqueId::derive(&selection.cells[0].as_input(), 0);
    let deps = NetworkProfile::testnet().cell_deps();

    // 8 capacity + 53 lock + 53 type + 3 data
    let tx = assemble(&selection, &id, &unique_cell(capacity_bytes!(100)), &deps, Capacity::zero())
        .unwrap();
    assert_eq!(
        lack_of_capacity_outputs(&tx).unwrap(),
        vec![(0, capacity_bytes!(117))]
    );

    let tx = assemble(&selection, &id, &unique_cell(capacity_bytes!(117)), &deps, Capacity::zero())
        .unwrap();
    assert!(lack_of_capacity_outputs(&tx).unwrap().is_empty());

    let tx = refund(&tx, capacity_bytes!(60)).unwrap();
    assert_eq!(
        lack_of_capacity_outputs(&tx).unwrap(),
        vec![(1, capacity_bytes!(61))]
    );
}
