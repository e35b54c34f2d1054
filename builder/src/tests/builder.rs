use crate::{
    assembler::lack_of_capacity_outputs,
    fee::{estimate_tx_fee, DEFAULT_FEE_RATE, MAX_FEE, SECP256K1_WITNESS_LOCK_SIZE},
    select,
    tests::util::*,
    Error, UniqueCellBuilder, UniqueId,
};
use ckb_unique_app_config::{BuilderConfig, NetworkProfile, NetworkType};
use ckb_unique_types::{
    bytes::Bytes,
    capacity_bytes,
    core::{cell::LiveCell, Capacity, ScriptHashType},
    H256,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn config(max_fee: Capacity) -> BuilderConfig {
    BuilderConfig {
        max_fee: max_fee.as_u64(),
        ..Default::default()
    }
}

fn data() -> Bytes {
    Bytes::from(vec![0x08, 0x12, 0x34])
}

fn assert_conserved(pool_total: Capacity, target: Capacity, built: &crate::BuiltTransaction) {
    let change = built.tx.outputs()[1].capacity;
    assert_eq!(
        pool_total,
        target.safe_add(change).unwrap().safe_add(built.fee).unwrap()
    );
    assert_eq!(
        pool_total,
        built.tx.outputs_capacity().unwrap().safe_add(built.fee).unwrap()
    );
}

#[test]
fn one_cell_pays_target_and_refunds_fee() {
    let builder = UniqueCellBuilder::new(config(capacity_bytes!(100)));
    let pool = pool_of(&[capacity_bytes!(500)]);
    let target = capacity_bytes!(200);

    let selection = select(&pool, target, capacity_bytes!(100), capacity_bytes!(61)).unwrap();
    assert_eq!(selection.cells, pool);
    assert_eq!(selection.total_capacity, capacity_bytes!(500));

    let built = builder.build(&pool, &owner_lock(), target, data()).unwrap();
    assert_eq!(
        built.unique_id.to_string(),
        "0x0f0325663fb55e76c8899d222a0bec60fe7ecf74"
    );
    assert_eq!(built.tx.serialized_size() + SECP256K1_WITNESS_LOCK_SIZE, 573);
    assert_eq!(built.fee, Capacity::shannons(631));
    assert!(built.fee < capacity_bytes!(100));
    assert!(built.tx.outputs()[1].capacity > capacity_bytes!(200));
    assert_eq!(
        built.tx.outputs()[1].capacity,
        Capacity::shannons(30_000_000_000 - 631)
    );
    assert_conserved(capacity_bytes!(500), target, &built);
    assert!(lack_of_capacity_outputs(&built.tx).unwrap().is_empty());
}

#[test]
fn cells_below_floor_can_not_pay() {
    let builder = UniqueCellBuilder::new(config(Capacity::zero()));
    let pool = pool_of(&[capacity_bytes!(50), capacity_bytes!(60)]);
    assert_eq!(
        builder.build(&pool, &owner_lock(), capacity_bytes!(100), Bytes::new()),
        Err(Error::InsufficientCapacity {
            required: capacity_bytes!(100),
            available: Capacity::zero(),
        })
    );
}

#[test]
fn empty_pool() {
    let builder = UniqueCellBuilder::new(BuilderConfig::default());
    assert_eq!(
        builder.build(&[], &owner_lock(), capacity_bytes!(200), data()),
        Err(Error::NoLiveCell)
    );
}

#[test]
fn exact_fit_leaves_zero_change() {
    let builder = UniqueCellBuilder::new(config(Capacity::shannons(631)));
    let target = capacity_bytes!(200);
    let total = target.safe_add(Capacity::shannons(631)).unwrap();
    let pool = pool_of(&[total]);

    let built = builder.build(&pool, &owner_lock(), target, data()).unwrap();
    assert_eq!(built.fee, Capacity::shannons(631));
    assert_eq!(built.tx.outputs()[1].capacity, Capacity::zero());
    assert_conserved(total, target, &built);
    // the zero change can not hold its own lock, which is only warned about
    assert_eq!(
        lack_of_capacity_outputs(&built.tx).unwrap(),
        vec![(1, capacity_bytes!(61))]
    );
}

#[test]
fn refund_can_not_go_negative() {
    // the assumed fee is too low to cover the real one
    let builder = UniqueCellBuilder::new(config(Capacity::shannons(100)));
    let target = capacity_bytes!(200);
    let pool = pool_of(&[target.safe_add(Capacity::shannons(100)).unwrap()]);
    assert_eq!(
        builder.build(&pool, &owner_lock(), target, data()),
        Err(Error::InsufficientCapacity {
            required: target.safe_add(Capacity::shannons(631)).unwrap(),
            available: target.safe_add(Capacity::shannons(100)).unwrap(),
        })
    );
}

#[test]
fn typed_cells_are_not_spent() {
    let builder = UniqueCellBuilder::new(BuilderConfig::default());
    let mut typed = live_cell(0xbb, 0, capacity_bytes!(1000));
    typed.output.type_ = Some(NetworkProfile::testnet().unique_type_template());
    let mut with_data = live_cell(0xcc, 0, capacity_bytes!(1000));
    with_data.data = Bytes::from(vec![1]);
    let plain = live_cell(0xdd, 3, capacity_bytes!(1000));

    let built = builder
        .build(
            &[typed.clone(), with_data.clone(), plain.clone()],
            &owner_lock(),
            capacity_bytes!(200),
            data(),
        )
        .unwrap();
    assert_eq!(built.tx.inputs(), &[plain.as_input()]);
    assert_eq!(built.unique_id, UniqueId::derive(&plain.as_input(), 0));

    assert_eq!(
        builder.build(&[typed, with_data], &owner_lock(), capacity_bytes!(200), data()),
        Err(Error::NoLiveCell)
    );
}

#[test]
fn network_profile_drives_deps_and_type() {
    let mainnet = BuilderConfig {
        network: NetworkType::Mainnet,
        ..Default::default()
    };
    let builder = UniqueCellBuilder::new(mainnet);
    let pool = pool_of(&[capacity_bytes!(1000)]);
    let built = builder
        .build(&pool, &owner_lock(), capacity_bytes!(200), data())
        .unwrap();

    let profile = NetworkProfile::mainnet();
    assert_eq!(builder.profile(), &profile);
    assert_eq!(built.tx.cell_deps(), &profile.cell_deps()[..]);
    let type_ = built.tx.outputs()[0].type_.clone().unwrap();
    assert_eq!(type_.hash_type, ScriptHashType::Data1);
    assert_eq!(&type_.args[..], built.unique_id.as_bytes());
}

#[test]
fn fee_follows_measured_size() {
    let builder = UniqueCellBuilder::new(BuilderConfig::default());
    let pool = pool_of(&[
        capacity_bytes!(100),
        capacity_bytes!(100),
        capacity_bytes!(100),
    ]);
    let built = builder
        .build(&pool, &owner_lock(), capacity_bytes!(250), Bytes::new())
        .unwrap();
    assert_eq!(built.tx.inputs().len(), 3);
    assert_eq!(built.tx.witnesses().len(), 3);
    assert_eq!(built.fee, estimate_tx_fee(&built.tx, DEFAULT_FEE_RATE));
    assert!(built.fee < MAX_FEE);
    assert_conserved(capacity_bytes!(300), capacity_bytes!(250), &built);
}

#[test]
fn create_signs_and_sends() {
    let builder = UniqueCellBuilder::new(BuilderConfig::default());
    let mut foreign = live_cell(0xee, 0, capacity_bytes!(10_000));
    foreign.output.lock = NetworkProfile::testnet().secp256k1_lock(vec![0x22; 20]);
    let source = MemoryCellSource {
        cells: vec![foreign, live_cell(0xaa, 0, capacity_bytes!(500))],
    };
    let broadcaster = RecordingBroadcaster::default();

    let hash = builder
        .create(
            &owner_lock(),
            capacity_bytes!(200),
            data(),
            &source,
            &DummySigner,
            &broadcaster,
        )
        .unwrap();

    let expected = builder
        .build(&source.cells[1..], &owner_lock(), capacity_bytes!(200), data())
        .unwrap();
    assert_eq!(hash, expected.tx.hash());
    let sent = broadcaster.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].inputs.len(), 1);
    assert_eq!(sent[0].witnesses[0].len(), 85);
}

#[test]
fn create_reports_collaborator_failures() {
    let builder = UniqueCellBuilder::new(BuilderConfig::default());
    let broadcaster = RecordingBroadcaster::default();
    assert_eq!(
        builder.create(
            &owner_lock(),
            capacity_bytes!(200),
            data(),
            &FailingCellSource,
            &DummySigner,
            &broadcaster,
        ),
        Err(Error::Source("indexer unreachable".to_owned()))
    );

    let source = MemoryCellSource {
        cells: pool_of(&[capacity_bytes!(500)]),
    };
    assert_eq!(
        builder.create(
            &owner_lock(),
            capacity_bytes!(200),
            data(),
            &source,
            &RejectingSigner,
            &broadcaster,
        ),
        Err(Error::Signer("key locked".to_owned()))
    );
    assert!(broadcaster.sent.borrow().is_empty());

    let empty = MemoryCellSource { cells: Vec::new() };
    assert_eq!(
        builder.create(
            &owner_lock(),
            capacity_bytes!(200),
            data(),
            &empty,
            &DummySigner,
            &broadcaster,
        ),
        Err(Error::NoLiveCell)
    );
}

fn arb_pool() -> impl Strategy<Value = Vec<LiveCell>> {
    prop::collection::vec(61u64..2_000, 1..8).prop_map(|capacities| {
        capacities
            .into_iter()
            .enumerate()
            .map(|(i, ckb)| live_cell(i as u8, i as u32, capacity_bytes!(ckb)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, ..ProptestConfig::default()
    })]
    #[test]
    fn two_pass_fee_law(pool in arb_pool(), target in 126u64..4_000, data_len in 0usize..64) {
        let builder = UniqueCellBuilder::new(BuilderConfig::default());
        let target = capacity_bytes!(target);
        let data = Bytes::from(vec![0u8; data_len]);

        match builder.build(&pool, &owner_lock(), target, data.clone()) {
            Ok(built) => {
                let tx = &built.tx;
                let total = tx
                    .inputs()
                    .iter()
                    .map(|input| {
                        pool.iter()
                            .find(|cell| cell.out_point == input.previous_output)
                            .unwrap()
                            .output
                            .capacity
                            .as_u64()
                    })
                    .sum::<u64>();
                prop_assert_eq!(tx.outputs().len(), 2);
                prop_assert_eq!(tx.outputs().len(), tx.outputs_data().len());
                prop_assert_eq!(tx.inputs().len(), tx.witnesses().len());
                prop_assert_eq!(&tx.outputs_data()[0], &data);
                prop_assert_eq!(built.fee, estimate_tx_fee(tx, DEFAULT_FEE_RATE));
                prop_assert_eq!(
                    total,
                    target.as_u64() + tx.outputs()[1].capacity.as_u64() + built.fee.as_u64()
                );
                prop_assert_eq!(
                    built.unique_id,
                    UniqueId::derive(&tx.inputs()[0], 0)
                );
            }
            Err(Error::InsufficientCapacity { .. }) => {}
            Err(err) => prop_assert!(false, "unexpected {}", err),
        }
    }
}

#[test]
fn broadcast_hash_matches_unsigned_hash() {
    // witnesses are not covered by the tx hash
    let builder = UniqueCellBuilder::new(BuilderConfig::default());
    let pool = pool_of(&[capacity_bytes!(500)]);
    let built = builder
        .build(&pool, &owner_lock(), capacity_bytes!(200), data())
        .unwrap();
    let broadcaster = RecordingBroadcaster::default();
    let source = MemoryCellSource { cells: pool };
    let hash: H256 = builder
        .create(
            &owner_lock(),
            capacity_bytes!(200),
            data(),
            &source,
            &DummySigner,
            &broadcaster,
        )
        .unwrap();
    assert_eq!(hash, built.tx.hash());
}
