use crate::{Broadcaster, CellSource, Signer};
use ckb_unique_app_config::NetworkProfile;
use ckb_unique_jsonrpc_types::{JsonBytes, Transaction, TransactionView};
use ckb_unique_types::{
    bytes::Bytes,
    core::{cell::LiveCell, Capacity, CellOutput, OutPoint, Script, TransactionBuilder},
    H256,
};
use std::cell::RefCell;

pub(crate) fn owner_lock() -> Script {
    NetworkProfile::testnet().secp256k1_lock(vec![0x11; 20])
}

pub(crate) fn live_cell(tx_byte: u8, index: u32, capacity: Capacity) -> LiveCell {
    LiveCell::new(
        OutPoint::new(H256([tx_byte; 32]), index),
        CellOutput {
            capacity,
            lock: owner_lock(),
            type_: None,
        },
        Bytes::new(),
    )
}

pub(crate) fn pool_of(capacities: &[Capacity]) -> Vec<LiveCell> {
    capacities
        .iter()
        .enumerate()
        .map(|(i, capacity)| live_cell(0xaa, i as u32, *capacity))
        .collect()
}

pub(crate) struct MemoryCellSource {
    pub(crate) cells: Vec<LiveCell>,
}

impl CellSource for MemoryCellSource {
    type Error = String;

    fn live_cells(&self, lock: &Script) -> Result<Vec<LiveCell>, String> {
        Ok(self
            .cells
            .iter()
            .filter(|cell| &cell.output.lock == lock)
            .cloned()
            .collect())
    }
}

pub(crate) struct FailingCellSource;

impl CellSource for FailingCellSource {
    type Error = &'static str;

    fn live_cells(&self, _lock: &Script) -> Result<Vec<LiveCell>, &'static str> {
        Err("indexer unreachable")
    }
}

/// Puts a fake 65 bytes signature into the lock of witness 0.
pub(crate) struct DummySigner;

impl Signer for DummySigner {
    type Error = String;

    fn sign(&self, tx: TransactionView) -> Result<Transaction, String> {
        let mut inner = tx.inner;
        let witness = inner
            .witnesses
            .first_mut()
            .ok_or_else(|| "no witness".to_owned())?;
        // WitnessArgs { lock: Some(65 bytes), input_type: None, output_type: None }
        let mut signed = Vec::new();
        signed.extend_from_slice(&85u32.to_le_bytes());
        signed.extend_from_slice(&16u32.to_le_bytes());
        signed.extend_from_slice(&85u32.to_le_bytes());
        signed.extend_from_slice(&85u32.to_le_bytes());
        signed.extend_from_slice(&65u32.to_le_bytes());
        signed.extend_from_slice(&[0x5a; 65]);
        *witness = JsonBytes::from_vec(signed);
        Ok(inner)
    }
}

pub(crate) struct RejectingSigner;

impl Signer for RejectingSigner {
    type Error = String;

    fn sign(&self, _tx: TransactionView) -> Result<Transaction, String> {
        Err("key locked".to_owned())
    }
}

/// Records what it is asked to send.
#[derive(Default)]
pub(crate) struct RecordingBroadcaster {
    pub(crate) sent: RefCell<Vec<Transaction>>,
}

impl Broadcaster for RecordingBroadcaster {
    type Error = String;

    fn send_transaction(&self, tx: Transaction) -> Result<H256, String> {
        let hash = TransactionBuilder::from(tx.clone())
            .build()
            .map_err(|err| err.to_string())?
            .hash();
        self.sent.borrow_mut().push(tx);
        Ok(hash)
    }
}
