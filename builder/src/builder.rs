use crate::{
    assembler::{assemble, change_capacity, lack_of_capacity_outputs, refund, UniqueCell},
    fee::estimate_tx_fee,
    selector::select,
    traits::{Broadcaster, CellSource, Signer},
    unique_id::UniqueId,
    Error,
};
use ckb_unique_app_config::{BuilderConfig, NetworkProfile};
use ckb_unique_types::{
    bytes::Bytes,
    core::{cell::LiveCell, Capacity, Script, TransactionView},
    H256,
};
use log::{debug, info, warn};

/// Index of the unique cell in the transaction outputs.
const UNIQUE_CELL_OUTPUT_INDEX: u64 = 0;

/// An unsigned unique cell transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltTransaction {
    pub tx: TransactionView,
    /// The args of the unique type script in output 0.
    pub unique_id: UniqueId,
    /// The fee the change was balanced against.
    pub fee: Capacity,
}

/// Builds unique cell transactions with a fixed fee policy and network profile.
#[derive(Clone, Debug)]
pub struct UniqueCellBuilder {
    config: BuilderConfig,
    profile: NetworkProfile,
}

impl UniqueCellBuilder {
    /// Uses the deployment of `config.network`.
    pub fn new(config: BuilderConfig) -> Self {
        let profile = NetworkProfile::from_network(config.network);
        UniqueCellBuilder { config, profile }
    }

    pub fn with_profile(config: BuilderConfig, profile: NetworkProfile) -> Self {
        UniqueCellBuilder { config, profile }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn profile(&self) -> &NetworkProfile {
        &self.profile
    }

    /// Builds the unsigned transaction creating a unique cell of `capacity` locked by `lock`.
    ///
    /// Only pure capacity cells of `pool` are spent. The change goes back to `lock`.
    pub fn build(
        &self,
        pool: &[LiveCell],
        lock: &Script,
        capacity: Capacity,
        data: Bytes,
    ) -> Result<BuiltTransaction, Error> {
        if pool.is_empty() {
            return Err(Error::NoLiveCell);
        }
        let spendable: Vec<LiveCell> = pool
            .iter()
            .filter(|cell| cell.is_pure_capacity())
            .cloned()
            .collect();
        if spendable.len() < pool.len() {
            debug!(
                "skip {} cells with type script or data",
                pool.len() - spendable.len()
            );
        }

        let max_fee = self.config.max_fee();
        let selection = select(
            &spendable,
            capacity,
            max_fee,
            self.config.min_cell_capacity(),
        )?;
        let unique_id = UniqueId::derive(&selection.cells[0].as_input(), UNIQUE_CELL_OUTPUT_INDEX);

        let cell = UniqueCell {
            capacity,
            lock: lock.clone(),
            type_template: self.profile.unique_type_template(),
            data,
        };
        let tx = assemble(
            &selection,
            &unique_id,
            &cell,
            &self.profile.cell_deps(),
            max_fee,
        )?;

        let fee = estimate_tx_fee(&tx, self.config.fee_rate());
        if fee > max_fee {
            warn!(
                "fee {} of {} bytes exceeds the assumed max fee {}",
                fee,
                tx.serialized_size(),
                max_fee
            );
        }
        let change = change_capacity(selection.total_capacity, capacity, fee)?;
        debug!(
            "tx size {} bytes, fee {} shannons, change {} shannons",
            tx.serialized_size(),
            fee,
            change
        );
        let tx = refund(&tx, change)?;
        for (idx, occupied) in lack_of_capacity_outputs(&tx)? {
            warn!(
                "output {} capacity {} is below its occupied capacity {}",
                idx,
                tx.outputs()[idx].capacity,
                occupied
            );
        }

        info!(
            "built unique cell tx {:#x}, id {}, {} inputs, fee {}",
            tx.hash(),
            unique_id,
            tx.inputs().len(),
            fee
        );
        Ok(BuiltTransaction { tx, unique_id, fee })
    }

    /// Fetches the live cells of `lock`, builds, signs and broadcasts the transaction.
    ///
    /// Returns the hash reported by the broadcaster.
    pub fn create<S, G, B>(
        &self,
        lock: &Script,
        capacity: Capacity,
        data: Bytes,
        source: &S,
        signer: &G,
        broadcaster: &B,
    ) -> Result<H256, Error>
    where
        S: CellSource,
        G: Signer,
        B: Broadcaster,
    {
        let pool = source
            .live_cells(lock)
            .map_err(|err| Error::Source(err.to_string()))?;
        let built = self.build(&pool, lock, capacity, data)?;
        let tx_hash = built.tx.hash();

        let signed = signer
            .sign(built.tx.into())
            .map_err(|err| Error::Signer(err.to_string()))?;
        let sent_hash = broadcaster
            .send_transaction(signed)
            .map_err(|err| Error::Broadcast(err.to_string()))?;
        if sent_hash != tx_hash {
            warn!(
                "broadcaster reports tx {:#x}, built {:#x}",
                sent_hash, tx_hash
            );
        }
        info!("sent unique cell tx {:#x}", sent_hash);
        Ok(sent_hash)
    }
}
