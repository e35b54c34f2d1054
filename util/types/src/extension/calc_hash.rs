use ckb_unique_hash::blake2b_256;

use crate::{
    core::{error::EncodingError, RawTransaction, Script},
    prelude::*,
    H256,
};

impl Script {
    /// The script hash, blake2b-256 of the canonical script bytes.
    pub fn calc_script_hash(&self) -> Result<H256, EncodingError> {
        self.pack().map(|bytes| blake2b_256(&bytes).into())
    }
}

impl RawTransaction {
    /// The transaction hash, blake2b-256 of the canonical raw transaction bytes.
    ///
    /// Witnesses are not covered, so signing does not change it.
    pub fn calc_tx_hash(&self) -> Result<H256, EncodingError> {
        self.pack().map(|bytes| blake2b_256(&bytes).into())
    }
}
