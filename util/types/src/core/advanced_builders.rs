//! Advanced builders for Transaction(View).

use crate::{
    bytes::Bytes,
    constants,
    core::{self, error::EncodingError, Capacity},
    packed::Pack,
    H256,
};

/*
 * Definitions
 */

#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    pub(crate) version: core::Version,
    pub(crate) cell_deps: Vec<core::CellDep>,
    pub(crate) header_deps: Vec<H256>,
    pub(crate) inputs: Vec<core::CellInput>,
    pub(crate) outputs: Vec<core::CellOutput>,
    pub(crate) witnesses: Vec<Bytes>,
    pub(crate) outputs_data: Vec<Bytes>,
}

/*
 * Implement std traits.
 */

impl ::std::default::Default for TransactionBuilder {
    fn default() -> Self {
        Self {
            version: constants::TX_VERSION,
            cell_deps: Default::default(),
            header_deps: Default::default(),
            inputs: Default::default(),
            outputs: Default::default(),
            witnesses: Default::default(),
            outputs_data: Default::default(),
        }
    }
}

/*
 * Implementations.
 */

macro_rules! def_setter_for_vector {
    ($field:ident, $type:ty, $func_push:ident, $func_extend:ident, $func_set:ident) => {
        pub fn $func_push(mut self, v: $type) -> Self {
            self.$field.push(v);
            self
        }
        pub fn $func_extend<T>(mut self, v: T) -> Self
        where
            T: ::std::iter::IntoIterator<Item = $type>,
        {
            self.$field.extend(v);
            self
        }
        pub fn $func_set(mut self, v: Vec<$type>) -> Self {
            self.$field = v;
            self
        }
    };
}

impl TransactionBuilder {
    pub fn version(mut self, v: core::Version) -> Self {
        self.version = v;
        self
    }

    def_setter_for_vector!(cell_deps, core::CellDep, cell_dep, cell_deps, set_cell_deps);
    def_setter_for_vector!(header_deps, H256, header_dep, header_deps, set_header_deps);
    def_setter_for_vector!(inputs, core::CellInput, input, inputs, set_inputs);
    def_setter_for_vector!(outputs, core::CellOutput, output, outputs, set_outputs);
    def_setter_for_vector!(witnesses, Bytes, witness, witnesses, set_witnesses);
    def_setter_for_vector!(
        outputs_data,
        Bytes,
        output_data,
        outputs_data,
        set_outputs_data
    );

    /// Replaces the capacity of the output at `index`, leaving everything else untouched.
    ///
    /// Does nothing when there is no such output.
    pub fn output_capacity(mut self, index: usize, capacity: Capacity) -> Self {
        if let Some(output) = self.outputs.get_mut(index) {
            output.capacity = capacity;
        }
        self
    }

    pub fn build(self) -> Result<core::TransactionView, EncodingError> {
        let Self {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            witnesses,
            outputs_data,
        } = self;
        let raw = core::RawTransaction {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
        };
        let tx = core::Transaction { raw, witnesses };
        let packed = tx.pack()?;
        let hash = tx.raw.calc_tx_hash()?;
        Ok(core::TransactionView {
            data: tx,
            packed,
            hash,
        })
    }
}

impl core::TransactionView {
    /// Creates an advanced builder base on current data.
    pub fn as_advanced_builder(&self) -> TransactionBuilder {
        let core::Transaction { raw, witnesses } = self.data.clone();
        TransactionBuilder {
            version: raw.version,
            cell_deps: raw.cell_deps,
            header_deps: raw.header_deps,
            inputs: raw.inputs,
            outputs: raw.outputs,
            witnesses,
            outputs_data: raw.outputs_data,
        }
    }
}
