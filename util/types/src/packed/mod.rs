//! Canonical molecule encoding of the core types.
//!
//! The layout is the one CKB consensus uses, so the bytes produced here hash and size exactly as
//! a node sees them:
//!
//! - `struct`: fields concatenated, fixed size.
//! - `fixvec`: item count (`u32`) followed by fixed-size items.
//! - `dynvec` and `table`: total size (`u32`), one offset (`u32`) per item, then the items.
//! - `option`: empty for `None`, the inner encoding for `Some`.
//!
//! All numbers are little-endian.

use molecule::{pack_number, Number, NUMBER_SIZE};

use crate::{
    bytes::Bytes,
    core::{
        error::EncodingError, CellDep, CellInput, CellOutput, OutPoint, RawTransaction, Script,
        Transaction, WitnessArgs,
    },
    H256,
};

/// Size of an encoded `OutPoint`.
pub const OUT_POINT_SIZE: usize = 32 + 4;
/// Size of an encoded `CellInput`.
pub const CELL_INPUT_SIZE: usize = 8 + OUT_POINT_SIZE;
/// Size of an encoded `CellDep`.
pub const CELL_DEP_SIZE: usize = OUT_POINT_SIZE + 1;

/// Types which have a canonical molecule encoding.
pub trait Pack {
    /// Appends the canonical bytes of `self` to `buf`.
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError>;

    /// Returns the canonical bytes of `self`.
    fn pack(&self) -> Result<Bytes, EncodingError> {
        let mut buf = Vec::new();
        self.pack_into(&mut buf)?;
        Ok(buf.into())
    }
}

fn number(field: &'static str, len: usize) -> Result<Number, EncodingError> {
    Number::try_from(len).map_err(|_| EncodingError::Oversized {
        field,
        max: Number::MAX as usize,
        actual: len,
    })
}

/// Writes a fixvec of fixed-size items.
fn pack_fixvec<T: Pack>(
    field: &'static str,
    items: &[T],
    buf: &mut Vec<u8>,
) -> Result<(), EncodingError> {
    buf.extend_from_slice(&pack_number(number(field, items.len())?));
    for item in items {
        item.pack_into(buf)?;
    }
    Ok(())
}

/// Writes the header and the parts of a table or a dynvec, which share one layout.
fn pack_dynamic(
    field: &'static str,
    parts: &[Vec<u8>],
    buf: &mut Vec<u8>,
) -> Result<(), EncodingError> {
    let header_size = NUMBER_SIZE * (1 + parts.len());
    let total_size = header_size + parts.iter().map(Vec::len).sum::<usize>();
    buf.extend_from_slice(&pack_number(number(field, total_size)?));
    let mut offset = header_size;
    for part in parts {
        buf.extend_from_slice(&pack_number(number(field, offset)?));
        offset += part.len();
    }
    for part in parts {
        buf.extend_from_slice(part);
    }
    Ok(())
}

fn pack_part<T: Pack + ?Sized>(item: &T) -> Result<Vec<u8>, EncodingError> {
    let mut part = Vec::new();
    item.pack_into(&mut part)?;
    Ok(part)
}

fn pack_dynvec<T: Pack>(
    field: &'static str,
    items: &[T],
    buf: &mut Vec<u8>,
) -> Result<(), EncodingError> {
    let parts = items.iter().map(pack_part).collect::<Result<Vec<_>, _>>()?;
    pack_dynamic(field, &parts, buf)
}

fn pack_option<T: Pack>(item: &Option<T>, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
    match item {
        Some(inner) => inner.pack_into(buf),
        None => Ok(()),
    }
}

/*
 * Primitives.
 */

impl Pack for u32 {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        buf.extend_from_slice(&self.to_le_bytes());
        Ok(())
    }
}

impl Pack for u64 {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        buf.extend_from_slice(&self.to_le_bytes());
        Ok(())
    }
}

impl Pack for H256 {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        buf.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl Pack for [u8] {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        buf.extend_from_slice(&pack_number(number("bytes", self.len())?));
        buf.extend_from_slice(self);
        Ok(())
    }
}

impl Pack for Bytes {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        self[..].pack_into(buf)
    }
}

/*
 * Structs.
 */

impl Pack for OutPoint {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        self.tx_hash.pack_into(buf)?;
        self.index.pack_into(buf)
    }
}

impl Pack for CellInput {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        self.since.pack_into(buf)?;
        self.previous_output.pack_into(buf)
    }
}

impl Pack for CellDep {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        self.out_point.pack_into(buf)?;
        buf.push(self.dep_type.as_byte());
        Ok(())
    }
}

/*
 * Tables.
 */

impl Pack for Script {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        let parts = [
            pack_part(&self.code_hash)?,
            vec![self.hash_type.as_byte()],
            pack_part(&self.args)?,
        ];
        pack_dynamic("script", &parts, buf)
    }
}

impl Pack for CellOutput {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        let mut type_ = Vec::new();
        pack_option(&self.type_, &mut type_)?;
        let parts = [
            pack_part(&self.capacity.as_u64())?,
            pack_part(&self.lock)?,
            type_,
        ];
        pack_dynamic("cell_output", &parts, buf)
    }
}

impl Pack for WitnessArgs {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        let mut parts = [Vec::new(), Vec::new(), Vec::new()];
        pack_option(&self.lock, &mut parts[0])?;
        pack_option(&self.input_type, &mut parts[1])?;
        pack_option(&self.output_type, &mut parts[2])?;
        pack_dynamic("witness_args", &parts, buf)
    }
}

impl Pack for RawTransaction {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        let mut cell_deps = Vec::with_capacity(NUMBER_SIZE + self.cell_deps.len() * CELL_DEP_SIZE);
        pack_fixvec("cell_deps", &self.cell_deps, &mut cell_deps)?;
        let mut header_deps = Vec::with_capacity(NUMBER_SIZE + self.header_deps.len() * 32);
        pack_fixvec("header_deps", &self.header_deps, &mut header_deps)?;
        let mut inputs = Vec::with_capacity(NUMBER_SIZE + self.inputs.len() * CELL_INPUT_SIZE);
        pack_fixvec("inputs", &self.inputs, &mut inputs)?;
        let mut outputs = Vec::new();
        pack_dynvec("outputs", &self.outputs, &mut outputs)?;
        let mut outputs_data = Vec::new();
        pack_dynvec("outputs_data", &self.outputs_data, &mut outputs_data)?;
        let parts = [
            pack_part(&self.version)?,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
        ];
        pack_dynamic("raw_transaction", &parts, buf)
    }
}

impl Pack for Transaction {
    fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), EncodingError> {
        let mut witnesses = Vec::new();
        pack_dynvec("witnesses", &self.witnesses, &mut witnesses)?;
        let parts = [pack_part(&self.raw)?, witnesses];
        pack_dynamic("transaction", &parts, buf)
    }
}

/*
 * Decoding of the fixed-size structs.
 */

impl OutPoint {
    /// Reads an `OutPoint` back from its canonical bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self, EncodingError> {
        if slice.len() != OUT_POINT_SIZE {
            return Err(EncodingError::InvalidLength {
                field: "out_point",
                expected: OUT_POINT_SIZE,
                actual: slice.len(),
            });
        }
        let (tx_hash, index) = slice.split_at(32);
        let tx_hash = H256::from_slice(tx_hash).map_err(|_| EncodingError::InvalidLength {
            field: "tx_hash",
            expected: 32,
            actual: tx_hash.len(),
        })?;
        let mut le = [0u8; 4];
        le.copy_from_slice(index);
        Ok(OutPoint::new(tx_hash, u32::from_le_bytes(le)))
    }
}

impl CellInput {
    /// The canonical bytes. A fixed-size struct, so this cannot fail.
    pub fn to_bytes(&self) -> [u8; CELL_INPUT_SIZE] {
        let mut bytes = [0u8; CELL_INPUT_SIZE];
        bytes[..8].copy_from_slice(&self.since.to_le_bytes());
        bytes[8..40].copy_from_slice(self.previous_output.tx_hash.as_bytes());
        bytes[40..].copy_from_slice(&self.previous_output.index.to_le_bytes());
        bytes
    }

    /// Reads a `CellInput` back from its canonical bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self, EncodingError> {
        if slice.len() != CELL_INPUT_SIZE {
            return Err(EncodingError::InvalidLength {
                field: "cell_input",
                expected: CELL_INPUT_SIZE,
                actual: slice.len(),
            });
        }
        let (since, previous_output) = slice.split_at(8);
        let mut le = [0u8; 8];
        le.copy_from_slice(since);
        Ok(CellInput::new(
            OutPoint::from_slice(previous_output)?,
            u64::from_le_bytes(le),
        ))
    }
}

impl CellDep {
    /// Reads a `CellDep` back from its canonical bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self, EncodingError> {
        if slice.len() != CELL_DEP_SIZE {
            return Err(EncodingError::InvalidLength {
                field: "cell_dep",
                expected: CELL_DEP_SIZE,
                actual: slice.len(),
            });
        }
        let (out_point, dep_type) = slice.split_at(OUT_POINT_SIZE);
        Ok(CellDep::new(
            OutPoint::from_slice(out_point)?,
            dep_type[0].try_into()?,
        ))
    }
}
