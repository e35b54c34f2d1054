use ckb_unique_hash::new_blake2b;
use ckb_unique_types::{bytes::Bytes, core::CellInput, H160};
use std::fmt;

/// The identifier carried as the args of the unique type script.
///
/// It is the first 20 bytes of
/// `blake2b_256(canonical bytes of the first input || output index as u64 le)`, so it is bound
/// to a cell that can only be spent once.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct UniqueId(H160);

impl UniqueId {
    /// Size of the id in bytes.
    pub const SIZE: usize = 20;

    pub fn derive(first_input: &CellInput, output_index: u64) -> Self {
        let mut hasher = new_blake2b();
        hasher.update(&first_input.to_bytes());
        hasher.update(&output_index.to_le_bytes());
        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut id = [0u8; Self::SIZE];
        id.copy_from_slice(&hash[..Self::SIZE]);
        UniqueId(H160(id))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<UniqueId> for Bytes {
    fn from(id: UniqueId) -> Self {
        Bytes::copy_from_slice(id.as_bytes())
    }
}

impl From<UniqueId> for H160 {
    fn from(id: UniqueId) -> Self {
        id.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
