//! CKB default hash function.
//!
//! CKB uses [blake2b] with the following configurations as the default hash function.
//!
//! * output digest size: 32
//! * personalization: ckb-default-hash
//!
//! [blake2b]: https://blake2.net/blake2.pdf
#![cfg_attr(not(test), no_std)]

#[cfg(not(target_arch = "wasm32"))]
pub use blake2b_native::{Blake2b, Blake2bBuilder};
#[cfg(target_arch = "wasm32")]
pub use blake2b_wasm::{Blake2b, Blake2bBuilder};

#[doc(hidden)]
pub const BLAKE2B_KEY: &[u8] = &[];
/// Output digest size.
pub const BLAKE2B_LEN: usize = 32;
/// Blake2b personalization.
pub const CKB_HASH_PERSONALIZATION: &[u8] = b"ckb-default-hash";
/// The hash output on empty input.
///
/// ## Examples
///
/// ```
/// use ckb_unique_hash::{BLANK_HASH, blake2b_256};
///
/// assert_eq!(BLANK_HASH, blake2b_256(&b""));
/// ```
pub const BLANK_HASH: [u8; 32] = [
    68, 244, 198, 151, 68, 213, 248, 197, 93, 100, 32, 98, 148, 157, 202, 228, 155, 196, 231, 239,
    67, 211, 136, 197, 161, 47, 66, 181, 99, 61, 22, 62,
];

/// Creates a new hasher which can be used to compute the hash of any number of slices.
///
/// ## Examples
///
/// ```
/// use ckb_unique_hash::new_blake2b;
///
/// let mut hasher = new_blake2b();
/// let mut result = [0u8; 32];
/// hasher.update(b"abc");
/// hasher.finalize(&mut result);
/// ```
pub fn new_blake2b() -> Blake2b {
    Blake2bBuilder::new(BLAKE2B_LEN)
        .personal(CKB_HASH_PERSONALIZATION)
        .key(BLAKE2B_KEY)
        .build()
}

/// Computes the hash of a single slice.
pub fn blake2b_256<T: AsRef<[u8]>>(s: T) -> [u8; 32] {
    if s.as_ref().is_empty() {
        return BLANK_HASH;
    }
    inner_blake2b_256(s)
}

fn inner_blake2b_256<T: AsRef<[u8]>>(s: T) -> [u8; 32] {
    let mut result = [0u8; BLAKE2B_LEN];
    let mut blake2b = new_blake2b();
    blake2b.update(s.as_ref());
    blake2b.finalize(&mut result);
    result
}
