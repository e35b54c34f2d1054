use crate::{error::FromSliceError, H160, H256};

pub(crate) const fn hex_value(chr: u8) -> Option<u8> {
    match chr {
        b'0'..=b'9' => Some(chr - b'0'),
        b'a'..=b'f' => Some(chr - b'a' + 10),
        b'A'..=b'F' => Some(chr - b'A' + 10),
        _ => None,
    }
}

const fn const_nibble(chr: u8) -> u8 {
    match hex_value(chr) {
        Some(val) => val,
        None => panic!("invalid hexadecimal character"),
    }
}

macro_rules! impl_methods {
    ($name:ident, $bytes_size:expr) => {
        impl $name {
            /// The size in bytes.
            pub const SIZE: usize = $bytes_size;

            /// Converts `Self` to a byte slice.
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0[..]
            }

            /// To convert the byte slice back into `Self`.
            #[inline]
            pub fn from_slice(input: &[u8]) -> Result<Self, FromSliceError> {
                if input.len() != $bytes_size {
                    Err(FromSliceError::InvalidLength(input.len()))
                } else {
                    let mut ret = Self::default();
                    ret.0[..].copy_from_slice(input);
                    Ok(ret)
                }
            }

            /// Parses a hexadecimal string, with or without the `0x` prefix, in a constant
            /// context.
            ///
            /// # Panics
            ///
            /// Panics when the length is wrong or a character is not hexadecimal.
            pub const fn from_hex_const(input: &str) -> Self {
                let bytes = input.as_bytes();
                let start = if bytes.len() >= 2 && bytes[0] == b'0' && bytes[1] == b'x' {
                    2
                } else {
                    0
                };
                if bytes.len() - start != $bytes_size * 2 {
                    panic!("invalid hexadecimal length");
                }
                let mut ret = [0u8; $bytes_size];
                let mut idx = 0;
                while idx < $bytes_size {
                    let hi = const_nibble(bytes[start + idx * 2]);
                    let lo = const_nibble(bytes[start + idx * 2 + 1]);
                    ret[idx] = (hi << 4) | lo;
                    idx += 1;
                }
                $name(ret)
            }
        }

        impl From<[u8; $bytes_size]> for $name {
            fn from(bytes: [u8; $bytes_size]) -> Self {
                $name(bytes)
            }
        }

        impl From<$name> for [u8; $bytes_size] {
            fn from(hash: $name) -> Self {
                hash.0
            }
        }

        impl AsRef<[u8]> for $name {
            #[inline]
            fn as_ref(&self) -> &[u8] {
                self.as_bytes()
            }
        }
    };
}

impl_methods!(H160, 20);
impl_methods!(H256, 32);
