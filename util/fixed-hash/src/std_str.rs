use crate::{error::FromStrError, impls::hex_value, H160, H256};

macro_rules! impl_std_str_fromstr {
    ($name:ident, $bytes_size:expr) => {
        impl ::std::str::FromStr for $name {
            type Err = FromStrError;

            /// Parses exactly `2 * SIZE` hexadecimal characters, without the `0x` prefix.
            fn from_str(input: &str) -> Result<Self, Self::Err> {
                let len = input.len();
                if len != $bytes_size * 2 {
                    return Err(FromStrError::InvalidLength(len));
                }
                let mut ret = Self::default();
                for (idx, chr) in input.bytes().enumerate() {
                    let val = hex_value(chr).ok_or(FromStrError::InvalidCharacter { chr, idx })?;
                    if idx % 2 == 0 {
                        ret.0[idx / 2] |= val << 4;
                    } else {
                        ret.0[idx / 2] |= val;
                    }
                }
                Ok(ret)
            }
        }
    };
}

impl_std_str_fromstr!(H160, 20);
impl_std_str_fromstr!(H256, 32);
