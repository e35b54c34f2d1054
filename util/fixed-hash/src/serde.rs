use crate::{H160, H256};

macro_rules! impl_serde {
    ($name:ident, $bytes_size:expr) => {
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let hex = faster_hex::hex_string(&self.0[..]);
                serializer.serialize_str(&format!("0x{}", hex))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct Visitor;

                impl<'b> serde::de::Visitor<'b> for Visitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        formatter: &mut ::std::fmt::Formatter,
                    ) -> ::std::fmt::Result {
                        write!(
                            formatter,
                            "a 0x-prefixed hexadecimal string with {} digits",
                            $bytes_size * 2
                        )
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        let v = v.as_bytes();
                        if v.len() < 2 || &v[0..2] != b"0x" {
                            return Err(E::invalid_value(serde::de::Unexpected::Bytes(v), &self));
                        }
                        if v.len() != $bytes_size * 2 + 2 {
                            return Err(E::invalid_length(v.len() - 2, &self));
                        }
                        let mut ret = $name::default();
                        faster_hex::hex_decode(&v[2..], &mut ret.0[..]).map_err(|_| {
                            E::invalid_value(serde::de::Unexpected::Bytes(v), &self)
                        })?;
                        Ok(ret)
                    }

                    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        self.visit_str(&v)
                    }
                }
                deserializer.deserialize_str(Visitor)
            }
        }
    };
}

impl_serde!(H160, 20);
impl_serde!(H256, 32);
