use ckb_unique_types::core;
use serde::{
    de::{Error, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

macro_rules! def_json_uint {
    ($name:ident, $inner:ident, $bits:literal) => {
        #[doc = concat!("The ", $bits, "-bit unsigned integer type encoded as the 0x-prefixed hex string in JSON.")]
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub struct $name($inner);

        impl $name {
            pub fn value(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{:x}", self.value())
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.value()
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'a> Deserialize<'a> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'a>,
            {
                struct UintVisitor;

                impl<'a> Visitor<'a> for UintVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        write!(formatter, "a hex-encoded, 0x-prefixed uint{}", $bits)
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
                    where
                        E: Error,
                    {
                        let digits = value.strip_prefix("0x").ok_or_else(|| {
                            Error::custom(format!(
                                "Invalid uint{} {}: without `0x` prefix",
                                $bits, value
                            ))
                        })?;
                        let number = $inner::from_str_radix(digits, 16)
                            .map($name)
                            .map_err(|e| {
                                Error::custom(format!("Invalid uint{} {}: {}", $bits, value, e))
                            })?;
                        if number.to_string() != value {
                            return Err(Error::custom(format!(
                                "Invalid uint{} {}: with redundant leading zeros, expected: {}",
                                $bits, value, number,
                            )));
                        }
                        Ok(number)
                    }

                    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
                    where
                        E: Error,
                    {
                        self.visit_str(&value)
                    }
                }

                deserializer.deserialize_str(UintVisitor)
            }
        }
    };
}

def_json_uint!(Uint32, u32, 32);
def_json_uint!(Uint64, u64, 64);

impl From<core::Capacity> for Uint64 {
    fn from(value: core::Capacity) -> Self {
        Uint64(value.as_u64())
    }
}

impl From<Uint64> for core::Capacity {
    fn from(value: Uint64) -> Self {
        core::Capacity::shannons(value.value())
    }
}
