use ckb_unique_types::{bytes::Bytes, core::error::EncodingError};
use faster_hex::hex_decode;
use std::fmt;

/// Variable-length binary encoded as a 0x-prefixed hex string in JSON.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct JsonBytes(Bytes);

impl JsonBytes {
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        JsonBytes(Bytes::from(bytes))
    }

    pub fn from_bytes(bytes: Bytes) -> Self {
        JsonBytes(bytes)
    }

    /// Parses a 0x-prefixed hex string.
    pub fn from_hex(input: &str) -> Result<Self, EncodingError> {
        let digits = input
            .strip_prefix("0x")
            .filter(|digits| digits.len() % 2 == 0)
            .ok_or_else(|| EncodingError::InvalidHex(input.to_owned()))?;
        if digits.is_empty() {
            return Ok(JsonBytes::default());
        }
        let mut buffer = vec![0; digits.len() / 2];
        hex_decode(digits.as_bytes(), &mut buffer)
            .map_err(|_| EncodingError::InvalidHex(input.to_owned()))?;
        Ok(JsonBytes::from_vec(buffer))
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        0 == self.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for JsonBytes {
    fn from(bytes: Bytes) -> Self {
        JsonBytes(bytes)
    }
}

impl From<JsonBytes> for Bytes {
    fn from(json: JsonBytes) -> Self {
        json.0
    }
}

impl fmt::Display for JsonBytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", faster_hex::hex_string(self.as_bytes()))
    }
}

struct BytesVisitor;

impl<'b> serde::de::Visitor<'b> for BytesVisitor {
    type Value = JsonBytes;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a 0x-prefixed hex string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        JsonBytes::from_hex(v).map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        self.visit_str(&v)
    }
}

impl serde::Serialize for JsonBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for JsonBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(BytesVisitor)
    }
}
