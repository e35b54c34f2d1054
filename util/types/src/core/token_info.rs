use crate::{bytes::Bytes, core::error::EncodingError};

const MAX_FIELD_LEN: usize = u8::MAX as usize;

/// Token metadata carried as the data of a unique cell.
///
/// Encoded as `decimal ‖ len(name) ‖ name ‖ len(symbol) ‖ symbol`, every length being one byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenInfo {
    /// The number of decimal places.
    pub decimal: u8,
    /// The token name, UTF-8.
    pub name: String,
    /// The token symbol, UTF-8.
    pub symbol: String,
}

impl TokenInfo {
    pub fn new<N: Into<String>, S: Into<String>>(decimal: u8, name: N, symbol: S) -> Self {
        TokenInfo {
            decimal,
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Encodes the token info into cell data.
    pub fn encode(&self) -> Result<Bytes, EncodingError> {
        let name = length_prefix("name", self.name.as_bytes())?;
        let symbol = length_prefix("symbol", self.symbol.as_bytes())?;
        let mut buf = Vec::with_capacity(3 + self.name.len() + self.symbol.len());
        buf.push(self.decimal);
        buf.push(name);
        buf.extend_from_slice(self.name.as_bytes());
        buf.push(symbol);
        buf.extend_from_slice(self.symbol.as_bytes());
        Ok(buf.into())
    }
}

fn length_prefix(field: &'static str, value: &[u8]) -> Result<u8, EncodingError> {
    u8::try_from(value.len()).map_err(|_| EncodingError::Oversized {
        field,
        max: MAX_FIELD_LEN,
        actual: value.len(),
    })
}
