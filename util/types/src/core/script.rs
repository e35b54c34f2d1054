use crate::core::error::EncodingError;
use derive_more::Display;

/// Specifies how the script `code_hash` is used to match the script code and how to run the code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum ScriptHashType {
    /// Type "data" matches script code via cell data hash, and run the script code in v0 CKB VM.
    #[default]
    #[display("data")]
    Data = 0,
    /// Type "type" matches script code via cell type script hash.
    #[display("type")]
    Type = 1,
    /// Type "data1" matches script code via cell data hash, and run the script code in v1 CKB VM.
    #[display("data1")]
    Data1 = 2,
    /// Type "data2" matches script code via cell data hash, and run the script code in v2 CKB VM.
    #[display("data2")]
    Data2 = 4,
}

impl ScriptHashType {
    /// The byte the hash type is encoded as.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ScriptHashType {
    type Error = EncodingError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(ScriptHashType::Data),
            1 => Ok(ScriptHashType::Type),
            2 => Ok(ScriptHashType::Data1),
            4 => Ok(ScriptHashType::Data2),
            _ => Err(EncodingError::InvalidHashType(v)),
        }
    }
}

/// The type of a cell dependency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum DepType {
    /// The dependency cell holds the code itself.
    #[default]
    #[display("code")]
    Code = 0,
    /// The dependency cell data is a list of out points which are expanded into dependencies.
    #[display("dep_group")]
    DepGroup = 1,
}

impl DepType {
    /// The byte the dep type is encoded as.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DepType {
    type Error = EncodingError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(DepType::Code),
            1 => Ok(DepType::DepGroup),
            _ => Err(EncodingError::InvalidDepType(v)),
        }
    }
}
