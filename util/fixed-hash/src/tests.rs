use crate::{error::FromStrError, h160, h256, H160, H256};
use std::str::FromStr;

#[test]
fn from_str_roundtrips_display() {
    let full = "8e341bcfec6393dcd41e635733ff2dca00a6af546949f70c57a706c0f344df8b";
    let hash = H256::from_str(full).unwrap();
    assert_eq!(format!("{}", hash), full);
    assert_eq!(format!("{:#x}", hash), format!("0x{}", full));
}

#[test]
fn from_str_rejects_bad_input() {
    assert_eq!(
        H160::from_str("00"),
        Err(FromStrError::InvalidLength(2))
    );
    let mut bad = "0".repeat(40);
    bad.replace_range(5..6, "g");
    assert_eq!(
        H160::from_str(&bad),
        Err(FromStrError::InvalidCharacter { chr: b'g', idx: 5 })
    );
}

#[test]
fn const_macro_matches_from_str() {
    const HASH: H256 = h256!("0xff91b063c78ed06f10a1ed436122bd7d671f9a72ef5f5fa28d05252c17cf4cef");
    let parsed =
        H256::from_str("ff91b063c78ed06f10a1ed436122bd7d671f9a72ef5f5fa28d05252c17cf4cef").unwrap();
    assert_eq!(HASH, parsed);
    let short = h160!("0000000000000000000000000000000000000001");
    assert_eq!(short.0[19], 1);
}

#[test]
fn from_slice_checks_length() {
    assert!(H256::from_slice(&[0u8; 31]).is_err());
    assert_eq!(H256::from_slice(&[1u8; 32]).unwrap(), H256([1u8; 32]));
}

#[test]
fn serde_uses_prefixed_hex() {
    let hash = H160([0xab; 20]);
    let json = serde_json::to_string(&hash).unwrap();
    assert_eq!(json, format!("\"0x{}\"", "ab".repeat(20)));
    let back: H160 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hash);
    assert!(serde_json::from_str::<H160>(&format!("\"{}\"", "ab".repeat(20))).is_err());
    assert!(serde_json::from_str::<H160>("\"0xabcd\"").is_err());
}
