//! Implements `Address`, the fixed-width account identifier carried in payloads.

use std::str::FromStr;

use crate::utils::constants::ADDRESS_LEN;
use crate::utils::strip_hex_prefix;
use crate::{SdkError, SdkResult};

/// A 32-byte account or validator address.
///
/// On the wire it is a JSON array of 32 integers, never a hex string.
#[derive(
    Debug, Default, PartialEq, Eq, Copy, Clone, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Returns the raw address bytes.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }
}

/// Encodes a hex string into an [`Address`].
///
/// An optional `0x` prefix is stripped. Decoded input longer than 32 bytes is
/// truncated, shorter input is right-padded with zero bytes. Odd length or
/// non-hex characters yield [`SdkError::InvalidHex`].
pub fn encode(value: &str) -> SdkResult<Address> {
    let decoded = hex::decode(strip_hex_prefix(value))?;

    let mut bytes = [0u8; ADDRESS_LEN];
    let len = decoded.len().min(ADDRESS_LEN);
    bytes[..len].copy_from_slice(&decoded[..len]);

    Ok(Address(bytes))
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod test {

    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_should_pad_short_input() {
        let address = encode("0xAB").unwrap();

        let mut expected = [0u8; 32];
        expected[0] = 0xab;
        assert_eq!(address.to_bytes(), expected);
    }

    #[test]
    fn test_should_always_produce_32_bytes() {
        for digits in (0..=64).step_by(2) {
            let input = "7f".repeat(digits / 2);
            let address = encode(&input).unwrap();
            let bytes = address.to_bytes();

            assert_eq!(bytes.len(), 32);
            assert!(bytes[..digits / 2].iter().all(|b| *b == 0x7f));
            assert!(bytes[digits / 2..].iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn test_should_ignore_prefix() {
        let raw = "c0ffee254729296a45a3885639ac7e10f9d54979c0ffee254729296a45a38856";
        let prefixed = format!("0x{raw}");

        assert_eq!(encode(raw).unwrap(), encode(&prefixed).unwrap());
        assert_eq!(
            encode(raw).unwrap().to_bytes(),
            hex!("c0ffee254729296a45a3885639ac7e10f9d54979c0ffee254729296a45a38856")
        );
    }

    #[test]
    fn test_should_truncate_long_input() {
        let input = format!("{}{}", "11".repeat(32), "ffff");
        assert_eq!(encode(&input).unwrap().to_bytes(), [0x11; 32]);
    }

    #[test]
    fn test_should_encode_empty_input_as_zero() {
        assert_eq!(encode("0x").unwrap(), Address::default());
        assert_eq!(encode("").unwrap(), Address::default());
    }

    #[test]
    fn test_should_reject_odd_length() {
        assert!(matches!(
            encode("0xabc"),
            Err(SdkError::InvalidHex(hex::FromHexError::OddLength))
        ));
    }

    #[test]
    fn test_should_reject_invalid_characters() {
        assert!(matches!(
            encode("0xzz"),
            Err(SdkError::InvalidHex(
                hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }
            ))
        ));
    }

    #[test]
    fn test_should_serialize_as_integer_array() {
        let address = encode("0x01ff").unwrap();
        let json = serde_json::to_value(address).unwrap();

        let mut expected = vec![serde_json::json!(1), serde_json::json!(255)];
        expected.extend(std::iter::repeat(serde_json::json!(0)).take(30));
        assert_eq!(json, serde_json::Value::Array(expected));

        let decoded: Address = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, address);
    }

    #[test]
    fn test_should_display_as_prefixed_hex() {
        let address = Address::from(hex!(
            "0100000000000000000000000000000000000000000000000000000000000000"
        ));
        assert_eq!(
            address.to_string(),
            "0x0100000000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(address.to_string().parse::<Address>().unwrap(), address);
    }
}
