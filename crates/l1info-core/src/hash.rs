//! 32-byte hash type used for every leaf, node and root.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Size of a hash in bytes (Keccak-256).
pub const HASH_SIZE: usize = 32;

/// An opaque 32-byte value.
///
/// Textual form is `0x` followed by 64 lowercase hex digits. Human-readable
/// serializers (JSON) use the textual form; binary serializers use the raw
/// bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// The all-zero value. It is both the empty leaf and the root of an
    /// accumulator that has not seen any leaf.
    pub const ZERO: Hash = Hash([0u8; HASH_SIZE]);

    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_SIZE]
    }

    /// Hex encoding with the `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != HASH_SIZE * 2 {
            return Err(Error::InvalidHash(format!(
                "expected {} hex digits, got {}",
                HASH_SIZE * 2,
                digits.len()
            )));
        }

        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| Error::InvalidHash(format!("{}: {}", s, e)))?;
        Ok(Hash(bytes))
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

impl From<Hash> for [u8; HASH_SIZE] {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Hash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Hash::from_hex(&s).map_err(de::Error::custom)
        } else {
            <[u8; HASH_SIZE]>::deserialize(deserializer).map(Hash)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const GER: [u8; 32] = hex!("16994edfddddb9480667b64174fc00d3b6da7290d37b8db3a16571b4ddf0789f");

    #[test]
    fn test_hex_roundtrip() {
        let h = Hash::new(GER);
        let text = h.to_hex();
        assert_eq!(
            text,
            "0x16994edfddddb9480667b64174fc00d3b6da7290d37b8db3a16571b4ddf0789f"
        );
        assert_eq!(text.parse::<Hash>().unwrap(), h);
        assert_eq!(Hash::from_hex(&text[2..]).unwrap(), h);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(Hash::from_hex("0x1234"), Err(Error::InvalidHash(_))));
        let not_hex = format!("0x{}", "zz".repeat(32));
        assert!(matches!(Hash::from_hex(&not_hex), Err(Error::InvalidHash(_))));
    }

    #[test]
    fn test_zero() {
        assert!(Hash::ZERO.is_zero());
        assert_eq!(Hash::default(), Hash::ZERO);
        assert!(!Hash::new(GER).is_zero());
    }

    #[test]
    fn test_json_uses_hex_string() {
        let h = Hash::new(GER);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(
            json,
            "\"0x16994edfddddb9480667b64174fc00d3b6da7290d37b8db3a16571b4ddf0789f\""
        );
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn test_bincode_uses_raw_bytes() {
        let h = Hash::new(GER);
        let bytes = bincode::serialize(&h).unwrap();
        assert_eq!(bytes.len(), HASH_SIZE);
        assert_eq!(bincode::deserialize::<Hash>(&bytes).unwrap(), h);
    }
}
