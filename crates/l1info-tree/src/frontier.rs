//! Serializable frontier state of an [`L1InfoTree`](crate::L1InfoTree).
//!
//! The frontier is everything the tree needs to keep appending: the sibling
//! hashes on the path of the next free position, the leaf count and the
//! current root. It can be stored next to the leaves and restored without
//! rehashing the whole tree.

use serde::{Deserialize, Serialize};

use crate::{Error, Hash, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierSnapshot {
    pub height: u8,
    /// Number of leaves inserted so far.
    pub count: u64,
    /// One hash per level, bottom-up.
    pub siblings: Vec<Hash>,
    pub root: Hash,
}

impl FrontierSnapshot {
    /// Serialize to bytes using bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize from bytes using bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_roundtrip() {
        let snapshot = FrontierSnapshot {
            height: 2,
            count: 3,
            siblings: vec![Hash::new([1u8; 32]), Hash::new([2u8; 32])],
            root: Hash::new([3u8; 32]),
        };
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(FrontierSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_from_truncated_bytes() {
        let snapshot = FrontierSnapshot {
            height: 1,
            count: 1,
            siblings: vec![Hash::ZERO],
            root: Hash::ZERO,
        };
        let bytes = snapshot.to_bytes().unwrap();
        let result = FrontierSnapshot::from_bytes(&bytes[..bytes.len() - 1]);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
