//! Leaf encoding of an L1 fact.

use serde::{Deserialize, Serialize};

use crate::hasher::keccak256;
use crate::Hash;

/// Length of the encoded leaf preimage: two hashes and a u64.
pub const LEAF_DATA_LEN: usize = 32 + 32 + 8;

/// One L1 fact recorded in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L1InfoLeaf {
    pub global_exit_root: Hash,
    pub previous_block_hash: Hash,
    pub min_timestamp: u64,
}

impl L1InfoLeaf {
    pub fn new(global_exit_root: Hash, previous_block_hash: Hash, min_timestamp: u64) -> Self {
        Self {
            global_exit_root,
            previous_block_hash,
            min_timestamp,
        }
    }

    /// The 32-byte leaf value inserted into the tree.
    pub fn hash(&self) -> Hash {
        hash_leaf_data(
            &self.global_exit_root,
            &self.previous_block_hash,
            self.min_timestamp,
        )
    }
}

/// Hash an L1 fact into a leaf.
///
/// The preimage is `global_exit_root || previous_block_hash ||
/// min_timestamp` with the timestamp as 8 big-endian bytes. No padding and no
/// length prefix; the on-chain verifier computes the same 72-byte buffer.
pub fn hash_leaf_data(
    global_exit_root: &Hash,
    previous_block_hash: &Hash,
    min_timestamp: u64,
) -> Hash {
    let mut data = [0u8; LEAF_DATA_LEN];
    data[..32].copy_from_slice(global_exit_root.as_bytes());
    data[32..64].copy_from_slice(previous_block_hash.as_bytes());
    data[64..].copy_from_slice(&min_timestamp.to_be_bytes());
    keccak256(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_hash_leaf_data_vector() {
        let ger = Hash::new(hex!(
            "16994edfddddb9480667b64174fc00d3b6da7290d37b8db3a16571b4ddf0789f"
        ));
        let prev_block_hash = Hash::new(hex!(
            "24a5871d68723340d9eadc674aa8ad75f3e33b61d5a9db7db92af856a19270bb"
        ));

        let leaf = hash_leaf_data(&ger, &prev_block_hash, 1697231573);
        assert_eq!(
            leaf,
            Hash::new(hex!(
                "f62f487534b899b1c362242616725878188ca891fab60854b792ca0628286de7"
            ))
        );
        assert_eq!(L1InfoLeaf::new(ger, prev_block_hash, 1697231573).hash(), leaf);
    }

    #[test]
    fn test_timestamp_is_big_endian() {
        let a = hash_leaf_data(&Hash::ZERO, &Hash::ZERO, 1);
        let b = hash_leaf_data(&Hash::ZERO, &Hash::ZERO, 1 << 56);

        let mut data = [0u8; LEAF_DATA_LEN];
        data[LEAF_DATA_LEN - 1] = 1;
        assert_eq!(a, keccak256(data));
        assert_ne!(a, b);
    }

    #[test]
    fn test_field_order_matters() {
        let x = Hash::new([7u8; 32]);
        assert_ne!(
            hash_leaf_data(&x, &Hash::ZERO, 0),
            hash_leaf_data(&Hash::ZERO, &x, 0)
        );
    }

    #[test]
    fn test_leaf_json_shape() {
        let leaf = L1InfoLeaf::new(Hash::ZERO, Hash::ZERO, 5);
        let value = serde_json::to_value(leaf).unwrap();
        assert_eq!(value["minTimestamp"], 5);
        assert!(value.get("globalExitRoot").is_some());
        assert!(value.get("previousBlockHash").is_some());
    }
}
