//! Merkle proofs and their verification.

use serde::{Deserialize, Serialize};

use crate::hasher::hash_pair;
use crate::Hash;

/// Sibling path for one leaf position.
///
/// `siblings` holds one hash per level, ordered from the leaf level up to the
/// level just below `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    pub index: u64,
    pub siblings: Vec<Hash>,
    pub root: Hash,
}

impl MerkleProof {
    /// Check that `leaf` sits at `self.index` under `self.root`.
    pub fn verify(&self, leaf: &Hash) -> bool {
        verify_merkle_proof(leaf, self.index, &self.siblings, &self.root)
    }
}

/// Recompute the root from a leaf, its position and its sibling path.
///
/// At each level an even position hashes `(running, sibling)` and an odd one
/// `(sibling, running)`; the position is then halved.
pub fn calculate_root(leaf: &Hash, index: u64, siblings: &[Hash]) -> Hash {
    let mut position = index;
    let mut running = *leaf;
    for sibling in siblings {
        running = if position & 1 == 0 {
            hash_pair(&running, sibling)
        } else {
            hash_pair(sibling, &running)
        };
        position >>= 1;
    }
    running
}

pub fn verify_merkle_proof(leaf: &Hash, index: u64, siblings: &[Hash], root: &Hash) -> bool {
    calculate_root(leaf, index, siblings) == *root
}
