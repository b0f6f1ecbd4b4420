//! L1 info tree: an incremental Keccak-256 Merkle tree over L1 facts and the
//! recursive accumulator that chains its roots.
//!
//! # Main Components
//!
//! - [`precomputed::ZeroHashes`] - Empty subtree hashes for deterministic padding
//! - [`leaf::hash_leaf_data`] - Canonical leaf encoding of an L1 fact
//! - [`tree::L1InfoTree`] - Roots and proofs over a leaf array, plus frontier appends
//! - [`proof`] - Merkle proof type and verification
//! - [`recursive::HistoricRootAccumulator`] - The externally published root

pub mod frontier;
pub mod hasher;
pub mod leaf;
pub mod precomputed;
pub mod proof;
pub mod recursive;
pub mod tree;

pub use l1info_core::{Error, Hash, Result};

pub use frontier::FrontierSnapshot;
pub use leaf::{hash_leaf_data, L1InfoLeaf};
pub use precomputed::{generate_zero_hashes, ZeroHashes};
pub use proof::{calculate_root, verify_merkle_proof, MerkleProof};
pub use recursive::{AccumulatorSnapshot, HistoricRootAccumulator};
pub use tree::L1InfoTree;

/// Tree height used by deployed rollups.
pub const L1_INFO_TREE_HEIGHT: u8 = 32;
