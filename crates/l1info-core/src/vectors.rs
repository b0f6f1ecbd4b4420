//! JSON shapes of the L1 info tree test vectors.
//!
//! Field names follow the camelCase keys used by the vector files shared with
//! the on-chain contracts.

use serde::{Deserialize, Serialize};

use crate::hash::Hash;

/// Growth of the base tree by one leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L1InfoTreeVector {
    /// Leaves already in the tree, in insertion order.
    pub previous_leaf_values: Vec<Hash>,
    /// Root over `previous_leaf_values`.
    pub current_root: Hash,
    pub new_leaf_value: Hash,
    /// Root after appending `new_leaf_value`.
    pub new_root: Hash,
}

/// One insertion into the historic root accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L1InfoTreeRecursiveVector {
    pub global_exit_root: Hash,
    pub block_hash: Hash,
    pub timestamp: u64,
    /// Historic tree proof for the previous root stored at `index`.
    pub smt_proof_previous_index: Vec<Hash>,
    pub index: u64,
    pub previous_l1_info_tree_root: Hash,
    pub l1_data_hash: Hash,
    pub l1_info_tree_root: Hash,
    pub historic_l1_info_root: Hash,
}
