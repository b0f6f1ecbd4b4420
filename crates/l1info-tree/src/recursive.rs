//! Historic root accumulator (recursive L1 info tree).
//!
//! Every insertion first stores the previously published root as the next
//! leaf of an internal "historic" tree, then publishes
//! `keccak256(historic_root || data_leaf)`. The published root therefore
//! commits to the newest fact and, through the historic tree, to every root
//! published before it.
//!
//! ```text
//! root_0 = 0x00..00
//! root_n = H(historic_root([root_0, .., root_{n-1}]), leaf_{n-1})
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hasher::hash_pair;
use crate::proof::MerkleProof;
use crate::tree::L1InfoTree;
use crate::{Error, Hash, Result};

/// State published after an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorSnapshot {
    pub historic_root: Hash,
    /// Data leaf of the latest insertion, `None` before the first one.
    pub l1_data: Option<Hash>,
    pub root: Hash,
}

#[derive(Debug, Clone)]
pub struct HistoricRootAccumulator {
    historic_tree: L1InfoTree,
    /// Leaves of the historic tree: the root published before each insertion.
    historic_leaves: Vec<Hash>,
    data_leaves: Vec<Hash>,
    last_data_hash: Option<Hash>,
}

impl HistoricRootAccumulator {
    /// Create an accumulator of `height` and replay `initial_leaves` into it
    /// in order.
    pub fn new(height: u8, initial_leaves: &[Hash]) -> Result<Self> {
        let mut accumulator = Self {
            historic_tree: L1InfoTree::new(height, &[])?,
            historic_leaves: Vec::with_capacity(initial_leaves.len()),
            data_leaves: Vec::with_capacity(initial_leaves.len()),
            last_data_hash: None,
        };
        for (index, leaf) in initial_leaves.iter().enumerate() {
            accumulator.add_leaf(index as u64, *leaf)?;
        }
        Ok(accumulator)
    }

    pub fn height(&self) -> u8 {
        self.historic_tree.height()
    }

    /// Number of data leaves inserted; also the next insertion index.
    pub fn leaf_count(&self) -> u64 {
        self.data_leaves.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.last_data_hash.is_none()
    }

    pub fn data_leaves(&self) -> &[Hash] {
        &self.data_leaves
    }

    pub fn historic_leaves(&self) -> &[Hash] {
        &self.historic_leaves
    }

    /// Root of the internal historic tree.
    pub fn historic_root(&self) -> Hash {
        self.historic_tree.current_root()
    }

    /// The externally published root.
    ///
    /// 32 zero bytes until the first insertion.
    pub fn get_root(&self) -> Hash {
        match self.last_data_hash {
            None => Hash::ZERO,
            Some(data_hash) => hash_pair(&self.historic_tree.current_root(), &data_hash),
        }
    }

    pub fn snapshot(&self) -> AccumulatorSnapshot {
        AccumulatorSnapshot {
            historic_root: self.historic_root(),
            l1_data: self.last_data_hash,
            root: self.get_root(),
        }
    }

    /// Insert a data leaf at `index` and return the new published root.
    ///
    /// `leaf` is used as is, callers hash L1 facts with
    /// [`hash_leaf_data`](crate::hash_leaf_data) first. `index` must equal
    /// [`HistoricRootAccumulator::leaf_count`]; nothing changes on error.
    pub fn add_leaf(&mut self, index: u64, leaf: Hash) -> Result<Hash> {
        let expected = self.leaf_count();
        if index != expected {
            return Err(Error::NonSequentialInsertion { index, expected });
        }

        let previous_root = self.get_root();
        self.historic_tree.add_leaf(index, previous_root)?;
        self.historic_leaves.push(previous_root);
        self.data_leaves.push(leaf);
        self.last_data_hash = Some(leaf);

        let root = self.get_root();
        debug!(
            index,
            %previous_root,
            historic_root = %self.historic_root(),
            %root,
            "added leaf to historic root accumulator"
        );
        Ok(root)
    }

    /// Proof that the root published before insertion `index` is the
    /// `index`-th leaf of the historic tree.
    ///
    /// The proof root is the current historic root. Together with the data
    /// leaf of any later insertion it lets a verifier rebuild that insertion's
    /// published root.
    pub fn compute_merkle_proof(&self, index: u64) -> Result<MerkleProof> {
        self.historic_tree
            .compute_merkle_proof(index, &self.historic_leaves)
    }
}
