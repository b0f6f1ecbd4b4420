//! Fixed-height incremental Merkle tree over L1 info leaves.
//!
//! The tree offers two ways of computing a root:
//!
//! - [`L1InfoTree::build_root`] and [`L1InfoTree::compute_merkle_proof`] work
//!   on a caller-supplied leaf array and recompute every level from scratch.
//! - [`L1InfoTree::add_leaf`] appends to the frontier kept inside the tree in
//!   `O(height)` hashes.
//!
//! Both pad an odd-width level on the right with the empty subtree hash of
//! that level, so they agree on every root.

use itertools::Itertools;
use tracing::{debug, error};

use crate::frontier::FrontierSnapshot;
use crate::hasher::hash_pair;
use crate::precomputed::{generate_zero_hashes, ZeroHashes};
use crate::proof::MerkleProof;
use crate::{Error, Hash, Result};

#[derive(Debug, Clone)]
pub struct L1InfoTree {
    height: u8,
    zero_hashes: ZeroHashes,
    /// Leaves appended so far; also the next insertion index.
    count: u64,
    /// Frontier: for every level, the left sibling on the path of the next
    /// insertion once that level's left subtree is complete.
    siblings: Vec<Hash>,
    current_root: Hash,
}

impl L1InfoTree {
    /// Create a tree of `height` already holding `initial_leaves`.
    pub fn new(height: u8, initial_leaves: &[Hash]) -> Result<Self> {
        Self::with_zero_hashes(generate_zero_hashes(height), initial_leaves)
    }

    /// Same as [`L1InfoTree::new`], reusing an existing zero-hash cache. The
    /// tree height is the height of the cache.
    pub fn with_zero_hashes(zero_hashes: ZeroHashes, initial_leaves: &[Hash]) -> Result<Self> {
        let height = zero_hashes.height();
        let mut tree = Self {
            height,
            zero_hashes,
            count: initial_leaves.len() as u64,
            siblings: Vec::new(),
            current_root: Hash::ZERO,
        };

        // The path of the next free position holds every completed left
        // subtree, which is exactly the frontier.
        let path = match tree.merkle_path(tree.count, initial_leaves) {
            Ok(path) => path,
            Err(e) => {
                error!(%e, leaves = initial_leaves.len(), "failed to initialize L1 info tree");
                return Err(e);
            }
        };
        tree.siblings = path.siblings;
        tree.current_root = path.root;

        debug!(height, count = tree.count, root = %tree.current_root, "initialized L1 info tree");
        Ok(tree)
    }

    /// Restore a tree from a frontier snapshot.
    pub fn from_frontier(snapshot: FrontierSnapshot) -> Result<Self> {
        if snapshot.siblings.len() != snapshot.height as usize {
            return Err(Error::Serialization(format!(
                "frontier has {} siblings, expected {}",
                snapshot.siblings.len(),
                snapshot.height
            )));
        }

        let tree = Self {
            height: snapshot.height,
            zero_hashes: generate_zero_hashes(snapshot.height),
            count: snapshot.count,
            siblings: snapshot.siblings,
            current_root: snapshot.root,
        };
        if let Some(capacity) = tree.capacity() {
            if tree.count > capacity {
                return Err(Error::IndexOutOfRange {
                    index: tree.count,
                    height: tree.height,
                });
            }
        }
        Ok(tree)
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn zero_hashes(&self) -> &ZeroHashes {
        &self.zero_hashes
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn current_root(&self) -> Hash {
        self.current_root
    }

    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Number of leaves the tree can hold, or `None` when it does not fit in
    /// a `u64`.
    pub fn capacity(&self) -> Option<u64> {
        1u64.checked_shl(self.height as u32)
    }

    /// Current root, count and siblings as one serializable value.
    pub fn frontier(&self) -> FrontierSnapshot {
        FrontierSnapshot {
            height: self.height,
            count: self.count,
            siblings: self.siblings.clone(),
            root: self.current_root,
        }
    }

    /// Compute the root over `leaves`.
    ///
    /// An empty slice is treated as a single empty leaf. Fails with
    /// [`Error::TooManyRoots`] when the leaves do not fit in the tree.
    pub fn build_root(&self, leaves: &[Hash]) -> Result<Hash> {
        let mut nodes = self.first_level(leaves);
        for level in 0..self.height as usize {
            self.pad_level(&mut nodes, level);
            nodes = hash_level(&nodes);
        }
        self.single_root(nodes)
    }

    /// Compute the sibling path of `index` and the root over `leaves`.
    ///
    /// `index` may point past the last leaf: such positions hold empty leaves
    /// and their proofs verify against the zero hash.
    pub fn compute_merkle_proof(&self, index: u64, leaves: &[Hash]) -> Result<MerkleProof> {
        self.check_index(index)?;
        self.merkle_path(index, leaves)
    }

    /// Append `leaf` at `index` and return the new root.
    ///
    /// `index` must equal [`L1InfoTree::count`]. The tree is left untouched on
    /// error.
    pub fn add_leaf(&mut self, index: u64, leaf: Hash) -> Result<Hash> {
        if index != self.count {
            return Err(Error::NonSequentialInsertion {
                index,
                expected: self.count,
            });
        }
        self.check_index(index)?;

        let mut current = leaf;
        let mut position = index;
        let mut filled_subtree = true;
        for level in 0..self.height as usize {
            if position & 1 == 1 {
                current = hash_pair(&self.siblings[level], &current);
            } else {
                // The first left child on the way up starts a subtree that is
                // not complete yet; it becomes the sibling for later leaves.
                if filled_subtree {
                    self.siblings[level] = current;
                    filled_subtree = false;
                }
                current = hash_pair(&current, &self.zero_hashes[level]);
            }
            position >>= 1;
        }

        self.current_root = current;
        self.count += 1;
        debug!(index, root = %current, "added leaf to L1 info tree");
        Ok(current)
    }

    fn check_index(&self, index: u64) -> Result<()> {
        match self.capacity() {
            Some(capacity) if index >= capacity => Err(Error::IndexOutOfRange {
                index,
                height: self.height,
            }),
            _ => Ok(()),
        }
    }

    fn merkle_path(&self, index: u64, leaves: &[Hash]) -> Result<MerkleProof> {
        let mut nodes = self.first_level(leaves);
        let mut siblings = Vec::with_capacity(self.height as usize);
        let mut position = index;

        for level in 0..self.height as usize {
            self.pad_level(&mut nodes, level);

            // Past the end of the level every node is an empty subtree.
            let sibling = usize::try_from(position ^ 1)
                .ok()
                .and_then(|i| nodes.get(i).copied())
                .unwrap_or(self.zero_hashes[level]);
            siblings.push(sibling);

            nodes = hash_level(&nodes);
            position >>= 1;
        }

        let root = self.single_root(nodes)?;
        Ok(MerkleProof {
            index,
            siblings,
            root,
        })
    }

    fn first_level(&self, leaves: &[Hash]) -> Vec<Hash> {
        if leaves.is_empty() {
            vec![self.zero_hashes[0]]
        } else {
            leaves.to_vec()
        }
    }

    fn pad_level(&self, nodes: &mut Vec<Hash>, level: usize) {
        if nodes.len() % 2 == 1 {
            nodes.push(self.zero_hashes[level]);
        }
    }

    fn single_root(&self, nodes: Vec<Hash>) -> Result<Hash> {
        match nodes.as_slice() {
            [root] => Ok(*root),
            _ => Err(Error::TooManyRoots {
                height: self.height,
                remaining: nodes.len(),
            }),
        }
    }
}

/// Hash consecutive pairs of an even-width level.
fn hash_level(nodes: &[Hash]) -> Vec<Hash> {
    nodes
        .iter()
        .tuples()
        .map(|(left, right)| hash_pair(left, right))
        .collect()
}
