//! Command implementations for the L1 info CLI.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};
use l1info_core::{Hash, L1InfoTreeRecursiveVector, L1InfoTreeVector};
use l1info_tree::{
    hash_leaf_data, verify_merkle_proof, HistoricRootAccumulator, L1InfoLeaf, L1InfoTree,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Leaves from the command line, or from a JSON file when one is given.
fn load_leaves(leaves: Vec<Hash>, file: Option<PathBuf>) -> Result<Vec<Hash>> {
    match file {
        Some(path) => {
            ensure!(leaves.is_empty(), "Pass leaves either inline or with --file, not both");
            read_json(&path)
        }
        None => Ok(leaves),
    }
}

/// Leaf-hash command: print the leaf value of one L1 fact.
pub fn leaf_hash(
    global_exit_root: Hash,
    previous_block_hash: Hash,
    min_timestamp: u64,
) -> Result<()> {
    println!(
        "{}",
        hash_leaf_data(&global_exit_root, &previous_block_hash, min_timestamp)
    );
    Ok(())
}

/// Root command: print the root over the given leaves.
pub fn root(height: u8, leaves: Vec<Hash>, file: Option<PathBuf>) -> Result<()> {
    let leaves = load_leaves(leaves, file)?;
    let tree = L1InfoTree::new(height, &[])?;
    let root = tree
        .build_root(&leaves)
        .with_context(|| format!("Failed to build root over {} leaves", leaves.len()))?;
    println!("{}", root);
    Ok(())
}

/// Proof command: print the proof of `index` as JSON.
pub fn proof(height: u8, index: u64, leaves: Vec<Hash>, file: Option<PathBuf>) -> Result<()> {
    let leaves = load_leaves(leaves, file)?;
    let tree = L1InfoTree::new(height, &[])?;
    let proof = tree
        .compute_merkle_proof(index, &leaves)
        .with_context(|| format!("Failed to compute proof for index {}", index))?;
    println!("{}", serde_json::to_string_pretty(&proof)?);
    Ok(())
}

/// Verify command: fail unless the proof rebuilds `root`.
pub fn verify(leaf: Hash, index: u64, root: Hash, siblings: &[Hash]) -> Result<()> {
    if !verify_merkle_proof(&leaf, index, siblings, &root) {
        bail!(
            "Proof does not verify: leaf {} at index {} is not under {}",
            leaf,
            index,
            root
        );
    }
    println!("Proof OK");
    Ok(())
}

/// Accumulate command: insert every fact of the file and print each new root.
pub fn accumulate(height: u8, file: &Path) -> Result<()> {
    let facts: Vec<L1InfoLeaf> = read_json(file)?;
    let mut accumulator = HistoricRootAccumulator::new(height, &[])?;

    for (index, fact) in facts.iter().enumerate() {
        let root = accumulator
            .add_leaf(index as u64, fact.hash())
            .with_context(|| format!("Failed to add leaf {}", index))?;
        println!("{} {}", index, root);
    }

    let snapshot = accumulator.snapshot();
    info!(
        leaves = facts.len(),
        historic_root = %snapshot.historic_root,
        root = %snapshot.root,
        "accumulated L1 info leaves"
    );
    Ok(())
}

/// Vectors command: check one or both vector files.
pub fn vectors(height: u8, roots: Option<&Path>, recursive: Option<&Path>) -> Result<()> {
    if roots.is_none() && recursive.is_none() {
        bail!("Nothing to check: pass --roots and/or --recursive");
    }

    if let Some(path) = roots {
        let vectors: Vec<L1InfoTreeVector> = read_json(path)?;
        check_root_vectors(height, &vectors)
            .with_context(|| format!("Root vectors failed: {}", path.display()))?;
        println!("{}: {} root vector(s) OK", path.display(), vectors.len());
    }

    if let Some(path) = recursive {
        let vectors: Vec<L1InfoTreeRecursiveVector> = read_json(path)?;
        check_recursive_vectors(height, &vectors)
            .with_context(|| format!("Recursive vectors failed: {}", path.display()))?;
        println!("{}: {} recursive vector(s) OK", path.display(), vectors.len());
    }

    Ok(())
}

fn check_root_vectors(height: u8, vectors: &[L1InfoTreeVector]) -> Result<()> {
    let tree = L1InfoTree::new(height, &[])?;

    for (i, vector) in vectors.iter().enumerate() {
        let current = tree.build_root(&vector.previous_leaf_values)?;
        ensure!(
            current == vector.current_root,
            "vector {}: current root {} != expected {}",
            i,
            current,
            vector.current_root
        );

        let mut leaves = vector.previous_leaf_values.clone();
        leaves.push(vector.new_leaf_value);
        let new_root = tree.build_root(&leaves)?;
        ensure!(
            new_root == vector.new_root,
            "vector {}: new root {} != expected {}",
            i,
            new_root,
            vector.new_root
        );
        debug!(vector = i, %new_root, "root vector OK");
    }
    Ok(())
}

/// Recursive vectors must be consecutive insertions starting at index 0.
fn check_recursive_vectors(height: u8, vectors: &[L1InfoTreeRecursiveVector]) -> Result<()> {
    let mut accumulator = HistoricRootAccumulator::new(height, &[])?;

    for vector in vectors {
        let index = vector.index;
        let data_hash =
            hash_leaf_data(&vector.global_exit_root, &vector.block_hash, vector.timestamp);
        ensure!(
            data_hash == vector.l1_data_hash,
            "index {}: data hash {} != expected {}",
            index,
            data_hash,
            vector.l1_data_hash
        );

        let previous_root = accumulator.get_root();
        ensure!(
            previous_root == vector.previous_l1_info_tree_root,
            "index {}: previous root {} != expected {}",
            index,
            previous_root,
            vector.previous_l1_info_tree_root
        );

        let root = accumulator.add_leaf(index, data_hash)?;
        ensure!(
            root == vector.l1_info_tree_root,
            "index {}: root {} != expected {}",
            index,
            root,
            vector.l1_info_tree_root
        );
        ensure!(
            accumulator.historic_root() == vector.historic_l1_info_root,
            "index {}: historic root {} != expected {}",
            index,
            accumulator.historic_root(),
            vector.historic_l1_info_root
        );
        ensure!(
            verify_merkle_proof(
                &previous_root,
                index,
                &vector.smt_proof_previous_index,
                &vector.historic_l1_info_root
            ),
            "index {}: historic proof does not verify",
            index
        );
        debug!(index, %root, "recursive vector OK");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(byte: u8) -> Hash {
        Hash::new([byte; 32])
    }

    #[test]
    fn test_check_root_vectors() {
        let tree = L1InfoTree::new(4, &[]).unwrap();
        let previous = vec![leaf(1), leaf(2)];
        let mut vector = L1InfoTreeVector {
            current_root: tree.build_root(&previous).unwrap(),
            new_root: tree.build_root(&[leaf(1), leaf(2), leaf(3)]).unwrap(),
            previous_leaf_values: previous,
            new_leaf_value: leaf(3),
        };
        assert!(check_root_vectors(4, std::slice::from_ref(&vector)).is_ok());

        vector.new_leaf_value = leaf(4);
        assert!(check_root_vectors(4, &[vector]).is_err());
    }

    #[test]
    fn test_check_recursive_vectors() {
        let ger = leaf(7);
        let block_hash = leaf(8);
        let data_hash = hash_leaf_data(&ger, &block_hash, 10);

        let mut accumulator = HistoricRootAccumulator::new(4, &[]).unwrap();
        let root = accumulator.add_leaf(0, data_hash).unwrap();
        let proof = accumulator.compute_merkle_proof(0).unwrap();

        let mut vector = L1InfoTreeRecursiveVector {
            global_exit_root: ger,
            block_hash,
            timestamp: 10,
            smt_proof_previous_index: proof.siblings,
            index: 0,
            previous_l1_info_tree_root: Hash::ZERO,
            l1_data_hash: data_hash,
            l1_info_tree_root: root,
            historic_l1_info_root: accumulator.historic_root(),
        };
        assert!(check_recursive_vectors(4, std::slice::from_ref(&vector)).is_ok());

        vector.timestamp = 11;
        assert!(check_recursive_vectors(4, &[vector]).is_err());
    }

    #[test]
    fn test_load_leaves_inline() {
        let leaves = load_leaves(vec![leaf(1)], None).unwrap();
        assert_eq!(leaves, vec![leaf(1)]);
    }

    #[test]
    fn test_verify_rejects_wrong_root() {
        assert!(verify(leaf(1), 0, leaf(1), &[]).is_ok());
        assert!(verify(leaf(1), 0, leaf(2), &[]).is_err());
    }
}
