//! CLI tool for the L1 info tree.
//!
//! Computes leaf hashes, roots and proofs, replays L1 facts through the
//! historic root accumulator, and checks test-vector files.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use l1info_core::Hash;
use l1info_tree::L1_INFO_TREE_HEIGHT;

#[derive(Parser)]
#[command(name = "l1info")]
#[command(about = "L1 info tree toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Tree height
    #[arg(long, global = true, default_value_t = L1_INFO_TREE_HEIGHT)]
    height: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash an L1 fact into a leaf
    LeafHash {
        #[arg(long)]
        global_exit_root: Hash,

        #[arg(long)]
        previous_block_hash: Hash,

        #[arg(long)]
        min_timestamp: u64,
    },

    /// Compute the root over a list of leaves
    Root {
        /// Leaves as hex hashes
        leaves: Vec<Hash>,

        /// JSON file with an array of hex hashes (used instead of LEAVES)
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Compute the Merkle proof of one leaf position
    Proof {
        /// Leaf position
        #[arg(long)]
        index: u64,

        /// Leaves as hex hashes
        leaves: Vec<Hash>,

        /// JSON file with an array of hex hashes (used instead of LEAVES)
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Verify a Merkle proof against a root
    Verify {
        #[arg(long)]
        leaf: Hash,

        #[arg(long)]
        index: u64,

        #[arg(long)]
        root: Hash,

        /// Comma-separated sibling hashes, bottom-up
        #[arg(long, value_delimiter = ',')]
        siblings: Vec<Hash>,
    },

    /// Replay L1 facts from a JSON file through the historic root accumulator
    Accumulate {
        /// JSON array of {globalExitRoot, previousBlockHash, minTimestamp}
        file: PathBuf,
    },

    /// Check test-vector files
    Vectors {
        /// L1InfoTree root vectors
        #[arg(long)]
        roots: Option<PathBuf>,

        /// L1InfoTreeRecursive vectors
        #[arg(long)]
        recursive: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let height = cli.height;

    match cli.command {
        Commands::LeafHash {
            global_exit_root,
            previous_block_hash,
            min_timestamp,
        } => commands::leaf_hash(global_exit_root, previous_block_hash, min_timestamp),
        Commands::Root { leaves, file } => commands::root(height, leaves, file),
        Commands::Proof {
            index,
            leaves,
            file,
        } => commands::proof(height, index, leaves, file),
        Commands::Verify {
            leaf,
            index,
            root,
            siblings,
        } => commands::verify(leaf, index, root, &siblings),
        Commands::Accumulate { file } => commands::accumulate(height, &file),
        Commands::Vectors { roots, recursive } => {
            commands::vectors(height, roots.as_deref(), recursive.as_deref())
        }
    }
}
