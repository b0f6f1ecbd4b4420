//! Core types for the L1 info tree.
//!
//! This crate defines the data structures shared by the tree implementation
//! and the tooling: the 32-byte [`Hash`], the error type, and the JSON shapes
//! of the test vectors. It contains no hashing or tree logic.

pub mod error;
pub mod hash;
pub mod vectors;

pub use error::{Error, Result};
pub use hash::{Hash, HASH_SIZE};
pub use vectors::{L1InfoTreeRecursiveVector, L1InfoTreeVector};
