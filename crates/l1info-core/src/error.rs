use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The level loop finished with more than one node left.
    #[error("more than one root detected: {remaining} nodes left after {height} levels")]
    TooManyRoots { height: u8, remaining: usize },

    #[error("index {index} out of range for a tree of height {height}")]
    IndexOutOfRange { index: u64, height: u8 },

    #[error("non-sequential insertion: got index {index}, expected {expected}")]
    NonSequentialInsertion { index: u64, expected: u64 },

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;
