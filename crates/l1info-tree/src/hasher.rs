//! Keccak-256 hashing primitives.

use sha3::{Digest, Keccak256};

use crate::Hash;

/// Keccak-256 of `data`.
pub fn keccak256(data: impl AsRef<[u8]>) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data.as_ref());
    finalize(hasher)
}

/// Node hashing rule: `keccak256(left || right)`, no domain tag.
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    finalize(hasher)
}

fn finalize(hasher: Keccak256) -> Hash {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    Hash::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_keccak_empty_input() {
        assert_eq!(
            keccak256(b""),
            Hash::new(hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"))
        );
    }

    #[test]
    fn test_hash_pair_is_concatenation() {
        let left = Hash::new([1u8; 32]);
        let right = Hash::new([2u8; 32]);

        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(left.as_bytes());
        buf[32..].copy_from_slice(right.as_bytes());

        assert_eq!(hash_pair(&left, &right), keccak256(buf));
        assert_ne!(hash_pair(&left, &right), hash_pair(&right, &left));
    }
}
