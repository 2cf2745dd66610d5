//! Merkle Tree Module
//! Binary hash trees over fixed leaf sets with inclusion proofs

pub mod tree;

// Re-export main types
pub use tree::{
    verify_proof, Digest, HashFunction, MerkleOptions, MerkleTree, ProofStep, Side,
};

/// Merkle error types
#[derive(Debug, thiserror::Error)]
pub enum MerkleError {
    #[error("Tree has no leaves")]
    EmptyTree,

    #[error("Leaf is not present in the tree")]
    LeafNotFound,
}

/// Result type for Merkle operations
pub type MerkleResult<T> = Result<T, MerkleError>;
