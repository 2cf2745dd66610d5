//! Whitelist Merkle Tree
//!
//! Builds a Merkle tree over a fixed set of addresses, derives the single
//! root hash, and produces per-address inclusion proofs that can be
//! verified with only the root and the proof.

// Organized modules
pub mod merkle;
pub mod utils;
pub mod whitelist;

// Re-export main types for easy access
pub use merkle::{
    verify_proof, Digest, HashFunction, MerkleError, MerkleOptions, MerkleResult, MerkleTree,
    ProofStep, Side,
};
pub use utils::{hash_pair, keccak256, random_32, sha256};
pub use whitelist::{address_leaf, normalize_address, WhitelistError, WhitelistResult, WhitelistTree};
