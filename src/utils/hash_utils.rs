//! Hash Utilities
//! Common hash functions and helpers for the whitelist Merkle tree

use rand::RngCore;
use sha2::{Digest, Sha256};
use sha3::{Digest as Sha3Digest, Keccak256};

/// Hash a byte slice using Keccak-256
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash a byte slice using SHA-256
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash two 32-byte digests together with Keccak-256
pub fn hash_pair(left: [u8; 32], right: [u8; 32]) -> [u8; 32] {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left);
    data.extend_from_slice(&right);
    keccak256(&data)
}

/// Generate a random 32-byte array
pub fn random_32() -> [u8; 32] {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}
