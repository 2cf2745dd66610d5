//! Whitelist Module
//! Address normalization, leaf derivation and the whitelist Merkle tree

use serde::{Deserialize, Serialize};

use crate::merkle::{Digest, HashFunction, MerkleError, MerkleOptions, MerkleTree, ProofStep};
use crate::utils::hash_utils;

/// Whitelist error types
#[derive(Debug, thiserror::Error)]
pub enum WhitelistError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Whitelist is empty")]
    EmptyWhitelist,

    #[error(transparent)]
    Merkle(#[from] MerkleError),
}

/// Result type for whitelist operations
pub type WhitelistResult<T> = Result<T, WhitelistError>;

/// Normalize a hex address string into its canonical 20-byte form
///
/// Accepts an optional `0x`/`0X` prefix and any letter case; anything that
/// does not decode to exactly 20 bytes is rejected. Callers must normalize
/// consistently or semantically identical addresses hash to different leaves.
pub fn normalize_address(address: &str) -> WhitelistResult<[u8; 20]> {
    let stripped = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);

    let bytes = hex::decode(stripped.to_ascii_lowercase())
        .map_err(|_| WhitelistError::InvalidAddress(address.to_string()))?;

    bytes
        .try_into()
        .map_err(|_| WhitelistError::InvalidAddress(address.to_string()))
}

/// Hash a whitelist address into its Merkle leaf
pub fn address_leaf(address: &str) -> WhitelistResult<Digest> {
    Ok(hash_utils::keccak256(&normalize_address(address)?))
}

/// Merkle tree over a fixed whitelist of addresses
///
/// Leaves are keccak256 digests of the normalized addresses in input order.
/// Sibling pairs are sorted before hashing, so verification is independent
/// of left/right position within each pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhitelistTree {
    /// Addresses as supplied, in insertion order
    pub addresses: Vec<String>,
    /// Underlying Merkle tree
    pub tree: MerkleTree,
}

impl WhitelistTree {
    /// Build a whitelist tree from address strings
    pub fn from_addresses(addresses: &[&str]) -> WhitelistResult<Self> {
        if addresses.is_empty() {
            return Err(WhitelistError::EmptyWhitelist);
        }

        let mut leaves = Vec::with_capacity(addresses.len());
        for address in addresses {
            leaves.push(address_leaf(address)?);
        }

        let options = MerkleOptions {
            hash_function: HashFunction::Keccak256,
            sort_pairs: true,
        };

        Ok(Self {
            addresses: addresses.iter().map(|address| address.to_string()).collect(),
            tree: MerkleTree::new(leaves, options),
        })
    }

    /// Get the Merkle root
    pub fn root(&self) -> WhitelistResult<Digest> {
        Ok(self.tree.root()?)
    }

    /// Get the Merkle root as a 0x-prefixed hex string
    pub fn root_hex(&self) -> WhitelistResult<String> {
        Ok(format!("0x{}", hex::encode(self.root()?)))
    }

    /// Generate an inclusion proof for an address
    pub fn proof_for(&self, address: &str) -> WhitelistResult<Vec<ProofStep>> {
        let leaf = address_leaf(address)?;
        Ok(self.tree.proof(&leaf)?)
    }

    /// Generate an inclusion proof as 0x-prefixed hex sibling digests
    pub fn proof_hex_for(&self, address: &str) -> WhitelistResult<Vec<String>> {
        Ok(self
            .proof_for(address)?
            .iter()
            .map(|step| format!("0x{}", hex::encode(step.sibling)))
            .collect())
    }

    /// Check whether an address is present in the whitelist
    pub fn contains(&self, address: &str) -> bool {
        match address_leaf(address) {
            Ok(leaf) => self.tree.leaves().contains(&leaf),
            Err(_) => false,
        }
    }
}
