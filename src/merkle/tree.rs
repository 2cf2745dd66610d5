//! Merkle Tree Implementation
//! Bottom-up binary hash tree built once from a fixed leaf sequence,
//! answering root, inclusion-proof and verification queries.

use serde::{Deserialize, Serialize};

use super::{MerkleError, MerkleResult};
use crate::utils::hash_utils;

/// Fixed-size digest produced by the hash collaborators
pub type Digest = [u8; 32];

/// Supported hash functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashFunction {
    /// Keccak-256
    Keccak256,
    /// SHA-256
    Sha256,
}

impl HashFunction {
    /// Hash two child digests concatenated left-then-right
    pub fn hash_pair(&self, left: &Digest, right: &Digest) -> Digest {
        let mut data = Vec::with_capacity(64);
        data.extend_from_slice(left);
        data.extend_from_slice(right);

        match self {
            HashFunction::Keccak256 => hash_utils::keccak256(&data),
            HashFunction::Sha256 => hash_utils::sha256(&data),
        }
    }
}

/// Tree construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleOptions {
    /// Hash function used for internal nodes
    pub hash_function: HashFunction,
    /// Sort each sibling pair by byte value before hashing, making
    /// verification independent of left/right position within a pair
    pub sort_pairs: bool,
}

impl Default for MerkleOptions {
    fn default() -> Self {
        Self {
            hash_function: HashFunction::Keccak256,
            sort_pairs: false,
        }
    }
}

/// Which side of the pair the recorded sibling sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// One level of an inclusion proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Sibling digest at this level
    pub sibling: Digest,
    /// Side the sibling is on
    pub side: Side,
}

/// Merkle tree over an ordered sequence of already-hashed leaves
///
/// Layer 0 holds the leaves; each layer above hashes adjacent pairs from
/// the layer below. A layer with an odd node count carries its last node
/// up unchanged (no self-duplication). The tree is immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerkleTree {
    /// Tree layers: layer 0 = leaves, top layer = root
    pub layers: Vec<Vec<Digest>>,
    /// Construction options
    pub options: MerkleOptions,
}

impl MerkleTree {
    /// Build a tree from already-hashed leaves
    ///
    /// Hashing raw inputs into leaves is the caller's responsibility.
    pub fn new(leaves: Vec<Digest>, options: MerkleOptions) -> Self {
        let leaf_count = leaves.len();
        let mut layers = vec![leaves];

        loop {
            let current = &layers[layers.len() - 1];
            if current.len() <= 1 {
                break;
            }

            let mut next = Vec::with_capacity((current.len() + 1) / 2);
            for i in (0..current.len()).step_by(2) {
                if i + 1 < current.len() {
                    next.push(Self::hash_children(&options, &current[i], &current[i + 1]));
                } else {
                    // Odd tail is carried up unchanged
                    next.push(current[i]);
                }
            }
            layers.push(next);
        }

        log::debug!(
            "built merkle tree: {} leaves, {} layers",
            leaf_count,
            layers.len()
        );

        Self { layers, options }
    }

    /// Get the root digest
    pub fn root(&self) -> MerkleResult<Digest> {
        match self.layers.last().and_then(|layer| layer.first()) {
            Some(root) => Ok(*root),
            None => Err(MerkleError::EmptyTree),
        }
    }

    /// Leaves in insertion order
    pub fn leaves(&self) -> &[Digest] {
        &self.layers[0]
    }

    /// Number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Generate an inclusion proof for a leaf digest
    ///
    /// When the same digest appears more than once in the leaf layer, the
    /// first occurrence is used.
    pub fn proof(&self, leaf: &Digest) -> MerkleResult<Vec<ProofStep>> {
        let mut index = self.layers[0]
            .iter()
            .position(|candidate| candidate == leaf)
            .ok_or(MerkleError::LeafNotFound)?;

        let mut steps = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling_index = index ^ 1;
            // An odd tail carried up unchanged has no sibling at this level
            if sibling_index < layer.len() {
                let side = if sibling_index < index {
                    Side::Left
                } else {
                    Side::Right
                };
                steps.push(ProofStep {
                    sibling: layer[sibling_index],
                    side,
                });
            }
            index /= 2;
        }

        Ok(steps)
    }

    /// Verify an inclusion proof against a root using this tree's options
    pub fn verify(&self, leaf: &Digest, proof: &[ProofStep], root: &Digest) -> bool {
        verify_proof(leaf, proof, root, &self.options)
    }

    fn hash_children(options: &MerkleOptions, left: &Digest, right: &Digest) -> Digest {
        if options.sort_pairs && right < left {
            options.hash_function.hash_pair(right, left)
        } else {
            options.hash_function.hash_pair(left, right)
        }
    }
}

/// Recompute a candidate root from `leaf` and `proof` and compare it to `root`
///
/// Standalone so that holders of only a root and a proof can verify without
/// the tree itself.
pub fn verify_proof(
    leaf: &Digest,
    proof: &[ProofStep],
    root: &Digest,
    options: &MerkleOptions,
) -> bool {
    let mut current = *leaf;

    for step in proof {
        current = if options.sort_pairs {
            MerkleTree::hash_children(options, &current, &step.sibling)
        } else {
            match step.side {
                Side::Left => options.hash_function.hash_pair(&step.sibling, &current),
                Side::Right => options.hash_function.hash_pair(&current, &step.sibling),
            }
        };
    }

    current == *root
}
