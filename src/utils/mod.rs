//! Utils Module
pub mod hash_utils;

// Re-export main types
pub use hash_utils::*;
