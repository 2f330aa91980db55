//! Sorted-pair Keccak-256 Merkle trees over identifier allow-lists.
//!
//! Identifiers are encoded as 32-byte big-endian leaves, sorted and
//! deduplicated, then hashed layer by layer up to a single root. Every
//! identifier gets an inclusion proof made of its sibling hashes, which a
//! verifier folds back into the root with [`hasher::node_hash`].
//!
//! ```
//! use allowlist_merkle::prelude::*;
//!
//! let ids: Vec<Identifier> = [1u64, 1, 2, 3, 6].into_iter().map(Identifier::from).collect();
//! let allowlist = Allowlist::build(&ids).expect("non-empty input");
//!
//! let six = Identifier::from(6u64);
//! let leaf = Leaf::from_identifier(&six).expect("fits in a leaf");
//! let proof = allowlist.proof(&six).expect("six is allowed");
//!
//! assert!(verify(allowlist.root(), &leaf, proof));
//! assert_eq!(allowlist.max_proof_length(), 2);
//! ```

#![warn(missing_debug_implementations)]

pub mod allowlist;
pub mod error;
pub mod hasher;
pub mod identifier;
pub mod layers;
pub mod proof;
pub mod types;

pub mod prelude {
    pub use crate::allowlist::{Allowlist, AllowlistOutput};
    pub use crate::error::{Error, Result};
    pub use crate::hasher::{combined_hash, leaf_hash, node_hash};
    pub use crate::identifier::{parse_identifier, Identifier, LeafSet, PositionIndex};
    pub use crate::layers::{next_layer, Layers};
    pub use crate::proof::{extract_proof, verify, Proof};
    pub use crate::types::{Leaf, Node};
}
