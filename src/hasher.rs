use crate::types::{Leaf, Node};

use sha3::{Digest, Keccak256};

type Hash = Keccak256;

// Layer-0 node of a leaf
// H(leaf)
pub fn leaf_hash(leaf: &Leaf) -> Node {
    Node::new(Hash::digest(leaf).into())
}

// Internal node of two siblings, ordered so the verifier needs no direction bits
// H(min(a, b) || max(a, b))
pub fn node_hash(a: &Node, b: &Node) -> Node {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut hash = Hash::new();
    hash.update(lo);
    hash.update(hi);

    Node::new(hash.finalize().into())
}

/// Combine an optional pair of siblings.
///
/// A lone node is carried to the next layer unchanged.
pub fn combined_hash(first: Option<&Node>, second: Option<&Node>) -> Option<Node> {
    match (first, second) {
        (Some(a), Some(b)) => Some(node_hash(a, b)),
        (Some(a), None) | (None, Some(a)) => Some(*a),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // keccak256(uint256(0)) and keccak256(uint256(1))
    const ZERO_WORD_HASH: &str =
        "0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563";
    const ONE_WORD_HASH: &str =
        "0xb10e2d527612073b26eecdfd717e6a320cf44b4afac2b0732d9fcbe2b7fa0cf6";

    fn word(value: u8) -> Node {
        let mut bytes = [0u8; 32];
        bytes[31] = value;
        leaf_hash(&Leaf::new(bytes))
    }

    #[test]
    fn leaf_hash_matches_known_vectors() {
        let mut one = [0u8; 32];
        one[31] = 1;

        assert_eq!(leaf_hash(&Leaf::zeroed()).to_string(), ZERO_WORD_HASH);
        assert_eq!(leaf_hash(&Leaf::new(one)).to_string(), ONE_WORD_HASH);
    }

    #[test]
    fn node_hash_is_symmetric() {
        let a = word(1);
        let b = word(2);

        assert_eq!(node_hash(&a, &b), node_hash(&b, &a));
        assert_ne!(node_hash(&a, &b), node_hash(&a, &a));
    }

    #[test]
    fn node_hash_concatenates_in_ascending_order() {
        let a = word(1);
        let b = word(2);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };

        let mut concat = [0u8; 64];
        concat[..32].copy_from_slice(lo.as_ref());
        concat[32..].copy_from_slice(hi.as_ref());
        let expected = Node::new(Keccak256::digest(concat).into());

        assert_eq!(node_hash(&hi, &lo), expected);
    }

    #[test]
    fn combined_hash_carries_lone_node() {
        let a = word(1);
        let b = word(2);

        assert_eq!(combined_hash(Some(&a), None), Some(a));
        assert_eq!(combined_hash(None, Some(&b)), Some(b));
        assert_eq!(combined_hash(None, None), None);
        assert_eq!(combined_hash(Some(&a), Some(&b)), Some(node_hash(&a, &b)));
    }
}
