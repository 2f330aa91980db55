use crate::error::{Error, Result};
use crate::hasher::{leaf_hash, node_hash};
use crate::identifier::PositionIndex;
use crate::layers::Layers;
use crate::types::{Leaf, Node};

use core::ops::Deref;

/// Sibling hashes from the leaf layer up to the root.
///
/// `proof[0]` is the sibling in layer 0. Layers where the path node had no
/// sibling contribute nothing, so proofs of the same tree may differ in length.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Proof(Vec<Node>);

impl Proof {
    pub fn new(siblings: Vec<Node>) -> Self {
        Self(siblings)
    }

    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Node> {
        self.0
    }

    /// Recompute the root committed to by `leaf` and this proof.
    pub fn root_from(&self, leaf: &Leaf) -> Node {
        self.0
            .iter()
            .fold(leaf_hash(leaf), |sum, sibling| node_hash(&sum, sibling))
    }
}

impl Deref for Proof {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.0
    }
}

impl From<Vec<Node>> for Proof {
    fn from(siblings: Vec<Node>) -> Self {
        Self(siblings)
    }
}

impl FromIterator<Node> for Proof {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Proof {
    type Item = &'a Node;
    type IntoIter = core::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collect the sibling of `leaf`'s path node in every layer below the root.
pub fn extract_proof(leaf: &Leaf, index: &PositionIndex, layers: &Layers) -> Result<Proof> {
    let mut idx = index.position(leaf).ok_or(Error::NotFound(*leaf))?;

    let below_root = layers.len().saturating_sub(1);
    let proof: Proof = layers
        .iter()
        .take(below_root)
        .filter_map(|layer| {
            let sibling = layer.get(idx ^ 1).copied();
            idx /= 2;
            sibling
        })
        .collect();

    Ok(proof)
}

/// Check that `leaf` is committed to by `root` through `proof`.
pub fn verify(root: &Node, leaf: &Leaf, proof: &Proof) -> bool {
    proof.root_from(leaf) == *root
}
