use crate::error::{Error, Result};
use crate::hasher::{combined_hash, leaf_hash};
use crate::types::{Leaf, Node};

/// All layers of a tree, from the hashed leaves up to the root.
///
/// Layer `k + 1` holds `ceil(len(k) / 2)` nodes. A node without a sibling is
/// carried to the next layer unchanged, it is never hashed with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layers {
    layers: Vec<Vec<Node>>,
}

impl Layers {
    /// Hash the leaves and fold them pairwise until a single node remains.
    ///
    /// The order of `leaves` defines which nodes are paired.
    pub fn build(leaves: &[Leaf]) -> Result<Self> {
        if leaves.is_empty() {
            return Err(Error::EmptyTree);
        }

        let mut layers = vec![leaves.iter().map(leaf_hash).collect::<Vec<_>>()];

        while let Some(top) = layers.last().filter(|layer| layer.len() > 1) {
            let next = next_layer(top);
            tracing::trace!(height = layers.len(), nodes = next.len(), "built layer");
            layers.push(next);
        }

        Ok(Self { layers })
    }

    /// The single node of the top layer.
    pub fn root(&self) -> &Node {
        // `build` guarantees a non-empty top layer
        &self.layers[self.layers.len() - 1][0]
    }

    /// Number of layers, root included.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of nodes in layer 0.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    pub fn layer(&self, height: usize) -> Option<&[Node]> {
        self.layers.get(height).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[Node]> + ExactSizeIterator {
        self.layers.iter().map(Vec::as_slice)
    }
}

/// Pair up consecutive nodes and combine each pair.
pub fn next_layer(nodes: &[Node]) -> Vec<Node> {
    nodes
        .chunks(2)
        .filter_map(|pair| combined_hash(pair.first(), pair.get(1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::node_hash;

    fn leaves(count: u8) -> Vec<Leaf> {
        (1..=count)
            .map(|i| {
                let mut bytes = [0u8; 32];
                bytes[31] = i;
                Leaf::new(bytes)
            })
            .collect()
    }

    #[test]
    fn build_returns_error_for_0_leaves() {
        assert_eq!(Layers::build(&[]), Err(Error::EmptyTree));
    }

    #[test]
    fn root_of_1_leaf_is_its_hash() {
        let data = leaves(1);
        let layers = Layers::build(&data).unwrap();

        assert_eq!(layers.len(), 1);
        assert_eq!(layers.root(), &leaf_hash(&data[0]));
    }

    #[test]
    fn root_of_3_leaves_carries_the_odd_node() {
        let data = leaves(3);
        let layers = Layers::build(&data).unwrap();

        //     r
        //    / \
        //   n   \
        //  / \   \
        // l0  l1  l2

        let l0 = leaf_hash(&data[0]);
        let l1 = leaf_hash(&data[1]);
        let l2 = leaf_hash(&data[2]);
        let n = node_hash(&l0, &l1);

        assert_eq!(layers.len(), 3);
        assert_eq!(layers.layer(1), Some(&[n, l2][..]));
        assert_eq!(layers.root(), &node_hash(&n, &l2));
    }

    #[test]
    fn root_of_7_leaves() {
        let data = leaves(7);
        let layers = Layers::build(&data).unwrap();

        //               r
        //              / \
        //             /   \
        //           n03    n11
        //          /  \    /  \
        //        n01 n05 n09   \
        //        / \ / \ / \    \
        //       l0 l1 .. l4 l5  l6

        let l: Vec<_> = data.iter().map(leaf_hash).collect();
        let n01 = node_hash(&l[0], &l[1]);
        let n05 = node_hash(&l[2], &l[3]);
        let n09 = node_hash(&l[4], &l[5]);
        let n03 = node_hash(&n01, &n05);
        let n11 = node_hash(&n09, &l[6]);

        let sizes: Vec<_> = layers.iter().map(<[Node]>::len).collect();
        assert_eq!(sizes, vec![7, 4, 2, 1]);
        assert_eq!(layers.root(), &node_hash(&n03, &n11));
        assert_eq!(layers.leaf_count(), 7);
    }

    #[test]
    fn layer_count_is_ceil_log2_plus_one() {
        for (count, expected) in [(1u8, 1usize), (2, 2), (3, 3), (4, 3), (5, 4), (8, 4), (9, 5)] {
            let layers = Layers::build(&leaves(count)).unwrap();
            assert_eq!(layers.len(), expected, "{} leaves", count);
        }
    }

    #[test]
    fn next_layer_of_odd_length_keeps_last_node() {
        let nodes: Vec<_> = leaves(5).iter().map(leaf_hash).collect();
        let next = next_layer(&nodes);

        assert_eq!(next.len(), 3);
        assert_eq!(next[2], nodes[4]);
        assert!(next_layer(&[]).is_empty());
    }
}
