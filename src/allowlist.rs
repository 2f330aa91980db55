use crate::error::Result;
use crate::identifier::{Identifier, LeafSet};
use crate::layers::Layers;
use crate::proof::{extract_proof, Proof};
use crate::types::{Leaf, Node};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Merkle commitment to a set of identifiers, with a proof for each of them.
#[derive(Debug, Clone)]
pub struct Allowlist {
    leaves: LeafSet,
    layers: Layers,
    proofs: Vec<Proof>,
    max_proof_length: usize,
}

impl Allowlist {
    /// Build the tree over `ids` and extract one proof per distinct identifier.
    ///
    /// Input order and duplicates do not affect the result.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build<'a, I>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        let leaves = LeafSet::canonicalize(ids)?;
        let index = leaves.position_index();

        let layers = Layers::build(leaves.as_slice())?;
        tracing::debug!(layers = layers.len(), root = %layers.root(), "built layers");

        #[cfg(not(feature = "parallel"))]
        let proofs = leaves
            .iter()
            .map(|leaf| extract_proof(leaf, &index, &layers))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(feature = "parallel")]
        let proofs = leaves
            .as_slice()
            .par_iter()
            .map(|leaf| extract_proof(leaf, &index, &layers))
            .collect::<Result<Vec<_>>>()?;

        let max_proof_length = proofs.iter().map(|proof| proof.len()).max().unwrap_or_default();
        tracing::debug!(max_proof_length, "extracted proofs");

        Ok(Self {
            leaves,
            layers,
            proofs,
            max_proof_length,
        })
    }

    pub fn root(&self) -> &Node {
        self.layers.root()
    }

    pub fn max_proof_length(&self) -> usize {
        self.max_proof_length
    }

    pub fn leaves(&self) -> &LeafSet {
        &self.leaves
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    /// Number of distinct identifiers committed to.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Proof of `id`, if it belongs to the set.
    pub fn proof(&self, id: &Identifier) -> Option<&Proof> {
        let leaf = Leaf::from_identifier(id).ok()?;
        let position = self.leaves.as_slice().binary_search(&leaf).ok()?;

        self.proofs.get(position)
    }

    /// Leaves with their proofs, in canonical order.
    pub fn proofs(&self) -> impl ExactSizeIterator<Item = (&Leaf, &Proof)> {
        self.leaves.iter().zip(self.proofs.iter())
    }

    pub fn into_output(self) -> AllowlistOutput {
        let proofs = self
            .leaves
            .iter()
            .map(Leaf::to_identifier)
            .zip(self.proofs)
            .collect();

        AllowlistOutput {
            root: *self.layers.root(),
            proofs,
            max_proof_length: self.max_proof_length,
        }
    }
}

/// Flat result handed over to verifiers and storage layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AllowlistOutput {
    pub root: Node,
    /// Proofs keyed by identifier, in canonical leaf order.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serde_impl::decimal_keyed"))]
    pub proofs: Vec<(Identifier, Proof)>,
    pub max_proof_length: usize,
}

impl AllowlistOutput {
    pub fn proof(&self, id: &Identifier) -> Option<&Proof> {
        self.proofs
            .iter()
            .find_map(|(candidate, proof)| (candidate == id).then_some(proof))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Identifier, Proof};

    use serde::ser::{SerializeMap, Serializer};

    /// `{"<decimal id>": proof, ..}` preserving the canonical order
    pub fn decimal_keyed<S>(
        proofs: &[(Identifier, Proof)],
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(proofs.len()))?;
        for (id, proof) in proofs {
            map.serialize_entry(&id.to_str_radix(10), proof)?;
        }
        map.end()
    }
}
