//! Canonical leaf encoding of identifiers

use crate::error::{Error, Result};
use crate::types::Leaf;

use itertools::Itertools;
use num_bigint::BigUint;

use std::collections::HashMap;

/// Arbitrary precision, non-negative identifier supplied by the caller.
pub type Identifier = BigUint;

impl Leaf {
    /// Encode an identifier as a 32-byte big-endian word, zero-padded on the left.
    ///
    /// Identifiers wider than [`Leaf::LEN`] are rejected instead of truncated.
    pub fn from_identifier(id: &Identifier) -> Result<Self> {
        let bytes = id.to_bytes_be();

        // `to_bytes_be` of zero is `[0]`
        if bytes.len() > Self::LEN {
            return Err(Error::PreconditionViolation {
                bytes: bytes.len(),
                max: Self::LEN,
            });
        }

        let mut word = [0u8; 32];
        word[Self::LEN - bytes.len()..].copy_from_slice(&bytes);

        Ok(Self::new(word))
    }

    /// Decode the identifier back from its leaf.
    pub fn to_identifier(&self) -> Identifier {
        BigUint::from_bytes_be(self.as_ref())
    }
}

/// Parse an identifier from its decimal or `0x`-prefixed hexadecimal form.
///
/// Only plain digits are accepted: no sign, no `_` separators.
pub fn parse_identifier(s: &str) -> Result<Identifier> {
    let s = s.trim();

    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };

    let well_formed = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));

    well_formed
        .then(|| BigUint::parse_bytes(digits.as_bytes(), radix))
        .flatten()
        .ok_or_else(|| Error::InvalidIdentifier(s.to_owned()))
}

/// Deduplicated leaves in ascending byte-wise order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafSet {
    leaves: Vec<Leaf>,
}

impl LeafSet {
    /// Encode, sort and deduplicate the identifiers.
    ///
    /// Fails with [`Error::EmptyInput`] when nothing is left.
    pub fn canonicalize<'a, I>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        let leaves: Vec<Leaf> = ids
            .into_iter()
            .map(Leaf::from_identifier)
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .sorted()
            .dedup()
            .collect();

        if leaves.is_empty() {
            return Err(Error::EmptyInput);
        }

        tracing::debug!(leaves = leaves.len(), "canonicalized identifiers");

        Ok(Self { leaves })
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Never true for a canonicalized set.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Leaf> {
        self.leaves.iter()
    }

    pub fn as_slice(&self) -> &[Leaf] {
        &self.leaves
    }

    pub fn contains(&self, leaf: &Leaf) -> bool {
        self.leaves.binary_search(leaf).is_ok()
    }

    /// Map every leaf to its position in the set.
    pub fn position_index(&self) -> PositionIndex {
        PositionIndex::new(&self.leaves)
    }
}

impl AsRef<[Leaf]> for LeafSet {
    fn as_ref(&self) -> &[Leaf] {
        &self.leaves
    }
}

impl<'a> IntoIterator for &'a LeafSet {
    type Item = &'a Leaf;
    type IntoIter = core::slice::Iter<'a, Leaf>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.iter()
    }
}

/// Position of each leaf within layer 0.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PositionIndex {
    positions: HashMap<Leaf, usize>,
}

impl PositionIndex {
    pub fn new(leaves: &[Leaf]) -> Self {
        let positions = leaves
            .iter()
            .enumerate()
            .map(|(index, leaf)| (*leaf, index))
            .collect();

        Self { positions }
    }

    pub fn position(&self, leaf: &Leaf) -> Option<usize> {
        self.positions.get(leaf).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
