//! Proof generator (C5): walks leaf→root over a built tree, recording
//! per-level sibling digests and the subject's position at each level.

use crate::digest::Digest;
use crate::error::Error;
use crate::tree::Tree;

/// One level of an inclusion proof: the subject ancestor's position among
/// its parent's children, and the digests of the other children in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofEntry {
    pub siblings: Vec<Digest>,
    pub position: usize,
}

/// An inclusion proof: the minimum data needed, alongside a leaf, to
/// recompute the root (§3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub leaf_index: usize,
    pub k: usize,
    pub path: Vec<ProofEntry>,
}

/// Produce an inclusion proof for `tree.leaves()[leaf_index]`.
pub fn prove(tree: &Tree, leaf_index: usize) -> Result<Proof, Error> {
    if leaf_index >= tree.leaf_count() {
        return Err(Error::IndexOutOfRange { index: leaf_index, leaf_count: tree.leaf_count() });
    }

    let mut path = Vec::with_capacity(tree.depth());
    let mut node = tree.leaves()[leaf_index];

    while let Some(parent) = tree.parent_of(node) {
        let j = tree
            .index_in_parent(node)
            .expect("index_in_parent must be present whenever parent is present");
        let siblings: Vec<Digest> = tree
            .children_of(parent)
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != j)
            .map(|(_, &c)| tree.digest_of(c))
            .collect();

        path.push(ProofEntry { siblings, position: j });
        node = parent;
    }

    debug_assert_eq!(path.len(), tree.depth());

    Ok(Proof { leaf_index, k: tree.k(), path })
}

/// Return an inclusion proof for the first leaf (in ascending index order)
/// whose payload satisfies `predicate`. `predicate` must be pure; behavior
/// is unspecified otherwise.
pub fn prove_first_matching<F>(tree: &Tree, predicate: F) -> Result<Proof, Error>
where
    F: Fn(&[u8]) -> bool,
{
    for (i, &handle) in tree.leaves().iter().enumerate() {
        let payload = tree
            .payload_of(handle)
            .expect("leaf handles always carry a payload");
        if predicate(payload) {
            return prove(tree, i);
        }
    }
    Err(Error::NotFound)
}
