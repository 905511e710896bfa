//! Node arena (part of C3): all nodes of a tree live in one `Vec<Node>`,
//! addressed by `NodeId`. Parent/child links are indices, not pointers —
//! this sidesteps the cyclic ownership a direct `parent`/`children`
//! translation would otherwise produce, and makes destruction a single
//! `Vec` drop (§9).

use crate::digest::Digest;

/// Opaque handle into a [`crate::tree::Tree`]'s node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A tree node. Leaves carry `payload` and an empty `children`; interior
/// nodes carry one or more `children` and no payload.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) digest: Digest,
    pub(crate) payload: Option<Vec<u8>>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) index_in_parent: Option<usize>,
}

impl Node {
    pub(crate) fn leaf(digest: Digest, payload: Vec<u8>) -> Self {
        Self {
            digest,
            payload: Some(payload),
            children: Vec::new(),
            parent: None,
            index_in_parent: None,
        }
    }

    pub(crate) fn interior(digest: Digest, children: Vec<NodeId>) -> Self {
        Self {
            digest,
            payload: None,
            children,
            parent: None,
            index_in_parent: None,
        }
    }

    /// `true` for nodes with an owned payload and no children.
    pub fn is_leaf(&self) -> bool {
        self.payload.is_some()
    }

    pub fn digest(&self) -> Digest {
        self.digest
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn index_in_parent(&self) -> Option<usize> {
        self.index_in_parent
    }
}
