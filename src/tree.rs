//! Node arena & tree (C3) and the builder (C4).
//!
//! `Tree` owns all node storage for a single build. `build` drives the
//! level-synchronous construction described in spec §4.4: a leaf pass
//! followed by repeated level-draining until one node — the root —
//! remains.

use tracing::{debug, trace};

use crate::digest::{hash_bytes, hash_concat, Digest};
use crate::error::Error;
use crate::node::{Node, NodeId};
use crate::queue::WorkQueue;

/// Tunables for `build`. `BuildOptions::default()` reproduces the
/// out-of-the-box sequential/parallel crossover behavior.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Leaf passes with at least this many blocks hash leaves in parallel
    /// when the `rayon` feature is enabled. Ignored otherwise.
    pub parallel_threshold: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { parallel_threshold: 4096 }
    }
}

/// A fully constructed, immutable n-ary Merkle tree.
///
/// Produced only by [`build`]. Once built, a `Tree`'s node graph, digests,
/// payloads, and back-references never change (§5).
#[derive(Debug)]
pub struct Tree {
    arena: Vec<Node>,
    leaves: Vec<NodeId>,
    root: NodeId,
    k: usize,
    depth: usize,
}

impl Tree {
    /// Leaf handles, in insertion order. `leaves()[i]` corresponds to the
    /// `i`th input block.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn digest_of(&self, handle: NodeId) -> Digest {
        self.arena[handle.index()].digest()
    }

    pub fn root_digest(&self) -> Digest {
        self.digest_of(self.root)
    }

    pub fn parent_of(&self, handle: NodeId) -> Option<NodeId> {
        self.arena[handle.index()].parent()
    }

    pub fn index_in_parent(&self, handle: NodeId) -> Option<usize> {
        self.arena[handle.index()].index_in_parent()
    }

    pub fn children_of(&self, handle: NodeId) -> &[NodeId] {
        self.arena[handle.index()].children()
    }

    pub fn payload_of(&self, handle: NodeId) -> Option<&[u8]> {
        self.arena[handle.index()].payload()
    }

    pub fn node(&self, handle: NodeId) -> &Node {
        &self.arena[handle.index()]
    }
}

/// Build a tree from `blocks` with branching factor `k` (C4).
///
/// Pre-conditions: `blocks` is non-empty, `k >= 2`, and every block is
/// non-empty. Violating any of these yields [`Error::BadArgument`] with no
/// partially constructed tree observable.
pub fn build(blocks: &[Vec<u8>], k: usize) -> Result<Tree, Error> {
    build_with_options(blocks, k, BuildOptions::default())
}

/// Like [`build`], with explicit tunables.
pub fn build_with_options(
    blocks: &[Vec<u8>],
    k: usize,
    options: BuildOptions,
) -> Result<Tree, Error> {
    if blocks.is_empty() {
        return Err(Error::BadArgument("blocks must be non-empty"));
    }
    if k < 2 {
        return Err(Error::BadArgument("k must be >= 2"));
    }
    if blocks.iter().any(|b| b.is_empty()) {
        return Err(Error::BadArgument("every block must be non-empty"));
    }

    let span = tracing::debug_span!("build", leaves = blocks.len(), k);
    let _enter = span.enter();
    let start = std::time::Instant::now();

    // Exact total node count across all levels: leaves plus however many
    // interior nodes the level-size reduction actually produces. Anything
    // short of exact here would let the level loop's `arena.push` below
    // outgrow the reservation and fall through to Rust's default
    // amortized-growth path, which aborts the process on real allocation
    // failure instead of surfacing `AllocationFailed`.
    let leaf_count = blocks.len();
    let total_nodes = leaf_count + count_interior_nodes(leaf_count, k);
    let mut arena: Vec<Node> = Vec::new();
    arena
        .try_reserve_exact(total_nodes)
        .map_err(|_| Error::AllocationFailed("node arena"))?;

    // --- Leaf pass ---------------------------------------------------
    let digests = hash_leaves(blocks, options.parallel_threshold);

    let mut leaves = Vec::new();
    leaves
        .try_reserve_exact(leaf_count)
        .map_err(|_| Error::AllocationFailed("leaf handle vector"))?;

    let mut queue: WorkQueue<NodeId> = WorkQueue::with_capacity(leaf_count);
    for (block, digest) in blocks.iter().zip(digests.into_iter()) {
        let mut payload = Vec::new();
        payload
            .try_reserve_exact(block.len())
            .map_err(|_| Error::AllocationFailed("leaf payload copy"))?;
        payload.extend_from_slice(block);

        let id = NodeId(arena.len());
        arena.push(Node::leaf(digest, payload));
        leaves.push(id);
        queue.push(id);
    }

    // --- Level loop ----------------------------------------------------
    let mut depth = 0usize;
    while queue.len() > 1 {
        let level_len = queue.len();
        let parents_this_level = level_len.div_ceil(k);
        depth += 1;
        trace!(level = depth, level_len, parents_this_level, "grouping level");

        for _ in 0..parents_this_level {
            let group = queue.drain(k);
            debug_assert!(!group.is_empty());

            let child_digests: Vec<Digest> =
                group.iter().map(|id| arena[id.index()].digest()).collect();
            let digest = hash_concat(child_digests.iter());

            let parent_id = NodeId(arena.len());
            for (j, &child) in group.iter().enumerate() {
                let child_node = &mut arena[child.index()];
                child_node.parent = Some(parent_id);
                child_node.index_in_parent = Some(j);
            }
            arena.push(Node::interior(digest, group));
            queue.push(parent_id);
        }
    }

    // --- Finalization ----------------------------------------------------
    let root = queue
        .pop()
        .expect("queue invariant: exactly one node remains after the level loop");

    debug!(depth, elapsed_us = start.elapsed().as_micros() as u64, "build complete");

    Ok(Tree { arena, leaves, root, k, depth })
}

#[cfg(feature = "rayon")]
fn hash_leaves(blocks: &[Vec<u8>], threshold: usize) -> Vec<Digest> {
    use rayon::prelude::*;
    if blocks.len() >= threshold {
        blocks.par_iter().map(|b| hash_bytes(b)).collect()
    } else {
        blocks.iter().map(|b| hash_bytes(b)).collect()
    }
}

#[cfg(not(feature = "rayon"))]
fn hash_leaves(blocks: &[Vec<u8>], _threshold: usize) -> Vec<Digest> {
    blocks.iter().map(|b| hash_bytes(b)).collect()
}

/// Exact count of interior nodes the level loop will allocate: simulate the
/// level-size reduction (`n -> ceil(n / k)`) until one node remains, summing
/// each level's parent count.
fn count_interior_nodes(leaf_count: usize, k: usize) -> usize {
    let mut n = leaf_count;
    let mut total = 0usize;
    while n > 1 {
        n = n.div_ceil(k);
        total += n;
    }
    total
}
