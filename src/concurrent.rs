//! Concurrency wrapper (C7): reader/writer discipline around a fully-built
//! tree (§5). Any number of readers may run concurrently; none may run
//! concurrently with `destroy`.
//!
//! The wrapper holds `Arc<RwLock<Option<Tree>>>` rather than a bare
//! `Tree` so that `destroy` — which the spec treats as consuming the tree
//! by value — has somewhere to put the "already gone" state when the tree
//! is shared across threads instead of uniquely owned (§5, §9). A second
//! `destroy` call then observes `None` and is a documented no-op (P7).

use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::error::Error;
use crate::tree::Tree;

/// A tree shared behind a reader-writer lock.
#[derive(Clone)]
pub struct ConcurrentTree {
    inner: Arc<RwLock<Option<Tree>>>,
}

impl ConcurrentTree {
    /// Publish a freshly built tree. Publication happens-before any
    /// reader observes it: the tree is placed behind the lock before this
    /// constructor returns a handle to any caller.
    pub fn new(tree: Tree) -> Self {
        Self { inner: Arc::new(RwLock::new(Some(tree))) }
    }

    /// Run `f` against the tree in shared (read) mode.
    ///
    /// Returns [`Error::Destroyed`] if `destroy` has already taken effect.
    pub fn read<F, R>(&self, f: F) -> Result<R, Error>
    where
        F: FnOnce(&Tree) -> R,
    {
        let guard = self.inner.read().expect("lock poisoned");
        match guard.as_ref() {
            Some(tree) => Ok(f(tree)),
            None => {
                warn!("read attempted on a destroyed tree");
                Err(Error::Destroyed)
            }
        }
    }

    /// Run `f` against the tree in exclusive (write) mode, blocking until
    /// any in-flight readers drain (§4.7, §5).
    ///
    /// Returns [`Error::Destroyed`] if `destroy` has already taken effect.
    /// The tree itself is shared-immutable once published (§5); this exists
    /// for callers that need the exclusivity guarantee around an operation
    /// touching the tree, not to support in-place mutation of node data.
    pub fn write<F, R>(&self, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Tree) -> R,
    {
        let mut guard = self.inner.write().expect("lock poisoned");
        match guard.as_mut() {
            Some(tree) => Ok(f(tree)),
            None => {
                warn!("write attempted on a destroyed tree");
                Err(Error::Destroyed)
            }
        }
    }

    /// One-shot, idempotent teardown (§5, P7). Acquires the exclusive
    /// lock, blocking until all in-flight readers drain, then releases
    /// the tree's node storage. A second call observes an already-empty
    /// slot and is a no-op with no side effects.
    pub fn destroy(&self) {
        let mut guard = self.inner.write().expect("lock poisoned");
        *guard = None;
    }

    /// `true` if `destroy` has not yet taken effect.
    pub fn is_alive(&self) -> bool {
        self.inner.read().expect("lock poisoned").is_some()
    }
}
