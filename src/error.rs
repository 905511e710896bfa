//! Error taxonomy for `merkle_core` (§7).
//!
//! All errors are returned to the caller; the core never aborts the process,
//! never writes to error streams, and never installs signal handlers.

use thiserror::Error;

/// Canonical error type for every fallible operation in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Caller violated an input contract: empty block, `k < 2`, empty
    /// input sequence, and the like.
    #[error("bad argument: {0}")]
    BadArgument(&'static str),

    /// `leaf_index >= leaf_count` in `prove`.
    #[error("index out of range: {index} >= {leaf_count}")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    /// No leaf satisfied a predicate in `prove_first_matching`.
    #[error("no leaf matched the predicate")]
    NotFound,

    /// The runtime could not allocate memory for a node, a payload copy,
    /// or a proof. Construction rolls back before this is surfaced.
    #[error("allocation failed: {0}")]
    AllocationFailed(&'static str),

    /// `verify` observed a proof whose structure is internally
    /// inconsistent (oversize sibling list, out-of-range position, `k < 2`).
    #[error("malformed proof: {0}")]
    BadProof(&'static str),

    /// `verify` completed and the reconstructed root did not match the
    /// expected root. A negative answer, not a system failure — callers
    /// that need to distinguish "proof checked out false" from "proof was
    /// malformed" should match on this variant specifically.
    #[error("verification failed: root mismatch")]
    Invalid,

    /// The tree behind a [`crate::concurrent::ConcurrentTree`] has already
    /// been destroyed. Not a spec error kind by name, but required to give
    /// Rust's consuming-`destroy` discipline a return type when the tree is
    /// shared behind a lock rather than held by unique ownership (§5, §9).
    #[error("tree has already been destroyed")]
    Destroyed,
}

/// Convenience alias for results that use [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
