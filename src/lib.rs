//! merkle_core — n-ary Merkle tree construction and inclusion-proof
//! generation/verification over ordered sequences of opaque byte blocks.
//!
//! The tree is built bottom-up, level-synchronously, with a configurable
//! branching factor `k >= 2`. Leaves hash as `H(payload)`; interior nodes
//! hash as `H(child_0 ‖ … ‖ child_{m-1})` — there is no domain-separation
//! prefix distinguishing the two (see [`tree`] module docs and
//! `DESIGN.md` for why). A level's trailing short group is hashed over
//! exactly the children it has; it is never padded by duplication.
//!
//! ```
//! use merkle_core::{tree, proof, verify};
//!
//! let blocks: Vec<Vec<u8>> = vec![b"Hello".to_vec(), b"World".to_vec()];
//! let t = tree::build(&blocks, 2).unwrap();
//! let root = t.root_digest();
//! let p = proof::prove(&t, 0).unwrap();
//! assert!(verify::verify(&p, root, b"Hello").is_ok());
//! ```

#![deny(rust_2018_idioms, unused_must_use)]

pub mod concurrent;
pub mod digest;
pub mod error;
pub mod node;
pub mod proof;
pub mod queue;
pub mod tree;
pub mod verify;

pub use concurrent::ConcurrentTree;
pub use digest::{Digest, DIGEST_LEN};
pub use error::Error;
pub use node::{Node, NodeId};
pub use proof::{Proof, ProofEntry};
pub use tree::{build, build_with_options, BuildOptions, Tree};
pub use verify::verify;
