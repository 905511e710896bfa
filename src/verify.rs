//! Proof verifier (C6): reconstructs the root from a proof, a leaf block,
//! and the leaf's recorded position, and compares to an expected root.
//! Independent of any [`crate::tree::Tree`] — it needs only the proof, the
//! expected root, and the leaf bytes.

use crate::digest::{hash_bytes, hash_concat, Digest};
use crate::error::Error;
use crate::proof::Proof;

/// Verify that `leaf_bytes` is included in the tree committed to by
/// `expected_root`, per `proof`.
///
/// Returns `Ok(())` on a successful match, [`Error::Invalid`] if the
/// reconstructed root does not match (a negative answer, not a system
/// failure), or [`Error::BadArgument`]/[`Error::BadProof`] if the inputs
/// themselves are malformed.
pub fn verify(proof: &Proof, expected_root: Digest, leaf_bytes: &[u8]) -> Result<(), Error> {
    if proof.k < 2 {
        return Err(Error::BadArgument("proof.k must be >= 2"));
    }
    if leaf_bytes.is_empty() {
        return Err(Error::BadArgument("leaf_bytes must be non-empty"));
    }

    let mut acc = hash_bytes(leaf_bytes);

    for entry in &proof.path {
        if entry.siblings.len() > proof.k - 1 {
            return Err(Error::BadProof("sibling list exceeds k - 1"));
        }
        if entry.position > entry.siblings.len() {
            return Err(Error::BadProof("position exceeds sibling count"));
        }

        let mut reconstructed: Vec<Digest> = Vec::with_capacity(entry.siblings.len() + 1);
        reconstructed.extend_from_slice(&entry.siblings[..entry.position]);
        reconstructed.push(acc);
        reconstructed.extend_from_slice(&entry.siblings[entry.position..]);

        acc = hash_concat(reconstructed.iter());
    }

    if acc == expected_root {
        Ok(())
    } else {
        Err(Error::Invalid)
    }
}
