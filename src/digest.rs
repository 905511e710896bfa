//! The digest primitive (C1): a fixed-width cryptographic hash over byte
//! ranges and over concatenations of child digests.
//!
//! Backed by [`sha2::Sha256`]. No domain separation is introduced between
//! leaf and internal hashing — see the builder's module docs for why.

use sha2::{Digest as _, Sha256};

/// Fixed-width digest output. `H = 32` for SHA-256.
pub const DIGEST_LEN: usize = 32;

/// A digest value. Freely copyable, equality is byte equality.
pub type Digest = [u8; DIGEST_LEN];

/// Hash a single byte range: `H(data)`.
#[inline]
pub fn hash_bytes(data: &[u8]) -> Digest {
    let mut h = Sha256::new();
    h.update(data);
    let out = h.finalize();
    let mut d = [0u8; DIGEST_LEN];
    d.copy_from_slice(&out);
    d
}

/// Hash the concatenation of a sequence of digests: `H(d_0 ‖ d_1 ‖ … ‖ d_{m-1})`.
#[inline]
pub fn hash_concat<'a, I>(digests: I) -> Digest
where
    I: IntoIterator<Item = &'a Digest>,
{
    let mut h = Sha256::new();
    for d in digests {
        h.update(d);
    }
    let out = h.finalize();
    let mut d = [0u8; DIGEST_LEN];
    d.copy_from_slice(&out);
    d
}
