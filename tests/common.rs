//! Test helpers shared by `tests/*` integration files.
//!
//! - A tiny, dependency-free PRNG (XorShift64) with deterministic seeding
//! - Helpers to generate variable-length, always-non-empty blocks
//! - A small hex encoder for debug/assert messages

use std::env;

#[allow(dead_code)]
pub const DEFAULT_TEST_SEED: u64 = 0xA11C_1A9E_C0FF_EE42;

/// Minimal, fast, deterministic PRNG (XorShift64).
/// Not cryptographically secure — only for tests/benches.
#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    #[inline]
    pub fn new(seed: u64) -> Self {
        let s = if seed == 0 { DEFAULT_TEST_SEED } else { seed };
        Self { state: s }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    #[inline]
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut i = 0;
        while i + 8 <= buf.len() {
            buf[i..i + 8].copy_from_slice(&self.next_u64().to_le_bytes());
            i += 8;
        }
        if i < buf.len() {
            let tail = self.next_u64().to_le_bytes();
            let n = buf.len() - i;
            buf[i..].copy_from_slice(&tail[..n]);
        }
    }
}

/// Seed from env (`TEST_SEED`), or fallback to `DEFAULT_TEST_SEED`.
#[allow(dead_code)]
pub fn seed_from_env() -> u64 {
    if let Ok(s) = env::var("TEST_SEED") {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            u64::from_str_radix(hex, 16).unwrap_or(DEFAULT_TEST_SEED)
        } else {
            s.parse::<u64>().unwrap_or(DEFAULT_TEST_SEED)
        }
    } else {
        DEFAULT_TEST_SEED
    }
}

#[allow(dead_code)]
pub fn rng_from_env() -> XorShift64 {
    XorShift64::new(seed_from_env())
}

/// A block of `len` pseudo-random, non-empty bytes.
#[allow(dead_code)]
pub fn random_block(len: usize, rng: &mut XorShift64) -> Vec<u8> {
    let len = len.max(1);
    let mut v = vec![0u8; len];
    rng.fill_bytes(&mut v);
    v
}

/// `count` pseudo-random blocks with lengths in `1..=max_len`.
#[allow(dead_code)]
pub fn random_blocks(count: usize, max_len: usize, rng: &mut XorShift64) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = 1 + (rng.next_u64() as usize % max_len.max(1));
            random_block(len, rng)
        })
        .collect()
}

#[allow(dead_code)]
pub fn to_hex(data: &[u8]) -> String {
    const LUT: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(data.len() * 2);
    for &b in data {
        s.push(LUT[(b >> 4) as usize] as char);
        s.push(LUT[(b & 0x0f) as usize] as char);
    }
    s
}

#[cfg(test)]
mod selfcheck {
    use super::*;

    #[test]
    fn xorshift_basic() {
        let mut r = XorShift64::new(1);
        let a = r.next_u64();
        let b = r.next_u64();
        assert_ne!(a, b);
    }

    #[test]
    fn random_blocks_are_nonempty() {
        let mut rng = XorShift64::new(42);
        let blocks = random_blocks(20, 64, &mut rng);
        assert_eq!(blocks.len(), 20);
        assert!(blocks.iter().all(|b| !b.is_empty() && b.len() <= 64));
    }
}
