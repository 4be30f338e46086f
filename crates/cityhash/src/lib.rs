//! Portable CityHash: fast, well-distributed 32- and 64-bit non-cryptographic
//! hashes.
//!
//! Digests are bit-identical on every platform: all multi-byte loads are
//! little-endian regardless of the host. Zero dependencies and `no_std`
//! compatible.
//!
//! Intended for hash-table keys, sharding, checksums, and deduplication
//! fingerprints. **Not** for anything adversarial: seeds decorrelate
//! independent users of the same input but do not prevent hash flooding.
//!
//! # Quick Start
//!
//! ```
//! use cityhash::{hash32, hash64, hash64_with_seed, hash64_with_seeds};
//!
//! assert_eq!(hash32(b"hello"), 0x7996_9366);
//! assert_eq!(hash64(b"hello"), 0x23c7_ada5_f323_c8df);
//!
//! // Independent instances over the same input.
//! let shard_a = hash64_with_seed(b"hello", 1);
//! let shard_b = hash64_with_seed(b"hello", 2);
//! assert_ne!(shard_a, shard_b);
//!
//! // The one-seed form fixes the first seed to the k2 constant.
//! assert_eq!(hash64_with_seed(b"hello", 7), hash64_with_seeds(b"hello", 0x9ae1_6a3b_2f90_404f, 7));
//! ```
//!
//! Generic code can go through the [`FastHash`] trait:
//!
//! ```
//! use cityhash::{CityHash64, FastHash};
//!
//! fn bucket<H: FastHash<Output = u64>>(key: &[u8], buckets: u64) -> u64 {
//!   H::hash(key) % buckets
//! }
//!
//! assert!(bucket::<CityHash64>(b"user:42", 16) < 16);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Links `std`; the hashes themselves never need it |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! cityhash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use hashes::fast::{
  CityHash32, CityHash64,
  cityhash::{
    Hash32Band, Hash64Band, Uint128, hash32, hash64, hash64_with_seed, hash64_with_seeds, hash128_to_64,
    kernel_name_for_len32, kernel_name_for_len64,
  },
};
pub use traits::FastHash;
