//! CityHash (**NOT CRYPTO**).
//!
//! Portable scalar implementation of the CityHash 32- and 64-bit families.
//! Every multi-byte load is little-endian regardless of the host, so digests
//! are identical across platforms and across implementations.
//!
//! Inputs are dispatched by length to one of a few specialized formulas (see
//! [`Hash32Band`] and [`Hash64Band`]); long inputs run a block loop seeded
//! from the input's tail.
//!
//! # Examples
//!
//! ```
//! use hashes::fast::cityhash::{CityHash32, CityHash64, hash32, hash64, hash64_with_seed};
//! use traits::FastHash as _;
//!
//! assert_eq!(CityHash32::hash(b"hello"), hash32(b"hello"));
//! assert_eq!(CityHash64::hash(b"hello"), hash64(b"hello"));
//! assert_eq!(CityHash64::hash_with_seed(7, b"hello"), hash64_with_seed(b"hello", 7));
//! ```

use traits::FastHash;

mod bands;
mod hash32;
mod hash64;
mod primitives;

pub use bands::{Hash32Band, Hash64Band, kernel_name_for_len32, kernel_name_for_len64};
pub use hash32::hash32;
pub use hash64::{hash64, hash64_with_seed, hash64_with_seeds};
pub use primitives::{Uint128, hash128_to_64};

/// CityHash32. Unseeded: the seed type is `()`.
#[derive(Clone, Default)]
pub struct CityHash32;

/// CityHash64 with the one-seed variant as its seeded form.
///
/// [`FastHash::hash`] is the unseeded digest, which is *not* the same as
/// `hash_with_seed(0, ..)`.
#[derive(Clone, Default)]
pub struct CityHash64;

impl CityHash64 {
  /// Two-seed variant; see [`hash64_with_seeds`].
  #[inline]
  #[must_use]
  pub fn hash_with_seeds(seed0: u64, seed1: u64, data: &[u8]) -> u64 {
    hash64_with_seeds(data, seed0, seed1)
  }
}

impl FastHash for CityHash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = ();

  #[inline]
  fn hash_with_seed((): Self::Seed, data: &[u8]) -> Self::Output {
    hash32(data)
  }
}

impl FastHash for CityHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    hash64(data)
  }

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash64_with_seed(data, seed)
  }
}
