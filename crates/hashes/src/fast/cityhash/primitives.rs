//! Leaf operations shared by the 32- and 64-bit families.

#![allow(clippy::indexing_slicing)] // Fixed-offset word loads; offsets are checked by the band bounds

pub(super) const K0: u64 = 0xc3a5_c85c_97cb_3127;
pub(super) const K1: u64 = 0xb492_b66f_be98_f273;
pub(super) const K2: u64 = 0x9ae1_6a3b_2f90_404f;
pub(super) const K3: u64 = 0xc949_d7c7_509e_6557;

pub(super) const C1: u32 = 0xcc9e_2d51;
pub(super) const C2: u32 = 0x1b87_3593;

// Additive constant of the Murmur3 body step (`h * 5 + MUR_ADD`).
pub(super) const MUR_ADD: u32 = 0xe654_6b64;

const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

#[inline(always)]
pub(super) fn fetch32(input: &[u8], offset: usize) -> u32 {
  debug_assert!(offset + 4 <= input.len());
  let mut word = [0u8; 4];
  word.copy_from_slice(&input[offset..offset + 4]);
  u32::from_le_bytes(word)
}

#[inline(always)]
pub(super) fn fetch64(input: &[u8], offset: usize) -> u64 {
  debug_assert!(offset + 8 <= input.len());
  let mut word = [0u8; 8];
  word.copy_from_slice(&input[offset..offset + 8]);
  u64::from_le_bytes(word)
}

#[inline(always)]
pub(super) const fn rotate32(val: u32, shift: u32) -> u32 {
  // A shift by the full width is an overflow; zero is the identity.
  if shift == 0 {
    val
  } else {
    (val >> shift) | (val << (32 - shift))
  }
}

#[inline(always)]
pub(super) const fn rotate64(val: u64, shift: u32) -> u64 {
  if shift == 0 {
    val
  } else {
    (val >> shift) | (val << (64 - shift))
  }
}

/// Right rotation for callers that guarantee `1 <= shift < 64`.
#[inline(always)]
pub(super) const fn rotate_by_at_least1(val: u64, shift: u32) -> u64 {
  debug_assert!(shift >= 1 && shift < 64);
  (val >> shift) | (val << (64 - shift))
}

/// Murmur3 32-bit finalizer.
#[inline(always)]
pub(super) const fn fmix(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// Murmur3 per-word scramble: `rotl(k * c1, 15) * c2`.
#[inline(always)]
pub(super) const fn scramble32(k: u32) -> u32 {
  rotate32(k.wrapping_mul(C1), 17).wrapping_mul(C2)
}

/// `rotate32(h, shift) * 5 + MUR_ADD`.
#[inline(always)]
pub(super) const fn mix5(h: u32, shift: u32) -> u32 {
  rotate32(h, shift).wrapping_mul(5).wrapping_add(MUR_ADD)
}

/// Folds the word `a` into the running hash `h`.
#[inline(always)]
pub(super) const fn mur(a: u32, h: u32) -> u32 {
  mix5(h ^ scramble32(a), 19)
}

#[inline(always)]
pub(super) const fn shift_mix(val: u64) -> u64 {
  val ^ (val >> 47)
}

/// A 128-bit value carried as two 64-bit lanes.
///
/// There is no arithmetic on the value as a whole: it is built from two lanes,
/// read back lane by lane, or laid out as 16 little-endian bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uint128 {
  lower: u64,
  higher: u64,
}

impl Uint128 {
  #[inline]
  #[must_use]
  pub const fn new(lower: u64, higher: u64) -> Self {
    Self { lower, higher }
  }

  #[inline]
  #[must_use]
  pub const fn lower(self) -> u64 {
    self.lower
  }

  #[inline]
  #[must_use]
  pub const fn higher(self) -> u64 {
    self.higher
  }

  /// The lower lane's 8 bytes followed by the higher lane's, both little-endian.
  #[must_use]
  pub const fn to_le_bytes(self) -> [u8; 16] {
    let lo = self.lower.to_le_bytes();
    let hi = self.higher.to_le_bytes();
    let mut out = [0u8; 16];
    let mut idx = 0usize;
    while idx < 8 {
      out[idx] = lo[idx];
      out[idx + 8] = hi[idx];
      idx += 1;
    }
    out
  }
}

impl From<u128> for Uint128 {
  #[inline]
  fn from(value: u128) -> Self {
    Self::new(value as u64, (value >> 64) as u64)
  }
}

impl From<Uint128> for u128 {
  #[inline]
  fn from(value: Uint128) -> Self {
    (value.lower as u128) | ((value.higher as u128) << 64)
  }
}

/// Compresses a 128-bit value into 64 bits (Murmur-inspired).
///
/// This is the combiner used everywhere the 64-bit family merges two words,
/// and it is a reasonable way to combine two independent 64-bit digests.
///
/// # Examples
///
/// ```
/// use hashes::fast::cityhash::{Uint128, hash128_to_64};
///
/// assert_eq!(hash128_to_64(Uint128::new(0, 0)), 0);
/// assert_ne!(hash128_to_64(Uint128::new(1, 2)), hash128_to_64(Uint128::new(2, 1)));
/// ```
#[inline]
#[must_use]
pub const fn hash128_to_64(x: Uint128) -> u64 {
  let mut a = (x.lower ^ x.higher).wrapping_mul(K_MUL);
  a ^= a >> 47;
  let mut b = (x.higher ^ a).wrapping_mul(K_MUL);
  b ^= b >> 47;
  b.wrapping_mul(K_MUL)
}

#[inline(always)]
pub(super) const fn hash_len16(u: u64, v: u64) -> u64 {
  hash128_to_64(Uint128::new(u, v))
}

/// Mixes four words with two seeds into a 128-bit state. Weak on its own;
/// the long-input loop only uses it as a state updater.
#[inline(always)]
pub(super) const fn weak_hash_len32_with_seeds(w: u64, x: u64, y: u64, z: u64, mut a: u64, mut b: u64) -> Uint128 {
  a = a.wrapping_add(w);
  b = rotate64(b.wrapping_add(a).wrapping_add(z), 21);
  let c = a;
  a = a.wrapping_add(x).wrapping_add(y);
  b = b.wrapping_add(rotate64(a, 44));
  Uint128::new(a.wrapping_add(z), b.wrapping_add(c))
}

/// [`weak_hash_len32_with_seeds`] over the four words at `input[offset..offset + 32]`.
#[inline(always)]
pub(super) fn weak_hash_len32_at(input: &[u8], offset: usize, a: u64, b: u64) -> Uint128 {
  weak_hash_len32_with_seeds(
    fetch64(input, offset),
    fetch64(input, offset + 8),
    fetch64(input, offset + 16),
    fetch64(input, offset + 24),
    a,
    b,
  )
}
