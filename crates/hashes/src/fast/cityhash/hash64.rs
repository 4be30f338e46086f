//! CityHash64: three short/medium bands plus a 64-byte block loop.

#![allow(clippy::indexing_slicing)] // Offsets are derived from the band's length bounds

use super::{
  bands::Hash64Band,
  primitives::{
    K0, K1, K2, K3, fetch32, fetch64, hash_len16, rotate_by_at_least1, rotate64, shift_mix,
    weak_hash_len32_at,
  },
};

const BLOCK_LEN: usize = 64;

#[inline(always)]
fn hash64_len0to16(input: &[u8]) -> u64 {
  let len = input.len();
  if len > 8 {
    let a = fetch64(input, 0);
    let b = fetch64(input, len - 8);
    hash_len16(a, rotate_by_at_least1(b.wrapping_add(len as u64), len as u32)) ^ b
  } else if len >= 4 {
    let a = fetch32(input, 0) as u64;
    hash_len16((len as u64).wrapping_add(a << 3), fetch32(input, len - 4) as u64)
  } else if len > 0 {
    let a = input[0] as u32;
    let b = input[len >> 1] as u32;
    let c = input[len - 1] as u32;
    let y = a.wrapping_add(b << 8);
    let z = (len as u32).wrapping_add(c << 2);
    shift_mix((y as u64).wrapping_mul(K2) ^ (z as u64).wrapping_mul(K3)).wrapping_mul(K2)
  } else {
    K2
  }
}

#[inline(always)]
fn hash64_len17to32(input: &[u8]) -> u64 {
  let len = input.len();
  let a = fetch64(input, 0).wrapping_mul(K1);
  let b = fetch64(input, 8);
  let c = fetch64(input, len - 8).wrapping_mul(K2);
  let d = fetch64(input, len - 16).wrapping_mul(K0);
  hash_len16(
    rotate64(a.wrapping_sub(b), 43)
      .wrapping_add(rotate64(c, 30))
      .wrapping_add(d),
    a.wrapping_add(rotate64(b ^ K3, 20))
      .wrapping_sub(c)
      .wrapping_add(len as u64),
  )
}

#[inline(always)]
fn hash64_len33to64(input: &[u8]) -> u64 {
  let len = input.len();

  // Front view.
  let mut z = fetch64(input, 24);
  let mut a = fetch64(input, 0).wrapping_add((len as u64).wrapping_add(fetch64(input, len - 16)).wrapping_mul(K0));
  let mut b = rotate64(a.wrapping_add(z), 52);
  let mut c = rotate64(a, 37);
  a = a.wrapping_add(fetch64(input, 8));
  c = c.wrapping_add(rotate64(a, 7));
  a = a.wrapping_add(fetch64(input, 16));
  let v_fast = a.wrapping_add(z);
  let v_slow = b.wrapping_add(rotate64(a, 31)).wrapping_add(c);

  // Back view.
  a = fetch64(input, 16).wrapping_add(fetch64(input, len - 32));
  z = fetch64(input, len - 8);
  b = rotate64(a.wrapping_add(z), 52);
  c = rotate64(a, 37);
  a = a.wrapping_add(fetch64(input, len - 24));
  c = c.wrapping_add(rotate64(a, 7));
  a = a.wrapping_add(fetch64(input, len - 16));
  let w_fast = a.wrapping_add(z);
  let w_slow = b.wrapping_add(rotate64(a, 31)).wrapping_add(c);

  let r = shift_mix(
    v_fast
      .wrapping_add(w_slow)
      .wrapping_mul(K2)
      .wrapping_add(w_fast.wrapping_add(v_slow).wrapping_mul(K0)),
  );
  shift_mix(r.wrapping_mul(K0).wrapping_add(v_slow)).wrapping_mul(K2)
}

#[inline(never)]
fn hash64_long(input: &[u8]) -> u64 {
  let len = input.len();
  debug_assert!(len > 64);

  // Seed the state from the last 64 bytes.
  let mut x = fetch64(input, len - 40);
  let mut y = fetch64(input, len - 16).wrapping_add(fetch64(input, len - 56));
  let mut z = hash_len16(fetch64(input, len - 48).wrapping_add(len as u64), fetch64(input, len - 24));
  let mut v = weak_hash_len32_at(input, len - 64, len as u64, z);
  let mut w = weak_hash_len32_at(input, len - 32, y.wrapping_add(K1), x);
  x = x.wrapping_mul(K1).wrapping_add(fetch64(input, 0));

  let (blocks, _) = input.as_chunks::<BLOCK_LEN>();
  for block in blocks.iter().take((len - 1) / BLOCK_LEN) {
    x = rotate64(
      x.wrapping_add(y)
        .wrapping_add(v.lower())
        .wrapping_add(fetch64(block, 8)),
      37,
    )
    .wrapping_mul(K1);
    y = rotate64(y.wrapping_add(v.higher()).wrapping_add(fetch64(block, 48)), 42).wrapping_mul(K1);
    x ^= w.higher();
    y = y.wrapping_add(v.lower()).wrapping_add(fetch64(block, 40));
    z = rotate64(z.wrapping_add(w.lower()), 33).wrapping_mul(K1);
    v = weak_hash_len32_at(block, 0, v.higher().wrapping_mul(K1), x.wrapping_add(w.lower()));
    w = weak_hash_len32_at(block, 32, z.wrapping_add(w.higher()), y.wrapping_add(fetch64(block, 16)));
    (x, z) = (z, x);
  }

  hash_len16(
    hash_len16(v.lower(), w.lower())
      .wrapping_add(shift_mix(y).wrapping_mul(K1))
      .wrapping_add(z),
    hash_len16(v.higher(), w.higher()).wrapping_add(x),
  )
}

/// Computes the 64-bit CityHash of `input`.
///
/// # Examples
///
/// ```
/// use hashes::fast::cityhash::hash64;
///
/// // The empty input hashes to the k2 mixing constant.
/// assert_eq!(hash64(b""), 0x9ae1_6a3b_2f90_404f);
/// assert_eq!(hash64(b"hello"), 0x23c7_ada5_f323_c8df);
/// ```
#[inline]
#[must_use]
pub fn hash64(input: &[u8]) -> u64 {
  match Hash64Band::for_len(input.len()) {
    Hash64Band::Len0To16 => hash64_len0to16(input),
    Hash64Band::Len17To32 => hash64_len17to32(input),
    Hash64Band::Len33To64 => hash64_len33to64(input),
    Hash64Band::Long => hash64_long(input),
  }
}

/// [`hash64`] post-processed with one seed; same as
/// `hash64_with_seeds(input, K2, seed)`.
///
/// Seeds decorrelate independent users of the same input. They do not make the
/// output unpredictable to anyone who can query the function.
#[inline]
#[must_use]
pub fn hash64_with_seed(input: &[u8], seed: u64) -> u64 {
  hash64_with_seeds(input, K2, seed)
}

/// [`hash64`] post-processed with two seeds.
///
/// # Examples
///
/// ```
/// use hashes::fast::cityhash::{Uint128, hash64, hash64_with_seeds, hash128_to_64};
///
/// let data = b"hello";
/// let expected = hash128_to_64(Uint128::new(hash64(data).wrapping_sub(1), 2));
/// assert_eq!(hash64_with_seeds(data, 1, 2), expected);
/// ```
#[inline]
#[must_use]
pub fn hash64_with_seeds(input: &[u8], seed0: u64, seed1: u64) -> u64 {
  hash_len16(hash64(input).wrapping_sub(seed0), seed1)
}
