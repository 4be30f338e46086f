//! CityHash32: four length bands feeding the Murmur3 mixers.

#![allow(clippy::indexing_slicing)] // Offsets are derived from the band's length bounds

use super::{
  bands::Hash32Band,
  primitives::{C1, fetch32, fmix, mix5, mur, rotate32, scramble32},
};

const CHUNK_LEN: usize = 20;

#[inline(always)]
fn hash32_len0to4(input: &[u8]) -> u32 {
  let mut b: u32 = 0;
  let mut c: u32 = 9;
  for &byte in input {
    // Bytes are folded in sign-extended.
    b = b.wrapping_mul(C1).wrapping_add(byte as i8 as u32);
    c ^= b;
  }
  fmix(mur(b, mur(input.len() as u32, c)))
}

#[inline(always)]
fn hash32_len5to12(input: &[u8]) -> u32 {
  let len = input.len();
  let mut a = len as u32;
  let mut b = a.wrapping_mul(5);
  let mut c: u32 = 9;
  let d = b;

  a = a.wrapping_add(fetch32(input, 0));
  b = b.wrapping_add(fetch32(input, len - 4));
  c = c.wrapping_add(fetch32(input, (len >> 1) & 4));

  fmix(mur(c, mur(b, mur(a, d))))
}

#[inline(always)]
fn hash32_len13to24(input: &[u8]) -> u32 {
  let len = input.len();
  let a = fetch32(input, (len >> 1) - 4);
  let b = fetch32(input, 4);
  let c = fetch32(input, len - 8);
  let d = fetch32(input, len >> 1);
  let e = fetch32(input, 0);
  let f = fetch32(input, len - 4);
  let h = len as u32;

  fmix(mur(f, mur(e, mur(d, mur(c, mur(b, mur(a, h)))))))
}

#[inline(never)]
fn hash32_long(input: &[u8]) -> u32 {
  let len = input.len();
  debug_assert!(len > 24);

  let mut h = len as u32;
  let mut g = C1.wrapping_mul(len as u32);
  let mut f = g;

  let a0 = scramble32(fetch32(input, len - 4));
  let a1 = scramble32(fetch32(input, len - 8));
  let a2 = scramble32(fetch32(input, len - 16));
  let a3 = scramble32(fetch32(input, len - 12));
  let a4 = scramble32(fetch32(input, len - 20));

  h = mix5(h ^ a0, 19);
  h = mix5(h ^ a2, 19);
  g = mix5(g ^ a1, 19);
  g = mix5(g ^ a3, 19);
  f = mix5(f.wrapping_add(a4), 19);

  // The tail was folded in above, so the last (possibly partial) chunk is skipped.
  let (chunks, _) = input.as_chunks::<CHUNK_LEN>();
  for chunk in chunks.iter().take((len - 1) / CHUNK_LEN) {
    let a0 = scramble32(fetch32(chunk, 0));
    let a1 = fetch32(chunk, 4);
    let a2 = scramble32(fetch32(chunk, 8));
    let a3 = scramble32(fetch32(chunk, 12));
    let a4 = fetch32(chunk, 16);

    h = mix5(h ^ a0, 18);
    f = rotate32(f.wrapping_add(a1), 19).wrapping_mul(C1);
    g = mix5(g.wrapping_add(a2), 18);
    h = mix5(h ^ a3.wrapping_add(a1), 19);
    g = (g ^ a4).swap_bytes().wrapping_mul(5);
    h = h.wrapping_add(a4.wrapping_mul(5)).swap_bytes();
    f = f.wrapping_add(a0);

    (f, h, g) = (g, f, h);
  }

  g = rotate32(g, 11).wrapping_mul(C1);
  g = rotate32(g, 17).wrapping_mul(C1);
  f = rotate32(f, 11).wrapping_mul(C1);
  f = rotate32(f, 17).wrapping_mul(C1);
  h = mix5(h.wrapping_add(g), 19);
  h = rotate32(h, 17).wrapping_mul(C1);
  h = mix5(h.wrapping_add(f), 19);
  rotate32(h, 17).wrapping_mul(C1)
}

/// Computes the 32-bit CityHash of `input`.
///
/// # Examples
///
/// ```
/// use hashes::fast::cityhash::hash32;
///
/// assert_eq!(hash32(b""), 0xdc56_d17a);
/// assert_eq!(hash32(b"hello"), 0x7996_9366);
/// ```
#[inline]
#[must_use]
pub fn hash32(input: &[u8]) -> u32 {
  match Hash32Band::for_len(input.len()) {
    Hash32Band::Len0To4 => hash32_len0to4(input),
    Hash32Band::Len5To12 => hash32_len5to12(input),
    Hash32Band::Len13To24 => hash32_len13to24(input),
    Hash32Band::Long => hash32_long(input),
  }
}
