#![no_main]

use hashes::fast::{
  CityHash32, CityHash64,
  cityhash::{Uint128, hash32, hash64, hash64_with_seed, hash64_with_seeds, hash128_to_64},
};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

const K2: u64 = 0x9ae1_6a3b_2f90_404f;

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(8, input.len()));
  let mut seed = 0u64;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= (b as u64) << (i * 8);
  }

  // Any length must hash without a panic, and reproducibly.
  let digest32 = hash32(data);
  let digest64 = hash64(data);
  assert_eq!(hash32(data), digest32);
  assert_eq!(CityHash32::hash(data), digest32);
  assert_eq!(CityHash64::hash(data), digest64);

  // Seeded variants only post-process the unseeded digest.
  let seeded = hash64_with_seed(data, seed);
  assert_eq!(seeded, hash64_with_seeds(data, K2, seed));
  assert_eq!(seeded, hash128_to_64(Uint128::new(digest64.wrapping_sub(K2), seed)));
  assert_eq!(CityHash64::hash_with_seed(seed, data), seeded);
  assert_eq!(CityHash64::hash_with_seeds(seed, !seed, data), hash64_with_seeds(data, seed, !seed));
});
