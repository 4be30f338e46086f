//! Fast non-cryptographic hashes.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for property testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - Non-cryptographic hashes (**NOT CRYPTO**): CityHash32 and CityHash64.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod fast;

pub use traits::FastHash;
