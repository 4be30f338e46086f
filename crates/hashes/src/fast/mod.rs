//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! Do not use these hashes for signatures, MACs, key derivation, or anything
//! requiring cryptographic security. Seeds decorrelate independent users of
//! the same input; they do not protect against hash flooding.

pub mod cityhash;

pub use cityhash::{CityHash32, CityHash64};
