#![doc = "NIST SP 800-90A Hash-DRBG core with known-answer self-testing."]
#![forbid(unsafe_code)]

// Digest binding
pub mod provider;

// Byte-string accumulator
pub mod iovec;

// DRBG state machine, descriptors, and self-test harness
pub mod drbg;

pub use drbg::{DrbgProfile, DrbgState, HashDrbg};
