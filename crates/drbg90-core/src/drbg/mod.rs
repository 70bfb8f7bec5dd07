//! Deterministic random bit generation (NIST SP 800-90A Hash_DRBG).
//!
//! Provides the Hash-DRBG state machine over SHA-1, SHA-224, SHA-256,
//! SHA-384, and SHA-512, the per-algorithm descriptor table with its
//! boundary limits, and the known-answer self-test harness that gates
//! FIPS-approved operation.

pub(crate) mod arith;

pub mod hash_drbg;
pub use hash_drbg::{DrbgState, HashDrbg};

pub mod profile;
pub use profile::DrbgProfile;

pub mod selftest;
