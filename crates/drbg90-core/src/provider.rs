//! Trait-based binding to the underlying digest engine.
//!
//! The DRBG never computes a hash itself; it drives a [`Digest`] context
//! through init/update/final cycles and treats any non-success as fatal.
//! The trait is implemented here over the RustCrypto hash crates, but a
//! caller may substitute any engine that satisfies the contract.

use drbg90_types::{DrbgError, HashAlgId};

/// A hash / message digest context.
pub trait Digest: Send + Sync {
    /// The output size in bytes.
    fn output_size(&self) -> usize;

    /// Feed data into the hash state.
    fn update(&mut self, data: &[u8]) -> Result<(), DrbgError>;

    /// Finalize the hash, write the digest to `out`, and reset the state.
    /// The length of `out` must be at least `output_size()`.
    fn finish(&mut self, out: &mut [u8]) -> Result<(), DrbgError>;

    /// Reset the hash state to process a new message.
    fn reset(&mut self);
}

/// Adapter from the RustCrypto `digest` traits to [`Digest`].
struct DigestCtx<D>(D);

impl<D> Digest for DigestCtx<D>
where
    D: digest::Digest + digest::FixedOutputReset + Send + Sync,
{
    fn output_size(&self) -> usize {
        <D as digest::Digest>::output_size()
    }

    fn update(&mut self, data: &[u8]) -> Result<(), DrbgError> {
        digest::Digest::update(&mut self.0, data);
        Ok(())
    }

    fn finish(&mut self, out: &mut [u8]) -> Result<(), DrbgError> {
        let size = <D as digest::Digest>::output_size();
        if out.len() < size {
            return Err(DrbgError::Digest(format!(
                "output buffer too small: need {size}, got {}",
                out.len()
            )));
        }
        let block = digest::Digest::finalize_reset(&mut self.0);
        out[..size].copy_from_slice(&block);
        Ok(())
    }

    fn reset(&mut self) {
        digest::Reset::reset(&mut self.0);
    }
}

/// Create a fresh digest context for the given algorithm.
pub fn new_digest(alg: HashAlgId) -> Box<dyn Digest> {
    match alg {
        HashAlgId::Sha1 => Box::new(DigestCtx(<sha1::Sha1 as digest::Digest>::new())),
        HashAlgId::Sha224 => Box::new(DigestCtx(<sha2::Sha224 as digest::Digest>::new())),
        HashAlgId::Sha256 => Box::new(DigestCtx(<sha2::Sha256 as digest::Digest>::new())),
        HashAlgId::Sha384 => Box::new(DigestCtx(<sha2::Sha384 as digest::Digest>::new())),
        HashAlgId::Sha512 => Box::new(DigestCtx(<sha2::Sha512 as digest::Digest>::new())),
    }
}
