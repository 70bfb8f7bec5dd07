//! Hash-DRBG (Hash-based Deterministic Random Bit Generator).
//!
//! Implements NIST SP 800-90A Section 10.1.1 over the descriptor table in
//! [`profile`](super::profile). The internal state is the pair (V, C) of
//! seedlen-byte big-endian integers; every operation drives the digest
//! context through the [`Digest`] seam and treats a primitive failure as
//! fatal for the instance.

use drbg90_types::{DrbgError, HashAlgId};
use zeroize::Zeroize;

use crate::iovec::IoVec;
use crate::provider::{self, Digest};

use super::arith::add_be;
use super::profile::DrbgProfile;

/// Domain-separation prefixes from SP 800-90A §10.1.1.
const PREFIX_CONSTANT: [u8; 1] = [0x00];
const PREFIX_RESEED: [u8; 1] = [0x01];
const PREFIX_ADDITIONAL: [u8; 1] = [0x02];
const PREFIX_FINAL: [u8; 1] = [0x03];

/// One-byte addend for the hashgen counter increment.
const ONE: [u8; 1] = [0x01];

/// Lifecycle states of a DRBG instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrbgState {
    /// Shell allocated, not yet seeded.
    Uninitialized,
    /// Seeded and able to serve requests.
    Ready,
    /// Poisoned by a primitive failure; only uninstantiate is permitted.
    Error,
    /// Uninstantiated; state has been zeroized.
    Terminated,
}

/// Hash-DRBG instance (NIST SP 800-90A Section 10.1.1).
///
/// A single-writer resource: sharing one instance across threads requires
/// external serialization of all four lifecycle operations. Distinct
/// instances are independent.
pub struct HashDrbg {
    profile: &'static DrbgProfile,
    strength: u32,
    /// Digest context, owned for the instance lifetime and released on
    /// uninstantiate or poisoning.
    ctx: Option<Box<dyn Digest>>,
    /// State value V (seedlen bytes).
    v: Vec<u8>,
    /// Constant C (seedlen bytes), rederived at every (re)seed.
    c: Vec<u8>,
    /// Scratch buffer of seedlen bytes, wiped at operation end.
    t: Vec<u8>,
    /// Generate calls since last (re)seed; added into V as a 4-byte
    /// big-endian quantity.
    reseed_counter: u32,
    state: DrbgState,
    error_reason: Option<String>,
}

impl Drop for HashDrbg {
    fn drop(&mut self) {
        self.v.zeroize();
        self.c.zeroize();
        self.t.zeroize();
    }
}

impl std::fmt::Debug for HashDrbg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashDrbg")
            .field("strength", &self.strength)
            .field("reseed_counter", &self.reseed_counter)
            .field("state", &self.state)
            .field("error_reason", &self.error_reason)
            .finish()
    }
}

/// Label a primitive failure with the stage that observed it; the label
/// ends up in the instance's retained diagnostic.
fn digest_failure(stage: &str, err: DrbgError) -> DrbgError {
    match err {
        DrbgError::Digest(msg) => DrbgError::Digest(format!("{stage}: {msg}")),
        other => other,
    }
}

/// Hash_df derivation function (SP 800-90A §10.3.1).
///
/// Fills `out` from the records of `seed` by hashing
/// `counter || bit_count || seed` with a one-byte counter starting at 1,
/// until enough blocks have been produced. `out` may be empty.
fn hash_df(ctx: &mut dyn Digest, seed: &IoVec<'_>, out: &mut [u8]) -> Result<(), DrbgError> {
    let block_len = ctx.output_size();
    let bit_count = ((out.len() as u32) * 8).to_be_bytes();
    let mut block = vec![0u8; block_len];
    let mut counter: u8 = 1;
    let mut written = 0;

    while written < out.len() {
        // (counter || bit_count || input): the labels go in front of the
        // queued input without copying it.
        let counter_buf = [counter];
        let mut msg = IoVec::new();
        for seg in seed.iter() {
            msg.append(seg);
        }
        msg.insert(&bit_count);
        msg.insert(&counter_buf);

        ctx.reset();
        for seg in msg.iter() {
            ctx.update(seg)
                .map_err(|e| digest_failure("Digest Update failed", e))?;
        }
        ctx.finish(&mut block)
            .map_err(|e| digest_failure("Digest Final failed", e))?;

        let take = (out.len() - written).min(block_len);
        out[written..written + take].copy_from_slice(&block[..take]);
        written += take;
        counter = counter.wrapping_add(1);
    }

    block.zeroize();
    Ok(())
}

/// Hash the concatenation of `parts` into `out`.
fn hash_into(ctx: &mut dyn Digest, parts: &[&[u8]], out: &mut [u8]) -> Result<(), DrbgError> {
    ctx.reset();
    for part in parts {
        ctx.update(part)
            .map_err(|e| digest_failure("Digest Update failed", e))?;
    }
    ctx.finish(out)
        .map_err(|e| digest_failure("Digest Final failed", e))?;
    Ok(())
}

impl HashDrbg {
    /// Instantiate a new Hash-DRBG (SP 800-90A §10.1.1.2).
    ///
    /// Inputs are validated against the descriptor first; a rejected call
    /// is a no-op that leaves the descriptor untouched. Each accepted
    /// construction then ticks the health-check counter, which runs the
    /// known-answer self-test at power-up and at the descriptor interval.
    /// A demoted descriptor still instantiates; callers that require FIPS
    /// approval must consult [`DrbgProfile::is_approved`].
    pub fn instantiate(
        alg: HashAlgId,
        strength: u32,
        entropy: &[u8],
        nonce: &[u8],
        personalization: &[u8],
    ) -> Result<Self, DrbgError> {
        let profile = DrbgProfile::for_alg(alg);
        Self::check_seed_inputs(profile, strength, entropy, nonce, personalization)?;
        profile.health_tick();
        Self::instantiate_untracked(profile, strength, entropy, nonce, personalization)
    }

    /// Validate instantiation inputs against the descriptor boundaries.
    fn check_seed_inputs(
        profile: &DrbgProfile,
        strength: u32,
        entropy: &[u8],
        nonce: &[u8],
        personalization: &[u8],
    ) -> Result<(), DrbgError> {
        if !profile.supports_strength(strength) {
            return Err(DrbgError::UnsupportedStrength(strength));
        }
        if entropy.len() > profile.max_entropy_len {
            return Err(DrbgError::EntropyTooLong {
                got: entropy.len(),
                max: profile.max_entropy_len,
            });
        }
        if nonce.len() > profile.max_nonce_len {
            return Err(DrbgError::NonceTooLong {
                got: nonce.len(),
                max: profile.max_nonce_len,
            });
        }
        if personalization.len() > profile.max_personalization_len {
            return Err(DrbgError::PersonalizationTooLong {
                got: personalization.len(),
                max: profile.max_personalization_len,
            });
        }
        Ok(())
    }

    /// Instantiate without the health-check tick. Used by the self-test
    /// harness, which would otherwise recurse into itself.
    pub(crate) fn instantiate_untracked(
        profile: &'static DrbgProfile,
        strength: u32,
        entropy: &[u8],
        nonce: &[u8],
        personalization: &[u8],
    ) -> Result<Self, DrbgError> {
        Self::check_seed_inputs(profile, strength, entropy, nonce, personalization)?;

        let mut drbg = HashDrbg {
            profile,
            strength,
            ctx: Some(provider::new_digest(profile.alg)),
            v: vec![0u8; profile.seed_len],
            c: vec![0u8; profile.seed_len],
            t: vec![0u8; profile.seed_len],
            reseed_counter: 0,
            state: DrbgState::Uninitialized,
            error_reason: None,
        };
        if let Err(e) = drbg.seed_initial(entropy, nonce, personalization) {
            return Err(drbg.poison(e));
        }
        drbg.reseed_counter = 1;
        drbg.state = DrbgState::Ready;
        Ok(drbg)
    }

    /// Instantiate from the system entropy source, drawing seedlen bytes
    /// of entropy and seedlen/2 bytes of nonce.
    pub fn from_system_entropy(alg: HashAlgId, strength: u32) -> Result<Self, DrbgError> {
        let profile = DrbgProfile::for_alg(alg);
        let mut entropy = vec![0u8; profile.seed_len];
        let mut nonce = vec![0u8; profile.seed_len / 2];
        getrandom::getrandom(&mut entropy).map_err(|_| DrbgError::EntropyFail)?;
        getrandom::getrandom(&mut nonce).map_err(|_| DrbgError::EntropyFail)?;
        let result = Self::instantiate(alg, strength, &entropy, &nonce, &[]);
        entropy.zeroize();
        nonce.zeroize();
        result
    }

    fn seed_initial(
        &mut self,
        entropy: &[u8],
        nonce: &[u8],
        personalization: &[u8],
    ) -> Result<(), DrbgError> {
        let ctx = self.ctx.as_deref_mut().ok_or(DrbgError::InvalidState)?;

        // V = Hash_df(entropy_input || nonce || personalization, seedlen)
        let mut seed = IoVec::new();
        seed.append(entropy);
        seed.append(nonce);
        seed.append(personalization);
        hash_df(ctx, &seed, &mut self.v)?;

        // C = Hash_df(0x00 || V, seedlen)
        let mut seed = IoVec::new();
        seed.append(&PREFIX_CONSTANT);
        seed.append(&self.v);
        hash_df(ctx, &seed, &mut self.c)?;

        Ok(())
    }

    /// Reseed with fresh entropy (SP 800-90A §10.1.1.3).
    pub fn reseed(
        &mut self,
        entropy: &[u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        self.ensure_ready()?;
        if entropy.len() > self.profile.max_entropy_len {
            return Err(DrbgError::EntropyTooLong {
                got: entropy.len(),
                max: self.profile.max_entropy_len,
            });
        }
        if let Some(add) = additional_input {
            if add.len() > self.profile.max_additional_len {
                return Err(DrbgError::AdditionalInputTooLong {
                    got: add.len(),
                    max: self.profile.max_additional_len,
                });
            }
        }

        match self.reseed_inner(entropy, additional_input) {
            Ok(()) => {
                self.reseed_counter = 1;
                Ok(())
            }
            Err(e) => Err(self.poison(e)),
        }
    }

    fn reseed_inner(
        &mut self,
        entropy: &[u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        let ctx = self.ctx.as_deref_mut().ok_or(DrbgError::InvalidState)?;

        // V is both input and output, so C takes the new value first and
        // is rebuilt from the new V afterwards.
        // C = Hash_df(0x01 || V || entropy_input || additional_input, seedlen)
        let mut seed = IoVec::new();
        seed.append(&PREFIX_RESEED);
        seed.append(&self.v);
        seed.append(entropy);
        if let Some(add) = additional_input {
            seed.append(add);
        }
        hash_df(ctx, &seed, &mut self.c)?;
        drop(seed);
        self.v.copy_from_slice(&self.c);

        // C = Hash_df(0x00 || V, seedlen)
        let mut seed = IoVec::new();
        seed.append(&PREFIX_CONSTANT);
        seed.append(&self.v);
        hash_df(ctx, &seed, &mut self.c)?;

        Ok(())
    }

    /// Generate pseudorandom output (SP 800-90A §10.1.1.4).
    ///
    /// Fails with [`DrbgError::ReseedRequired`] once the descriptor's
    /// reseed interval is exhausted; the instance stays ready and a
    /// successful reseed clears the condition.
    pub fn generate(
        &mut self,
        output: &mut [u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        self.ensure_ready()?;
        if output.len() > self.profile.max_request_len {
            return Err(DrbgError::RequestTooLarge {
                got: output.len(),
                max: self.profile.max_request_len,
            });
        }
        if let Some(add) = additional_input {
            if add.len() > self.profile.max_additional_len {
                return Err(DrbgError::AdditionalInputTooLong {
                    got: add.len(),
                    max: self.profile.max_additional_len,
                });
            }
        }
        if self.reseed_counter > self.profile.max_reseed_interval {
            return Err(DrbgError::ReseedRequired);
        }

        match self.generate_inner(output, additional_input) {
            Ok(()) => {
                self.reseed_counter += 1;
                Ok(())
            }
            Err(e) => Err(self.poison(e)),
        }
    }

    fn generate_inner(
        &mut self,
        output: &mut [u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), DrbgError> {
        let block_len = self.profile.out_len;
        let mut block = vec![0u8; block_len];
        let ctx = self.ctx.as_deref_mut().ok_or(DrbgError::InvalidState)?;

        // Step 2: w = Hash(0x02 || V || additional_input); V = (V + w) mod 2^seedlen
        if let Some(add) = additional_input {
            if !add.is_empty() {
                hash_into(ctx, &[&PREFIX_ADDITIONAL, &self.v, add], &mut block)?;
                add_be(&mut self.v, &block);
            }
        }

        // Step 3 (Hashgen): data starts at V and counts up per block.
        self.t.copy_from_slice(&self.v);
        let mut written = 0;
        while written < output.len() {
            hash_into(ctx, &[&self.t], &mut block)?;
            add_be(&mut self.t, &ONE);
            let take = (output.len() - written).min(block_len);
            output[written..written + take].copy_from_slice(&block[..take]);
            written += take;
        }

        // Steps 4-7: H = Hash(0x03 || V);
        // V = (V + H + C + reseed_counter) mod 2^seedlen
        hash_into(ctx, &[&PREFIX_FINAL, &self.v], &mut block)?;
        add_be(&mut self.v, &block);
        add_be(&mut self.v, &self.c);
        add_be(&mut self.v, &self.reseed_counter.to_be_bytes());

        self.t.as_mut_slice().zeroize();
        block.zeroize();
        Ok(())
    }

    /// Generate `len` pseudorandom bytes (convenience method).
    pub fn generate_bytes(&mut self, len: usize) -> Result<Vec<u8>, DrbgError> {
        let mut output = vec![0u8; len];
        self.generate(&mut output, None)?;
        Ok(output)
    }

    /// Release the digest context and zeroize V, C, and scratch.
    ///
    /// Idempotent: uninstantiating a terminated instance is a no-op.
    pub fn uninstantiate(&mut self) -> DrbgState {
        self.ctx = None;
        self.v.as_mut_slice().zeroize();
        self.c.as_mut_slice().zeroize();
        self.t.as_mut_slice().zeroize();
        self.state = DrbgState::Terminated;
        self.state
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DrbgState {
        self.state
    }

    /// Diagnostic recorded when the instance was poisoned.
    pub fn error_reason(&self) -> Option<&str> {
        self.error_reason.as_deref()
    }

    /// The descriptor this instance was instantiated against.
    pub fn profile(&self) -> &'static DrbgProfile {
        self.profile
    }

    /// The security strength selected at instantiation.
    pub fn strength(&self) -> u32 {
        self.strength
    }

    fn ensure_ready(&self) -> Result<(), DrbgError> {
        match self.state {
            DrbgState::Ready => Ok(()),
            _ => Err(DrbgError::InvalidState),
        }
    }

    /// Poison the instance: record the diagnostic, release the digest
    /// context, and make every operation except uninstantiate fail.
    fn poison(&mut self, err: DrbgError) -> DrbgError {
        self.state = DrbgState::Error;
        self.error_reason = Some(err.to_string());
        self.ctx = None;
        err
    }
}
