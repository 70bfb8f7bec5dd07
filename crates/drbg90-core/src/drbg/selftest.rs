//! Known-answer self-tests for the Hash-DRBG descriptors.
//!
//! Each round instantiates a scratch instance from a descriptor's vector,
//! optionally reseeds, generates exactly the expected number of bytes, and
//! byte-compares the result. A mismatch demotes the descriptor from the
//! approved set permanently. Scratch instances never touch caller-visible
//! state and are uninstantiated before the round ends.

use drbg90_types::SelfTestError;

use super::hash_drbg::HashDrbg;
use super::profile::{DrbgProfile, KatVector};

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

/// Run the known-answer tests for every descriptor. Returns on first
/// failure.
pub fn run_all() -> Result<(), SelfTestError> {
    for profile in DrbgProfile::all() {
        run_profile(profile)?;
    }
    Ok(())
}

/// Run one descriptor's known-answer tests, one round per occupied
/// strength slot.
pub(crate) fn run_profile(profile: &'static DrbgProfile) -> Result<(), SelfTestError> {
    for (slot, vector) in profile.kat.iter().enumerate() {
        let strength = profile.strengths[slot];
        if strength == 0 || vector.is_empty() {
            continue;
        }
        run_vector(profile, strength, vector)?;
    }
    Ok(())
}

fn run_vector(
    profile: &'static DrbgProfile,
    strength: u32,
    vector: &KatVector,
) -> Result<(), SelfTestError> {
    let entropy = hex(vector.entropy);
    let nonce = hex(vector.nonce);
    let personalization = hex(vector.personalization);
    let expected = hex(vector.expected);

    let fail = |stage: &str| {
        SelfTestError::KatFailure(format!("{} strength {strength}: {stage}", profile.name))
    };

    let mut drbg =
        HashDrbg::instantiate_untracked(profile, strength, &entropy, &nonce, &personalization)
            .map_err(|e| fail(&format!("instantiate: {e}")))?;

    if !vector.reseed_entropy.is_empty() {
        let reseed_entropy = hex(vector.reseed_entropy);
        let reseed_additional = hex(vector.reseed_additional);
        let additional = (!reseed_additional.is_empty()).then_some(reseed_additional.as_slice());
        if let Err(e) = drbg.reseed(&reseed_entropy, additional) {
            drbg.uninstantiate();
            return Err(fail(&format!("reseed: {e}")));
        }
    }

    let generate_additional = hex(vector.generate_additional);
    let additional = (!generate_additional.is_empty()).then_some(generate_additional.as_slice());
    let mut output = vec![0u8; expected.len()];
    if let Err(e) = drbg.generate(&mut output, additional) {
        drbg.uninstantiate();
        return Err(fail(&format!("generate: {e}")));
    }

    drbg.uninstantiate();

    if output != expected {
        return Err(fail("output mismatch"));
    }
    Ok(())
}
