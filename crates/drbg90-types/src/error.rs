/// DRBG operation errors.
///
/// Every lifecycle operation reports its outcome through this enum; a
/// poisoned instance additionally retains the diagnostic text of the
/// failure that poisoned it.
#[derive(Debug, thiserror::Error)]
pub enum DrbgError {
    // Precondition violations. The instance is left unchanged and the
    // caller may retry with corrected inputs.
    #[error("entropy input length {got} exceeds maximum {max}")]
    EntropyTooLong { got: usize, max: usize },
    #[error("nonce length {got} exceeds maximum {max}")]
    NonceTooLong { got: usize, max: usize },
    #[error("personalization string length {got} exceeds maximum {max}")]
    PersonalizationTooLong { got: usize, max: usize },
    #[error("additional input length {got} exceeds maximum {max}")]
    AdditionalInputTooLong { got: usize, max: usize },
    #[error("requested {got} bytes exceeds {max} bytes per generate request")]
    RequestTooLarge { got: usize, max: usize },
    #[error("security strength {0} not supported by this algorithm")]
    UnsupportedStrength(u32),
    #[error("operation not permitted in the current lifecycle state")]
    InvalidState,

    // Boundary exhaustion. The instance stays ready; a successful reseed
    // clears the condition.
    #[error("reseed required before further generate requests")]
    ReseedRequired,

    // Fatal conditions. The instance is poisoned until uninstantiated.
    #[error("digest primitive failure: {0}")]
    Digest(String),
    #[error("failed to obtain entropy")]
    EntropyFail,

    #[error("self-test: {0}")]
    SelfTest(#[from] SelfTestError),
}

/// Known-answer self-test failures.
#[derive(Debug, thiserror::Error)]
pub enum SelfTestError {
    #[error("KAT self-test failed: {0}")]
    KatFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drbg_error_display_simple_variants() {
        assert_eq!(
            DrbgError::InvalidState.to_string(),
            "operation not permitted in the current lifecycle state"
        );
        assert_eq!(
            DrbgError::ReseedRequired.to_string(),
            "reseed required before further generate requests"
        );
        assert_eq!(DrbgError::EntropyFail.to_string(), "failed to obtain entropy");
        assert_eq!(
            DrbgError::UnsupportedStrength(96).to_string(),
            "security strength 96 not supported by this algorithm"
        );
    }

    #[test]
    fn test_drbg_error_structured_variants() {
        let e = DrbgError::EntropyTooLong {
            got: 1 << 28,
            max: 1 << 27,
        };
        assert_eq!(
            e.to_string(),
            format!("entropy input length {} exceeds maximum {}", 1u64 << 28, 1u64 << 27)
        );

        let e = DrbgError::RequestTooLarge { got: 2049, max: 2048 };
        assert_eq!(
            e.to_string(),
            "requested 2049 bytes exceeds 2048 bytes per generate request"
        );
    }

    #[test]
    fn test_self_test_error_conversion() {
        let kat = SelfTestError::KatFailure("SHA-256 output mismatch".into());
        let drbg: DrbgError = kat.into();
        let display = drbg.to_string();
        assert!(display.contains("SHA-256 output mismatch"), "got: {display}");
    }

    #[test]
    fn test_drbg_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DrbgError>();
        assert_send_sync::<SelfTestError>();
    }
}
