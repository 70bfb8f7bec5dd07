//! Hash-DRBG algorithm descriptors.
//!
//! One immutable descriptor per supported hash carries the SP 800-90A
//! parameters (seedlen, output block length, admissible strengths), the
//! boundary limits enforced on caller inputs, the FIPS-approval flag, and
//! the known-answer vectors exercised by the self-test harness. The table
//! is read-only after initialization except for the self-test status,
//! which may demote a descriptor permanently.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use drbg90_types::HashAlgId;

use super::selftest;

/// Maximum entropy input length in bytes.
pub const MAX_ENTROPY_LEN: usize = 1 << 27;
/// Maximum nonce length in bytes.
pub const MAX_NONCE_LEN: usize = 1 << 27;
/// Maximum personalization string length in bytes.
pub const MAX_PERSONALIZATION_LEN: usize = 1 << 27;
/// Maximum additional input length in bytes.
pub const MAX_ADDITIONAL_LEN: usize = 1 << 27;
/// Maximum bytes per generate request.
pub const MAX_REQUEST_LEN: usize = 1 << 11;
/// Maximum generate calls between reseeds. Stricter than the standard's
/// upper bound.
pub const MAX_RESEED_INTERVAL: u32 = 0x00ff_ffff;
/// Instance constructions between scheduled known-answer self-tests.
pub const SELF_TEST_INTERVAL: u32 = 1024;

/// One known-answer vector slot, as hex strings. An empty `expected`
/// marks an unused slot.
pub struct KatVector {
    pub entropy: &'static str,
    pub nonce: &'static str,
    pub personalization: &'static str,
    pub reseed_entropy: &'static str,
    pub reseed_additional: &'static str,
    pub generate_additional: &'static str,
    pub expected: &'static str,
}

impl KatVector {
    /// Sentinel for strength slots with no vector.
    const NONE: KatVector = KatVector {
        entropy: "",
        nonce: "",
        personalization: "",
        reseed_entropy: "",
        reseed_additional: "",
        generate_additional: "",
        expected: "",
    };

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }
}

/// Self-test bookkeeping. Demotion is monotonic: once `failed` is set the
/// descriptor never re-enters the approved set.
pub(crate) struct SelfTestStatus {
    constructions: AtomicU32,
    tested: AtomicBool,
    failed: AtomicBool,
}

impl SelfTestStatus {
    pub(crate) const fn new() -> Self {
        SelfTestStatus {
            constructions: AtomicU32::new(0),
            tested: AtomicBool::new(false),
            failed: AtomicBool::new(false),
        }
    }
}

/// Capabilities and limits of one Hash-DRBG variant.
pub struct DrbgProfile {
    pub alg: HashAlgId,
    pub name: &'static str,
    /// Internal state width of V and C in bytes (SP 800-90A Table 2).
    pub seed_len: usize,
    /// Hash output block length in bytes.
    pub out_len: usize,
    /// Supported security strengths; zero marks an unused slot.
    pub strengths: [u32; 4],
    pub max_entropy_len: usize,
    pub max_nonce_len: usize,
    pub max_personalization_len: usize,
    pub max_additional_len: usize,
    pub max_request_len: usize,
    pub max_reseed_interval: u32,
    /// Whether this variant is eligible for FIPS-approved operation.
    pub fips: bool,
    pub self_test_interval: u32,
    /// Known-answer vectors, one slot per strength.
    pub kat: [KatVector; 4],
    pub(crate) status: SelfTestStatus,
}

impl DrbgProfile {
    /// Descriptor for the given hash algorithm.
    pub fn for_alg(alg: HashAlgId) -> &'static DrbgProfile {
        match alg {
            HashAlgId::Sha1 => &SHA1_PROFILE,
            HashAlgId::Sha224 => &SHA224_PROFILE,
            HashAlgId::Sha256 => &SHA256_PROFILE,
            HashAlgId::Sha384 => &SHA384_PROFILE,
            HashAlgId::Sha512 => &SHA512_PROFILE,
        }
    }

    /// All descriptors, in strength-ascending hash order.
    pub fn all() -> [&'static DrbgProfile; 5] {
        [
            &SHA1_PROFILE,
            &SHA224_PROFILE,
            &SHA256_PROFILE,
            &SHA384_PROFILE,
            &SHA512_PROFILE,
        ]
    }

    pub fn supports_strength(&self, strength: u32) -> bool {
        strength != 0 && self.strengths.contains(&strength)
    }

    /// FIPS eligibility combined with the self-test verdict. Runs the
    /// known-answer tests first if they have not been exercised yet.
    pub fn is_approved(&'static self) -> bool {
        self.fips && self.self_test_passed()
    }

    /// Whether the most recent known-answer self-test passed.
    pub fn self_test_passed(&'static self) -> bool {
        if !self.status.tested.load(Ordering::Acquire) {
            self.run_self_test();
        }
        !self.status.failed.load(Ordering::Acquire)
    }

    /// Health-check tick, called on every instance construction. The
    /// full self-test runs at power-up (tick zero) and at every
    /// `self_test_interval`-th construction thereafter, before the
    /// triggering request is satisfied.
    pub(crate) fn health_tick(&'static self) {
        let n = self.status.constructions.fetch_add(1, Ordering::AcqRel);
        if n % self.self_test_interval == 0 {
            self.run_self_test();
        }
    }

    fn run_self_test(&'static self) {
        // Demotion is permanent; a failed descriptor is not retested.
        if self.status.failed.load(Ordering::Acquire) {
            return;
        }
        if selftest::run_profile(self).is_err() {
            self.status.failed.store(true, Ordering::Release);
        }
        self.status.tested.store(true, Ordering::Release);
    }
}

static SHA1_PROFILE: DrbgProfile = DrbgProfile {
    alg: HashAlgId::Sha1,
    name: "SHA-1",
    seed_len: 440 / 8,
    out_len: 160 / 8,
    strengths: [112, 128, 0, 0],
    max_entropy_len: MAX_ENTROPY_LEN,
    max_nonce_len: MAX_NONCE_LEN,
    max_personalization_len: MAX_PERSONALIZATION_LEN,
    max_additional_len: MAX_ADDITIONAL_LEN,
    max_request_len: MAX_REQUEST_LEN,
    max_reseed_interval: MAX_RESEED_INTERVAL,
    fips: false,
    self_test_interval: SELF_TEST_INTERVAL,
    kat: [
        KatVector {
            entropy: "dc106ace9ff57c68131ea2ee75c6585a",
            nonce: "6a360c6f7bd4601e",
            personalization: "6bd1589156952524ba1f9b140659baf2",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "",
            expected: "3654d194a757d6293ccd301439a2f63e81cbbb031f6b47870ff0c41cf12af63f\
                       1c8e4d25f44b909f276dd092373a20db2ad6680652ce9a87ba6e56eab201cbec",
        },
        KatVector {
            entropy: "b6da6dc2ad08ba10f78e6e8301578a52",
            nonce: "47b4da6f9032af0c",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "7bbb1485074af4d95aad86663ac88ce6",
            expected: "9734ed8ad41a596f86389572ea7a777b08b36e7f",
        },
        KatVector::NONE,
        KatVector::NONE,
    ],
    status: SelfTestStatus::new(),
};

static SHA224_PROFILE: DrbgProfile = DrbgProfile {
    alg: HashAlgId::Sha224,
    name: "SHA-224",
    seed_len: 440 / 8,
    out_len: 224 / 8,
    strengths: [112, 128, 192, 256],
    max_entropy_len: MAX_ENTROPY_LEN,
    max_nonce_len: MAX_NONCE_LEN,
    max_personalization_len: MAX_PERSONALIZATION_LEN,
    max_additional_len: MAX_ADDITIONAL_LEN,
    max_request_len: MAX_REQUEST_LEN,
    max_reseed_interval: MAX_RESEED_INTERVAL,
    fips: true,
    self_test_interval: SELF_TEST_INTERVAL,
    kat: [
        KatVector {
            entropy: "d956caa24039e76f58616e0969afa2d7b7087401ee2d8777",
            nonce: "32a2ef15983e3c1f66e6032a",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "7ba5a522580b41e1a4f540f9fe3daaf95df772740a199651",
            expected: "9a3dfe95ee24f800191e83322124ffe6aac3ceac",
        },
        KatVector {
            entropy: "5021b721ef6aa7abaaba5543d531de46a1a1202338e4f84b1a5ebf5cb9cf068b",
            nonce: "fc6eeae21b3f8d8fe38226fe65c35708",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "6ae65ac1e374038e40351cd35d2fddf7d42ae8e9638c571ba07304c0df131943",
            expected: "fbb9c03f9c65ce74f392070390a6cbc396c3ffdb65f39a34bce361c15201d2a4",
        },
        KatVector {
            entropy: "d956caa24039e76f58616e0969afa2d7b7087401ee2d8777",
            nonce: "32a2ef15983e3c1f66e6032a",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "7ba5a522580b41e1a4f540f9fe3daaf95df772740a199651",
            expected: "9a3dfe95ee24f800191e83322124ffe6aac3ceac94c8a6b0",
        },
        KatVector {
            entropy: "5021b721ef6aa7abaaba5543d531de46a1a1202338e4f84b1a5ebf5cb9cf068b\
                      2832534feee8bf4a9829a263c0401f1559a95240ce28a87e274b157503a8090f",
            nonce: "fc6eeae21b3f8d8fe38226fe65c35708",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "6ae65ac1e374038e40351cd35d2fddf7d42ae8e9638c571ba07304c0df131943\
                                  2832534feee8bf4a9829a263c0401f1559a95240ce28a87e274b157503a8090f",
            expected: "782aa930f5eb6dd5454838d7f0454f3be0ccb8828cab0e9ecfe11dc0",
        },
    ],
    status: SelfTestStatus::new(),
};

static SHA256_PROFILE: DrbgProfile = DrbgProfile {
    alg: HashAlgId::Sha256,
    name: "SHA-256",
    seed_len: 440 / 8,
    out_len: 256 / 8,
    strengths: [112, 128, 192, 256],
    max_entropy_len: MAX_ENTROPY_LEN,
    max_nonce_len: MAX_NONCE_LEN,
    max_personalization_len: MAX_PERSONALIZATION_LEN,
    max_additional_len: MAX_ADDITIONAL_LEN,
    max_request_len: MAX_REQUEST_LEN,
    max_reseed_interval: MAX_RESEED_INTERVAL,
    fips: true,
    self_test_interval: SELF_TEST_INTERVAL,
    kat: [
        KatVector {
            entropy: "d956caa24039e76f58616e0969afa2d7b7087401ee2d8777",
            nonce: "32a2ef15983e3c1f66e6032a",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "7ba5a522580b41e1a4f540f9fe3daaf95df772740a199651",
            expected: "8772e9ef034ca519e92379801408b1b8d222ea9f27871c9d9897c0e355df9200",
        },
        KatVector {
            entropy: "5021b721ef6aa7abaaba5543d531de46a1a1202338e4f84b1a5ebf5cb9cf068b",
            nonce: "fc6eeae21b3f8d8fe38226fe65c35708",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "6ae65ac1e374038e40351cd35d2fddf7d42ae8e9638c571ba07304c0df131943",
            expected: "2832534feee8bf4a9829a263c0401f1559a95240ce28a87e274b157503a8090f",
        },
        // The 192-bit slot intentionally repeats the 128-bit vectors: the
        // strength parameter governs admissibility, not the algorithm.
        KatVector {
            entropy: "5021b721ef6aa7abaaba5543d531de46a1a1202338e4f84b1a5ebf5cb9cf068b",
            nonce: "fc6eeae21b3f8d8fe38226fe65c35708",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "6ae65ac1e374038e40351cd35d2fddf7d42ae8e9638c571ba07304c0df131943",
            expected: "2832534feee8bf4a9829a263c0401f1559a95240ce28a87e274b157503a8090f",
        },
        KatVector {
            entropy: "8e9c0d25752204f9c579108b237937149f2cc70b39f8eeef950c9759fc0a8541",
            nonce: "769d6d67004e1912021653eaf273d7d6",
            personalization: "7f7ec8ae9c09997dbb9e487fbb9646b30375f8c869453f975e2e48e15d58974c",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "",
            expected: "16e18c5721d8f17e5aa0160b7ea625b42419db54fa351366bbaa2a1b22332e4a\
                       14079d52fc736148acc122fca4fcaca4dbda5b2733c4b3ecb0f2ee631161db30",
        },
    ],
    status: SelfTestStatus::new(),
};

static SHA384_PROFILE: DrbgProfile = DrbgProfile {
    alg: HashAlgId::Sha384,
    name: "SHA-384",
    seed_len: 888 / 8,
    out_len: 384 / 8,
    strengths: [112, 128, 192, 256],
    max_entropy_len: MAX_ENTROPY_LEN,
    max_nonce_len: MAX_NONCE_LEN,
    max_personalization_len: MAX_PERSONALIZATION_LEN,
    max_additional_len: MAX_ADDITIONAL_LEN,
    max_request_len: MAX_REQUEST_LEN,
    max_reseed_interval: MAX_RESEED_INTERVAL,
    fips: true,
    self_test_interval: SELF_TEST_INTERVAL,
    kat: [
        KatVector {
            entropy: "d956caa24039e76f58616e0969afa2d7b7087401ee2d8777",
            nonce: "32a2ef15983e3c1f66e6032a00010203",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "7ba5a522580b41e1a4f540f9fe3daaf95df772740a199651",
            expected: "e4b6ba788677246299e9f50f3d4ac082d9fe9828640af7652e9b4c0445a40655\
                       35dffff63b34c9af29d150e9765bc1b8",
        },
        KatVector {
            entropy: "5daebf2d317935a35cbafeba69fde5672ab814d7b7f12cb9a432a6cb84b16ba4",
            nonce: "8584de959a4bc1fd6d560d6d30a5bc21",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "7bc1292c5960d8108a03d1c3299aa9e36711f60c74a7df5aae8de31a0ac2e7d1",
            expected: "d3c8ced13eded3a8d914230bbf15c95ab067600c175a0246fc6c2213cfdc9684\
                       2483fd395d3b187d962ba1399e0ca38c",
        },
        KatVector {
            entropy: "5daebf2d317935a35cbafeba69fde5672ab814d7b7f12cb9a432a6cb84b16ba4",
            nonce: "8584de959a4bc1fd6d560d6d30a5bc21",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "7bc1292c5960d8108a03d1c3299aa9e36711f60c74a7df5aae8de31a0ac2e7d1",
            expected: "d3c8ced13eded3a8d914230bbf15c95ab067600c175a0246fc6c2213cfdc9684\
                       2483fd395d3b187d962ba1399e0ca38c",
        },
        // The expected output is 64 bytes, two hash blocks: the vector's
        // length, not outlen, decides how much the self-test generates.
        KatVector {
            entropy: "0fa650975e535bae2ac22d2cb81534fa5f6b363d64e84dfd13012210210b684a",
            nonce: "435f0cc24ca59c6fa58882b6c7f1155d",
            personalization: "57792cabd35e62a0eaf3d856235c68ff7fe932621f33e81239795af03c3b43e3",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "",
            expected: "477c4bf9d857b50714393c95f92b60ab13fd6683bee96ee317e3f8595925862c\
                       c4506781399b5afd806fc33cec279e43c018abfd5324ce69405db863b54701f5",
        },
    ],
    status: SelfTestStatus::new(),
};

static SHA512_PROFILE: DrbgProfile = DrbgProfile {
    alg: HashAlgId::Sha512,
    name: "SHA-512",
    seed_len: 888 / 8,
    out_len: 512 / 8,
    strengths: [112, 128, 192, 256],
    max_entropy_len: MAX_ENTROPY_LEN,
    max_nonce_len: MAX_NONCE_LEN,
    max_personalization_len: MAX_PERSONALIZATION_LEN,
    max_additional_len: MAX_ADDITIONAL_LEN,
    max_request_len: MAX_REQUEST_LEN,
    max_reseed_interval: MAX_RESEED_INTERVAL,
    fips: true,
    self_test_interval: SELF_TEST_INTERVAL,
    kat: [
        KatVector {
            entropy: "d956caa24039e76f58616e0969afa2d7b7087401ee2d8777",
            nonce: "32a2ef15983e3c1f66e6032a",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "7ba5a522580b41e1a4f540f9fe3daaf95df772740a199651",
            expected: "9173ff1b3bd04211f090c0c658cd9ca98ac1d77e1e3a96d11de672d1ecf0e370\
                       8c7e4242f940df4e5b34529672044a109ab8f1dbeb6abb3930690a9228d0e57c",
        },
        KatVector {
            entropy: "7ad08c07e26ff3ffd5001b9482ad715db3c5ff112442edb2259a3afd72c9b510",
            nonce: "04b190551069f04ee6632b76da26a3d0",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "3be4bfaa70a92f0aab37c2e6ab89f625c9bce6cd549bc932296cad6095fc73c5",
            expected: "06c0aa2f10138f7964c4842355addf7ed29a8ecc6b520ae61a7637cd0769e22e\
                       3c9ba0c4e24bd5bd66063405e59db7c1870369d1ecb27d088c00f76b1c8b2a1d",
        },
        KatVector {
            entropy: "7ad08c07e26ff3ffd5001b9482ad715db3c5ff112442edb2259a3afd72c9b510",
            nonce: "04b190551069f04ee6632b76da26a3d0",
            personalization: "",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "3be4bfaa70a92f0aab37c2e6ab89f625c9bce6cd549bc932296cad6095fc73c5",
            expected: "06c0aa2f10138f7964c4842355addf7ed29a8ecc6b520ae61a7637cd0769e22e\
                       3c9ba0c4e24bd5bd66063405e59db7c1870369d1ecb27d088c00f76b1c8b2a1d",
        },
        KatVector {
            entropy: "ee41942a7ffffec73cf65a2fadb572ad88b8178d2e9bbbe36a7f4f9967bb59bd",
            nonce: "93d0caac1f57e79f3a95b3d089e28d84",
            personalization: "461a6307a195715a45890a449152ca8a29888e887f819fcc9e081ef0385db0b6",
            reseed_entropy: "",
            reseed_additional: "",
            generate_additional: "",
            expected: "e7ffc20b3384eebd83ba0390e83862f77bccb455a678ad9ca27cd3ebe5752789\
                       0315aa2f4a1c52d5ebfb7fe2634edce3fcd733d288e476045b9ac84b6415f08d",
        },
    ],
    status: SelfTestStatus::new(),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_parameters() {
        let sha1 = DrbgProfile::for_alg(HashAlgId::Sha1);
        assert_eq!(sha1.seed_len, 55);
        assert_eq!(sha1.out_len, 20);
        assert!(!sha1.fips);
        assert_eq!(sha1.strengths, [112, 128, 0, 0]);

        let sha256 = DrbgProfile::for_alg(HashAlgId::Sha256);
        assert_eq!(sha256.seed_len, 55);
        assert_eq!(sha256.out_len, 32);
        assert!(sha256.fips);

        let sha384 = DrbgProfile::for_alg(HashAlgId::Sha384);
        assert_eq!(sha384.seed_len, 111);
        assert_eq!(sha384.out_len, 48);

        let sha512 = DrbgProfile::for_alg(HashAlgId::Sha512);
        assert_eq!(sha512.seed_len, 111);
        assert_eq!(sha512.out_len, 64);

        for profile in DrbgProfile::all() {
            assert_eq!(profile.max_entropy_len, 1 << 27);
            assert_eq!(profile.max_request_len, 2048);
            assert_eq!(profile.max_reseed_interval, 0x00ff_ffff);
        }
    }

    #[test]
    fn test_strength_support() {
        let sha1 = DrbgProfile::for_alg(HashAlgId::Sha1);
        assert!(sha1.supports_strength(112));
        assert!(sha1.supports_strength(128));
        assert!(!sha1.supports_strength(192));
        assert!(!sha1.supports_strength(256));
        assert!(!sha1.supports_strength(0));

        let sha224 = DrbgProfile::for_alg(HashAlgId::Sha224);
        for s in [112, 128, 192, 256] {
            assert!(sha224.supports_strength(s));
        }

        // Every occupied slot holds an admissible strength.
        for profile in DrbgProfile::all() {
            for &s in profile.strengths.iter().filter(|&&s| s != 0) {
                assert!(drbg90_types::SECURITY_STRENGTHS.contains(&s), "{}: {s}", profile.name);
            }
        }
    }

    #[test]
    fn test_empty_vector_slots() {
        let sha1 = DrbgProfile::for_alg(HashAlgId::Sha1);
        assert!(!sha1.kat[0].is_empty());
        assert!(!sha1.kat[1].is_empty());
        assert!(sha1.kat[2].is_empty());
        assert!(sha1.kat[3].is_empty());

        for profile in DrbgProfile::all() {
            if profile.alg == HashAlgId::Sha1 {
                continue;
            }
            for slot in &profile.kat {
                assert!(!slot.is_empty(), "{} has an empty vector slot", profile.name);
            }
        }
    }

    #[test]
    fn test_sha1_is_never_approved() {
        // Not FIPS-eligible regardless of its self-test verdict.
        assert!(!DrbgProfile::for_alg(HashAlgId::Sha1).is_approved());
        assert!(DrbgProfile::for_alg(HashAlgId::Sha1).self_test_passed());
    }

    #[test]
    fn test_fips_profiles_are_approved() {
        for alg in [
            HashAlgId::Sha224,
            HashAlgId::Sha256,
            HashAlgId::Sha384,
            HashAlgId::Sha512,
        ] {
            assert!(DrbgProfile::for_alg(alg).is_approved(), "{alg:?}");
        }
    }

    /// A descriptor whose 112-bit expectation is corrupt; every other
    /// field mirrors the SHA-256 descriptor.
    static BROKEN_PROFILE: DrbgProfile = DrbgProfile {
        alg: HashAlgId::Sha256,
        name: "SHA-256-broken",
        seed_len: 440 / 8,
        out_len: 256 / 8,
        strengths: [112, 0, 0, 0],
        max_entropy_len: MAX_ENTROPY_LEN,
        max_nonce_len: MAX_NONCE_LEN,
        max_personalization_len: MAX_PERSONALIZATION_LEN,
        max_additional_len: MAX_ADDITIONAL_LEN,
        max_request_len: MAX_REQUEST_LEN,
        max_reseed_interval: MAX_RESEED_INTERVAL,
        fips: true,
        self_test_interval: SELF_TEST_INTERVAL,
        kat: [
            KatVector {
                entropy: "d956caa24039e76f58616e0969afa2d7b7087401ee2d8777",
                nonce: "32a2ef15983e3c1f66e6032a",
                personalization: "",
                reseed_entropy: "",
                reseed_additional: "",
                generate_additional: "7ba5a522580b41e1a4f540f9fe3daaf95df772740a199651",
                expected: "0000000000000000000000000000000000000000000000000000000000000000",
            },
            KatVector::NONE,
            KatVector::NONE,
            KatVector::NONE,
        ],
        status: SelfTestStatus::new(),
    };

    #[test]
    fn test_failed_self_test_demotes_descriptor() {
        use super::super::hash_drbg::HashDrbg;

        // The corrupt vector demotes the descriptor, and demotion sticks.
        assert!(!BROKEN_PROFILE.is_approved());
        assert!(!BROKEN_PROFILE.self_test_passed());
        assert!(!BROKEN_PROFILE.is_approved());

        // A demoted descriptor still instantiates for non-FIPS consumers.
        let entropy = [0x55u8; 32];
        let nonce = [0xaau8; 16];
        let mut drbg =
            HashDrbg::instantiate_untracked(&BROKEN_PROFILE, 112, &entropy, &nonce, &[]).unwrap();
        drbg.generate_bytes(32).unwrap();
    }
}
