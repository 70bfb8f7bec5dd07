/// Hash algorithm identifiers for the Hash-DRBG family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgId {
    /// Human-readable algorithm name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

/// Security strengths admissible under SP 800-90A, in bits.
pub const SECURITY_STRENGTHS: [u32; 4] = [112, 128, 192, 256];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_alg_names() {
        assert_eq!(HashAlgId::Sha1.name(), "SHA-1");
        assert_eq!(HashAlgId::Sha224.name(), "SHA-224");
        assert_eq!(HashAlgId::Sha256.name(), "SHA-256");
        assert_eq!(HashAlgId::Sha384.name(), "SHA-384");
        assert_eq!(HashAlgId::Sha512.name(), "SHA-512");
    }

    #[test]
    fn test_hash_alg_id_is_copy_eq() {
        let a = HashAlgId::Sha256;
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, HashAlgId::Sha512);
    }
}
