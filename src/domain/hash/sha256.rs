use super::HashMethod;
use sha2::{digest::FixedOutput, Digest, Sha256};

/// Plain SHA-256, 32-byte digests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Method;
impl HashMethod for Sha256Method {
    const SIZE: usize = 32;

    fn hash_leaf(data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize_fixed().to_vec()
    }

    fn hash_nodes(left: &[u8], right: &[u8]) -> Vec<u8> {
        assert_eq!(left.len(), right.len(), "combining digests of different widths");
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize_fixed().to_vec()
    }
}

/// SHA-256 truncated to its first 20 bytes ("tmhash").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TmHashMethod;
impl HashMethod for TmHashMethod {
    const SIZE: usize = 20;

    fn hash_leaf(data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize_fixed()[..Self::SIZE].to_vec()
    }

    fn hash_nodes(left: &[u8], right: &[u8]) -> Vec<u8> {
        assert_eq!(left.len(), right.len(), "combining digests of different widths");
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize_fixed()[..Self::SIZE].to_vec()
    }
}
