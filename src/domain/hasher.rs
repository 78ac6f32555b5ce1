use anyhow::{Context, Result};

use super::hash::HashMethod;

/// Anything that can produce a digest of itself under the hash method `M`.
pub trait Hasher<M: HashMethod> {
    fn hash(&self) -> Vec<u8>;
}

impl<M: HashMethod> Hasher<M> for [u8] {
    fn hash(&self) -> Vec<u8> {
        M::hash_leaf(self)
    }
}

impl<M: HashMethod> Hasher<M> for Vec<u8> {
    fn hash(&self) -> Vec<u8> {
        M::hash_leaf(self)
    }
}

impl<M: HashMethod> Hasher<M> for str {
    fn hash(&self) -> Vec<u8> {
        M::hash_leaf(self.as_bytes())
    }
}

impl<M: HashMethod> Hasher<M> for String {
    fn hash(&self) -> Vec<u8> {
        M::hash_leaf(self.as_bytes())
    }
}

impl<M: HashMethod, T: Hasher<M> + ?Sized> Hasher<M> for &T {
    fn hash(&self) -> Vec<u8> {
        (**self).hash()
    }
}

impl<M: HashMethod, T: Hasher<M> + ?Sized> Hasher<M> for Box<T> {
    fn hash(&self) -> Vec<u8> {
        (**self).hash()
    }
}

/// A digest computed elsewhere. Hashing it returns the digest unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prehashed(Vec<u8>);

impl Prehashed {
    pub fn new(digest: Vec<u8>) -> Self {
        Self(digest)
    }

    /// Parse a hex digest, with or without a `0x` prefix.
    pub fn from_hex(digest: &str) -> Result<Self> {
        let stripped = digest.strip_prefix("0x").unwrap_or(digest);
        let bytes = hex::decode(stripped)
            .with_context(|| format!("Invalid hex digest '{}'", digest))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl<M: HashMethod> Hasher<M> for Prehashed {
    fn hash(&self) -> Vec<u8> {
        self.0.clone()
    }
}
