use anyhow::{anyhow, Result};
use log::trace;
use std::fmt;
use std::str::FromStr;

use super::hash::{
    sha256::{Sha256Method, TmHashMethod},
    to_hex, HashMethod,
};
use super::map::SimpleMap;
use super::tree::SimpleTree;

/// Hash function selected at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    /// SHA-256 truncated to 20 bytes.
    TmHash,
}

impl HashAlgorithm {
    pub fn digest_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => Sha256Method::SIZE,
            HashAlgorithm::TmHash => TmHashMethod::SIZE,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "tmhash" | "sha256-20" => Ok(HashAlgorithm::TmHash),
            other => Err(anyhow!("Unknown hash algorithm '{}'", other)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::TmHash => write!(f, "tmhash"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MerkleOptions {
    pub algorithm: HashAlgorithm,
}

impl MerkleOptions {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn hash_data(&self, data: &[u8]) -> Vec<u8> {
        match self.algorithm {
            HashAlgorithm::Sha256 => Sha256Method::hash_leaf(data),
            HashAlgorithm::TmHash => TmHashMethod::hash_leaf(data),
        }
    }

    pub fn combine(&self, left: &[u8], right: &[u8]) -> Vec<u8> {
        match self.algorithm {
            HashAlgorithm::Sha256 => Sha256Method::hash_nodes(left, right),
            HashAlgorithm::TmHash => TmHashMethod::hash_nodes(left, right),
        }
    }

    pub fn root_of_hashes(&self, hashes: &[Vec<u8>]) -> Vec<u8> {
        trace!("Folding {} hashes with {}", hashes.len(), self.algorithm);
        match self.algorithm {
            HashAlgorithm::Sha256 => SimpleTree::<Sha256Method>::root_of_hashes(hashes),
            HashAlgorithm::TmHash => SimpleTree::<TmHashMethod>::root_of_hashes(hashes),
        }
    }

    pub fn root_of_data<D: AsRef<[u8]>>(&self, leaves: &[D]) -> Vec<u8> {
        trace!("Hashing {} leaves with {}", leaves.len(), self.algorithm);
        match self.algorithm {
            HashAlgorithm::Sha256 => SimpleTree::<Sha256Method>::root_of_data(leaves),
            HashAlgorithm::TmHash => SimpleTree::<TmHashMethod>::root_of_data(leaves),
        }
    }

    /// Root of a keyed collection whose values are raw bytes.
    pub fn root_of_map_data<K, D, I>(&self, entries: I) -> Vec<u8>
    where
        K: AsRef<str>,
        D: AsRef<[u8]>,
        I: IntoIterator<Item = (K, D)>,
    {
        trace!("Hashing keyed collection with {}", self.algorithm);
        match self.algorithm {
            HashAlgorithm::Sha256 => Self::map_root::<Sha256Method, _, _, _>(entries),
            HashAlgorithm::TmHash => Self::map_root::<TmHashMethod, _, _, _>(entries),
        }
    }

    fn map_root<M, K, D, I>(entries: I) -> Vec<u8>
    where
        M: HashMethod,
        K: AsRef<str>,
        D: AsRef<[u8]>,
        I: IntoIterator<Item = (K, D)>,
    {
        let mut map = SimpleMap::<M>::new();
        for (key, value) in entries {
            map.set(key.as_ref(), value.as_ref());
        }
        map.hash()
    }

    /// Root of raw leaves rendered as `0x`-prefixed hex.
    pub fn root_hex<D: AsRef<[u8]>>(&self, leaves: &[D]) -> String {
        to_hex(&self.root_of_data(leaves))
    }
}

#[cfg(test)]
mod tests {
    use super::{HashAlgorithm, MerkleOptions};
    use crate::domain::hash::{
        sha256::{Sha256Method, TmHashMethod},
        HashMethod,
    };
    use crate::domain::map::{SimpleMapSha256, SimpleMapTmHash};
    use crate::domain::tree::{SimpleTreeSha256, SimpleTreeTmHash};
    use std::collections::HashMap;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!(" SHA-256 ".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("tmhash".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::TmHash);
        assert_eq!("sha256-20".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::TmHash);
        assert!("md5".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::TmHash] {
            let parsed: HashAlgorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn test_default_is_sha256() {
        let options = MerkleOptions::default();
        assert_eq!(options.algorithm, HashAlgorithm::Sha256);
        assert_eq!(options.algorithm.digest_size(), 32);
        assert_eq!(HashAlgorithm::TmHash.digest_size(), 20);
    }

    #[test]
    fn test_dispatch_matches_static_methods() {
        let leaves = ["a", "b", "c", "d", "e"];
        let sha = MerkleOptions::new(HashAlgorithm::Sha256);
        let tm = MerkleOptions::new(HashAlgorithm::TmHash);

        assert_eq!(sha.root_of_data(&leaves), SimpleTreeSha256::root_of(&leaves));
        assert_eq!(tm.root_of_data(&leaves), SimpleTreeTmHash::root_of(&leaves));

        assert_eq!(sha.hash_data(b"x"), Sha256Method::hash_leaf(b"x"));
        let (l, r) = (tm.hash_data(b"l"), tm.hash_data(b"r"));
        assert_eq!(tm.combine(&l, &r), TmHashMethod::hash_nodes(&l, &r));

        let hashes: Vec<Vec<u8>> = leaves.iter().map(|s| sha.hash_data(s.as_bytes())).collect();
        assert_eq!(sha.root_of_hashes(&hashes), sha.root_of_data(&leaves));
    }

    #[test]
    fn test_map_dispatch() {
        let mut entries: HashMap<String, Vec<u8>> = HashMap::new();
        entries.insert("x".to_string(), b"v1".to_vec());
        entries.insert("y".to_string(), b"v2".to_vec());

        let sha = MerkleOptions::new(HashAlgorithm::Sha256);
        let tm = MerkleOptions::new(HashAlgorithm::TmHash);

        assert_eq!(
            sha.root_of_map_data(&entries),
            SimpleMapSha256::root_of_map(&entries)
        );
        assert_eq!(
            tm.root_of_map_data(&entries),
            SimpleMapTmHash::root_of_map(&entries)
        );
    }

    #[test]
    fn test_root_hex() {
        let options = MerkleOptions::default();
        let hex_root = options.root_hex(&["only"]);
        assert_eq!(
            hex_root,
            format!("0x{}", hex::encode(Sha256Method::hash_leaf(b"only")))
        );
        assert_eq!(options.root_hex::<&str>(&[]), "0x");
    }
}
