#![deny(clippy::all)]

//! Deterministic Merkle roots over ordered lists and keyed collections.

mod domain;

pub use domain::hash::{
  sha256::{Sha256Method, TmHashMethod},
  to_hex, HashMethod, EMPTY_DIGEST,
};
pub use domain::hasher::{Hasher, Prehashed};
pub use domain::map::{KvPair, SimpleMap, SimpleMapSha256, SimpleMapTmHash};
pub use domain::options::{HashAlgorithm, MerkleOptions};
pub use domain::tree::{split_point, SimpleTree, SimpleTreeSha256, SimpleTreeTmHash};
