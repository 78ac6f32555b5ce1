use itertools::Itertools;
use log::{debug, log_enabled, trace, Level};
use std::marker::PhantomData;
use std::time::Instant;

use super::hash::{
    sha256::{Sha256Method, TmHashMethod},
    to_hex, HashMethod,
};
use super::hasher::Hasher;
use super::tree::SimpleTree;

/// A map entry with both sides already hashed.
///
/// Key and value must be digests, never raw bytes: without length prefixes
/// the raw pair ("abc", "def") would collide with ("ab", "cdef").
///
/// Ordering is by key digest, then by value digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KvPair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl KvPair {
    pub fn new(key: Vec<u8>, value: Vec<u8>) -> Self {
        Self { key, value }
    }

    /// `key || value`.
    pub fn to_bytes(&self) -> Vec<u8> {
        [self.key.as_slice(), self.value.as_slice()].concat()
    }

    /// Split an encoded pair whose halves are both `width` bytes long.
    ///
    /// Panics if `bytes` is not exactly two digests wide.
    pub fn from_bytes(bytes: &[u8], width: usize) -> Self {
        assert!(
            width > 0 && bytes.len() == 2 * width,
            "encoded pair must be {} bytes, got {}",
            2 * width,
            bytes.len()
        );
        let (key, value) = bytes.split_at(width);
        Self::new(key.to_vec(), value.to_vec())
    }
}

impl<M: HashMethod> Hasher<M> for KvPair {
    fn hash(&self) -> Vec<u8> {
        M::hash_nodes(&self.key, &self.value)
    }
}

/// Merkle tree over a keyed collection.
///
/// Leaves are `hash(key) | hash(value)`, sorted before the tree is built so
/// the root does not depend on iteration order. If two pairs share a key
/// digest they are ordered by value digest, which makes the root of such a
/// collection depend on the values as well (UNSTABLE).
#[derive(Debug, Clone)]
pub struct SimpleMap<Method: HashMethod> {
    kvs: Vec<KvPair>,
    sorted: bool,
    method: PhantomData<Method>,
}

pub type SimpleMapSha256 = SimpleMap<Sha256Method>;
pub type SimpleMapTmHash = SimpleMap<TmHashMethod>;

impl<Method: HashMethod> Default for SimpleMap<Method> {
    fn default() -> Self {
        Self {
            kvs: Vec::new(),
            sorted: false,
            method: PhantomData,
        }
    }
}

impl<Method: HashMethod> SimpleMap<Method> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root of `entries`, in any order.
    pub fn root_of_map<K, V, I>(entries: I) -> Vec<u8>
    where
        K: AsRef<str>,
        V: Hasher<Method>,
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().collect::<Self>().hash()
    }

    pub fn len(&self) -> usize {
        self.kvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kvs.is_empty()
    }

    /// Hash the key and the value and append the pair.
    pub fn set<V: Hasher<Method> + ?Sized>(&mut self, key: &str, value: &V) {
        self.sorted = false;
        self.kvs.push(KvPair::new(
            Method::hash_leaf(key.as_bytes()),
            value.hash(),
        ));
    }

    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }
        let sort_start = Instant::now();
        self.kvs.sort_unstable();
        self.sorted = true;
        debug!(
            "Sorting {} pairs took {:?}",
            self.kvs.len(),
            sort_start.elapsed()
        );
        if log_enabled!(Level::Trace) {
            trace!(
                "Sorted key digests: [{}]",
                self.kvs.iter().map(|kv| to_hex(&kv.key)).join(", ")
            );
        }
    }

    /// Root of the tree over the sorted pairs.
    pub fn hash(&mut self) -> Vec<u8> {
        self.sort();
        SimpleTree::<Method>::root_of(&self.kvs)
    }

    /// A copy of the sorted pairs. These hold the hashed key and value.
    pub fn kv_pairs(&mut self) -> Vec<KvPair> {
        self.sort();
        self.kvs.clone()
    }
}

impl<Method, K, V> FromIterator<(K, V)> for SimpleMap<Method>
where
    Method: HashMethod,
    K: AsRef<str>,
    V: Hasher<Method>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key.as_ref(), &value);
        }
        map
    }
}
