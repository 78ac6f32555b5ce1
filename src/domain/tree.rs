use log::debug;
use std::marker::PhantomData;
use std::time::Instant;

use super::hash::{
    sha256::{Sha256Method, TmHashMethod},
    HashMethod, EMPTY_DIGEST,
};
use super::hasher::Hasher;

/// Deterministic minimal-height Merkle tree over an ordered list of leaves.
///
/// When the leaf count is not a power of two some leaves sit one level
/// higher than others. Both halves are kept the same size except that the
/// left half takes the extra leaf:
///
/// ```text
///                 *
///               /   \
///             *       *
///            / \     / \
///           *   *   *   h6
///          / \ / \ / \
///         h0 h1 h2 h3 h4 h5
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleTree<Method: HashMethod> {
    method: PhantomData<Method>,
}

pub type SimpleTreeSha256 = SimpleTree<Sha256Method>;
pub type SimpleTreeTmHash = SimpleTree<TmHashMethod>;

impl<Method: HashMethod> SimpleTree<Method> {
    /// Root of the tree whose leaves are `items`, in the given order.
    pub fn root_of<H: Hasher<Method>>(items: &[H]) -> Vec<u8> {
        if items.is_empty() {
            return EMPTY_DIGEST;
        }

        let hash_start = Instant::now();
        let hashes: Vec<Vec<u8>> = items.iter().map(|item| item.hash()).collect();
        debug!(
            "Hashing {} leaves took {:?}",
            hashes.len(),
            hash_start.elapsed()
        );

        Self::root_of_hashes(&hashes)
    }

    /// Root of the tree built from raw leaf content, each hashed with `Method`.
    pub fn root_of_data<D: AsRef<[u8]>>(leaves: &[D]) -> Vec<u8> {
        let hashes: Vec<Vec<u8>> = leaves
            .iter()
            .map(|leaf| Method::hash_leaf(leaf.as_ref()))
            .collect();
        Self::root_of_hashes(&hashes)
    }

    /// Root of the tree whose leaf digests are already computed.
    pub fn root_of_hashes(hashes: &[Vec<u8>]) -> Vec<u8> {
        let fold_start = Instant::now();
        let root = Self::fold(hashes);
        debug!(
            "Folding {} hashes took {:?}",
            hashes.len(),
            fold_start.elapsed()
        );
        root
    }

    fn fold(hashes: &[Vec<u8>]) -> Vec<u8> {
        match hashes.len() {
            0 => EMPTY_DIGEST,
            1 => hashes[0].clone(),
            len => {
                let (left, right) = hashes.split_at(split_point(len));
                Method::hash_nodes(&Self::fold(left), &Self::fold(right))
            }
        }
    }
}

/// Number of leaves that go to the left subtree of a node covering `len` leaves.
pub fn split_point(len: usize) -> usize {
    len.div_ceil(2)
}
