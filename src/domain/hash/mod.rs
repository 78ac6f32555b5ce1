pub mod sha256;

/// Digest returned when nothing is committed.
pub const EMPTY_DIGEST: Vec<u8> = Vec::new();

/// A fixed cryptographic hash function used by the tree and the map.
pub trait HashMethod {
    /// Width of every digest this method produces, in bytes.
    const SIZE: usize;

    /// Hash raw content (leaf data, map keys).
    fn hash_leaf(data: &[u8]) -> Vec<u8>;

    /// Hash two child nodes together: `H(left || right)`, no separators.
    fn hash_nodes(left: &[u8], right: &[u8]) -> Vec<u8>;
}

/// Render a digest as `0x`-prefixed lowercase hex.
pub fn to_hex(digest: &[u8]) -> String {
    format!("0x{}", hex::encode(digest))
}
