pub mod hash;
pub mod hasher;
pub mod map;
pub mod options;
pub mod tree;
