#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod bit_set;
mod bool_set;
mod hash_set;
mod sparse_set;

pub use bit_set::BitSet;
pub use bool_set::BoolSet;
pub use hash_set::HashSet;
pub use sparse_set::SparseSet;
