#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod fnv;

/// A hash map over the linear-probing table.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

/// A hash set over the linear-probing table.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a standard set interface with configurable hashers.
pub mod hash_set;

pub mod hash_table;

pub use fnv::FnvBuildHasher;
pub use fnv::FnvHasher;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::ConfigError;
pub use hash_table::HashTable;
pub use hash_table::InsertError;
