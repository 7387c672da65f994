#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod chain_table;

/// A chained hash table that hashes values itself.
///
/// This module provides `ChainedHashTable`, a wrapper over the raw
/// `ChainTable` that hashes values with a crate-chosen default hasher.
#[cfg(any(feature = "std", feature = "foldhash"))]
pub mod hash_table;

pub use chain_table::ChainTable;
pub use chain_table::TableDump;
#[cfg(any(feature = "std", feature = "foldhash"))]
pub use hash_table::ChainedHashTable;
