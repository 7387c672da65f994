use core::fmt;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::chain_table::ChainTable;
use crate::chain_table::TableDump;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Hasher builder used by [`ChainedHashTable`].
        ///
        /// Deterministic: the same value hashes to the same bucket on
        /// every run, which keeps dumps and growth behavior reproducible.
        type DefaultHashBuilder = foldhash::fast::FixedState;
    } else {
        /// Hasher builder used by [`ChainedHashTable`].
        type DefaultHashBuilder = std::collections::hash_map::RandomState;
    }
}

/// A separately chained hash table for values that hash and compare for
/// equality.
///
/// `ChainedHashTable<T>` wraps the raw [`ChainTable`] core and supplies
/// the hashing: values are hashed with a crate-chosen builder (`foldhash`
/// by default), so callers only provide values. There is deliberately no
/// way to inject a hasher; use [`ChainTable`] directly if you need control
/// over bucket placement.
///
/// The table stores a multiset: inserting an equal value twice keeps two
/// nodes, and [`contains`](ChainedHashTable::contains) reports presence,
/// not multiplicity. There is no removal and no iteration.
///
/// # Performance Characteristics
///
/// - **Insert**: O(1) amortized; a growth pass is O(n) but capacity
///   doubles each time.
/// - **Lookup**: O(chain length) at the target bucket.
///
/// # Examples
///
/// ```rust
/// # #[cfg(any(feature = "std", feature = "foldhash"))]
/// # {
/// use chain_hash::ChainedHashTable;
///
/// let mut table: ChainedHashTable<&str> = ChainedHashTable::new();
/// table.insert("alpha");
/// table.insert("beta");
/// assert!(table.contains(&"alpha"));
/// assert!(!table.contains(&"gamma"));
/// # }
/// ```
#[derive(Clone)]
pub struct ChainedHashTable<T> {
    table: ChainTable<T>,
    hash_builder: DefaultHashBuilder,
}

impl<T> ChainedHashTable<T>
where
    T: Hash + Eq,
{
    /// Creates a table with the default bucket count (4).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashTable;
    ///
    /// let table: ChainedHashTable<i32> = ChainedHashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 4);
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::with_bucket_count(0)
    }

    /// Creates a table with `count` buckets; zero falls back to the
    /// default (4).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashTable;
    ///
    /// let table: ChainedHashTable<i32> = ChainedHashTable::with_bucket_count(32);
    /// assert_eq!(table.bucket_count(), 32);
    /// # }
    /// ```
    pub fn with_bucket_count(count: usize) -> Self {
        ChainedHashTable {
            table: ChainTable::with_bucket_count(count),
            hash_builder: DefaultHashBuilder::default(),
        }
    }

    /// Returns the number of values stored in the table, counting
    /// duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashTable;
    ///
    /// let mut table: ChainedHashTable<i32> = ChainedHashTable::new();
    /// table.insert(1);
    /// table.insert(1);
    /// assert_eq!(table.len(), 2);
    /// # }
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current length of the bucket array.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Returns the number of buckets holding at least one value.
    pub fn occupied_buckets(&self) -> usize {
        self.table.occupied_buckets()
    }

    /// Returns the current load factor: occupied buckets over bucket
    /// count.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Adds a value to the table.
    ///
    /// Never deduplicates and never fails: an equal value already present
    /// simply gains a second node in its chain. Triggers a doubling
    /// rehash when the occupancy left by previous inserts is at or above
    /// 0.75 of the bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashTable;
    ///
    /// let mut table: ChainedHashTable<i32> = ChainedHashTable::new();
    /// table.insert(37);
    /// table.insert(37);
    /// assert_eq!(table.len(), 2);
    /// assert!(table.contains(&37));
    /// # }
    /// ```
    pub fn insert(&mut self, value: T) {
        let hash = self.hash_builder.hash_one(&value);
        self.table.insert(hash, value);
    }

    /// Returns `true` if the table contains a value equal to `value`.
    ///
    /// Repeated calls have no side effects and cost O(chain length) at
    /// the value's bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashTable;
    ///
    /// let mut table: ChainedHashTable<i32> = ChainedHashTable::new();
    /// table.insert(1);
    /// assert!(table.contains(&1));
    /// assert!(!table.contains(&2));
    /// # }
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let hash = self.hash_builder.hash_one(value);
        self.table.find(hash, |v| v == value).is_some()
    }

    /// Returns an adapter that formats the bucket array for human
    /// inspection; see [`ChainTable::display`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::ChainedHashTable;
    ///
    /// let mut table: ChainedHashTable<i32> = ChainedHashTable::new();
    /// table.insert(7);
    /// let dump = table.display().to_string();
    /// assert!(dump.contains("1 nodes"));
    /// # }
    /// ```
    pub fn display(&self) -> TableDump<'_, T> {
        self.table.display()
    }
}

impl<T> Default for ChainedHashTable<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for ChainedHashTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("bucket_count", &self.table.bucket_count())
            .field("occupied_buckets", &self.table.occupied_buckets())
            .field("len", &self.table.len())
            .field("load_factor", &self.table.load_factor())
            .finish_non_exhaustive()
    }
}
