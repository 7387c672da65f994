use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;

/// Bucket count used when no hint (or a zero hint) is given.
const DEFAULT_BUCKETS: usize = 4;

/// Occupancy ratio at which the bucket array doubles.
///
/// The ratio is occupied buckets over total buckets, not elements over
/// buckets: a single long chain counts once. 0.75 mirrors the classic
/// textbook threshold.
const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

struct Node<T> {
    /// Full hash of `value`, cached so growth never re-hashes.
    hash: u64,
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A hash table core that resolves collisions by separate chaining.
///
/// `ChainTable<T>` does no hashing of its own: every operation takes a
/// precomputed 64-bit hash, and lookups take an equality predicate. The
/// table maps a hash to a bucket as `hash % bucket_count` and keeps one
/// owned singly linked chain per bucket, prepending on insert.
///
/// Values are stored as a multiset. `insert` never deduplicates; callers
/// that want set semantics must check [`find`](ChainTable::find) before
/// inserting.
///
/// The bucket array doubles once the share of occupied buckets reaches
/// 0.75. The check runs against the occupancy as it stands *before* an
/// insert, so the insert that first reaches the threshold completes
/// without growing and the next one triggers the rehash. See
/// [`insert`](ChainTable::insert).
///
/// # Examples
///
/// ```rust
/// use chain_hash::ChainTable;
///
/// let mut table: ChainTable<&str> = ChainTable::new();
/// table.insert(7, "seven");
/// assert_eq!(table.find(7, |v| *v == "seven"), Some(&"seven"));
/// assert_eq!(table.find(7, |v| *v == "eight"), None);
/// ```
pub struct ChainTable<T> {
    buckets: Vec<Option<Box<Node<T>>>>,
    occupied: usize,
    len: usize,
    load_factor: f64,
}

impl<T> ChainTable<T> {
    /// Creates a table with the default bucket count (4).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainTable;
    ///
    /// let table: ChainTable<u32> = ChainTable::new();
    /// assert_eq!(table.bucket_count(), 4);
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKETS)
    }

    /// Creates a table with `count` buckets.
    ///
    /// A count of zero is normalized to the default (4); the table always
    /// has at least one bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainTable;
    ///
    /// let table: ChainTable<u32> = ChainTable::with_bucket_count(16);
    /// assert_eq!(table.bucket_count(), 16);
    ///
    /// let fallback: ChainTable<u32> = ChainTable::with_bucket_count(0);
    /// assert_eq!(fallback.bucket_count(), 4);
    /// ```
    pub fn with_bucket_count(count: usize) -> Self {
        let count = if count == 0 { DEFAULT_BUCKETS } else { count };
        let mut buckets = Vec::with_capacity(count);
        buckets.resize_with(count, || None);
        ChainTable {
            buckets,
            occupied: 0,
            len: 0,
            load_factor: 0.0,
        }
    }

    /// Returns the number of values stored across all chains.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current length of the bucket array.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of buckets holding at least one node.
    pub fn occupied_buckets(&self) -> usize {
        self.occupied
    }

    /// Returns the current load factor: occupied buckets over bucket count.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    fn bucket_index(hash: u64, bucket_count: usize) -> usize {
        (hash % bucket_count as u64) as usize
    }

    /// Inserts `value` under `hash`, prepending to the target bucket's
    /// chain.
    ///
    /// Duplicates are stored as separate nodes. Before touching the table
    /// the load factor is recomputed from the current occupancy and, at
    /// 0.75 or above, the bucket array doubles first. Growth is driven by
    /// the state the previous inserts left behind, never by the value
    /// being inserted on this call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainTable;
    ///
    /// let mut table: ChainTable<u32> = ChainTable::new();
    /// table.insert(1, 10);
    /// table.insert(1, 10);
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.occupied_buckets(), 1);
    /// ```
    pub fn insert(&mut self, hash: u64, value: T) {
        self.load_factor = self.occupied as f64 / self.buckets.len() as f64;
        if self.load_factor >= LOAD_FACTOR_THRESHOLD {
            self.grow();
        }

        let index = Self::bucket_index(hash, self.buckets.len());
        let head = &mut self.buckets[index];
        if head.is_none() {
            self.occupied += 1;
        }
        *head = Some(Box::new(Node {
            hash,
            value,
            next: head.take(),
        }));

        self.len += 1;
        self.load_factor = self.occupied as f64 / self.buckets.len() as f64;
    }

    /// Returns a reference to the first value in the chain for `hash` that
    /// satisfies `eq`, scanning head to tail.
    ///
    /// Cost is O(chain length) at the target bucket, not O(1) worst case;
    /// that is the accepted trade-off of chaining. The scan has no side
    /// effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainTable;
    ///
    /// let mut table: ChainTable<&str> = ChainTable::new();
    /// table.insert(3, "old");
    /// table.insert(3, "new");
    ///
    /// // Prepend order: the most recent insert is seen first.
    /// assert_eq!(table.find(3, |_| true), Some(&"new"));
    /// ```
    pub fn find(&self, hash: u64, mut eq: impl FnMut(&T) -> bool) -> Option<&T> {
        let index = Self::bucket_index(hash, self.buckets.len());
        let mut cursor = self.buckets[index].as_deref();
        while let Some(node) = cursor {
            if eq(&node.value) {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    /// Doubles the bucket array and redistributes every node.
    ///
    /// Old chains are walked head to tail and each node is prepended to
    /// its new bucket (`hash % new_count`), so relative order within a
    /// bucket is not preserved across growth. Occupancy is recounted from
    /// scratch against the new array.
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut new_buckets: Vec<Option<Box<Node<T>>>> = Vec::with_capacity(new_count);
        new_buckets.resize_with(new_count, || None);
        let mut new_occupied = 0;

        for head in &mut self.buckets {
            let mut cursor = head.take();
            while let Some(mut node) = cursor {
                cursor = node.next.take();
                let index = Self::bucket_index(node.hash, new_count);
                let slot = &mut new_buckets[index];
                if slot.is_none() {
                    new_occupied += 1;
                }
                node.next = slot.take();
                *slot = Some(node);
            }
        }

        self.buckets = new_buckets;
        self.occupied = new_occupied;
        self.load_factor = self.occupied as f64 / self.buckets.len() as f64;
    }

    /// Returns an adapter that formats the full table state for human
    /// inspection: an occupancy header followed by one line per bucket
    /// with its chain printed head to tail.
    ///
    /// The exact layout is not part of the table's contract and nothing in
    /// `insert`/`find` depends on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::ChainTable;
    ///
    /// let mut table: ChainTable<u32> = ChainTable::with_bucket_count(2);
    /// table.insert(0, 10);
    /// let dump = table.display().to_string();
    /// assert!(dump.contains("occupied 1/2 buckets"));
    /// ```
    pub fn display(&self) -> TableDump<'_, T> {
        TableDump { table: self }
    }
}

impl<T> Default for ChainTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ChainTable<T> {
    fn clone(&self) -> Self {
        let mut buckets: Vec<Option<Box<Node<T>>>> = Vec::with_capacity(self.buckets.len());
        buckets.resize_with(self.buckets.len(), || None);

        // Rebuild each chain back to front so the clone preserves
        // head-to-tail order without recursing.
        let mut stack: Vec<(u64, T)> = Vec::new();
        for (slot, head) in buckets.iter_mut().zip(&self.buckets) {
            stack.clear();
            let mut cursor = head.as_deref();
            while let Some(node) = cursor {
                stack.push((node.hash, node.value.clone()));
                cursor = node.next.as_deref();
            }
            while let Some((hash, value)) = stack.pop() {
                *slot = Some(Box::new(Node {
                    hash,
                    value,
                    next: slot.take(),
                }));
            }
        }

        ChainTable {
            buckets,
            occupied: self.occupied,
            len: self.len,
            load_factor: self.load_factor,
        }
    }
}

impl<T> Drop for ChainTable<T> {
    fn drop(&mut self) {
        // Unlink iteratively; a recursive Box drop would overflow the
        // stack on a sufficiently long chain.
        for head in &mut self.buckets {
            let mut cursor = head.take();
            while let Some(mut node) = cursor {
                cursor = node.next.take();
            }
        }
    }
}

impl<T> Debug for ChainTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainTable")
            .field("bucket_count", &self.buckets.len())
            .field("occupied_buckets", &self.occupied)
            .field("len", &self.len)
            .field("load_factor", &self.load_factor)
            .finish_non_exhaustive()
    }
}

/// Borrowing [`Display`](core::fmt::Display) adapter returned by
/// [`ChainTable::display`].
pub struct TableDump<'a, T> {
    table: &'a ChainTable<T>,
}

impl<T: Debug> fmt::Display for TableDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "occupied {}/{} buckets, {} nodes",
            self.table.occupied,
            self.table.buckets.len(),
            self.table.len
        )?;
        for (index, head) in self.table.buckets.iter().enumerate() {
            write!(f, "[{:2}]:", index)?;
            let mut cursor = head.as_deref();
            if cursor.is_none() {
                write!(f, " (empty)")?;
            }
            let mut first = true;
            while let Some(node) = cursor {
                if first {
                    write!(f, " {:?}", node.value)?;
                    first = false;
                } else {
                    write!(f, " -> {:?}", node.value)?;
                }
                cursor = node.next.as_deref();
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
