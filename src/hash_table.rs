//! The core open-addressing table.
//!
//! `HashTable<T>` stores entries in a single flat slot array and resolves
//! collisions by linear probing: an entry's 64-bit digest, reduced modulo the
//! capacity, gives its *home index*, and lookups scan forward with wraparound
//! from there. Removal compacts the probe chain behind the vacated slot by
//! shifting later chain members backward, so the table never accumulates
//! tombstones and probe lengths do not degrade over the table's lifetime.
//!
//! Like the standard library's `hash_table`-level APIs, this type does not
//! hash for you: every operation takes the entry's digest and an equality
//! predicate. The typed wrappers in [`hash_map`](crate::hash_map) and
//! [`hash_set`](crate::hash_set) layer a [`BuildHasher`](core::hash::BuildHasher)
//! on top.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;
use core::mem;

/// Capacity used by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// Load-factor threshold used by [`HashTable::new`].
pub const DEFAULT_LOAD_FACTOR: f64 = 0.9;

/// Rejected construction parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The requested capacity was zero. Probing requires at least one slot.
    ZeroCapacity,
    /// The requested load factor was outside `(0, 1]`.
    LoadFactorOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "capacity must be non-zero"),
            ConfigError::LoadFactorOutOfRange(load_factor) => {
                write!(f, "load factor {load_factor} is outside (0, 1]")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// A failed insertion. The table is left in its prior valid state.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertError {
    /// The grown slot array could not be allocated.
    AllocationFailure(TryReserveError),
    /// Doubling the capacity would overflow `usize`.
    CapacityOverflow,
}

impl From<TryReserveError> for InsertError {
    fn from(err: TryReserveError) -> Self {
        InsertError::AllocationFailure(err)
    }
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::AllocationFailure(_) => {
                write!(f, "failed to allocate the grown slot array")
            }
            InsertError::CapacityOverflow => write!(f, "doubled capacity overflows usize"),
        }
    }
}

impl core::error::Error for InsertError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            InsertError::AllocationFailure(err) => Some(err),
            InsertError::CapacityOverflow => None,
        }
    }
}

/// A single cell of the slot array.
///
/// The stored digest is capacity-independent; an occupied slot's home index
/// is `hash % capacity`, recomputable at any capacity without touching the
/// entry's key. Chain restoration and resizing both rely on this.
#[derive(Clone)]
enum Slot<T> {
    Empty,
    Occupied { hash: u64, entry: T },
}

/// An open-addressing hash table with linear probing and backward-shift
/// deletion.
///
/// `HashTable<T>` stores entries of type `T` and requires the caller to
/// provide both the digest and an equality predicate for each operation.
///
/// # Invariants
///
/// - At most one slot matches a given predicate (key uniqueness is the
///   caller's contract: a digest/predicate pair must identify one entry).
/// - Every occupied slot is reachable from its home index through a gap-free
///   run of occupied slots; removal restores this by compaction.
/// - `len < capacity` always holds (growth runs before the table can fill),
///   so probing terminates at an empty slot.
///
/// # Example
///
/// ```rust
/// use shift_hash::hash_table::HashTable;
///
/// let mut table = HashTable::new();
/// let digest = 0xFEED_u64;
///
/// table.insert(digest, ("answer", 42), |a, b| a.0 == b.0).unwrap();
/// assert_eq!(
///     table.find(digest, |(k, _)| *k == "answer"),
///     Some(&("answer", 42))
/// );
///
/// let removed = table.remove(digest, |(k, _)| *k == "answer");
/// assert_eq!(removed, Some(("answer", 42)));
/// assert!(table.is_empty());
/// ```
#[derive(Clone)]
pub struct HashTable<T> {
    slots: Vec<Slot<T>>,
    len: usize,
    load_factor: f64,
}

impl<T> Debug for HashTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.len)
            .field("capacity", &self.slots.len())
            .field("load_factor", &self.load_factor)
            .finish()
    }
}

impl<T> Default for HashTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HashTable<T> {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots and a load
    /// factor of [`DEFAULT_LOAD_FACTOR`].
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(DEFAULT_CAPACITY);
        slots.resize_with(DEFAULT_CAPACITY, || Slot::Empty);
        HashTable {
            slots,
            len: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Creates an empty table with the given capacity and load-factor
    /// threshold.
    ///
    /// The capacity must be non-zero and the load factor must lie in
    /// `(0, 1]`. Both are fixed for the table's lifetime; only growth
    /// changes the capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shift_hash::hash_table::ConfigError;
    /// use shift_hash::hash_table::HashTable;
    ///
    /// let table: HashTable<u32> = HashTable::with_capacity_and_load_factor(8, 0.75).unwrap();
    /// assert_eq!(table.capacity(), 8);
    ///
    /// let err = HashTable::<u32>::with_capacity_and_load_factor(0, 0.75);
    /// assert_eq!(err.unwrap_err(), ConfigError::ZeroCapacity);
    /// ```
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(ConfigError::LoadFactorOutOfRange(load_factor));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);
        Ok(HashTable {
            slots,
            len: 0,
            load_factor,
        })
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the load-factor threshold the table grows at.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    /// Inserts an entry, replacing and returning any entry the predicate
    /// already matches.
    ///
    /// If the entry is new and storing it would push the occupancy to or
    /// past the load-factor threshold, the table doubles its capacity and
    /// rehouses every entry before the write. Growth is the only fallible
    /// path; on error the table is unchanged.
    ///
    /// The predicate receives a stored entry and the entry being inserted,
    /// and must hold exactly for entries with equal keys; `hash` must equal
    /// the digest supplied for those entries previously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shift_hash::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// let digest = 7_u64;
    /// let same_key = |a: &(i32, &str), b: &(i32, &str)| a.0 == b.0;
    ///
    /// assert_eq!(table.insert(digest, (7, "first"), same_key), Ok(None));
    /// assert_eq!(
    ///     table.insert(digest, (7, "second"), same_key),
    ///     Ok(Some((7, "first")))
    /// );
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(
        &mut self,
        hash: u64,
        entry: T,
        eq: impl Fn(&T, &T) -> bool,
    ) -> Result<Option<T>, InsertError> {
        let index = self.locate(hash, |existing| eq(existing, &entry));
        if let Slot::Occupied { entry: existing, .. } = &mut self.slots[index] {
            return Ok(Some(mem::replace(existing, entry)));
        }

        // New key: grow before writing so at least one slot stays empty.
        // The pre-grow index is invalid after rehousing.
        let index = if self.at_threshold() {
            self.grow()?;
            self.locate(hash, |existing| eq(existing, &entry))
        } else {
            index
        };

        self.slots[index] = Slot::Occupied { hash, entry };
        self.len += 1;
        Ok(None)
    }

    /// Returns a reference to the entry matching the digest and predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shift_hash::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, "one", |a, b| a == b).unwrap();
    ///
    /// assert_eq!(table.find(1, |e| *e == "one"), Some(&"one"));
    /// assert_eq!(table.find(2, |e| *e == "two"), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&T) -> bool) -> Option<&T> {
        match &self.slots[self.locate(hash, &eq)] {
            Slot::Occupied { entry, .. } => Some(entry),
            Slot::Empty => None,
        }
    }

    /// Returns a mutable reference to the entry matching the digest and
    /// predicate.
    ///
    /// The returned reference must not be used to change the parts of the
    /// entry that feed its digest or equality; doing so strands the entry in
    /// a slot its probe sequence no longer reaches.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&T) -> bool) -> Option<&mut T> {
        let index = self.locate(hash, &eq);
        match &mut self.slots[index] {
            Slot::Occupied { entry, .. } => Some(entry),
            Slot::Empty => None,
        }
    }

    /// Removes and returns the entry matching the digest and predicate.
    ///
    /// Removal is tombstone-free: the probe chain following the vacated slot
    /// is compacted in place, leaving the table exactly as if the entry had
    /// never been inserted. Removing an absent entry is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shift_hash::hash_table::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(9, (9, 'n'), |a, b| a.0 == b.0).unwrap();
    ///
    /// assert_eq!(table.remove(9, |(k, _)| *k == 9), Some((9, 'n')));
    /// assert_eq!(table.remove(9, |(k, _)| *k == 9), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&T) -> bool) -> Option<T> {
        let index = self.locate(hash, &eq);
        match mem::replace(&mut self.slots[index], Slot::Empty) {
            Slot::Empty => None,
            Slot::Occupied { entry, .. } => {
                self.len -= 1;
                self.restore_chain(index);
                Some(entry)
            }
        }
    }

    /// Returns an iterator over the entries in slot order.
    ///
    /// Each call produces a fresh iterator. The borrow checker prevents
    /// structural mutation while one is live.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// Finds the slot for a digest: the first slot, scanning forward with
    /// wraparound from the home index, that is either empty or matches the
    /// predicate.
    ///
    /// Terminates because `len < capacity` guarantees an empty slot.
    fn locate<F: Fn(&T) -> bool>(&self, hash: u64, eq: F) -> usize {
        let capacity = self.slots.len();
        let mut index = (hash % capacity as u64) as usize;
        loop {
            match &self.slots[index] {
                Slot::Empty => return index,
                Slot::Occupied { entry, .. } if eq(entry) => return index,
                Slot::Occupied { .. } => index = (index + 1) % capacity,
            }
        }
    }

    /// Whether storing one more entry reaches the load-factor threshold.
    fn at_threshold(&self) -> bool {
        (self.len + 1) as f64 >= self.load_factor * self.slots.len() as f64
    }

    /// Doubles the capacity and rehouses every entry against the new slot
    /// array.
    ///
    /// The new array is fully built before it replaces the old one, so a
    /// failed reservation leaves the table untouched. `len` is unchanged.
    fn grow(&mut self) -> Result<(), InsertError> {
        let new_capacity = self
            .slots
            .len()
            .checked_mul(2)
            .ok_or(InsertError::CapacityOverflow)?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(new_capacity)?;
        slots.resize_with(new_capacity, || Slot::Empty);

        let old = mem::replace(&mut self.slots, slots);
        for slot in old {
            if let Slot::Occupied { hash, entry } = slot {
                // Keys are unique, so the probe can only stop at an empty slot.
                let index = self.locate(hash, |_| false);
                self.slots[index] = Slot::Occupied { hash, entry };
            }
        }
        Ok(())
    }

    /// Re-establishes gap-free probe chains after the slot at `gap` was
    /// vacated.
    ///
    /// Scans forward from `gap + 1`. An occupied slot moves back into the
    /// gap when the gap lies on the probe path from the entry's home index
    /// to its current slot; the vacated slot becomes the new gap and the
    /// scan continues. An empty slot ends the scan: the chain invariant
    /// guarantees no live chain extends past it.
    fn restore_chain(&mut self, mut gap: usize) {
        let capacity = self.slots.len();
        let mut index = (gap + 1) % capacity;
        loop {
            let home = match &self.slots[index] {
                Slot::Empty => return,
                Slot::Occupied { hash, .. } => (hash % capacity as u64) as usize,
            };
            if on_probe_path(home, gap, index, capacity) {
                self.slots[gap] = mem::replace(&mut self.slots[index], Slot::Empty);
                gap = index;
            }
            index = (index + 1) % capacity;
        }
    }
}

/// Whether `gap` lies on the (circular, forward) probe path from `home` to
/// `index`.
///
/// An entry at `index` with home `home` may move back to `gap` exactly when
/// this holds: the move shortens its probe distance without placing it
/// before its own home in probe order.
fn on_probe_path(home: usize, gap: usize, index: usize, capacity: usize) -> bool {
    let gap_distance = (gap + capacity - home) % capacity;
    let index_distance = (index + capacity - home) % capacity;
    gap_distance < index_distance
}

/// An iterator over a table's entries in slot order.
pub struct Iter<'a, T> {
    slots: core::slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.slots.next()? {
                Slot::Occupied { entry, .. } => return Some(entry),
                Slot::Empty => {}
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len()))
    }
}

impl<'a, T> IntoIterator for &'a HashTable<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    type Pair = (u64, i32);

    /// Inserts a pair keyed and hashed by its first element.
    fn insert_pair(table: &mut HashTable<Pair>, hash: u64, key: u64, value: i32) {
        table
            .insert(hash, (key, value), |a, b| a.0 == b.0)
            .expect("insert should not fail");
    }

    fn slot_state(table: &HashTable<Pair>, index: usize) -> Option<Pair> {
        match &table.slots[index] {
            Slot::Occupied { entry, .. } => Some(*entry),
            Slot::Empty => None,
        }
    }

    #[test]
    fn defaults() {
        let table: HashTable<Pair> = HashTable::new();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.load_factor(), DEFAULT_LOAD_FACTOR);
        assert!(table.is_empty());
    }

    #[test]
    fn rejects_zero_capacity() {
        let result = HashTable::<Pair>::with_capacity_and_load_factor(0, 0.9);
        assert_eq!(result.unwrap_err(), ConfigError::ZeroCapacity);
    }

    #[test]
    fn rejects_out_of_range_load_factor() {
        for load_factor in [0.0, -0.5, 1.5, f64::NAN] {
            let result = HashTable::<Pair>::with_capacity_and_load_factor(8, load_factor);
            assert!(
                matches!(result, Err(ConfigError::LoadFactorOutOfRange(_))),
                "load factor {load_factor} should be rejected"
            );
        }
        // The boundary itself is allowed.
        assert!(HashTable::<Pair>::with_capacity_and_load_factor(8, 1.0).is_ok());
    }

    #[test]
    fn find_on_empty_table() {
        let table: HashTable<Pair> = HashTable::new();
        assert_eq!(table.find(12345, |(k, _)| *k == 12345), None);
    }

    #[test]
    fn insert_find_round_trip() {
        let mut table = HashTable::new();
        for k in 0..64u64 {
            insert_pair(&mut table, k.wrapping_mul(0x9E3779B9), k, k as i32 * 2);
        }
        assert_eq!(table.len(), 64);
        for k in 0..64u64 {
            let hash = k.wrapping_mul(0x9E3779B9);
            assert_eq!(
                table.find(hash, |(key, _)| *key == k),
                Some(&(k, k as i32 * 2))
            );
        }
    }

    #[test]
    fn insert_existing_replaces_in_place() {
        let mut table = HashTable::new();
        let replaced = table.insert(3, (3u64, 10), |a, b| a.0 == b.0).unwrap();
        assert_eq!(replaced, None);

        let replaced = table.insert(3, (3u64, 20), |a, b| a.0 == b.0).unwrap();
        assert_eq!(replaced, Some((3, 10)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.find(3, |(k, _)| *k == 3), Some(&(3, 20)));
    }

    #[test]
    fn colliding_digests_probe_forward() {
        // Digests 5 and 13 share home index 5 under capacity 8.
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.9).unwrap();
        insert_pair(&mut table, 5, 100, 1);
        insert_pair(&mut table, 13, 200, 2);

        assert_eq!(slot_state(&table, 5), Some((100, 1)));
        assert_eq!(slot_state(&table, 6), Some((200, 2)));
        assert_eq!(table.find(5, |(k, _)| *k == 100), Some(&(100, 1)));
        assert_eq!(table.find(13, |(k, _)| *k == 200), Some(&(200, 2)));
    }

    #[test]
    fn removal_shifts_chain_backward() {
        // Three digests homed at index 5 occupy slots 5, 6, 7.
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.9).unwrap();
        insert_pair(&mut table, 5, 100, 1);
        insert_pair(&mut table, 13, 200, 2);
        insert_pair(&mut table, 21, 300, 3);
        assert_eq!(slot_state(&table, 7), Some((300, 3)));

        // Deleting the middle of the chain pulls the tail back one slot.
        assert_eq!(table.remove(13, |(k, _)| *k == 200), Some((200, 2)));
        assert_eq!(slot_state(&table, 5), Some((100, 1)));
        assert_eq!(slot_state(&table, 6), Some((300, 3)));
        assert_eq!(slot_state(&table, 7), None);

        assert_eq!(table.find(5, |(k, _)| *k == 100), Some(&(100, 1)));
        assert_eq!(table.find(21, |(k, _)| *k == 300), Some(&(300, 3)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn removal_leaves_foreign_chain_alone() {
        // Homes 2 and 3, no collision. Deleting the first must not move the
        // second: its home lies after the gap in probe order.
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.9).unwrap();
        insert_pair(&mut table, 2, 100, 1);
        insert_pair(&mut table, 3, 200, 2);

        assert_eq!(table.remove(2, |(k, _)| *k == 100), Some((100, 1)));
        assert_eq!(slot_state(&table, 2), None);
        assert_eq!(slot_state(&table, 3), Some((200, 2)));
    }

    #[test]
    fn removal_restores_wrapped_chain() {
        // Digests 7 and 15 are homed at index 7; the second wraps to slot 0.
        // A third entry homed at 0 is pushed to slot 1.
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.9).unwrap();
        insert_pair(&mut table, 7, 100, 1);
        insert_pair(&mut table, 15, 200, 2);
        insert_pair(&mut table, 8, 300, 3);
        assert_eq!(slot_state(&table, 0), Some((200, 2)));
        assert_eq!(slot_state(&table, 1), Some((300, 3)));

        // Vacating slot 7 pulls the wrapped entry back across the boundary,
        // and the home-0 entry back into its own home.
        assert_eq!(table.remove(7, |(k, _)| *k == 100), Some((100, 1)));
        assert_eq!(slot_state(&table, 7), Some((200, 2)));
        assert_eq!(slot_state(&table, 0), Some((300, 3)));
        assert_eq!(slot_state(&table, 1), None);

        assert_eq!(table.find(15, |(k, _)| *k == 200), Some(&(200, 2)));
        assert_eq!(table.find(8, |(k, _)| *k == 300), Some(&(300, 3)));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.9).unwrap();
        insert_pair(&mut table, 1, 100, 1);

        assert_eq!(table.remove(2, |(k, _)| *k == 200), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn growth_triggers_at_threshold() {
        // Capacity 8 at load factor 0.75 doubles on the 6th distinct insert.
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.75).unwrap();
        for k in 0..5u64 {
            insert_pair(&mut table, k, k, k as i32);
        }
        assert_eq!(table.capacity(), 8);

        insert_pair(&mut table, 5, 5, 5);
        assert_eq!(table.capacity(), 16);
        assert_eq!(table.len(), 6);

        for k in 0..6u64 {
            assert_eq!(table.find(k, |(key, _)| *key == k), Some(&(k, k as i32)));
        }
    }

    #[test]
    fn overwrite_never_triggers_growth() {
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.75).unwrap();
        for k in 0..5u64 {
            insert_pair(&mut table, k, k, k as i32);
        }
        // Occupancy sits one below the threshold; replacing values must not
        // change that.
        for k in 0..5u64 {
            insert_pair(&mut table, k, k, -(k as i32));
        }
        assert_eq!(table.capacity(), 8);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn growth_recomputes_home_indexes() {
        // Digest 9 is homed at 1 under capacity 8 and at 9 under capacity 16.
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.75).unwrap();
        insert_pair(&mut table, 9, 100, 1);
        assert_eq!(slot_state(&table, 1), Some((100, 1)));

        for k in 0..5u64 {
            insert_pair(&mut table, k * 16 + 2, k, k as i32);
        }
        assert_eq!(table.capacity(), 16);
        assert_eq!(slot_state(&table, 9), Some((100, 1)));
        assert_eq!(table.find(9, |(k, _)| *k == 100), Some(&(100, 1)));
    }

    #[test]
    fn full_load_factor_keeps_an_empty_slot() {
        let mut table = HashTable::with_capacity_and_load_factor(2, 1.0).unwrap();
        for k in 0..32u64 {
            insert_pair(&mut table, k, k, k as i32);
            assert!(
                table.len() < table.capacity(),
                "an empty slot must survive every insert"
            );
        }
        for k in 0..32u64 {
            assert_eq!(table.find(k, |(key, _)| *key == k), Some(&(k, k as i32)));
        }
    }

    #[test]
    fn iterates_in_slot_order() {
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.9).unwrap();
        insert_pair(&mut table, 6, 100, 1);
        insert_pair(&mut table, 2, 200, 2);
        insert_pair(&mut table, 4, 300, 3);

        let entries: Vec<Pair> = table.iter().copied().collect();
        assert_eq!(entries, vec![(200, 2), (300, 3), (100, 1)]);

        let mut keys = Vec::new();
        for (k, _) in &table {
            keys.push(*k);
        }
        assert_eq!(keys, vec![200, 300, 100]);
    }

    #[test]
    fn iteration_matches_lookups() {
        let mut table = HashTable::new();
        for k in 0..200u64 {
            insert_pair(&mut table, k.wrapping_mul(0x517C_C1B7), k, k as i32);
        }
        for k in (0..200u64).step_by(3) {
            table.remove(k.wrapping_mul(0x517C_C1B7), |(key, _)| *key == k);
        }

        let mut seen: Vec<u64> = table.iter().map(|(k, _)| *k).collect();
        seen.sort_unstable();
        let expected: Vec<u64> = (0..200).filter(|k| k % 3 != 0).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.9).unwrap();
        insert_pair(&mut table, 1, 100, 1);
        insert_pair(&mut table, 2, 200, 2);

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 8);
        assert_eq!(table.find(1, |(k, _)| *k == 100), None);
    }

    #[test]
    fn clone_is_independent() {
        let mut table = HashTable::with_capacity_and_load_factor(8, 0.9).unwrap();
        insert_pair(&mut table, 1, 100, 1);

        let mut copy = table.clone();
        insert_pair(&mut copy, 2, 200, 2);

        assert_eq!(table.len(), 1);
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.find(1, |(k, _)| *k == 100), Some(&(100, 1)));
    }
}
