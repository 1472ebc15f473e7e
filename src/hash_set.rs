use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::fnv::FnvBuildHasher;
use crate::hash_table::ConfigError;
use crate::hash_table::HashTable;
use crate::hash_table::InsertError;

/// A hash set implemented over the linear-probing [`HashTable`].
///
/// `HashSet<T, S>` stores values implementing `Hash + Eq`, hashed by the
/// configurable builder `S` (the crate's deterministic [`FnvBuildHasher`]
/// by default).
///
/// # Examples
///
/// ```rust
/// use shift_hash::HashSet;
///
/// let mut set: HashSet<_> = HashSet::new();
/// assert_eq!(set.insert("a"), Ok(true));
/// assert_eq!(set.insert("a"), Ok(false));
///
/// assert!(set.contains(&"a"));
/// assert!(set.remove(&"a"));
/// assert!(set.is_empty());
/// ```
#[derive(Clone)]
pub struct HashSet<T, S = FnvBuildHasher> {
    table: HashTable<T>,
    hash_builder: S,
}

impl<T, S> Debug for HashSet<T, S>
where
    T: Debug + Hash + Eq,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty set with the given hasher builder and the default
    /// capacity and load factor.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty set with the given capacity, load-factor threshold,
    /// and hasher builder.
    ///
    /// Fails with [`ConfigError`] if the capacity is zero or the load factor
    /// lies outside `(0, 1]`.
    pub fn with_capacity_and_load_factor_and_hasher(
        capacity: usize,
        load_factor: f64,
        hash_builder: S,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            table: HashTable::with_capacity_and_load_factor(capacity, load_factor)?,
            hash_builder,
        })
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current number of slots.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes all values, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Adds a value to the set.
    ///
    /// Returns `Ok(true)` if the value was not already present. If an equal
    /// value was present it is replaced and `Ok(false)` is returned. Growth
    /// is the only fallible path; on error the set is unchanged.
    pub fn insert(&mut self, value: T) -> Result<bool, InsertError> {
        let hash = self.hash_builder.hash_one(&value);
        let replaced = self.table.insert(hash, value, |a, b| a == b)?;
        Ok(replaced.is_none())
    }

    /// Returns `true` if the set contains the value.
    pub fn contains(&self, value: &T) -> bool {
        let hash = self.hash_builder.hash_one(value);
        self.table.find(hash, |stored| stored == value).is_some()
    }

    /// Removes a value from the set; returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to the given one.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let hash = self.hash_builder.hash_one(value);
        self.table.remove(hash, |stored| stored == value)
    }

    /// Returns an iterator over the values in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty set with the default capacity, load factor, and
    /// hasher builder.
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates an empty set with the given capacity and load-factor
    /// threshold, using the default hasher builder.
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Result<Self, ConfigError> {
        Self::with_capacity_and_load_factor_and_hasher(capacity, load_factor, S::default())
    }
}

impl<T, S> Default for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the values of a `HashSet`.
pub struct Iter<'a, T> {
    inner: crate::hash_table::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
