//! Basic unordered set with algebraic operations.
//!
//! A thin wrapper over a hash-keyed membership table. Elements are unique;
//! no iteration order is guaranteed. [`union`](BasicSet::union),
//! [`intersection`](BasicSet::intersection) and
//! [`difference`](BasicSet::difference) each build a new set and leave the
//! operands untouched.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::traits::SetOps;

/// Unordered collection of unique elements.
///
/// Equality is value-based and order-independent: two sets are equal iff
/// they have the same cardinality and every element of one is contained in
/// the other.
///
/// # Example
///
/// ```
/// use boundkit::set::BasicSet;
///
/// let a: BasicSet<i32> = [1, 2, 3].into_iter().collect();
/// let b: BasicSet<i32> = [3, 2, 1].into_iter().collect();
/// assert_eq!(a, b); // insertion order is irrelevant
///
/// let c: BasicSet<i32> = [2, 3, 4].into_iter().collect();
/// assert_eq!(a.intersection(&c), [2, 3].into_iter().collect());
/// ```
#[derive(Debug, Clone)]
pub struct BasicSet<T> {
    members: FxHashSet<T>,
}

impl<T: Eq + Hash> Default for BasicSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BasicSet<T>
where
    T: Eq + Hash,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            members: FxHashSet::default(),
        }
    }

    /// Creates an empty set with room for `capacity` elements before the
    /// table reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Adds `item`. Idempotent: a no-op if already present. Returns `true`
    /// if the set changed.
    pub fn insert(&mut self, item: T) -> bool {
        self.members.insert(item)
    }

    /// Removes `item`, returning whether an element was actually removed.
    pub fn remove(&mut self, item: &T) -> bool {
        self.members.remove(item)
    }

    /// Membership test.
    pub fn contains(&self, item: &T) -> bool {
        self.members.contains(item)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the elements in unspecified (hash-table native) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }
}

impl<T> BasicSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Returns a new set with the elements in either `self` or `other`.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        for item in self.iter().chain(other.iter()) {
            result.insert(item.clone());
        }
        result
    }

    /// Returns a new set with the elements in both `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for item in self.iter() {
            if other.contains(item) {
                result.insert(item.clone());
            }
        }
        result
    }

    /// Returns a new set with the elements of `self` not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for item in self.iter() {
            if !other.contains(item) {
                result.insert(item.clone());
            }
        }
        result
    }
}

impl<T> SetOps<T> for BasicSet<T>
where
    T: Eq + Hash + Clone,
{
    fn insert(&mut self, item: T) -> bool {
        BasicSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        BasicSet::remove(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        BasicSet::contains(self, item)
    }

    fn clear(&mut self) {
        BasicSet::clear(self)
    }

    fn len(&self) -> usize {
        BasicSet::len(self)
    }

    fn union(&self, other: &Self) -> Self {
        BasicSet::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        BasicSet::intersection(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        BasicSet::difference(self, other)
    }
}

/// Cardinality plus membership; order-independent.
impl<T> PartialEq for BasicSet<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<T> Eq for BasicSet<T> where T: Eq + Hash {}

impl<T> FromIterator<T> for BasicSet<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for BasicSet<T>
where
    T: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<T> IntoIterator for BasicSet<T> {
    type Item = T;
    type IntoIter = <FxHashSet<T> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BasicSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Renders as `"{a, b}"`: `", "`-separated, no space after `{`, elements in
/// unspecified order.
impl<T> fmt::Display for BasicSet<T>
where
    T: Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, member) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        f.write_str("}")
    }
}
