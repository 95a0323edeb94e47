use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use nohash_hasher::BuildNoHashHasher;

/// Unbounded set backed by an integer-to-presence map.
///
/// The map hasher is [`nohash`]'s identity hasher, since the keys are
/// already integers. Iteration order is unspecified.
#[derive(Clone, Debug, Default)]
pub struct HashSet {
    data: HashMap<u32, (), BuildNoHashHasher<u32>>,
}

impl HashSet {
    /// Creates an empty set. `max` only sizes the initial allocation;
    /// any `u32` can be inserted.
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self {
            data: HashMap::with_capacity_and_hasher(
                max as usize + 1,
                BuildNoHashHasher::default(),
            ),
        }
    }

    /// Inserts `value`; inserting a present value is a no-op.
    pub fn add(&mut self, value: u32) -> &mut Self {
        self.data.insert(value, ());
        self
    }

    /// Deletes `value`; removing an absent value is a no-op.
    pub fn remove(&mut self, value: u32) -> &mut Self {
        self.data.remove(&value);
        self
    }

    /// Whether `value` is a member.
    pub fn contains(&self, value: u32) -> bool {
        self.data.contains_key(&value)
    }

    /// Whether every value yielded by `values` is a member; vacuously
    /// true for an empty iterator.
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = u32>,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Empties the set.
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    /// Iterates the members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.data.keys().copied()
    }

    /// Whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.data.keys().all(|v| other.data.contains_key(v))
    }

    /// Whether every member of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Members of either operand.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::new((self.len() + other.len()) as u32);
        result.extend(self.iter().chain(other.iter()));
        result
    }

    /// Members common to both operands; walks the smaller map and
    /// probes the larger.
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut result = Self::new(small.len() as u32);
        for v in small.iter() {
            if large.contains(v) {
                result.add(v);
            }
        }
        result
    }

    /// Members of `self` absent from `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::new(self.len() as u32);
        for v in self.iter() {
            if !other.contains(v) {
                result.add(v);
            }
        }
        result
    }

    /// Members of exactly one operand, composed from the two
    /// one-sided differences.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }
}

impl PartialEq for HashSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}
impl Eq for HashSet {}

impl Display for HashSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Set{{{}}}", self.iter().format(", "))
    }
}

impl Extend<u32> for HashSet {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a u32> for HashSet {
    fn extend<T: IntoIterator<Item = &'a u32>>(&mut self, iter: T) {
        for value in iter {
            self.add(*value);
        }
    }
}

impl FromIterator<u32> for HashSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}
