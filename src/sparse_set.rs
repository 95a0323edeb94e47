use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

/// Sparse/dense paired-array set over a fixed universe `0..=max`,
/// after Briggs & Torczon's "An Efficient Representation for Sparse
/// Sets" (1993).
///
/// Two parallel arrays back the set: `dense` holds the members packed
/// at the front, in the order they were last placed, and `sparse`
/// maps a value back to its slot in `dense`. Membership, insertion,
/// removal and clearing are all O(1) without hashing; the price is
/// one `u32` of auxiliary storage per representable value, allocated
/// up front.
///
/// `sparse` is never wiped. A slot for an absent value holds whatever
/// it last held, so membership is decided by the back-reference pair:
/// `sparse[v]` must point into the live prefix of `dense` *and*
/// `dense[sparse[v]]` must read back `v`. Stale entries failing
/// either half are ignored, which is what lets [`SparseSet::clear`]
/// run in O(1) instead of rewriting the whole sparse array.
#[derive(Clone, Debug)]
pub struct SparseSet {
    max: u32,
    dense: Vec<u32>,
    sparse: Vec<u32>,
}

impl SparseSet {
    /// Creates an empty set over the universe `0..=max`.
    ///
    /// Both backing arrays are allocated in full here; no later
    /// operation reallocates.
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self {
            max,
            dense: Vec::with_capacity(max as usize + 1),
            sparse: vec![0; max as usize + 1],
        }
    }

    /// Inserts `value`; inserting a present value is a no-op.
    ///
    /// # Panics
    ///
    /// If `value` is outside the universe declared at construction.
    pub fn add(&mut self, value: u32) -> &mut Self {
        self.check(value);
        if !self.member(value) {
            self.sparse[value as usize] = self.dense.len() as u32;
            self.dense.push(value);
        }
        self
    }

    /// Deletes `value`; removing an absent value is a no-op.
    ///
    /// The last-placed member is swapped into the vacated `dense`
    /// slot, so removal is O(1) but reorders the set.
    ///
    /// # Panics
    ///
    /// If `value` is outside the universe declared at construction.
    pub fn remove(&mut self, value: u32) -> &mut Self {
        self.check(value);
        if self.member(value) {
            let slot = self.sparse[value as usize];
            let last = self.dense[self.dense.len() - 1];
            // harmless self-overwrite when value is the last-placed member
            self.dense[slot as usize] = last;
            self.sparse[last as usize] = slot;
            self.dense.pop();
        }
        self
    }

    /// Whether `value` is a member.
    ///
    /// # Panics
    ///
    /// If `value` is outside the universe declared at construction.
    pub fn contains(&self, value: u32) -> bool {
        self.check(value);
        self.member(value)
    }

    /// Whether every value yielded by `values` is a member; vacuously
    /// true for an empty iterator.
    ///
    /// # Panics
    ///
    /// If any yielded value is outside the universe.
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = u32>,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Empties the set in O(1).
    ///
    /// Only the dense prefix is discarded; `sparse` keeps its stale
    /// contents for the membership cross-check to filter out.
    pub fn clear(&mut self) -> &mut Self {
        self.dense.clear();
        self
    }

    /// Iterates the members in the order they were last placed, an
    /// order removal is free to change.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.dense.iter().copied()
    }

    /// Whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.dense.iter().all(|&v| other.member(v))
    }

    /// Whether every member of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Members of either operand, as a fresh set spanning the larger
    /// of the two universes.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::new(self.max.max(other.max));
        for v in self.iter().chain(other.iter()) {
            result.add(v);
        }
        result
    }

    /// Members common to both operands; walks the smaller operand and
    /// probes the larger, bounding the cost by the smaller
    /// cardinality.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::new(self.max.max(other.max));
        let (small, large) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };
        for v in small.iter() {
            if large.member(v) {
                result.add(v);
            }
        }
        result
    }

    /// Members of `self` absent from `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::new(self.max.max(other.max));
        for v in self.iter() {
            if !other.member(v) {
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

    // Membership via the back-reference cross-check. Total over u32:
    // values beyond the universe are simply not members.
    fn member(&self, value: u32) -> bool {
        match self.sparse.get(value as usize) {
            Some(&slot) => self.dense.get(slot as usize) == Some(&value),
            None => false,
        }
    }

    fn check(&self, value: u32) {
        assert!(
            value <= self.max,
            "{value} is outside the set universe 0..={}",
            self.max
        );
    }
}

impl PartialEq for SparseSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}
impl Eq for SparseSet {}

impl Display for SparseSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Set{{{}}}", self.iter().format(", "))
    }
}

impl Extend<u32> for SparseSet {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a u32> for SparseSet {
    fn extend<T: IntoIterator<Item = &'a u32>>(&mut self, iter: T) {
        for value in iter {
            self.add(*value);
        }
    }
}
