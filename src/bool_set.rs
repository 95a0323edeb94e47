use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

/// Fixed-universe set backed by one `bool` per representable value,
/// plus a running member count.
///
/// The baseline array representation: membership and update are a
/// single slice index, iteration scans the whole universe in
/// ascending order.
#[derive(Clone, Debug)]
pub struct BoolSet {
    data: Vec<bool>,
    count: usize,
}

impl BoolSet {
    /// Creates an empty set over the universe `0..=max`.
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self {
            data: vec![false; max as usize + 1],
            count: 0,
        }
    }

    /// Inserts `value`; inserting a present value is a no-op.
    ///
    /// # Panics
    ///
    /// If `value` is outside the universe declared at construction.
    pub fn add(&mut self, value: u32) -> &mut Self {
        self.check(value);
        if !self.data[value as usize] {
            self.data[value as usize] = true;
            self.count += 1;
        }
        self
    }

    /// Deletes `value`; removing an absent value is a no-op.
    ///
    /// # Panics
    ///
    /// If `value` is outside the universe declared at construction.
    pub fn remove(&mut self, value: u32) -> &mut Self {
        self.check(value);
        if self.data[value as usize] {
            self.data[value as usize] = false;
            self.count -= 1;
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
        self.data[value as usize]
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
        self.count
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Empties the set, keeping the backing allocation.
    pub fn clear(&mut self) -> &mut Self {
        self.data.fill(false);
        self.count = 0;
        self
    }

    /// Iterates the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(v, &present)| present.then_some(v as u32))
    }

    /// Whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|v| other.member(v))
    }

    /// Whether every member of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Members of either operand, as a fresh set spanning the larger
    /// of the two universes.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::new(self.merged_max(other));
        for v in self.iter().chain(other.iter()) {
            result.add(v);
        }
        result
    }

    /// Members common to both operands; scans whichever operand has
    /// the shorter backing slice and probes the other.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::new(self.merged_max(other));
        let (small, large) = if self.data.len() < other.data.len() {
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

    /// Members of `self` absent from `other`, over `self`'s universe.
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::new((self.data.len() - 1) as u32);
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

    // bounds-safe membership, for probes coming from another universe
    fn member(&self, value: u32) -> bool {
        self.data.get(value as usize).copied().unwrap_or(false)
    }

    fn merged_max(&self, other: &Self) -> u32 {
        (self.data.len().max(other.data.len()) - 1) as u32
    }

    fn check(&self, value: u32) {
        assert!(
            (value as usize) < self.data.len(),
            "{value} is outside the set universe 0..={}",
            self.data.len() - 1
        );
    }
}

impl PartialEq for BoolSet {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.is_subset(other)
    }
}
impl Eq for BoolSet {}

impl Display for BoolSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Set{{{}}}", self.iter().format(", "))
    }
}

impl Extend<u32> for BoolSet {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a u32> for BoolSet {
    fn extend<T: IntoIterator<Item = &'a u32>>(&mut self, iter: T) {
        for value in iter {
            self.add(*value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn count_tracks_state_transitions_only() {
        let mut set = BoolSet::new(100);
        set.add(1).add(2).add(5).add(2);
        assert_eq!(set.len(), 3);
        set.remove(2).remove(2).remove(50);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn iteration_is_ascending() {
        let mut set = BoolSet::new(100);
        set.add(99).add(1).add(5);
        assert_eq!(set.iter().collect::<Vec<_>>(), [1, 5, 99]);
        assert_eq!(set.to_string(), "Set{1, 5, 99}");
    }

    #[test]
    fn clear_keeps_the_allocation() {
        let mut set = BoolSet::new(100);
        set.add(1).add(2).add(3).clear();
        assert_eq!(set.len(), 0);
        assert!(!set.contains_all([1, 2, 3]));
        assert_eq!(set.data.len(), 101);
    }

    #[test]
    #[should_panic(expected = "outside the set universe")]
    fn adding_past_the_universe_panics() {
        BoolSet::new(100).add(101);
    }

    #[test]
    #[should_panic(expected = "outside the set universe")]
    fn probing_past_the_universe_panics() {
        BoolSet::new(100).contains(101);
    }

    #[test]
    fn equality_ignores_universe_size() {
        let mut a = BoolSet::new(10);
        let mut b = BoolSet::new(1000);
        a.add(1).add(2);
        b.add(2).add(1);
        assert_eq!(a, b);
        b.add(900);
        assert_ne!(a, b);
    }

    #[test]
    fn algebra_spans_both_universes() {
        let mut a = BoolSet::new(10);
        let mut b = BoolSet::new(99);
        a.add(1).add(2);
        b.add(2).add(99);
        let u = a.union(&b);
        assert!(u.contains_all([1, 2, 99]));
        assert_eq!(u.len(), 3);
        assert_eq!(a.intersection(&b), *BoolSet::new(99).add(2));
        assert_eq!(a.difference(&b), *BoolSet::new(10).add(1));
        assert_eq!(b.difference(&a), *BoolSet::new(99).add(99));
    }
}
