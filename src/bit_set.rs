use std::fmt::{self, Display, Formatter};

use itertools::{EitherOrBoth, Itertools};

const WORD_BITS: u32 = u64::BITS;

/// Unbounded set packed one bit per value into a growable word
/// vector.
///
/// The universe grows on demand: adding `v` materializes words up to
/// `v / 64`, and the set algebra treats the shorter operand as
/// zero-extended. Trailing all-zero words are trimmed away whenever
/// an operation could leave them behind, so two equal sets always
/// hold identical word vectors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    /// Creates an empty set. `max` only reserves backing storage;
    /// any `u32` can be inserted later.
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self {
            words: Vec::with_capacity((max as usize + 1).div_ceil(WORD_BITS as usize)),
        }
    }

    /// Inserts `value`, growing the word vector as needed; inserting
    /// a present value is a no-op.
    pub fn add(&mut self, value: u32) -> &mut Self {
        let word = (value / WORD_BITS) as usize;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << (value % WORD_BITS);
        self
    }

    /// Deletes `value`; removing an absent value is a no-op, even one
    /// beyond the materialized words.
    pub fn remove(&mut self, value: u32) -> &mut Self {
        if let Some(word) = self.words.get_mut((value / WORD_BITS) as usize) {
            *word &= !(1 << (value % WORD_BITS));
            trim(&mut self.words);
        }
        self
    }

    /// Whether `value` is a member.
    pub fn contains(&self, value: u32) -> bool {
        self.words
            .get((value / WORD_BITS) as usize)
            .is_some_and(|&word| word & (1 << (value % WORD_BITS)) != 0)
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
    ///
    /// Counted on every call by clearing the lowest set bit of each
    /// word until none remain, so the cost grows with the cardinality
    /// instead of being O(1) like the other representations.
    pub fn len(&self) -> usize {
        let mut n = 0;
        for &word in &self.words {
            let mut word = word;
            while word != 0 {
                word &= word - 1;
                n += 1;
            }
        }
        n
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Empties the set, dropping the materialized words.
    pub fn clear(&mut self) -> &mut Self {
        self.words.clear();
        self
    }

    /// Iterates the members in ascending order, decoding each word
    /// least-significant bit first.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| WordBits {
            word,
            base: i as u32 * WORD_BITS,
        })
    }

    /// Whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip_longest(other.words.iter())
            .all(|pair| match pair {
                EitherOrBoth::Both(a, b) => a & !b == 0,
                EitherOrBoth::Left(a) => *a == 0,
                EitherOrBoth::Right(_) => true,
            })
    }

    /// Whether every member of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Members of either operand: word-wise OR.
    pub fn union(&self, other: &Self) -> Self {
        let words = self
            .words
            .iter()
            .copied()
            .zip_longest(other.words.iter().copied())
            .map(|pair| {
                let (a, b) = pair.or_default();
                a | b
            })
            .collect();
        Self { words }
    }

    /// Members common to both operands: word-wise AND, naturally
    /// bounded by the shorter vector.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut words: Vec<u64> = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a & b)
            .collect();
        trim(&mut words);
        Self { words }
    }

    /// Members of `self` absent from `other`: word-wise AND-NOT.
    pub fn difference(&self, other: &Self) -> Self {
        let mut words: Vec<u64> = self
            .words
            .iter()
            .zip_longest(other.words.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a & !b,
                EitherOrBoth::Left(a) => *a,
                EitherOrBoth::Right(_) => 0,
            })
            .collect();
        trim(&mut words);
        Self { words }
    }

    /// Members of exactly one operand: word-wise XOR.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut words: Vec<u64> = self
            .words
            .iter()
            .copied()
            .zip_longest(other.words.iter().copied())
            .map(|pair| {
                let (a, b) = pair.or_default();
                a ^ b
            })
            .collect();
        trim(&mut words);
        Self { words }
    }
}

// trailing zero words would make equal sets compare unequal
fn trim(words: &mut Vec<u64>) {
    while words.last() == Some(&0) {
        words.pop();
    }
}

struct WordBits {
    word: u64,
    base: u32,
}

impl Iterator for WordBits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.word == 0 {
            return None;
        }
        let bit = self.word.trailing_zeros();
        self.word &= self.word - 1;
        Some(self.base + bit)
    }
}

impl Display for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Set{{{}}}", self.iter().format(", "))
    }
}

impl Extend<u32> for BitSet {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> Extend<&'a u32> for BitSet {
    fn extend<T: IntoIterator<Item = &'a u32>>(&mut self, iter: T) {
        for value in iter {
            self.add(*value);
        }
    }
}

impl FromIterator<u32> for BitSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}
