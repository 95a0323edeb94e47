//! The operation set shared by all four representations, exercised
//! uniformly: every property here must hold regardless of memory
//! layout.

use int_sets::{BitSet, BoolSet, HashSet, SparseSet};

macro_rules! contract {
    ($module:ident, $set:ty) => {
        mod $module {
            use super::*;

            fn set(values: &[u32]) -> $set {
                let mut s = <$set>::new(100);
                s.extend(values);
                s
            }

            #[test]
            fn add_is_idempotent() {
                let mut s = set(&[]);
                s.add(7);
                let once = s.clone();
                s.add(7);
                assert_eq!(s.len(), 1);
                assert_eq!(s, once);
            }

            #[test]
            fn add_then_remove_is_an_inverse() {
                let mut s = set(&[10, 20, 30]);
                let before = s.clone();
                s.add(55).remove(55);
                assert!(!s.contains(55));
                assert_eq!(s.len(), 3);
                assert_eq!(s, before);
            }

            #[test]
            fn duplicate_adds_count_once() {
                let mut s = set(&[]);
                s.add(1).add(2).add(5).add(2);
                assert_eq!(s.len(), 3);
                assert!(s.contains_all([1, 2, 5]));
            }

            #[test]
            fn removal_keeps_the_rest() {
                let mut s = set(&[1, 2, 3]);
                s.remove(1);
                assert!(!s.contains(1));
                assert!(s.contains_all([2, 3]));
                assert_eq!(s.len(), 2);
            }

            #[test]
            fn removing_an_absent_value_is_a_no_op() {
                let mut s = set(&[1, 2]);
                s.remove(50);
                assert_eq!(s, set(&[1, 2]));
            }

            #[test]
            fn contains_all_is_vacuously_true() {
                assert!(set(&[]).contains_all([]));
                assert!(set(&[4]).contains_all([]));
            }

            #[test]
            fn clear_forgets_everything() {
                let mut s = set(&[1, 2, 3, 4, 5]);
                s.clear();
                assert_eq!(s.len(), 0);
                assert!(s.is_empty());
                for v in [1, 2, 3, 4, 5] {
                    assert!(!s.contains(v));
                }
            }

            #[test]
            fn iteration_yields_each_member_once() {
                let s = set(&[99, 1, 5]);
                let mut all: Vec<u32> = s.iter().collect();
                all.sort_unstable();
                assert_eq!(all, [1, 5, 99]);
            }

            #[test]
            fn equality_ignores_insertion_order() {
                assert_eq!(set(&[1, 2]), set(&[2, 1, 1]));
                assert_ne!(set(&[1, 2]), set(&[1, 3]));
                assert_ne!(set(&[1, 2]), set(&[1]));
            }

            #[test]
            fn subset_and_superset_are_dual() {
                let a = set(&[1, 2]);
                let b = set(&[1, 2, 3]);
                let c = set(&[3, 4, 5]);
                assert!(a.is_subset(&b));
                assert!(!a.is_subset(&c));
                assert!(b.is_superset(&a));
                assert!(!c.is_superset(&a));
                for (x, y) in [(&a, &b), (&a, &c), (&b, &c)] {
                    assert_eq!(x.is_subset(y), y.is_superset(x));
                }
            }

            #[test]
            fn union_commutes() {
                let a = set(&[1, 2]);
                let b = set(&[3, 4]);
                assert_eq!(a.union(&b), b.union(&a));
                assert_eq!(a.union(&b), set(&[1, 2, 3, 4]));
            }

            #[test]
            fn intersection_commutes() {
                let b = set(&[1, 2, 3]);
                let c = set(&[3, 4, 5]);
                assert_eq!(b.intersection(&c), c.intersection(&b));
                assert_eq!(b.intersection(&c), set(&[3]));
            }

            #[test]
            fn difference_is_one_sided() {
                let a = set(&[1, 2, 4]);
                let b = set(&[1, 2, 3]);
                assert_eq!(a.difference(&b), set(&[4]));
                assert_eq!(b.difference(&a), set(&[3]));
            }

            #[test]
            fn symmetric_difference_matches_its_two_sided_expansion() {
                let a = set(&[1, 2, 4]);
                let b = set(&[1, 2, 3]);
                assert_eq!(a.symmetric_difference(&b), set(&[3, 4]));
                assert_eq!(
                    a.symmetric_difference(&b),
                    a.difference(&b).union(&b.difference(&a)),
                );
            }

            #[test]
            fn algebra_leaves_the_operands_alone() {
                let a = set(&[1, 2, 4]);
                let b = set(&[2, 3]);
                let _ = a.union(&b);
                let _ = a.intersection(&b);
                let _ = a.difference(&b);
                let _ = a.symmetric_difference(&b);
                assert_eq!(a, set(&[1, 2, 4]));
                assert_eq!(b, set(&[2, 3]));
            }

            #[test]
            fn clones_do_not_share_state() {
                let mut a = set(&[9, 3, 1]);
                let b = a.clone();
                a.remove(3);
                assert_eq!(b, set(&[9, 3, 1]));
                assert_eq!(a, set(&[9, 1]));
            }

            #[test]
            fn chained_mutations_read_naturally() {
                let mut s = set(&[]);
                s.add(1).add(2).remove(1).add(3);
                assert_eq!(s, set(&[2, 3]));
            }

            #[test]
            fn display_wraps_members_in_braces() {
                assert_eq!(set(&[]).to_string(), "Set{}");
                assert_eq!(set(&[7]).to_string(), "Set{7}");
            }
        }
    };
}

contract!(bool_set, BoolSet);
contract!(hash_set, HashSet);
contract!(bit_set, BitSet);
contract!(sparse_set, SparseSet);
