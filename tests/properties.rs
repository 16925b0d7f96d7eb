// SPDX-License-Identifier: MIT
// Property-based tests for the distance metric and its parallel fill.

use proptest::prelude::*;

use parlev::distance;

fn word() -> impl Strategy<Value = Vec<u8>> {
    // Small alphabet keeps match/mismatch runs frequent, which is where the
    // last-match hints actually matter.
    prop::collection::vec(prop::sample::select(b"abcd".to_vec()), 0..40)
}

proptest! {
    #[test]
    fn symmetry(a in word(), b in word()) {
        prop_assert_eq!(distance(&a, &b, 1).unwrap(), distance(&b, &a, 1).unwrap());
    }

    #[test]
    fn identity_of_indiscernibles(a in word()) {
        prop_assert_eq!(distance(&a, &a, 1).unwrap(), 0);
    }

    #[test]
    fn empty_costs_full_length(a in word()) {
        prop_assert_eq!(distance(&a, &[], 1).unwrap() as usize, a.len());
        prop_assert_eq!(distance(&[], &a, 1).unwrap() as usize, a.len());
    }

    #[test]
    fn triangle_inequality(a in word(), b in word(), c in word()) {
        let ac = distance(&a, &c, 1).unwrap();
        let ab = distance(&a, &b, 1).unwrap();
        let bc = distance(&b, &c, 1).unwrap();
        prop_assert!(ac <= ab + bc);
    }

    #[test]
    fn degree_independence(a in word(), b in word()) {
        let expected = distance(&a, &b, 1).unwrap();
        for threads in [2usize, 5, 16] {
            prop_assert_eq!(distance(&a, &b, threads).unwrap(), expected);
        }
    }

    #[test]
    fn truncated_degree_is_still_correct(a in word(), b in word()) {
        // A degree well beyond the column count is silently capped.
        let threads = a.len() + 8;
        prop_assert_eq!(
            distance(&a, &b, threads).unwrap(),
            distance(&a, &b, 1).unwrap()
        );
    }

    #[test]
    fn bounded_by_longer_word(a in word(), b in word()) {
        let d = distance(&a, &b, 1).unwrap() as usize;
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
    }
}
