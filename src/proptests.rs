use std::cmp::Ordering;

use proptest::{collection::vec, prelude::*};

use crate::{
    util::debug_assertions::{is_permutation_of, is_sorted_by},
    Algorithm,
};

prop_compose! {
    fn random_vec()(v in vec(any::<i16>(), 0..200)) -> Vec<i16> {
        v
    }
}

prop_compose! {
    /// Few distinct keys, so most elements have duplicates. The index tells equal keys apart.
    fn keyed_vec()(keys in vec(0..8u8, 0..120)) -> Vec<(u8, usize)> {
        keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect()
    }
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Selection),
        Just(Algorithm::Insertion),
        Just(Algorithm::Bubble),
    ]
}

proptest! {
    #[test]
    fn agrees_with_std(v in random_vec(), algorithm in algorithm()) {
        let mut expected = v.clone();
        expected.sort();
        prop_assert_eq!(algorithm.sorted(&v), expected);
    }

    #[test]
    fn descending(v in random_vec(), algorithm in algorithm()) {
        let output = algorithm.sort_by(Some(v.as_slice()), |a, b| b.cmp(a)).unwrap();
        let mut expected = v.clone();
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn sorted_permutation_by_key(v in keyed_vec(), algorithm in algorithm()) {
        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0);
        let output = algorithm.sort_by(Some(v.as_slice()), by_key).unwrap();
        prop_assert!(is_permutation_of(&output, &v));
        prop_assert!(is_sorted_by(&output, by_key));
    }

    #[test]
    fn idempotent(v in random_vec(), algorithm in algorithm()) {
        let once = algorithm.sorted(&v);
        let twice = algorithm.sorted(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn algorithms_agree_on_values(v in random_vec()) {
        let [selection, insertion, bubble] = Algorithm::ALL.map(|algorithm| algorithm.sorted(&v));
        prop_assert_eq!(&selection, &insertion);
        prop_assert_eq!(&insertion, &bubble);
    }

    #[test]
    fn input_untouched(v in random_vec(), algorithm in algorithm()) {
        let copy = v.clone();
        let _ = algorithm.sort_by(Some(v.as_slice()), |a, b| a.cmp(b));
        prop_assert_eq!(v, copy);
    }

    #[test]
    fn inconsistent_comparator_keeps_elements(v in random_vec(), algorithm in algorithm()) {
        let output = algorithm
            .sort_by(Some(v.as_slice()), |a, b| {
                if (a ^ b) & 1 == 0 { Ordering::Less } else { b.cmp(a) }
            })
            .unwrap();
        prop_assert!(is_permutation_of(&output, &v));
    }
}
