#![cfg(test)]
use labkit_core::frequency::count_frequencies;
use proptest::prelude::*;

#[test]
fn frequency_reference() {
    assert_eq!(
        count_frequencies(&[1, 2, 2, 3, 3, 3]),
        vec![(1, 1), (2, 2), (3, 3)]
    );
    assert!(count_frequencies(&[]).is_empty());
}

proptest! {
    #[test]
    fn frequency_counts_are_consistent(values in proptest::collection::vec(-20i64..20, 0..100)) {
        let counts = count_frequencies(&values);

        prop_assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), values.len());
        prop_assert!(counts.windows(2).all(|w| w[0].0 < w[1].0));
        for (value, count) in counts {
            prop_assert_eq!(values.iter().filter(|v| **v == value).count(), count);
        }
    }
}
