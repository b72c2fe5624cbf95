#![cfg(test)]
use labkit_core::sorting::{SortAlgorithm, SortStep, replay};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_trace_sorts_and_replays(values in proptest::collection::vec(-50i64..50, 0..40)) {
        let mut expected = values.clone();
        expected.sort();

        for algo in SortAlgorithm::ALL {
            let mut sorted = values.clone();
            let trace = algo.trace(&mut sorted);

            prop_assert_eq!(&sorted, &expected);
            prop_assert_eq!(replay(&values, &trace.steps), expected.clone());
            prop_assert_eq!(
                trace.steps.last(),
                Some(&SortStep::MarkSorted((0..values.len()).collect()))
            );
        }
    }
}

#[test]
fn sorted_input_needs_no_moves_for_bubble() {
    let mut values: Vec<i64> = (0..10).collect();
    let trace = SortAlgorithm::Bubble.trace(&mut values);

    assert_eq!(trace.swaps(), 0);
    assert_eq!(trace.compares(), 45);
}

#[test]
fn selection_skips_needless_swaps() {
    let mut values = vec![1, 2, 3, 4];
    let trace = SortAlgorithm::Selection.trace(&mut values);
    assert_eq!(trace.swaps(), 0);
    assert_eq!(trace.compares(), 6);
}
