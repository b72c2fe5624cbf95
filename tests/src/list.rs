#![cfg(test)]
use std::collections::VecDeque;

use labkit_core::list::DoublyLinkedList;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Front(i32),
    Back(i32),
    PopFront,
    PopBack,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Front),
        any::<i32>().prop_map(Op::Back),
        Just(Op::PopFront),
        Just(Op::PopBack),
    ]
}

#[test]
fn list_reference_sequence() {
    let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();

    list.insert_at_beginning(10);
    list.insert_at_end(20);
    list.insert_at_beginning(30);
    assert_eq!(list.display(), vec![30, 10, 20]);

    list.delete_from_beginning();
    assert_eq!(list.display(), vec![10, 20]);

    list.delete_from_end();
    assert_eq!(list.display(), vec![10]);
}

#[test]
fn list_deletes_on_empty_are_noops() {
    let mut list: DoublyLinkedList<i32> = DoublyLinkedList::default();
    for _ in 0..3 {
        assert_eq!(list.delete_from_end(), None);
        assert_eq!(list.delete_from_beginning(), None);
    }
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

proptest! {
    /// The list behaves like a deque, and walking `prev` links from the last
    /// node gives the forward order reversed.
    #[test]
    fn list_matches_deque(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::Front(v) => {
                    list.insert_at_beginning(v);
                    model.push_front(v);
                }
                Op::Back(v) => {
                    list.insert_at_end(v);
                    model.push_back(v);
                }
                Op::PopFront => {
                    prop_assert_eq!(list.delete_from_beginning(), model.pop_front());
                }
                Op::PopBack => {
                    prop_assert_eq!(list.delete_from_end(), model.pop_back());
                }
            }

            let forward = list.display();
            let mut backward: Vec<i32> = list.iter_backward().copied().collect();
            backward.reverse();

            prop_assert_eq!(&forward, &model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(&forward, &backward);
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
        }
    }
}
