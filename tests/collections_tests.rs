// Test cases for list helpers and the stack/queue wrappers
use mathkit::collections::list_ops::{
    dedup_preserving_order, find_index, find_missing_number, is_subset, merge_sorted, reversed,
    rotate_right,
};
use mathkit::collections::queue::Queue;
use mathkit::collections::stack::Stack;

#[test]
fn test_reversed_round_trip() {
    let items = vec![1, 2, 3, 4, 5];
    assert_eq!(reversed(&reversed(&items)), items);
}

#[test]
fn test_find_index_and_dedup() {
    let items = vec![4, 2, 4, 1, 2];
    assert_eq!(find_index(&items, &4), Some(0));
    assert_eq!(find_index(&items, &1), Some(3));
    assert_eq!(find_index(&items, &7), None);
    assert_eq!(dedup_preserving_order(&items), vec![4, 2, 1]);
}

#[test]
fn test_merge_sorted_is_sorted_and_complete() {
    let a = vec![1, 4, 4, 9];
    let b = vec![2, 3, 10];
    let merged = merge_sorted(&a, &b);
    assert_eq!(merged.len(), a.len() + b.len());
    assert!(merged.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_rotate_right_full_cycle() {
    let items = vec![1, 2, 3, 4];
    assert_eq!(rotate_right(&items, items.len()), items);
    assert_eq!(rotate_right(&items, 1), vec![4, 1, 2, 3]);
}

#[test]
fn test_find_missing_number_each_position() {
    // drop each value of 1..=5 in turn
    let full = [1_i64, 2, 3, 4, 5];
    for &missing in &full {
        let remaining: Vec<i64> = full.iter().copied().filter(|&v| v != missing).collect();
        assert_eq!(find_missing_number(&remaining), missing);
    }
}

#[test]
fn test_is_subset() {
    assert!(is_subset(&["b"], &["a", "b", "c"]));
    assert!(!is_subset(&["d"], &["a", "b", "c"]));
}

#[test]
fn test_stack_lifo_against_queue_fifo() {
    let mut stack = Stack::new();
    let mut queue = Queue::new();
    for item in 1..=3 {
        stack.push(item);
        queue.enqueue(item);
    }
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(stack.len(), 2);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_stack_and_queue_drain_to_empty() {
    let mut stack = Stack::new();
    let mut queue = Queue::new();
    for item in 0..10 {
        stack.push(item);
        queue.enqueue(item);
    }
    while stack.pop().is_some() {}
    while queue.dequeue().is_some() {}
    assert!(stack.is_empty());
    assert!(queue.is_empty());
}
