extern crate std;

use std::vec;
use std::vec::Vec;

use rand::Rng;

use crate::linked_list::list::LinkedList;

fn sort_values(input: &[i32]) -> Vec<i32> {
    let mut list: LinkedList = input.iter().copied().collect();
    list.sort();
    assert_eq!(list.count(), input.len());
    list.iter().collect()
}

#[test]
fn test_sort_positive_numbers() {
    assert_eq!(
        sort_values(&[5, 22, 11, 33, 3, 2, 1]),
        vec![1, 2, 3, 5, 11, 22, 33]
    );
}

#[test]
fn test_sort_negative_numbers() {
    assert_eq!(
        sort_values(&[-5, -22, -11, -33, -3, -2, -1]),
        vec![-33, -22, -11, -5, -3, -2, -1]
    );
}

#[test]
fn test_sort_mixed_numbers() {
    let input = [
        3, 5, 11, 2, 16, 18, 6, 4, -14, 9, -7, 20, 10, 19, 8, 1, 17, 13, 15, -12,
    ];
    let expected = vec![
        -14, -12, -7, 1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 13, 15, 16, 17, 18, 19, 20,
    ];
    assert_eq!(sort_values(&input), expected);
}

#[test]
fn test_sort_empty() {
    assert_eq!(sort_values(&[]), Vec::<i32>::new());
}

#[test]
fn test_sort_single() {
    assert_eq!(sort_values(&[7]), vec![7]);
}

#[test]
fn test_sort_two_numbers() {
    assert_eq!(sort_values(&[1, 10]), vec![1, 10]);
    assert_eq!(sort_values(&[10, 1]), vec![1, 10]);
}

#[test]
fn test_sort_duplicates() {
    assert_eq!(sort_values(&[4, 1, 4, 4, 1]), vec![1, 1, 4, 4, 4]);
    assert_eq!(sort_values(&[4, 4, 4, 4]), vec![4, 4, 4, 4]);
}

#[test]
fn test_sort_already_sorted_is_unchanged() {
    let sorted = [-3, 0, 0, 2, 9, 9, 40];
    assert_eq!(sort_values(&sorted), sorted.to_vec());
}

#[test]
fn test_sort_is_idempotent() {
    let mut list: LinkedList = [5, -1, 5, 0].into_iter().collect();
    list.sort();
    let once: Vec<i32> = list.iter().collect();
    list.sort();
    let twice: Vec<i32> = list.iter().collect();
    assert_eq!(once, twice);
}

#[test]
fn test_sort_matches_slice_sort() {
    let mut rng = rand::rng();

    for _ in 0..64 {
        let len = rng.random_range(0..128);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();

        let mut expected = input.clone();
        expected.sort_unstable();

        assert_eq!(sort_values(&input), expected);
    }
}
