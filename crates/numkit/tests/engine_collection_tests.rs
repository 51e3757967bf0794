//! Tests for the numeric collection engine.
//!
//! These tests verify the collection's observable behavior:
//! - Construction and rejection of empty or unorderable input
//! - Lazy sorting with a cached, idempotent result
//! - Binary search over the cached sorted copy
//! - Descriptive queries and summaries
//!
//! ## Test Organization
//!
//! 1. **Construction** - new, from_options, invalid input
//! 2. **Sorting** - Concrete scenarios, duplicates, large inputs
//! 3. **Sort State** - Unsorted to Sorted transition and caching
//! 4. **Binary Search** - Hits, misses, duplicates
//! 5. **Descriptive Queries** - Single element, summary

use approx::assert_abs_diff_eq;

use numkit::prelude::*;

/// Deterministic pseudo-random values in `0..modulus`.
fn lcg_values(n: usize, seed: u64, modulus: u64) -> Vec<i64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) % modulus) as i64
        })
        .collect()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that an empty sequence is rejected at construction.
#[test]
fn test_new_empty_input() {
    let result = NumericCollection::<i32>::new(&[]);

    assert_eq!(result.unwrap_err(), NumkitError::EmptyInput);
}

/// Test that NaN is rejected at construction.
#[test]
fn test_new_rejects_nan() {
    let result = NumericCollection::new(&[1.0, f64::NAN, 3.0]);

    match result {
        Err(NumkitError::InvalidNumericValue(msg)) => {
            assert!(msg.contains("values[1]"), "Message should name the index: {msg}");
        }
        other => panic!("Expected InvalidNumericValue, got {other:?}"),
    }
}

/// Test that infinities are accepted.
#[test]
fn test_new_accepts_infinity() {
    let mut collection = NumericCollection::new(&[f64::INFINITY, 0.0, f64::NEG_INFINITY]).unwrap();

    assert_eq!(collection.sort(), &[f64::NEG_INFINITY, 0.0, f64::INFINITY]);
}

/// Test that absent values are dropped and order is kept.
#[test]
fn test_from_options_drops_absent() {
    let collection = NumericCollection::from_options(&[Some(3), None, Some(1), None, Some(2)]).unwrap();

    assert_eq!(collection.values(), &[3, 1, 2]);
    assert_eq!(collection.len(), 3);
}

/// Test that an all-absent sequence counts as empty.
#[test]
fn test_from_options_all_absent() {
    let all_absent = NumericCollection::<i32>::from_options(&[None, None]);
    let empty = NumericCollection::<i32>::from_options(&[]);

    assert_eq!(all_absent.unwrap_err(), NumkitError::EmptyInput);
    assert_eq!(empty.unwrap_err(), NumkitError::EmptyInput);
}

/// Test that the caller's data is never modified.
#[test]
fn test_original_values_untouched() {
    let input = vec![5, 3, 5, 1, 2];
    let mut collection = NumericCollection::new(&input).unwrap();

    let _ = collection.sort();

    assert_eq!(input, vec![5, 3, 5, 1, 2]);
    assert_eq!(collection.values(), &[5, 3, 5, 1, 2]);
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test the basic three-element scenario.
#[test]
fn test_sort_basic() {
    let mut collection = NumericCollection::new(&[3, 1, 2]).unwrap();

    assert_eq!(collection.sort(), &[1, 2, 3]);
}

/// Test that duplicates are preserved.
#[test]
fn test_sort_with_duplicates() {
    let mut a = NumericCollection::new(&[5, 3, 5, 1, 2]).unwrap();
    let mut b = NumericCollection::new(&[3, 1, 2, 3, 2, 1]).unwrap();

    assert_eq!(a.sort(), &[1, 2, 3, 5, 5]);
    assert_eq!(b.sort(), &[1, 1, 2, 2, 3, 3]);
}

/// Test already sorted and reverse sorted input.
#[test]
fn test_sort_ordered_inputs() {
    let mut ascending = NumericCollection::new(&[1, 2, 3, 4, 5]).unwrap();
    let mut descending = NumericCollection::new(&[10, 9, 8, 7, 6]).unwrap();

    assert_eq!(ascending.sort(), &[1, 2, 3, 4, 5]);
    assert_eq!(descending.sort(), &[6, 7, 8, 9, 10]);
}

/// Test sorting across numeric types.
#[test]
fn test_sort_various_types() {
    let mut doubles = NumericCollection::new(&[5.5, 3.3, 5.5, 1.1, 2.2]).unwrap();
    let mut floats = NumericCollection::new(&[3.3_f32, 1.1, 2.2]).unwrap();
    let mut longs = NumericCollection::new(&[5_i64, 3, 5, 1, 2]).unwrap();
    let mut shorts = NumericCollection::new(&[3_i16, 1, 2]).unwrap();
    let mut bytes = NumericCollection::new(&[3_u8, 1, 2]).unwrap();

    assert_eq!(doubles.sort(), &[1.1, 2.2, 3.3, 5.5, 5.5]);
    assert_eq!(floats.sort(), &[1.1_f32, 2.2, 3.3]);
    assert_eq!(longs.sort(), &[1, 2, 3, 5, 5]);
    assert_eq!(shorts.sort(), &[1, 2, 3]);
    assert_eq!(bytes.sort(), &[1, 2, 3]);
}

/// Test sorting with type extremes.
#[test]
fn test_sort_extreme_values() {
    let mut collection = NumericCollection::new(&[i64::MAX, 0, i64::MIN, -1, 1]).unwrap();

    assert_eq!(collection.sort(), &[i64::MIN, -1, 0, 1, i64::MAX]);
}

/// Test a large pseudo-random input against the standard library sort.
#[test]
fn test_sort_large_random() {
    let input = lcg_values(1000, 42, 1000);
    let mut expected = input.clone();
    expected.sort();

    let mut collection = NumericCollection::new(&input).unwrap();

    assert_eq!(collection.sort(), expected.as_slice());
}

/// Test that the result is a non-decreasing permutation for several seeds.
#[test]
fn test_sort_permutation_property() {
    for seed in 1..20 {
        let input = lcg_values(257, seed, 50);
        let mut collection = NumericCollection::new(&input).unwrap();
        let sorted = collection.sort().to_vec();

        assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "seed {seed}");

        let mut expected = input.clone();
        expected.sort_unstable();
        assert_eq!(sorted, expected, "seed {seed}");
    }
}

/// Test the worst-case inputs for a last-element pivot.
#[test]
fn test_sort_worst_case_inputs() {
    let descending: Vec<i32> = (0..2000).rev().collect();
    let ascending: Vec<i32> = (0..2000).collect();

    let mut from_descending = NumericCollection::new(&descending).unwrap();
    let mut from_ascending = NumericCollection::new(&ascending).unwrap();

    assert_eq!(from_descending.sort(), ascending.as_slice());
    assert_eq!(from_ascending.sort(), ascending.as_slice());
}

/// Test that all-equal input is handled.
#[test]
fn test_sort_all_equal() {
    let input = vec![7; 100];
    let mut collection = NumericCollection::new(&input).unwrap();

    assert_eq!(collection.sort(), input.as_slice());

    let index = collection.binary_search(7);
    assert_eq!(collection.sort()[index as usize], 7);
}

// ============================================================================
// Sort State Tests
// ============================================================================

/// Test the Unsorted to Sorted transition on sort().
#[test]
fn test_state_transition_on_sort() {
    let mut collection = NumericCollection::new(&[2, 1]).unwrap();

    assert!(!collection.is_sorted());
    assert_eq!(collection.state(), &SortState::Unsorted);

    let _ = collection.sort();

    assert!(collection.is_sorted());
    assert_eq!(collection.state(), &SortState::Sorted(vec![1, 2]));
}

/// Test that binary_search triggers the transition.
#[test]
fn test_state_transition_on_search() {
    let mut collection = NumericCollection::new(&[9, 4, 6]).unwrap();

    assert!(!collection.is_sorted());
    assert_eq!(collection.binary_search(6), 1);
    assert!(collection.is_sorted());
}

/// Test that repeated sorts return the cached copy.
#[test]
fn test_sort_idempotent_and_cached() {
    let mut collection = NumericCollection::new(&[4, 2, 3, 1]).unwrap();

    let first = collection.sort().to_vec();
    let first_ptr = collection.sort().as_ptr();
    let second_ptr = collection.sort().as_ptr();

    assert_eq!(first, collection.sort());
    assert_eq!(first_ptr, second_ptr, "Cached copy should be reused");
}

/// Test that the first sort returns the cached copy itself.
#[test]
fn test_first_sort_returns_cached_copy() {
    for input in [vec![5], vec![3, 1, 2], vec![-1, -1, 0, -2]] {
        let mut collection = NumericCollection::new(&input).unwrap();

        let first_ptr = collection.sort().as_ptr();
        let first_len = collection.sort().len();
        let cached = collection.state().sorted().unwrap();

        assert_eq!(first_len, input.len());
        assert_eq!(cached.as_ptr(), first_ptr);
        assert!(cached.windows(2).all(|w| w[0] <= w[1]));
    }
}

/// Test that descriptive queries do not sort.
#[test]
fn test_queries_do_not_sort() {
    let collection = NumericCollection::new(&[3, 1, 2]).unwrap();

    let _ = collection.maximum().unwrap();
    let _ = collection.minimum().unwrap();
    let _ = collection.average().unwrap();

    assert!(!collection.is_sorted());
}

// ============================================================================
// Binary Search Tests
// ============================================================================

/// Test search hits and misses on 1..=9.
#[test]
fn test_binary_search_basic() {
    let mut collection = NumericCollection::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();

    assert_eq!(collection.binary_search(4), 3);
    assert_eq!(collection.binary_search(10), NOT_FOUND);
    assert_eq!(collection.binary_search(1), 0);
    assert_eq!(collection.binary_search(9), 8);
    assert_eq!(collection.binary_search(5), 4);
    assert_eq!(collection.binary_search(0), -1);
}

/// Test that indices refer to the sorted copy, not the input order.
#[test]
fn test_binary_search_unsorted_input() {
    let mut collection = NumericCollection::new(&[9, 1, 8, 2, 7]).unwrap();

    assert_eq!(collection.binary_search(7), 2);
    assert_eq!(collection.binary_search(9), 4);
    assert_eq!(collection.binary_search(3), NOT_FOUND);
}

/// Test that every present value is found at a matching index.
#[test]
fn test_binary_search_finds_every_value() {
    let input = lcg_values(300, 7, 40);
    let mut collection = NumericCollection::new(&input).unwrap();

    for &value in &input {
        let index = collection.binary_search(value);
        assert!(index >= 0, "{value} should be found");
        assert_eq!(collection.sort()[index as usize], value);
    }

    assert_eq!(collection.binary_search(40), NOT_FOUND);
    assert_eq!(collection.binary_search(-1), NOT_FOUND);
}

/// Test that duplicates yield some matching index under the default policy.
#[test]
fn test_binary_search_duplicates_any_index() {
    let mut collection = NumericCollection::new(&[2, 5, 2, 2, 1, 5]).unwrap();

    let index = collection.binary_search(2);

    // Any of the positions holding 2 is a correct answer
    assert!((1..=3).contains(&index), "index {index}");
}

/// Test binary search over floats.
#[test]
fn test_binary_search_floats() {
    let mut collection = NumericCollection::new(&[3.3, 1.1, 2.2]).unwrap();

    assert_eq!(collection.binary_search(2.2), 1);
    assert_eq!(collection.binary_search(2.25), NOT_FOUND);
    assert_eq!(collection.binary_search(f64::NAN), NOT_FOUND);
}

/// Test binary search on a single element.
#[test]
fn test_binary_search_single_element() {
    let mut collection = NumericCollection::new(&[42_u32]).unwrap();

    assert_eq!(collection.binary_search(42), 0);
    assert_eq!(collection.binary_search(41), NOT_FOUND);
    assert_eq!(collection.binary_search(43), NOT_FOUND);
}

// ============================================================================
// Descriptive Query Tests
// ============================================================================

/// Test that a single element is its own maximum, minimum and average.
#[test]
fn test_single_element_queries() {
    let ints = NumericCollection::new(&[1]).unwrap();
    let doubles = NumericCollection::new(&[1.0]).unwrap();
    let bytes = NumericCollection::new(&[1_i8]).unwrap();

    assert_eq!(ints.maximum().unwrap(), 1);
    assert_eq!(ints.minimum().unwrap(), 1);
    assert_abs_diff_eq!(ints.average().unwrap(), 1.0, epsilon = 1e-4);

    assert_eq!(doubles.maximum().unwrap(), 1.0);
    assert_eq!(doubles.minimum().unwrap(), 1.0);
    assert_abs_diff_eq!(doubles.average().unwrap(), 1.0, epsilon = 1e-4);

    assert_eq!(bytes.maximum().unwrap(), 1);
    assert_eq!(bytes.minimum().unwrap(), 1);
    assert_abs_diff_eq!(bytes.average().unwrap(), 1.0, epsilon = 1e-4);
}

/// Test average against sum / len.
#[test]
fn test_average_matches_sum_over_len() {
    let input = lcg_values(500, 11, 10_000);
    let collection = NumericCollection::new(&input).unwrap();

    let expected = input.iter().sum::<i64>() as f64 / input.len() as f64;

    assert_abs_diff_eq!(collection.average().unwrap(), expected, epsilon = 1e-4);
}

/// Test extrema with type extremes.
#[test]
fn test_extreme_values_queries() {
    let collection = NumericCollection::new(&[i32::MAX, i32::MIN, 0]).unwrap();

    assert_eq!(collection.maximum().unwrap(), i32::MAX);
    assert_eq!(collection.minimum().unwrap(), i32::MIN);
}

/// Test summary fields and display output.
#[test]
fn test_summary() {
    let mut collection = NumericCollection::new(&[1, 2, 3]).unwrap();

    let before = collection.summary().unwrap();
    assert_eq!(before.count, 3);
    assert_eq!(before.minimum, 1);
    assert_eq!(before.maximum, 3);
    assert_abs_diff_eq!(before.average, 2.0, epsilon = 1e-12);
    assert!(!before.sorted);
    assert!(!before.is_constant());

    let _ = collection.sort();
    let after = collection.summary().unwrap();
    assert!(after.sorted);

    let text = format!("{after}");
    assert!(text.contains("Data points: 3"));
    assert!(text.contains("Average:     2.000000"));
    assert!(text.contains("Sorted:      yes"));
}

/// Test that a constant collection is reported as such.
#[test]
fn test_summary_constant() {
    let collection = NumericCollection::new(&[4.0, 4.0]).unwrap();

    assert!(collection.summary().unwrap().is_constant());
}
