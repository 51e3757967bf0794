//! Numeric collection walkthrough.
//!
//! This example demonstrates:
//! - Descriptive queries on integers and floats
//! - Lazy sorting and cached binary search
//! - Duplicate-match policies and the already-sorted fast path
//! - The two failure contracts: errors for absent input, a sentinel for misses
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use numkit::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), NumkitError> {
    println!("{}", "=".repeat(60));
    println!("numkit - Collection Queries");
    println!("{}", "=".repeat(60));
    println!();

    example_1_descriptive()?;
    example_2_sort_and_search()?;
    example_3_policies()?;
    example_4_failures();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Maximum, minimum, average and summary
fn example_1_descriptive() -> Result<(), NumkitError> {
    println!("Example 1: Descriptive Queries");
    println!("{}", "-".repeat(60));

    let readings = NumericCollection::new(&[21.5, 19.0, 23.25, 22.0, 19.0])?;
    println!("{}", readings.summary()?);
    // Summary:
    //   Data points: 5
    //   Minimum:     19
    //   Maximum:     23.25
    //   Average:     20.950000
    //   Sorted:      no
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Sorting once, searching many times
fn example_2_sort_and_search() -> Result<(), NumkitError> {
    println!("Example 2: Sort and Search");
    println!("{}", "-".repeat(60));

    let mut ids = NumericCollection::new(&[42_u32, 7, 19, 3, 88, 61])?;
    println!("Original: {:?}", ids.values());
    println!("Sorted:   {:?}", ids.sort());
    // Original: [42, 7, 19, 3, 88, 61]
    // Sorted:   [3, 7, 19, 42, 61, 88]

    for target in [19, 88, 50] {
        println!("binary_search({target}) = {}", ids.binary_search(target));
    }
    // binary_search(19) = 2
    // binary_search(88) = 5
    // binary_search(50) = -1
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Duplicate-match policies and the presorted fast path
fn example_3_policies() -> Result<(), NumkitError> {
    println!("Example 3: Match Policies");
    println!("{}", "-".repeat(60));

    let values = [4, 4, 1, 4, 9];
    for policy in [Any, Leftmost, Rightmost] {
        let mut collection = Collection::new().match_policy(policy).build(&values)?;
        println!("{:?}: binary_search(4) = {}", policy, collection.binary_search(4));
    }
    // Any: binary_search(4) = 2
    // Leftmost: binary_search(4) = 1
    // Rightmost: binary_search(4) = 3

    let ordered: Vec<i64> = (0..10_000).collect();
    let mut fast = Collection::new().presorted_check(true).build(&ordered)?;
    println!("presorted: binary_search(9_999) = {}", fast.binary_search(9_999));
    // presorted: binary_search(9_999) = 9999
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Errors versus the not-found sentinel
fn example_4_failures() {
    println!("Example 4: Failures");
    println!("{}", "-".repeat(60));

    match NumericCollection::<i32>::from_options(&[None, None]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("from_options: {e}"),
    }
    // from_options: Array must not be empty or contain only absent values

    match min_of_five(Some(3), Some(1), None, Some(4), Some(1)) {
        Ok(v) => println!("min_of_five = {v}"),
        Err(e) => println!("min_of_five: {e}"),
    }
    // min_of_five: Missing element: argument 3 of 5 is absent

    println!("max_of_three = {:?}", max_of_three(Some(7), Some(2), Some(5)));
    // max_of_three = Ok(7)
}
