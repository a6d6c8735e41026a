//! FILENAME: core/engine/src/triplicity.rs
//! PURPOSE: The triplicity rule (W) over the negative track K..S.
//! CONTEXT: A digit that shows up exactly three times among the nine negative
//! positions "fires" and contributes reduce(3 * digit), always 3, 6 or 9.
//! A second pass adds reduce(3 * w) for every fired value w that itself shows
//! up exactly twice. That second-order step is only attested by a single
//! worked example, so it is kept separate from the first-order pass.

use crate::reduction::{digit_histogram, reduce};
use crate::value::PinnacleValue;

/// Digits 1..=9 that occur exactly three times, mapped to reduce(3 * d).
/// Returned as membership flags indexed by the fired value.
pub fn first_order(counts: &[usize; 10]) -> [bool; 10] {
    let mut fired = [false; 10];
    for digit in 1..=9u32 {
        if counts[digit as usize] == 3 {
            mark(&mut fired, reduce(u64::from(3 * digit)));
        }
    }
    fired
}

/// Adds reduce(3 * w) for every first-order value w counted exactly twice.
pub fn second_order(counts: &[usize; 10], first: &[bool; 10]) -> [bool; 10] {
    let mut fired = *first;
    for w in 1..=9u32 {
        if first[w as usize] && counts[w as usize] == 2 {
            mark(&mut fired, reduce(u64::from(3 * w)));
        }
    }
    fired
}

fn mark(fired: &mut [bool; 10], value: u32) {
    if let Some(slot) = fired.get_mut(value as usize) {
        *slot = true;
    }
}

/// W for the given K..S values: 0, a single value, or an ascending list.
pub fn triplicity(negative_values: &[u32]) -> PinnacleValue {
    let counts = digit_histogram(negative_values);
    let fired = second_order(&counts, &first_order(&counts));

    let values: Vec<u32> = (1..=9u32).filter(|&v| fired[v as usize]).collect();
    PinnacleValue::from_digits(values)
}
