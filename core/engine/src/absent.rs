//! FILENAME: core/engine/src/absent.rs
//! PURPOSE: The absent-digits rule (T) over positions A..S.

use crate::reduction::digit_histogram;
use crate::value::PinnacleValue;

/// Digits 1..=9 that never occur among `values`, ascending.
pub fn absent_digit_list(values: &[u32]) -> Vec<u32> {
    let counts = digit_histogram(values);
    (1..=9u32).filter(|&d| counts[d as usize] == 0).collect()
}

/// T for the given A..S values: 0 when every digit is present, the digit
/// when only one is missing, otherwise the ascending list.
pub fn absent_digits(values: &[u32]) -> PinnacleValue {
    PinnacleValue::from_digits(absent_digit_list(values))
}
