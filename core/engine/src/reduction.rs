//! FILENAME: core/engine/src/reduction.rs
//! PURPOSE: The digit-reduction primitive shared by every formula.
//! CONTEXT: A number is reduced by replacing it with the sum of its decimal
//! digits until a single digit remains. The master numbers 11, 22 and 33 are
//! kept whenever they show up, before the first pass or after any pass.
//! Zero is a legitimate result and stays zero.

/// The numbers that are never reduced further.
pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

/// True for 11, 22 and 33.
pub fn is_master(n: u64) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the base-10 digits of `n`.
pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduces `n` to 0..=9 or a master number.
///
/// 1993 -> 22 (stops at the master number), 1987 -> 25 -> 7, 0 -> 0.
pub fn reduce(n: u64) -> u32 {
    let mut n = n;
    if is_master(n) {
        return n as u32;
    }

    while n > 9 {
        n = digit_sum(n);
        if is_master(n) {
            break;
        }
    }

    // Always <= 33 here
    n as u32
}

/// Swaps a master number for its single-digit root before the absolute
/// differences of the negative track: 11 -> 2, 22 -> 4, 33 -> 6.
pub fn convert_for_negative(n: u32) -> u32 {
    match n {
        11 => 2,
        22 => 4,
        33 => 6,
        other => other,
    }
}

/// Occurrences of each digit 0..=9 among `values`. Anything above 9
/// (master numbers) is not counted.
pub fn digit_histogram(values: &[u32]) -> [usize; 10] {
    let mut counts = [0usize; 10];
    for &value in values {
        if let Some(slot) = counts.get_mut(value as usize) {
            *slot += 1;
        }
    }
    counts
}
