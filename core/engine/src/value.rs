//! FILENAME: core/engine/src/value.rs
//! PURPOSE: Defines the value held at a single Pinnacle position.
//! CONTEXT: Almost every position holds one small integer. The special
//! positions W and T can hold several digits at once; consumers receive
//! those as an array and join them for display.

use serde::{Deserialize, Serialize};

/// The value of one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PinnacleValue {
    Single(u32),
    /// Ascending, distinct, at least two entries.
    Many(Vec<u32>),
}

impl PinnacleValue {
    /// Collapses an ascending list of digits the way W and T report them:
    /// no digits -> 0, one digit -> that digit, otherwise the list.
    pub fn from_digits(mut digits: Vec<u32>) -> Self {
        match digits.len() {
            0 => PinnacleValue::Single(0),
            1 => PinnacleValue::Single(digits[0]),
            _ => {
                digits.sort_unstable();
                digits.dedup();
                if digits.len() == 1 {
                    PinnacleValue::Single(digits[0])
                } else {
                    PinnacleValue::Many(digits)
                }
            }
        }
    }

    /// The number, if this is a single value.
    pub fn as_single(&self) -> Option<u32> {
        match self {
            PinnacleValue::Single(n) => Some(*n),
            PinnacleValue::Many(_) => None,
        }
    }

    /// Returns the display text: the number, or the list joined with ", ".
    pub fn display_value(&self) -> String {
        match self {
            PinnacleValue::Single(n) => n.to_string(),
            PinnacleValue::Many(list) => list
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<u32> for PinnacleValue {
    fn from(n: u32) -> Self {
        PinnacleValue::Single(n)
    }
}

impl std::fmt::Display for PinnacleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_value())
    }
}
