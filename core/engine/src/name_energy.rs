//! FILENAME: core/engine/src/name_energy.rs
//! PURPOSE: Name-energy figures (alma, personalidad, numero personal).
//! CONTEXT: Computed from the person's name only, through a fixed
//! letter-to-digit table, and reduced with the same primitive as the
//! Pinnacle. They never feed into the Pinnacle table.

use parser::{is_vowel, normalize_name};
use serde::{Deserialize, Serialize};

use crate::reduction::reduce;

/// Digit for each letter A..Z, in alphabetical order. The digits cycle
/// 1..9, so A, J and S are 1, and I and R are 9.
pub const LETTER_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A B C D E F G H I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J K L M N O P Q R
    1, 2, 3, 4, 5, 6, 7, 8, //    S T U V W X Y Z
];

/// Digit of an uppercase ASCII letter; 0 for anything else.
pub fn letter_value(letter: char) -> u64 {
    if letter.is_ascii_uppercase() {
        u64::from(LETTER_VALUES[(letter as u8 - b'A') as usize])
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameEnergy {
    /// Soul number: vowels only.
    pub alma: u32,
    /// Personality number: consonants only.
    pub personalidad: u32,
    /// Personal number: every letter.
    pub numero_personal: u32,
}

impl NameEnergy {
    pub fn from_name(name: &str) -> Self {
        let letters = normalize_name(name);

        let mut vowels = 0u64;
        let mut consonants = 0u64;
        for letter in letters.chars() {
            let value = letter_value(letter);
            if is_vowel(letter) {
                vowels += value;
            } else {
                consonants += value;
            }
        }

        NameEnergy {
            alma: reduce(vowels),
            personalidad: reduce(consonants),
            numero_personal: reduce(vowels + consonants),
        }
    }
}
