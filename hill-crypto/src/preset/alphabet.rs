use crate::ring::Ring;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Size of the Latin alphabet; the modulus of the ring the cipher runs over.
pub const ALPHABET_MODULUS: u64 = 26;

lazy_static! {
    /// A static HashMap mapping a value (0 to 25) to its corresponding
    /// uppercase letter 'A'-'Z'.
    pub static ref VALUE_TO_LETTER_MAP: HashMap<i64, char> = {
        let mut map = HashMap::new();

        for (value, letter) in ('A'..='Z').enumerate() {
            map.insert(value as i64, letter);
        }

        map
    };

    /// A static HashMap mapping an ASCII letter (either case) to its
    /// value (0 to 25).
    pub static ref LETTER_TO_VALUE_MAP: HashMap<char, i64> = {
        let mut map = HashMap::new();

        for (&value, &letter) in VALUE_TO_LETTER_MAP.iter() {
            map.insert(letter, value);
            map.insert(letter.to_ascii_lowercase(), value);
        }

        map
    };
}

/// The ring Z_26 every cipher operation runs over.
pub fn alphabet_ring() -> Ring {
    Ring {
        modulus: ALPHABET_MODULUS,
    }
}

/// Maps an ASCII letter to its alphabet value (A=0 .. Z=25, case-insensitive).
///
/// Any character outside 'A'-'Z' / 'a'-'z' maps to 0. No error is signaled;
/// callers that need strict input must validate before mapping.
pub fn letter_to_value(letter: char) -> i64 {
    LETTER_TO_VALUE_MAP.get(&letter).copied().unwrap_or(0)
}

/// Maps a value to its uppercase letter, normalizing into `[0, modulus)` first.
///
/// Total for any `i64`, however negative or large. The ring modulus must not
/// exceed [`ALPHABET_MODULUS`].
pub fn value_to_letter(value: i64, ring: &Ring) -> char {
    VALUE_TO_LETTER_MAP[&ring.normalize(value)]
}
