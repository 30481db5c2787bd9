//! Canonical presets tying the cipher to its 26-letter alphabet.

pub mod alphabet;

pub use alphabet::{ALPHABET_MODULUS, alphabet_ring, letter_to_value, value_to_letter};
