//! # Cipher Module
//!
//! The block codec: pairwise encrypt/decrypt of letter text under a
//! [`KeyMatrix`] over the alphabet ring.

use crate::errors::HillCryptoError;
use crate::key::KeyMatrix;
use crate::preset::{letter_to_value, value_to_letter};
use crate::ring::Ring;

use itertools::Itertools;

/// Filler letter appended when a plaintext has an odd number of characters.
pub const PAD_LETTER: char = 'X';

/// Number of letters the cipher transforms at a time.
pub const BLOCK_LEN: usize = 2;

/// Encrypts `plaintext` under `key`.
///
/// Letters map case-insensitively to alphabet values (anything else maps to
/// 0, see [`letter_to_value`]); odd-length input is padded with one
/// [`PAD_LETTER`] before the transform. Each pair `(p1, p2)` becomes
/// `K·(p1, p2)` over the ring and is emitted as uppercase letters, in order.
/// Encryption places no invertibility requirement on the key, so this never
/// fails; the output length equals the padded input length.
pub fn encrypt(plaintext: &str, key: &KeyMatrix, ring: &Ring) -> String {
    let mut values: Vec<i64> = plaintext.chars().map(letter_to_value).collect();
    if values.len() % BLOCK_LEN != 0 {
        values.push(letter_to_value(PAD_LETTER));
    }

    let mut ciphertext = String::with_capacity(values.len());
    for (p1, p2) in values.into_iter().tuples() {
        let block = key.apply([p1, p2], ring);
        ciphertext.push(value_to_letter(block[0], ring));
        ciphertext.push(value_to_letter(block[1], ring));
    }

    ciphertext
}

/// Decrypts `ciphertext` under `key`.
///
/// Derives the inverse key once, then applies it pairwise. Decryption never
/// pads: the ciphertext must already divide into whole blocks.
///
/// # Errors
///
/// Returns `HillCryptoError::NoInverse` if the key is not invertible over
/// the ring, and `HillCryptoError::MalformedBlock` if the ciphertext length
/// is odd.
pub fn decrypt(
    ciphertext: &str,
    key: &KeyMatrix,
    ring: &Ring,
) -> Result<String, HillCryptoError> {
    let inverse = key.inverse(ring)?;

    let values: Vec<i64> = ciphertext.chars().map(letter_to_value).collect();
    if values.len() % BLOCK_LEN != 0 {
        return Err(HillCryptoError::MalformedBlock(format!(
            "Ciphertext length {} does not divide into {}-letter blocks",
            values.len(),
            BLOCK_LEN
        )));
    }

    let mut plaintext = String::with_capacity(values.len());
    for (c1, c2) in values.into_iter().tuples() {
        let block = inverse.apply([c1, c2], ring);
        plaintext.push(value_to_letter(block[0], ring));
        plaintext.push(value_to_letter(block[1], ring));
    }

    Ok(plaintext)
}
