//! Known-plaintext key recovery from a single block pair.

use crate::errors::HillCryptoError;
use crate::key::KeyMatrix;
use crate::preset::letter_to_value;
use crate::ring::Ring;

/// Derives a cipher key from one plaintext/ciphertext block pair.
///
/// Both blocks must be exactly two characters. The plaintext letters form
/// the symmetric matrix `P = [[p1, p2], [p2, p1]]`, the ciphertext letters
/// the matching `C`, and the key is `C · P^-1` with entries normalized.
///
/// A single pair constrains the key only under this symmetric layout; the
/// result is guaranteed to encrypt `plain_block` to `cipher_block`, but it
/// is not general two-block recovery and need not reproduce the key that
/// produced the pair.
///
/// # Errors
///
/// Returns `HillCryptoError::MalformedBlock` if either block is not exactly
/// two characters, and `HillCryptoError::NoInverse` if `P` is singular over
/// the ring (for instance when the two plaintext letters are equal).
pub fn recover_key(
    plain_block: &str,
    cipher_block: &str,
    ring: &Ring,
) -> Result<KeyMatrix, HillCryptoError> {
    if plain_block.chars().count() != 2 || cipher_block.chars().count() != 2 {
        return Err(HillCryptoError::MalformedBlock(format!(
            "Recovery blocks must be exactly 2 letters (got {} and {})",
            plain_block.chars().count(),
            cipher_block.chars().count()
        )));
    }

    let p: Vec<i64> = plain_block.chars().map(letter_to_value).collect();
    let c: Vec<i64> = cipher_block.chars().map(letter_to_value).collect();

    let P = KeyMatrix::new([[p[0], p[1]], [p[1], p[0]]]);
    let C = KeyMatrix::new([[c[0], c[1]], [c[1], c[0]]]);

    Ok(C.mul(&P.inverse(ring)?, ring))
}
