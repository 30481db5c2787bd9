//! # Key Module
//!
//! Provides the [`KeyMatrix`] value type: the 2x2 cipher key and the modular
//! matrix operations built on it.

pub mod recovery;

use crate::errors::HillCryptoError;
use crate::ring::{Ring, gcd};

use serde::{Deserialize, Serialize};

/// A fixed two-letter block of alphabet values, the unit the cipher transforms.
pub type Block = [i64; 2];

/// A 2x2 cipher key over a finite ring.
///
/// Entries are plain integers in row-major order; construction does not
/// reduce them. Every operation that produces a key ([`KeyMatrix::inverse`],
/// [`KeyMatrix::mul`], [`KeyMatrix::random`], key recovery) normalizes its
/// result into `[0, modulus)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeyMatrix {
    pub entries: [[i64; 2]; 2],
}

impl KeyMatrix {
    /// Builds a key from row-major entries.
    pub fn new(entries: [[i64; 2]; 2]) -> Self {
        KeyMatrix { entries }
    }

    /// The identity key, which maps every block to itself.
    pub fn identity() -> Self {
        KeyMatrix {
            entries: [[1, 0], [0, 1]],
        }
    }

    /// Computes the determinant reduced by the ring modulus.
    ///
    /// The result is reduced with `%` only and may be negative. [`Ring::inv`]
    /// normalizes its argument, so the value can be passed on unchanged.
    /// Widens through `i128` so arbitrary entries cannot overflow.
    pub fn determinant(&self, ring: &Ring) -> i64 {
        let e = &self.entries;
        let det = e[0][0] as i128 * e[1][1] as i128 - e[0][1] as i128 * e[1][0] as i128;
        (det % ring.modulus() as i128) as i64
    }

    /// Computes the modular inverse key.
    ///
    /// Inverts the determinant, then scales the adjugate (diagonal swapped,
    /// off-diagonal negated) by it. Entries of the result are normalized
    /// into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NoInverse` if the determinant has no
    /// modular inverse (gcd(det, modulus) != 1).
    pub fn inverse(&self, ring: &Ring) -> Result<KeyMatrix, HillCryptoError> {
        let det_inv = ring.inv(self.determinant(ring))?;

        let e = &self.entries;
        Ok(KeyMatrix {
            entries: [
                [
                    ring.mul(e[1][1], det_inv),
                    ring.mul(ring.neg(e[0][1]), det_inv),
                ],
                [
                    ring.mul(ring.neg(e[1][0]), det_inv),
                    ring.mul(e[0][0], det_inv),
                ],
            ],
        })
    }

    /// Computes the key product `self · rhs` with entries normalized.
    pub fn mul(&self, rhs: &KeyMatrix, ring: &Ring) -> KeyMatrix {
        let a = &self.entries;
        let b = &rhs.entries;

        let mut entries = [[0i64; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                let mut sum = 0i64;
                for k in 0..2 {
                    let term = ring.mul(a[i][k], b[k][j]);
                    sum = ring.add(sum, term);
                }
                entries[i][j] = sum;
            }
        }
        KeyMatrix { entries }
    }

    /// Applies the key to one block: `c = K·p`, entries normalized.
    pub fn apply(&self, block: Block, ring: &Ring) -> Block {
        let e = &self.entries;
        [
            ring.add(ring.mul(e[0][0], block[0]), ring.mul(e[0][1], block[1])),
            ring.add(ring.mul(e[1][0], block[0]), ring.mul(e[1][1], block[1])),
        ]
    }

    /// Randomly generates a key that is invertible over `ring`.
    ///
    /// Samples normalized random entries and keeps the first matrix whose
    /// determinant is coprime with the modulus.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InternalError` if no invertible matrix is
    /// found within the attempt cap.
    pub fn random(ring: &Ring) -> Result<KeyMatrix, HillCryptoError> {
        let m = ring.modulus() as i64;
        let mut attempts = 0;

        loop {
            attempts += 1;
            if attempts > 100_000 {
                return Err(HillCryptoError::InternalError(
                    "Could not generate an invertible key matrix".into(),
                ));
            }

            let mut entries = [[0i64; 2]; 2];
            for row in &mut entries {
                for x in row.iter_mut() {
                    *x = ring.normalize(rand::random::<i64>());
                }
            }

            let key = KeyMatrix { entries };
            if gcd(ring.normalize(key.determinant(ring)), m) == 1 {
                return Ok(key);
            }
        }
    }
}
