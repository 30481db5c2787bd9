#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when a text block does not divide into whole two-letter blocks.
    #[error("MalformedBlock: {0}")]
    MalformedBlock(String),
    #[error("InternalError: {0}")]
    InternalError(String),
}
