use hill_crypto::cipher::{decrypt, encrypt};
use hill_crypto::errors::HillCryptoError;
use hill_crypto::key::KeyMatrix;
use hill_crypto::key::recovery::recover_key;
use hill_crypto::preset::alphabet_ring;

#[test]
fn happy_flow() -> Result<(), HillCryptoError> {
    let ring = alphabet_ring();
    let key = KeyMatrix::new([[3, 3], [2, 5]]);

    let ciphertext = encrypt("HELLO", &key, &ring);
    assert_eq!(ciphertext.len(), 6);

    let plaintext = decrypt(&ciphertext, &key, &ring)?;
    assert_eq!(plaintext, "HELLOX");

    Ok(())
}

#[test]
fn identity_key_round_trip() -> Result<(), HillCryptoError> {
    let ring = alphabet_ring();
    let key = KeyMatrix::identity();

    assert_eq!(encrypt("ATTACKATDAWN", &key, &ring), "ATTACKATDAWN");
    assert_eq!(decrypt("ATTACKATDAWN", &key, &ring)?, "ATTACKATDAWN");

    Ok(())
}

#[test]
fn non_invertible_key_cannot_decrypt() {
    let ring = alphabet_ring();
    let key = KeyMatrix::new([[2, 0], [0, 1]]);

    // Encryption still goes through; only decryption needs the inverse.
    let ciphertext = encrypt("HELLO", &key, &ring);
    assert_eq!(ciphertext.len(), 6);

    assert!(matches!(
        decrypt(&ciphertext, &key, &ring),
        Err(HillCryptoError::NoInverse(_))
    ));
}

#[test]
fn recovered_key_re_encrypts_the_pair() -> Result<(), HillCryptoError> {
    let ring = alphabet_ring();
    let key = recover_key("HI", "TC", &ring)?;

    assert_eq!(encrypt("HI", &key, &ring), "TC");

    Ok(())
}

#[test]
fn recovery_rejects_bad_blocks() {
    let ring = alphabet_ring();

    assert!(recover_key("H", "TC", &ring).is_err());
    assert!(recover_key("HI", "TCA", &ring).is_err());
    // Equal plaintext letters make the plaintext matrix singular.
    assert!(recover_key("AA", "TC", &ring).is_err());
}

#[test]
fn generated_key_round_trips() -> Result<(), HillCryptoError> {
    let ring = alphabet_ring();
    let key = KeyMatrix::random(&ring)?;

    let ciphertext = encrypt("MEETMEATMIDNIGHT", &key, &ring);
    assert_eq!(decrypt(&ciphertext, &key, &ring)?, "MEETMEATMIDNIGHT");

    Ok(())
}

#[test]
fn key_matrix_serde_round_trip() -> Result<(), serde_json::Error> {
    let key = KeyMatrix::new([[3, 3], [2, 5]]);

    let encoded = serde_json::to_string(&key)?;
    let decoded: KeyMatrix = serde_json::from_str(&encoded)?;
    assert_eq!(decoded, key);

    Ok(())
}
