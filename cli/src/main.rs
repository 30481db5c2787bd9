use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use hill_crypto::cipher::{decrypt, encrypt};
use hill_crypto::key::KeyMatrix;
use hill_crypto::key::recovery::recover_key;
use hill_crypto::preset::alphabet_ring;

use log::debug;

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    match run(&mut input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &mut impl BufRead) -> Result<(), String> {
    let ring = alphabet_ring();

    println!("=== Hill Cipher (2x2) ===");
    println!("1. Encrypt");
    println!("2. Decrypt");
    println!("3. Recover key");
    println!("4. Generate key");
    print!("Choice: ");
    flush();

    let choice = read_word(input)?;
    debug!("menu choice: {choice}");

    match choice.as_str() {
        "1" => {
            let key = read_key(input)?;
            let text = prompt_word(input, "Plaintext: ")?;
            println!("Ciphertext: {}", encrypt(&text, &key, &ring));
        }
        "2" => {
            let key = read_key(input)?;
            let text = prompt_word(input, "Ciphertext: ")?;
            let plaintext = decrypt(&text, &key, &ring).map_err(|e| e.to_string())?;
            println!("Plaintext: {plaintext}");
        }
        "3" => {
            let plain = prompt_word(input, "Plaintext block (2 letters): ")?;
            let cipher = prompt_word(input, "Ciphertext block (2 letters): ")?;
            let key = recover_key(&plain, &cipher, &ring).map_err(|e| e.to_string())?;
            print_key(&key);
        }
        "4" => {
            let key = KeyMatrix::random(&ring).map_err(|e| e.to_string())?;
            print_key(&key);
        }
        other => return Err(format!("Invalid choice: {other}")),
    }

    Ok(())
}

/// Reads the four key entries as whitespace-separated integers in row-major
/// order, accepting them across any number of lines.
fn read_key(input: &mut impl BufRead) -> Result<KeyMatrix, String> {
    println!("Enter the 2x2 key matrix (four integers, row-major):");

    let mut values = Vec::with_capacity(4);
    while values.len() < 4 {
        for word in read_line(input)?.split_whitespace() {
            let value: i64 = word.parse().map_err(|_| format!("Not an integer: {word}"))?;
            values.push(value);
        }
    }
    if values.len() != 4 {
        return Err(format!("Expected 4 key entries, got {}", values.len()));
    }

    debug!("key entries: {values:?}");
    Ok(KeyMatrix::new([
        [values[0], values[1]],
        [values[2], values[3]],
    ]))
}

fn print_key(key: &KeyMatrix) {
    println!("Key matrix:");
    for row in &key.entries {
        println!("{} {}", row[0], row[1]);
    }
}

fn prompt_word(input: &mut impl BufRead, prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    flush();
    read_word(input)
}

/// Reads the next whitespace-delimited token, skipping blank lines.
fn read_word(input: &mut impl BufRead) -> Result<String, String> {
    loop {
        let line = read_line(input)?;
        if let Some(word) = line.split_whitespace().next() {
            return Ok(word.to_string());
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String, String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("Unexpected end of input".to_string());
    }
    Ok(line)
}

fn flush() {
    io::stdout().flush().ok();
}
