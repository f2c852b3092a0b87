/// XOR stream codec for the recorded input log.
///
/// This is an obfuscation layer, NOT a security control: the key
/// repeats, and the salt comes from the wall clock in whole seconds, so
/// it is low-entropy and guessable.  The exact byte semantics are kept
/// for compatibility with existing `input_record.enc` artifacts — do
/// not swap in real cryptography without versioning the file format.
///
/// Stream layout: 4-byte little-endian salt, then one cipher byte per
/// plaintext byte:
///
///   out[i] = in[i] ^ password[i % password.len()] ^ ((salt >> (i % 32)) & 0xFF)
///
/// XOR is its own inverse, so the same transform decodes.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Width of the salt frame at the start of the encrypted stream.
pub const SALT_LEN: usize = 4;

#[derive(Debug)]
pub enum CipherError {
    /// The codec requires a non-empty password.
    EmptyPassword,
    Io(io::Error),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::EmptyPassword => write!(f, "empty password"),
            CipherError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for CipherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CipherError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CipherError {
    fn from(e: io::Error) -> Self {
        CipherError::Io(e)
    }
}

// ── Core transform ────────────────────────────────────────────────────────────

/// Apply the keystream at a fixed salt.  Self-inverse: running the
/// output back through with the same salt and password recovers the
/// input.
fn transform(data: &[u8], salt: u32, password: &[u8]) -> Result<Vec<u8>, CipherError> {
    if password.is_empty() {
        return Err(CipherError::EmptyPassword);
    }
    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &b)| b ^ password[i % password.len()] ^ (salt >> (i % 32)) as u8)
        .collect())
}

/// Seconds since the Unix epoch, truncated to 32 bits.  Deliberately
/// low-resolution — see the module note on security.
fn clock_salt() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}

// ── Public codec surface ──────────────────────────────────────────────────────

/// Encrypt `plaintext` under a fresh clock-derived salt.
pub fn encode(plaintext: &[u8], password: &[u8]) -> Result<(u32, Vec<u8>), CipherError> {
    let salt = clock_salt();
    let ciphertext = encode_with_salt(plaintext, salt, password)?;
    Ok((salt, ciphertext))
}

/// Encrypt under an explicit salt (tests inject a fixed one).
pub fn encode_with_salt(
    plaintext: &[u8],
    salt: u32,
    password: &[u8],
) -> Result<Vec<u8>, CipherError> {
    transform(plaintext, salt, password)
}

/// Recover the plaintext from a ciphertext and its salt.
pub fn decode(salt: u32, ciphertext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError> {
    transform(ciphertext, salt, password)
}

// ── File framing ──────────────────────────────────────────────────────────────

/// Write the salt frame plus ciphertext to `path`.  Nothing is written
/// when the password is empty.
pub fn encrypt_to_file(
    plaintext: &[u8],
    path: &Path,
    password: &[u8],
) -> Result<(), CipherError> {
    let (salt, ciphertext) = encode(plaintext, password)?;
    let mut bytes = Vec::with_capacity(SALT_LEN + ciphertext.len());
    bytes.extend_from_slice(&salt.to_le_bytes());
    bytes.extend_from_slice(&ciphertext);
    fs::write(path, bytes)?;
    Ok(())
}

/// Read an encrypted artifact back: split off the salt frame, decode
/// the rest.
pub fn decrypt_file(path: &Path, password: &[u8]) -> Result<Vec<u8>, CipherError> {
    let bytes = fs::read(path)?;
    if bytes.len() < SALT_LEN {
        return Err(CipherError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "encrypted file shorter than its salt frame",
        )));
    }
    let salt = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    decode(salt, &bytes[SALT_LEN..], password)
}
