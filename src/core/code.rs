//! Verification code generation.
//!
//! A code is a base-36 millisecond timestamp block followed by four random
//! blocks drawn from an alphabet without look-alike characters, e.g.
//! `MB2ZK1QF-7HF2-QK4M-X9TB-R3CW`. The random part carries 80 bits
//! (16 symbols of 5 bits each). Uniqueness is enforced by the store, not here.

use chrono::Utc;
use rand::Rng;

/// Maximum number of inserts attempted before giving up on a code collision.
pub const MAX_CODE_ATTEMPTS: u32 = 5;

const RANDOM_BLOCKS: usize = 4;
const BLOCK_LEN: usize = 4;

/// 32 symbols: no 0/O, 1/I.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Generate a fresh verification code.
pub fn generate_code() -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let mut rng = rand::rng();

    let mut blocks = Vec::with_capacity(RANDOM_BLOCKS + 1);
    blocks.push(to_base36(millis));
    for _ in 0..RANDOM_BLOCKS {
        let block: String = (0..BLOCK_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        blocks.push(block);
    }
    blocks.join("-")
}

/// Canonical form of a code typed by a human: trimmed and upper-cased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

