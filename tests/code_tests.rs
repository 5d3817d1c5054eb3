use rvolunteer::core::code::{generate_code, normalize_code};
use std::collections::HashSet;

const ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[test]
fn test_code_shape() {
    let code = generate_code();
    let blocks: Vec<&str> = code.split('-').collect();
    assert_eq!(blocks.len(), 5, "unexpected code {code}");

    assert!(!blocks[0].is_empty());
    assert!(
        blocks[0]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    );

    for b in &blocks[1..] {
        assert_eq!(b.len(), 4);
        assert!(b.chars().all(|c| ALPHABET.contains(c)), "bad block {b}");
    }

    // already canonical
    assert_eq!(normalize_code(&code), code);
}

#[test]
fn test_codes_do_not_repeat() {
    let codes: HashSet<String> = (0..2000).map(|_| generate_code()).collect();
    assert_eq!(codes.len(), 2000);
}

#[test]
fn test_normalize_code() {
    assert_eq!(normalize_code("  mb2zk1qf-7hf2 \n"), "MB2ZK1QF-7HF2");
    assert_eq!(normalize_code("   "), "");
}
