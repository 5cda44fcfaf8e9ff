//! Caesar shift over the ASCII alphabets.
//!
//! Uppercase and lowercase letters rotate within their own range. Every other
//! character, including non-ASCII letters, is copied unchanged, so the output
//! always has as many characters as the input.

use crate::domain::model::{Shift, ALPHABET_LEN};

/// Applies `shift` to every ASCII letter of `plaintext`.
pub fn encode(plaintext: &str, shift: i64) -> String {
    apply(plaintext, Shift::new(shift))
}

/// Reverses [`encode`] for the same shift.
pub fn decode(ciphertext: &str, shift: i64) -> String {
    apply(ciphertext, Shift::new(shift).inverse())
}

fn apply(text: &str, shift: Shift) -> String {
    let offset = shift.normalized();
    text.chars().map(|c| shift_char(c, offset)).collect()
}

fn shift_char(c: char, offset: u8) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };
    // c is ASCII here
    let index = c as u8 - base;
    char::from(base + (index + offset) % ALPHABET_LEN)
}
