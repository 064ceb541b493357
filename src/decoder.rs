// src/decoder.rs

//! High-level decoding facade.
//!
//! Core API: `decode(src, dst, &keys)?` for full stream decoding.
//! Pure helpers: `decode_byte`, `decode_char`, `decode_str`.
//!
//! Decoding is the exact structural mirror of encoding: the same
//! classification of the ciphertext character, with the additive inverse of
//! each segment's shift amount. For every byte `b` and key pair `k`,
//! `decode_byte(encode_byte(b, &k), &k) == b`.

use crate::cipher::{transform_byte, transform_stream, Direction};
use crate::error::HalfrotError;
use crate::keys::KeyPair;
use std::io::{Read, Write};

/// Decode a single byte, the exact inverse of [`encode_byte`](crate::encode_byte).
#[inline(always)]
#[must_use]
pub fn decode_byte(byte: u8, keys: &KeyPair) -> u8 {
    transform_byte(byte, keys, Direction::Inverse)
}

/// Decode a single character. Non-ASCII characters pass through unchanged.
#[inline(always)]
#[must_use]
pub fn decode_char(ch: char, keys: &KeyPair) -> char {
    if ch.is_ascii() {
        decode_byte(ch as u8, keys) as char
    } else {
        ch
    }
}

/// Decode a whole text, preserving length and character order exactly.
#[must_use]
pub fn decode_str(text: &str, keys: &KeyPair) -> String {
    text.chars().map(|ch| decode_char(ch, keys)).collect()
}

/// Decode a byte stream: length-preserving, order-preserving, total.
pub fn decode<R, W>(input: R, output: W, keys: &KeyPair) -> Result<(), HalfrotError>
where
    R: Read,
    W: Write,
{
    transform_stream(input, output, keys, Direction::Inverse)
}
