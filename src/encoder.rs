// src/encoder.rs

//! High-level encoding facade.
//!
//! Core API: `encode(src, dst, &keys)?` for full stream encoding.
//! Pure helpers: `encode_byte`, `encode_char`, `encode_str`.

use crate::cipher::{transform_byte, transform_stream, Direction};
use crate::error::HalfrotError;
use crate::keys::KeyPair;
use std::io::{Read, Write};

/// Encode a single byte.
///
/// ASCII letters rotate within their 13-letter segment by the segment's
/// key-derived amount; every other byte is returned unchanged.
#[inline(always)]
#[must_use]
pub fn encode_byte(byte: u8, keys: &KeyPair) -> u8 {
    transform_byte(byte, keys, Direction::Forward)
}

/// Encode a single character. Non-ASCII characters pass through unchanged.
#[inline(always)]
#[must_use]
pub fn encode_char(ch: char, keys: &KeyPair) -> char {
    if ch.is_ascii() {
        encode_byte(ch as u8, keys) as char
    } else {
        ch
    }
}

/// Encode a whole text, preserving length and character order exactly.
#[must_use]
pub fn encode_str(text: &str, keys: &KeyPair) -> String {
    text.chars().map(|ch| encode_char(ch, keys)).collect()
}

/// Encode a byte stream: length-preserving, order-preserving, total.
///
/// Non-letter bytes (including every byte of a multi-byte UTF-8 sequence)
/// are copied through untouched.
pub fn encode<R, W>(input: R, output: W, keys: &KeyPair) -> Result<(), HalfrotError>
where
    R: Read,
    W: Write,
{
    transform_stream(input, output, keys, Direction::Forward)
}
