//! tests/batch_ops_tests.rs
//! Parallel batch encode/decode (requires the `batch-ops` feature)

#![cfg(feature = "batch-ops")]

mod common;
use common::TEST_KEYS;

use halfrot::{decode_batch, encode_batch, encode_str};
use std::io::Cursor;

#[test]
fn batch_encode_matches_single_encode() {
    let texts = [
        "first document",
        "Second Document!",
        "THIRD, with 123 digits",
        "",
    ];

    let mut batch: Vec<(Cursor<&[u8]>, Vec<u8>)> = texts
        .iter()
        .map(|text| (Cursor::new(text.as_bytes()), Vec::new()))
        .collect();

    encode_batch(&mut batch, &TEST_KEYS).unwrap();

    for (text, (_, output)) in texts.iter().zip(&batch) {
        assert_eq!(output, encode_str(text, &TEST_KEYS).as_bytes());
    }
}

#[test]
fn batch_roundtrip_many_inputs() {
    let inputs: Vec<Vec<u8>> = (0..64)
        .map(|i| format!("document number {i}, padded with text").into_bytes())
        .collect();

    let mut encode_stage: Vec<(Cursor<&[u8]>, Vec<u8>)> = inputs
        .iter()
        .map(|input| (Cursor::new(input.as_slice()), Vec::new()))
        .collect();
    encode_batch(&mut encode_stage, &TEST_KEYS).unwrap();

    let encoded: Vec<Vec<u8>> = encode_stage.into_iter().map(|(_, out)| out).collect();

    let mut decode_stage: Vec<(Cursor<&[u8]>, Vec<u8>)> = encoded
        .iter()
        .map(|input| (Cursor::new(input.as_slice()), Vec::new()))
        .collect();
    decode_batch(&mut decode_stage, &TEST_KEYS).unwrap();

    for (input, (_, decoded)) in inputs.iter().zip(&decode_stage) {
        assert_eq!(decoded, input);
    }
}
