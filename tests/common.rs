//! tests/common.rs
//! Common constants and utilities shared across test files

use halfrot::KeyPair;

/// Standard key pair used by the concrete scenarios in the test suite
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEYS: KeyPair = KeyPair::new(3, 4);

/// Key range exercised by the randomized round-trip tests
#[allow(dead_code)] // Used across multiple test files
pub const KEY_RANGE: std::ops::RangeInclusive<i64> = -1000..=1000;

/// Common test text used across multiple tests
#[allow(dead_code)] // Used across multiple test files
pub const TEST_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

/// Key pairs covering sign and magnitude corners
#[allow(dead_code)] // Used across multiple test files
pub const CORNER_KEYS: &[(i64, i64)] = &[
    (0, 0),
    (1, 0),
    (0, 1),
    (3, 4),
    (-3, 4),
    (3, -4),
    (-3, -4),
    (13, 13),
    (-13, -13),
    (1000, -1000),
    (-1000, 1000),
];
