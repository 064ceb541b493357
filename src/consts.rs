//! # Constants
//!
//! This module defines the alphabet-segment constants used throughout the
//! library for classification and rotation.

/// Length of one rotation segment.
///
/// The cipher splits each case of the ASCII alphabet into two halves of 13
/// letters and rotates strictly within a half, so every segment has exactly
/// 13 positions.
pub const SEGMENT_LEN: i64 = 13;

/// First letter of the lowercase first-half segment (`a..=m`).
pub const LOWER_FIRST_ORIGIN: u8 = b'a';

/// First letter of the lowercase second-half segment (`n..=z`).
pub const LOWER_SECOND_ORIGIN: u8 = b'n';

/// First letter of the uppercase first-half segment (`A..=M`).
pub const UPPER_FIRST_ORIGIN: u8 = b'A';

/// First letter of the uppercase second-half segment (`N..=Z`).
pub const UPPER_SECOND_ORIGIN: u8 = b'N';
