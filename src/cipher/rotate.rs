//! src/cipher/rotate.rs
//! The rotation primitive. Every shift rule in the cipher is this one
//! function with a different origin and amount.

use crate::consts::SEGMENT_LEN;

/// Rotate a letter within its fixed 13-letter segment by a signed amount.
///
/// `origin` is the first letter of the segment (`b'a'`, `b'n'`, `b'A'` or
/// `b'N'`) and `byte` must lie inside that segment. The index is computed as
/// `((byte - origin) + (amount mod 13)) mod 13` with floor-mod semantics
/// ([`i64::rem_euclid`]), so the result is in `[0, 13)` for any signed
/// `amount`, including negative values of arbitrary magnitude.
///
/// # Panics (by contract)
///
/// Debug builds panic if `byte` lies below `origin`. Callers always pass a
/// byte pre-classified into the segment that `origin` starts, so this is
/// never hit through the public API.
#[inline(always)]
#[must_use]
pub fn rotate(byte: u8, origin: u8, amount: i64) -> u8 {
    let offset = (byte - origin) as i64;
    let index = (offset + amount.rem_euclid(SEGMENT_LEN)).rem_euclid(SEGMENT_LEN);
    origin + index as u8
}
