//! # Key Pair
//!
//! Two signed integer keys, supplied once per run and applied identically to
//! every character of a text. The pair is immutable for the duration of one
//! transform and carries no per-character state.

/// The two cipher keys and their derived shift values.
///
/// Any pair of integers is valid, including zero and negative values; the
/// rotation primitive's floor-mod handles all signed magnitudes.
///
/// # Thread Safety
///
/// `KeyPair` is `Copy` and all methods are pure, so a single pair can be
/// shared freely across threads (see the `batch-ops` feature).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    key1: i64,
    key2: i64,
}

impl KeyPair {
    /// Create a key pair from two signed integers.
    #[must_use]
    pub const fn new(key1: i64, key2: i64) -> Self {
        Self { key1, key2 }
    }

    /// The first key.
    #[must_use]
    pub const fn key1(&self) -> i64 {
        self.key1
    }

    /// The second key.
    #[must_use]
    pub const fn key2(&self) -> i64 {
        self.key2
    }

    /// Derived shift value `key1 * key2`.
    ///
    /// Wrapping arithmetic keeps the derivation total over the full `i64`
    /// domain; encode and decode derive the same amount either way, so the
    /// round-trip inverse is unaffected.
    #[must_use]
    pub const fn product(&self) -> i64 {
        self.key1.wrapping_mul(self.key2)
    }

    /// Derived shift value `key1 + key2` (wrapping, see [`product`](Self::product)).
    #[must_use]
    pub const fn sum(&self) -> i64 {
        self.key1.wrapping_add(self.key2)
    }

    /// Derived shift value `key2 * key2` (wrapping, see [`product`](Self::product)).
    #[must_use]
    pub const fn key2_squared(&self) -> i64 {
        self.key2.wrapping_mul(self.key2)
    }
}
