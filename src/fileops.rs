//! src/fileops.rs
//! File-level collaborators: thin glue around the streaming transform.
//!
//! These functions carry no cipher logic of their own: they open scoped file
//! handles, run [`encode`](crate::encode)/[`decode`](crate::decode) over
//! them, and report the outcome. Paths are explicit configuration passed by
//! the caller, never process-wide state.

use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::HalfrotError;
use crate::keys::KeyPair;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Encode a whole file into a new destination file.
///
/// Both handles are scoped to this call and released on success and failure
/// alike. The destination is created (or truncated) before writing.
pub fn encode_file<P, Q>(source: P, destination: Q, keys: &KeyPair) -> Result<(), HalfrotError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let reader = BufReader::new(File::open(source.as_ref())?);
    let mut writer = BufWriter::new(File::create(destination.as_ref())?);
    encode(reader, &mut writer, keys)?;
    writer.flush()?;
    info!(
        "encoded {} -> {}",
        source.as_ref().display(),
        destination.as_ref().display()
    );
    Ok(())
}

/// Decode a whole file into a new destination file.
pub fn decode_file<P, Q>(source: P, destination: Q, keys: &KeyPair) -> Result<(), HalfrotError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let reader = BufReader::new(File::open(source.as_ref())?);
    let mut writer = BufWriter::new(File::create(destination.as_ref())?);
    decode(reader, &mut writer, keys)?;
    writer.flush()?;
    info!(
        "decoded {} -> {}",
        source.as_ref().display(),
        destination.as_ref().display()
    );
    Ok(())
}

/// Compare two files for exact byte equality.
///
/// A mismatch is a reported boolean, never an error; only failing to read
/// either file is an error.
pub fn verify_files<P, Q>(left: P, right: Q) -> Result<bool, HalfrotError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let left_bytes = fs::read(left.as_ref())?;
    let right_bytes = fs::read(right.as_ref())?;
    let same = left_bytes == right_bytes;
    if same {
        info!(
            "verified: {} and {} match",
            left.as_ref().display(),
            right.as_ref().display()
        );
    } else {
        warn!(
            "verification failed: {} and {} differ",
            left.as_ref().display(),
            right.as_ref().display()
        );
    }
    Ok(same)
}

/// Path configuration for a full encode → decode → verify round trip.
///
/// All paths are plain configuration on the value; there are no global
/// path constants.
#[derive(Debug, Clone)]
pub struct RoundTripConfig {
    source: PathBuf,
    encoded: PathBuf,
    decoded: PathBuf,
}

impl RoundTripConfig {
    /// Create a configuration from explicit paths.
    #[must_use]
    pub fn new<P, Q, R>(source: P, encoded: Q, decoded: R) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
        R: Into<PathBuf>,
    {
        Self {
            source: source.into(),
            encoded: encoded.into(),
            decoded: decoded.into(),
        }
    }

    /// Replace the source (plaintext) path.
    #[must_use]
    pub fn with_source<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = path.into();
        self
    }

    /// Replace the encoded-output path.
    #[must_use]
    pub fn with_encoded<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.encoded = path.into();
        self
    }

    /// Replace the decoded-output path.
    #[must_use]
    pub fn with_decoded<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.decoded = path.into();
        self
    }

    /// The source (plaintext) path.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The encoded-output path.
    #[must_use]
    pub fn encoded(&self) -> &Path {
        &self.encoded
    }

    /// The decoded-output path.
    #[must_use]
    pub fn decoded(&self) -> &Path {
        &self.decoded
    }

    /// Encode the source, decode the result, and verify the decoded file
    /// matches the source byte-for-byte.
    ///
    /// Returns the verification outcome; `false` means the round trip did
    /// not reproduce the source exactly.
    pub fn round_trip(&self, keys: &KeyPair) -> Result<bool, HalfrotError> {
        encode_file(&self.source, &self.encoded, keys)?;
        decode_file(&self.encoded, &self.decoded, keys)?;
        verify_files(&self.source, &self.decoded)
    }
}

impl Default for RoundTripConfig {
    fn default() -> Self {
        Self::new("raw_text.txt", "encrypted_text.txt", "decrypted_text.txt")
    }
}
