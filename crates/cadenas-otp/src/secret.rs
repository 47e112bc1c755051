//! Random base32 secret generation.
//!
//! Each random byte is sampled straight into the alphabet by its low five
//! bits, so a secret of `n` characters consumes `n` random bytes and carries
//! `5n` bits of entropy. The output never contains padding.

use zeroize::Zeroizing;

use crate::base32::symbol;
use crate::error::OtpError;
use crate::random::{OsRandom, SecureRandomSource};

/// Shortest accepted secret (80 bits).
pub const MIN_SECRET_LENGTH: usize = 16;

/// Longest accepted secret (640 bits).
pub const MAX_SECRET_LENGTH: usize = 128;

/// Default secret length.
pub const DEFAULT_SECRET_LENGTH: usize = 16;

/// Create a random base32 secret of `length` characters using the OS CSPRNG.
///
/// # Errors
///
/// - [`OtpError::InvalidArgument`] if `length` is outside
///   [`MIN_SECRET_LENGTH`]..=[`MAX_SECRET_LENGTH`]
/// - [`OtpError::Unavailable`] if the OS random source fails
pub fn create_secret(length: usize) -> Result<String, OtpError> {
    create_secret_with(length, &OsRandom)
}

/// Create a random base32 secret of `length` characters from `source`.
///
/// # Errors
///
/// - [`OtpError::InvalidArgument`] if `length` is outside
///   [`MIN_SECRET_LENGTH`]..=[`MAX_SECRET_LENGTH`]
/// - [`OtpError::Unavailable`] propagated from `source`
pub fn create_secret_with(
    length: usize,
    source: &(impl SecureRandomSource + ?Sized),
) -> Result<String, OtpError> {
    if !(MIN_SECRET_LENGTH..=MAX_SECRET_LENGTH).contains(&length) {
        return Err(OtpError::InvalidArgument(format!(
            "bad secret length: must be between {MIN_SECRET_LENGTH} and {MAX_SECRET_LENGTH}, got {length}"
        )));
    }

    let mut random = Zeroizing::new(vec![0u8; length]);
    source.fill(&mut random)?;

    Ok(random.iter().map(|&b| symbol(u64::from(b))).collect())
}
