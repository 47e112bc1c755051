//! RFC 4226 HOTP code derivation and RFC 6238 time slicing.
//!
//! [`compute_code`] is the pure HOTP core over raw secret bytes.
//! [`get_code`] adds base32 decoding and the 30-second clock on top of it.

use std::time::{SystemTime, UNIX_EPOCH};

use ring::hmac;
use zeroize::Zeroizing;

use crate::base32;
use crate::config::{CodeDigits, HashAlgorithm, OtpConfig};
use crate::error::OtpError;

/// TOTP time step in seconds (RFC 6238 §4). Not configurable.
pub const TIME_STEP: u64 = 30;

// ── HOTP (RFC 4226) ────────────────────────────────────────────────

/// Derive the code for `counter` per RFC 4226.
///
/// Pure and deterministic. An empty `secret` is a valid HMAC key and yields
/// a well-defined code.
#[must_use = "OTP code should be used or stored"]
pub fn compute_code(
    secret: &[u8],
    counter: u64,
    digits: CodeDigits,
    algorithm: HashAlgorithm,
) -> String {
    // HMAC(K, C) where C is counter as 8-byte big-endian (RFC 4226 §5.2).
    let key = hmac::Key::new(algorithm.to_ring_algorithm(), secret);
    let tag = hmac::sign(&key, &counter.to_be_bytes());
    let mac = tag.as_ref();

    // Dynamic Truncation (RFC 4226 §5.3).
    // Tags are at least 20 bytes and offset is at most 15, so the window fits.
    let offset = usize::from(mac.last().copied().unwrap_or_default() & 0x0F);
    let binary_code = u32::from_be_bytes([
        mac[offset] & 0x7F,
        mac[offset.wrapping_add(1)],
        mac[offset.wrapping_add(2)],
        mac[offset.wrapping_add(3)],
    ]);

    // Beyond 19 digits 10^digits overflows u64; the value is already smaller.
    let value = u64::from(binary_code);
    let code = digits
        .modulus()
        .and_then(|modulus| value.checked_rem(modulus))
        .unwrap_or(value);
    let width = usize::from(digits.get());

    format!("{code:0>width$}")
}

// ── TOTP (RFC 6238) ────────────────────────────────────────────────

/// The current time step: `floor(unix_seconds / 30)`.
///
/// # Errors
///
/// Returns [`OtpError::Unavailable`] if the system clock reads earlier than
/// the Unix epoch.
pub fn current_time_slice() -> Result<u64, OtpError> {
    let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).map_err(|e| {
        tracing::warn!(error = %e, "system clock is before the Unix epoch");
        OtpError::Unavailable(format!("system clock is before the Unix epoch: {e}"))
    })?;
    Ok(time_slice_at(since_epoch.as_secs()))
}

/// The time step containing `unix_seconds`.
#[must_use]
pub const fn time_slice_at(unix_seconds: u64) -> u64 {
    // TIME_STEP is a non-zero constant.
    #[allow(clippy::arithmetic_side_effects)]
    let slice = unix_seconds / TIME_STEP;
    slice
}

/// Compute the code for a base32 `secret` at `time_slice`.
///
/// When `time_slice` is `None` the current time step is used. Digit count
/// and algorithm come from `config`.
///
/// # Errors
///
/// - [`OtpError::Decode`] if `secret` is not valid base32
/// - [`OtpError::Unavailable`] if `time_slice` is `None` and the clock is unusable
pub fn get_code(
    config: &OtpConfig,
    secret: &str,
    time_slice: Option<u64>,
) -> Result<String, OtpError> {
    let counter = match time_slice {
        Some(slice) => slice,
        None => current_time_slice()?,
    };
    let key = Zeroizing::new(base32::decode(secret)?);
    Ok(compute_code(&key, counter, config.digits(), config.algorithm()))
}
