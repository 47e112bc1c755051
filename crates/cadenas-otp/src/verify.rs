//! TOTP verification over a window of time steps.

use zeroize::Zeroizing;

use crate::base32;
use crate::config::OtpConfig;
use crate::error::OtpError;
use crate::totp::{compute_code, current_time_slice};

/// Constant-time byte comparison for OTP codes.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation to avoid short-circuit timing leaks.
///
/// The early return on length mismatch is fine: the expected digit count is
/// public. Only the code value is protected.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    std::hint::black_box(diff) == 0
}

/// Check `candidate` against the codes for `time_slice ± discrepancy`.
///
/// Offsets are tried in ascending order from `-discrepancy` to
/// `+discrepancy`; the first match returns `true`. Offsets that would take
/// the counter outside `u64` are skipped. When `time_slice` is
/// `None` the current time step is used.
///
/// A candidate whose length differs from the configured digit count is
/// rejected before any decoding or HMAC work.
///
/// # Errors
///
/// - [`OtpError::Decode`] if `secret` is not valid base32
/// - [`OtpError::Unavailable`] if the clock is needed and unusable
#[must_use = "verification result should be checked"]
pub fn verify_code(
    config: &OtpConfig,
    secret: &str,
    candidate: &str,
    discrepancy: u32,
    time_slice: Option<u64>,
) -> Result<bool, OtpError> {
    if candidate.len() != usize::from(config.digits().get()) {
        return Ok(false);
    }

    let slice = match time_slice {
        Some(slice) => slice,
        None => current_time_slice()?,
    };
    let key = Zeroizing::new(base32::decode(secret)?);

    let window = i64::from(discrepancy);
    for offset in window.saturating_neg()..=window {
        let Some(counter) = slice.checked_add_signed(offset) else {
            continue;
        };
        let expected = compute_code(&key, counter, config.digits(), config.algorithm());
        if constant_time_eq(expected.as_bytes(), candidate.as_bytes()) {
            tracing::trace!(offset, "OTP accepted");
            return Ok(true);
        }
    }

    tracing::trace!(discrepancy, "OTP rejected: no match in window");
    Ok(false)
}
