//! Error types for `cadenas-otp`.

use thiserror::Error;

/// Errors produced by secret generation, base32 decoding and OTP operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OtpError {
    /// A caller-supplied parameter is out of range or unsupported
    /// (secret length, digit count, algorithm name, configuration document).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A platform capability is missing: no cryptographically secure random
    /// source, or a system clock that cannot produce a Unix time.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// Malformed base32 secret (bad padding, inconsistent final block,
    /// character outside the RFC 4648 alphabet).
    #[error("base32 decode error: {0}")]
    Decode(String),
}
