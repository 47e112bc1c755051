//! `cadenas-otp` — RFC 6238 TOTP / RFC 4226 HOTP core for CADENAS.
//!
//! Pure and synchronous: zero network, zero async, no persistence. Callers
//! own secret storage; this crate derives and checks codes.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod base32;
pub mod random;
pub mod secret;

pub mod config;
pub mod totp;
pub mod verify;

pub mod provisioning;

pub mod authenticator;

pub use authenticator::Authenticator;
pub use config::{
    CodeDigits, HashAlgorithm, OtpConfig, DEFAULT_DIGITS, DEFAULT_DISCREPANCY, MIN_DIGITS,
};
pub use error::OtpError;
pub use provisioning::provisioning_uri;
pub use random::{OsRandom, SecureRandomSource};
pub use secret::{
    create_secret, create_secret_with, DEFAULT_SECRET_LENGTH, MAX_SECRET_LENGTH,
    MIN_SECRET_LENGTH,
};
pub use totp::{compute_code, current_time_slice, get_code, time_slice_at, TIME_STEP};
pub use verify::{constant_time_eq, verify_code};
