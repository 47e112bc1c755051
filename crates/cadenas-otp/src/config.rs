//! Immutable OTP configuration.
//!
//! An [`OtpConfig`] is built once (in code or from JSON) and passed by
//! reference into every operation. Validation happens at construction, so a
//! config value in hand is always usable.

use std::fmt;
use std::str::FromStr;

use ring::hmac;
use serde::{Deserialize, Serialize};

use crate::error::OtpError;

/// Default digit count.
pub const DEFAULT_DIGITS: u8 = 6;

/// Smallest accepted digit count.
pub const MIN_DIGITS: u8 = 6;

/// Default verification window, in time steps on either side.
pub const DEFAULT_DISCREPANCY: u32 = 1;

// ── HashAlgorithm ───────────────────────────────────────────────────

/// HMAC algorithm used for code generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    /// HMAC-SHA1 (RFC 6238 default, what most authenticator apps expect).
    #[default]
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl HashAlgorithm {
    /// The name used in `otpauth://` URIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }

    pub(crate) fn to_ring_algorithm(self) -> hmac::Algorithm {
        match self {
            Self::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = OtpError;

    /// Parse an algorithm name, ignoring ASCII case. No fallback is applied.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Sha1, Self::Sha256, Self::Sha512]
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OtpError::InvalidArgument(format!("unsupported HMAC algorithm: {s:?}")))
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = OtpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(value: HashAlgorithm) -> Self {
        value.as_str().to_owned()
    }
}

// ── CodeDigits ──────────────────────────────────────────────────────

/// Number of digits in a generated code. Always at least [`MIN_DIGITS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CodeDigits(u8);

impl CodeDigits {
    /// Validate a digit count.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::InvalidArgument`] if `digits` is below [`MIN_DIGITS`].
    pub fn new(digits: u8) -> Result<Self, OtpError> {
        if digits < MIN_DIGITS {
            return Err(OtpError::InvalidArgument(format!(
                "code length must be at least {MIN_DIGITS}, got {digits}"
            )));
        }
        Ok(Self(digits))
    }

    /// The numeric digit count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// `10^digits`, or `None` when it does not fit in a `u64`.
    pub(crate) fn modulus(self) -> Option<u64> {
        10u64.checked_pow(u32::from(self.0))
    }
}

impl Default for CodeDigits {
    fn default() -> Self {
        Self(DEFAULT_DIGITS)
    }
}

impl TryFrom<u8> for CodeDigits {
    type Error = OtpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CodeDigits> for u8 {
    fn from(value: CodeDigits) -> Self {
        value.0
    }
}

// ── OtpConfig ───────────────────────────────────────────────────────

/// Code length, HMAC algorithm and verification window.
///
/// There are no setters: build a new value to change any field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct OtpConfig {
    digits: CodeDigits,
    algorithm: HashAlgorithm,
    discrepancy: u32,
}

impl OtpConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::InvalidArgument`] if `digits` is below [`MIN_DIGITS`].
    pub fn new(digits: u8, algorithm: HashAlgorithm, discrepancy: u32) -> Result<Self, OtpError> {
        Ok(Self {
            digits: CodeDigits::new(digits)?,
            algorithm,
            discrepancy,
        })
    }

    /// Parse a JSON configuration document.
    ///
    /// Keys are camelCase; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::InvalidArgument`] for malformed JSON, unknown keys
    /// or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, OtpError> {
        serde_json::from_str(json)
            .map_err(|e| OtpError::InvalidArgument(format!("invalid OTP configuration: {e}")))
    }

    /// Serialize to a JSON document accepted by [`Self::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::InvalidArgument`] if serialization fails.
    pub fn to_json(&self) -> Result<String, OtpError> {
        serde_json::to_string(self)
            .map_err(|e| OtpError::InvalidArgument(format!("cannot serialize OTP configuration: {e}")))
    }

    /// Number of digits in generated codes.
    #[must_use]
    pub const fn digits(&self) -> CodeDigits {
        self.digits
    }

    /// HMAC algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Time steps accepted on either side of the current one.
    #[must_use]
    pub const fn discrepancy(&self) -> u32 {
        self.discrepancy
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            digits: CodeDigits::default(),
            algorithm: HashAlgorithm::default(),
            discrepancy: DEFAULT_DISCREPANCY,
        }
    }
}
