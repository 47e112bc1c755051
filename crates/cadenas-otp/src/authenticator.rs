//! Configured entry point combining secret generation, code generation and
//! verification.
//!
//! An [`Authenticator`] holds an immutable [`OtpConfig`] and a random source.
//! Changing the digit count or algorithm means building a new value, so a
//! shared instance never changes under an in-flight computation.

use crate::config::OtpConfig;
use crate::error::OtpError;
use crate::provisioning::provisioning_uri;
use crate::random::{OsRandom, SecureRandomSource};
use crate::secret::create_secret_with;
use crate::totp::get_code;
use crate::verify::verify_code;

/// TOTP authenticator bound to one configuration.
#[derive(Clone, Debug)]
pub struct Authenticator<R = OsRandom> {
    config: OtpConfig,
    random: R,
}

impl Authenticator<OsRandom> {
    /// Create an authenticator backed by the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Unavailable`] if the OS random source is unusable.
    pub fn new(config: OtpConfig) -> Result<Self, OtpError> {
        let random = OsRandom::probe()?;
        tracing::debug!(
            digits = config.digits().get(),
            algorithm = %config.algorithm(),
            discrepancy = config.discrepancy(),
            "authenticator ready"
        );
        Ok(Self { config, random })
    }
}

impl<R: SecureRandomSource> Authenticator<R> {
    /// Create an authenticator drawing secrets from `random`.
    pub const fn with_random_source(config: OtpConfig, random: R) -> Self {
        Self { config, random }
    }

    /// The configuration every operation uses.
    #[must_use]
    pub const fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Create a random base32 secret of `length` characters.
    ///
    /// # Errors
    ///
    /// - [`OtpError::InvalidArgument`] if `length` is outside 16..=128
    /// - [`OtpError::Unavailable`] if the random source fails
    pub fn create_secret(&self, length: usize) -> Result<String, OtpError> {
        create_secret_with(length, &self.random)
    }

    /// The code for `secret` at `time_slice` (current step when `None`).
    ///
    /// # Errors
    ///
    /// See [`get_code`].
    pub fn get_code(&self, secret: &str, time_slice: Option<u64>) -> Result<String, OtpError> {
        get_code(&self.config, secret, time_slice)
    }

    /// Verify `code` within the configured discrepancy window.
    ///
    /// # Errors
    ///
    /// See [`verify_code`].
    pub fn verify_code(
        &self,
        secret: &str,
        code: &str,
        time_slice: Option<u64>,
    ) -> Result<bool, OtpError> {
        verify_code(&self.config, secret, code, self.config.discrepancy(), time_slice)
    }

    /// Verify `code` within an explicit window of `discrepancy` steps.
    ///
    /// # Errors
    ///
    /// See [`verify_code`].
    pub fn verify_code_within(
        &self,
        secret: &str,
        code: &str,
        discrepancy: u32,
        time_slice: Option<u64>,
    ) -> Result<bool, OtpError> {
        verify_code(&self.config, secret, code, discrepancy, time_slice)
    }

    /// `otpauth://` URI for `secret`, naming the configured algorithm.
    #[must_use]
    pub fn provisioning_uri(&self, label: &str, secret: &str, issuer: Option<&str>) -> String {
        provisioning_uri(label, secret, issuer, self.config.algorithm())
    }
}
