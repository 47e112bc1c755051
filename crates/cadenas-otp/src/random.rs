//! Cryptographically secure randomness for secret generation.
//!
//! All randomness flows through [`SecureRandomSource`]. The production source
//! is [`OsRandom`] (the OS CSPRNG behind `rand::rngs::OsRng`). There is no
//! fallback: if the OS source cannot be read, generation fails.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::OtpError;

/// A source of cryptographically secure random bytes.
pub trait SecureRandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Unavailable`] if the source cannot produce bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), OtpError>;
}

/// The operating system CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl OsRandom {
    /// Check that the OS source is usable and return a handle to it.
    ///
    /// Performs a single one-byte draw so that a missing source is reported
    /// at startup rather than on the first secret generation.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Unavailable`] if the OS source fails.
    pub fn probe() -> Result<Self, OtpError> {
        let mut probe = [0u8; 1];
        Self.fill(&mut probe)?;
        Ok(Self)
    }
}

impl SecureRandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), OtpError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            tracing::warn!(error = %e, "OS random source failed");
            OtpError::Unavailable(format!("no source of secure random: {e}"))
        })
    }
}
