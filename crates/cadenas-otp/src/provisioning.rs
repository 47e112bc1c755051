//! `otpauth://totp/` provisioning URIs.
//!
//! Builds the string an authenticator app imports, usually via a QR code.
//! Rendering the QR image is left to the caller.

use crate::config::HashAlgorithm;

/// Build `otpauth://totp/<label>?secret=<secret>[&issuer=<issuer>][&algorithm=<ALGO>]`.
///
/// `label` and `issuer` are percent-encoded. `secret` is expected to be
/// base32 and is copied verbatim. The `algorithm` parameter is emitted only
/// for non-default algorithms, since SHA1 is what apps assume when it is absent.
#[must_use]
pub fn provisioning_uri(
    label: &str,
    secret: &str,
    issuer: Option<&str>,
    algorithm: HashAlgorithm,
) -> String {
    let mut uri = format!(
        "otpauth://totp/{}?secret={secret}",
        urlencoding::encode(label)
    );
    if let Some(issuer) = issuer {
        uri.push_str("&issuer=");
        uri.push_str(&urlencoding::encode(issuer));
    }
    if algorithm != HashAlgorithm::Sha1 {
        uri.push_str("&algorithm=");
        uri.push_str(algorithm.as_str());
    }
    uri
}
