//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};

use crate::error::OtpError;
use crate::otp::base32::decode_secret;

/// Wrapper for a Base32-encoded shared secret
///
/// This type ensures secrets are never accidentally logged or exposed
/// in debug output.
#[derive(Clone, Debug)]
pub struct OtpSecret(Secret<String>);

impl OtpSecret {
    /// Create a new OtpSecret from a Base32-encoded string
    pub fn new(secret: String) -> Self {
        Self(Secret::new(secret))
    }

    /// Expose the secret value (use with caution!)
    ///
    /// This should only be called when passing the secret to the
    /// generator functions.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Decode the secret into raw key bytes
    pub fn decode(&self) -> Result<Vec<u8>, OtpError> {
        decode_secret(self.expose())
    }
}

impl From<String> for OtpSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

/// Wrapper for generated one-time codes
///
/// Generated codes should also be treated as sensitive data
/// and never logged, even though they have a short lifetime.
#[derive(Clone, Debug)]
pub struct TotpToken(Secret<String>);

impl TotpToken {
    /// Create a new TotpToken from a generated token string
    pub fn new(token: String) -> Self {
        Self(Secret::new(token))
    }

    /// Expose the token value (use with caution!)
    ///
    /// This should only be called when sending the token to stdout
    /// or passing to external systems.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Number of digits in the code
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl From<String> for TotpToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl PartialEq for TotpToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for TotpToken {}
