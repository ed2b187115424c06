//! Configuration module
//!
//! Handles loading and saving generator defaults from TOML files.
//! Secrets are never part of the configuration.

use serde::{Deserialize, Serialize};

use crate::error::OtpError;
use crate::otp::{Digits, HashAlgorithm, TotpParams};

pub mod toml_config;

/// Generator defaults
///
/// Contains the non-sensitive settings used when the command line does
/// not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpConfig {
    /// Hash algorithm (SHA1, SHA256 or SHA512)
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Number of digits in generated codes (6, 7 or 8)
    #[serde(default = "default_digits")]
    pub digits: u32,
}

fn default_digits() -> u32 {
    Digits::default().get()
}

impl TotpConfig {
    /// Create a new configuration
    pub fn new(algorithm: HashAlgorithm, digits: u32) -> Self {
        Self { algorithm, digits }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if Digits::new(self.digits).is_err() {
            return Err(format!(
                "Digits must be between {} and {}, got {}",
                Digits::MIN,
                Digits::MAX,
                self.digits
            ));
        }

        Ok(())
    }

    /// Generator parameters described by this configuration
    ///
    /// # Errors
    ///
    /// Returns `OtpError::UnsupportedDigitCount` if `digits` is not 6, 7 or 8.
    pub fn params(&self) -> Result<TotpParams, OtpError> {
        let digits = Digits::new(self.digits)?;
        Ok(TotpParams::new(self.algorithm, digits))
    }
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            digits: default_digits(),
        }
    }
}
