//! Error types for the totpgen TOTP tool
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// The only message shown to a user when code generation fails.
///
/// The distinct [`OtpError`] kind is kept for logging and tests.
pub const USER_FACING_MESSAGE: &str = "unable to generate code";

/// Main error type for the totpgen application
#[derive(Error, Debug)]
pub enum TotpgenError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to OTP/TOTP operations
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// OTP/TOTP pipeline errors
///
/// Every stage of the pipeline fails fast with one of these kinds. None of
/// them is worth retrying since the computation is deterministic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    /// The secret text is not valid RFC 4648 base-32
    #[error("Invalid Base32 secret")]
    InvalidEncoding,

    /// The secret decoded to zero bytes
    #[error("Secret decodes to an empty key")]
    EmptySecret,

    /// Time before the Unix epoch, or a zero-length time step
    #[error("Time is outside the supported range")]
    InvalidTime,

    /// The hash primitive produced fewer bytes than dynamic truncation reads
    #[error("Digest too short for dynamic truncation: {len} bytes")]
    DigestTooShort { len: usize },

    /// Digit count outside of {6, 7, 8}
    #[error("Unsupported digit count: {digits} (expected 6, 7 or 8)")]
    UnsupportedDigitCount { digits: u32 },
}

impl OtpError {
    /// Whether the failure was caused by caller input.
    ///
    /// `DigestTooShort` is an internal invariant violation between a hash
    /// primitive and truncation, never something the user can fix.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, OtpError::DigestTooShort { .. })
    }

    /// Message safe to show to an end user, without internal detail.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_MESSAGE
    }
}
