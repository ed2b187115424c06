//! One-time password module
//!
//! Handles secret decoding, time-step counters, HMAC, dynamic truncation,
//! code formatting and the HOTP/TOTP generators built from them.

pub mod base32;
pub mod counter;
pub mod format;
pub mod hmac;
pub mod hotp;
pub mod totp;
pub mod truncate;

pub use format::Digits;
pub use hmac::HashAlgorithm;
pub use totp::{generate, generate_current, generate_with, TotpParams};
