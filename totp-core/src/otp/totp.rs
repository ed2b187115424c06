//! TOTP (Time-based One-Time Password) generation
//!
//! Implements RFC 6238 on top of the HOTP pipeline. Every call runs the
//! whole chain from scratch: decode the secret, derive the time-step
//! counter, HMAC it, truncate and format. Settings are passed in
//! explicitly; nothing here reads ambient state other than the clock in
//! [`generate_current`].

use tracing::debug;

use super::base32::decode_secret;
use super::counter::{current_unix_time, time_counter, DEFAULT_TIME_STEP};
use super::format::Digits;
use super::hmac::HashAlgorithm;
use super::hotp::hotp;
use crate::error::OtpError;
use crate::types::TotpToken;

/// Settings a host holds between refresh ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotpParams {
    pub algorithm: HashAlgorithm,
    pub digits: Digits,
    /// Time step in seconds
    pub step: u64,
}

impl TotpParams {
    pub fn new(algorithm: HashAlgorithm, digits: Digits) -> Self {
        Self {
            algorithm,
            digits,
            step: DEFAULT_TIME_STEP,
        }
    }
}

impl Default for TotpParams {
    fn default() -> Self {
        Self::new(HashAlgorithm::default(), Digits::default())
    }
}

/// Generate the TOTP code for `secret` at `at_time` (seconds since the epoch)
///
/// Uses the standard 30-second step.
///
/// # Errors
///
/// Stages run in order and the first failure is returned with no code
/// produced: `InvalidEncoding` or `EmptySecret` from the secret,
/// `InvalidTime` from the time step, `UnsupportedDigitCount` from the
/// digit count, then `DigestTooShort` from truncation.
pub fn generate(
    secret: &str,
    algorithm: HashAlgorithm,
    digits: u32,
    at_time: i64,
) -> Result<TotpToken, OtpError> {
    let (key, counter) = key_and_counter(secret, at_time, DEFAULT_TIME_STEP)?;
    let digits = Digits::new(digits)?;
    generate_from_parts(&key, counter, &TotpParams::new(algorithm, digits))
}

/// Generate the TOTP code for `secret` using the system clock
pub fn generate_current(
    secret: &str,
    algorithm: HashAlgorithm,
    digits: u32,
) -> Result<TotpToken, OtpError> {
    let now = current_unix_time()?;
    generate(secret, algorithm, digits, now)
}

/// Generate a TOTP code from already-validated parameters
pub fn generate_with(params: &TotpParams, secret: &str, at_time: i64) -> Result<TotpToken, OtpError> {
    let (key, counter) = key_and_counter(secret, at_time, params.step)?;
    generate_from_parts(&key, counter, params)
}

/// Secret decoding and time-step derivation, the first two stages
fn key_and_counter(secret: &str, at_time: i64, step: u64) -> Result<(Vec<u8>, u64), OtpError> {
    let key = decode_secret(secret)?;
    let counter = time_counter(at_time, step)?;
    Ok((key, counter))
}

fn generate_from_parts(key: &[u8], counter: u64, params: &TotpParams) -> Result<TotpToken, OtpError> {
    debug!(
        algorithm = %params.algorithm,
        digits = params.digits.get(),
        step = params.step,
        counter,
        "generating TOTP"
    );

    hotp(key, counter, params.algorithm, params.digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RFC6238_SHA1_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

    #[test]
    fn test_rfc6238_sha1_vectors() {
        let cases = [
            (59, "94287082"),
            (1111111109, "07081804"),
            (1111111111, "14050471"),
            (1234567890, "89005924"),
            (2000000000, "69279037"),
            (20000000000, "65353130"),
        ];
        for (time, expected) in cases {
            let token = generate(RFC6238_SHA1_SECRET, HashAlgorithm::Sha1, 8, time).unwrap();
            assert_eq!(token.expose(), expected, "time {}", time);
        }
    }

    #[test]
    fn test_generate_default_params() {
        let token = generate_with(&TotpParams::default(), RFC6238_SHA1_SECRET, 59).unwrap();
        assert_eq!(token.expose(), "287082");
    }

    #[test]
    fn test_generate_custom_step() {
        // With a 60 second step, t=119 is counter 1, same as t=59 at 30 seconds
        let params = TotpParams {
            step: 60,
            ..TotpParams::new(HashAlgorithm::Sha1, Digits::new(8).unwrap())
        };
        let token = generate_with(&params, RFC6238_SHA1_SECRET, 119).unwrap();
        assert_eq!(token.expose(), "94287082");
    }

    #[test]
    fn test_generate_reports_first_failing_stage() {
        // A bad secret wins over a bad digit count
        assert_eq!(
            generate("JBSWY3DP1", HashAlgorithm::Sha1, 5, 59).unwrap_err(),
            OtpError::InvalidEncoding
        );
        // A bad time wins over a bad digit count
        assert_eq!(
            generate(RFC6238_SHA1_SECRET, HashAlgorithm::Sha1, 5, -1).unwrap_err(),
            OtpError::InvalidTime
        );
        // Digit count is checked once secret and time are valid
        assert_eq!(
            generate(RFC6238_SHA1_SECRET, HashAlgorithm::Sha1, 5, 59).unwrap_err(),
            OtpError::UnsupportedDigitCount { digits: 5 }
        );
    }

    #[test]
    fn test_generate_rejects_invalid_secret() {
        assert_eq!(
            generate("GEZDGNBVGY3TQOJ1", HashAlgorithm::Sha1, 6, 59).unwrap_err(),
            OtpError::InvalidEncoding
        );
    }

    #[test]
    fn test_generate_rejects_negative_time() {
        assert_eq!(
            generate(RFC6238_SHA1_SECRET, HashAlgorithm::Sha1, 6, -1).unwrap_err(),
            OtpError::InvalidTime
        );
    }

    #[test]
    fn test_generate_current() {
        let token = generate_current(RFC6238_SHA1_SECRET, HashAlgorithm::Sha256, 7).unwrap();
        assert_eq!(token.len(), 7);
        assert!(token.expose().chars().all(|c| c.is_ascii_digit()));
    }
}
