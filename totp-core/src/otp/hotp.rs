//! HOTP (RFC 4226) generation
//!
//! HMAC over an 8-byte counter, dynamically truncated and rendered as a
//! fixed-width decimal code. TOTP is this with a time-derived counter.

use tracing::trace;

use super::counter::encode_counter;
use super::format::{format_code, Digits};
use super::hmac::{hmac, HashAlgorithm};
use super::truncate::dynamic_truncate;
use crate::error::OtpError;
use crate::types::TotpToken;

/// Compute the truncated 31-bit HOTP value, before reduction to digits
///
/// # Errors
///
/// Returns `OtpError::EmptySecret` for an empty key, or
/// `OtpError::DigestTooShort` if the primitive's digest cannot be truncated.
pub fn raw_hotp(key: &[u8], counter: u64, algorithm: HashAlgorithm) -> Result<u32, OtpError> {
    if key.is_empty() {
        return Err(OtpError::EmptySecret);
    }

    let message = encode_counter(counter);
    let digest = hmac(algorithm, key, &message);
    trace!(%algorithm, digest_len = digest.len(), "computed hmac digest");

    dynamic_truncate(&digest)
}

/// Compute an HOTP code for raw key bytes and an explicit counter
pub fn hotp(
    key: &[u8],
    counter: u64,
    algorithm: HashAlgorithm,
    digits: Digits,
) -> Result<TotpToken, OtpError> {
    let value = raw_hotp(key, counter, algorithm)?;
    Ok(TotpToken::new(format_code(value, digits)))
}
