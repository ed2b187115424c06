//! Strict Base32 secret decoding
//!
//! Secrets are accepted only in canonical RFC 4648 form: uppercase
//! standard alphabet, with `=` padding allowed only as a trailing run.
//! No whitespace stripping or case folding happens here; a secret that
//! is not already canonical is rejected instead of being repaired.

use data_encoding::{BASE32, BASE32_NOPAD};
use tracing::trace;

use crate::error::OtpError;

const PAD: char = '=';

/// Check that padding, if any, only appears at the end of the input
fn has_trailing_padding_only(input: &str) -> bool {
    match input.find(PAD) {
        Some(start) => input[start..].chars().all(|c| c == PAD),
        None => true,
    }
}

/// Decode a Base32 secret into raw key bytes
///
/// # Errors
///
/// - `OtpError::InvalidEncoding` for characters outside the alphabet,
///   lowercase input, padding in the middle of the text, or a length no
///   encoder could have produced.
/// - `OtpError::EmptySecret` if the text decodes to zero bytes.
pub fn decode_secret(input: &str) -> Result<Vec<u8>, OtpError> {
    if !has_trailing_padding_only(input) {
        return Err(OtpError::InvalidEncoding);
    }

    // Padded input has to be a whole number of 8-character blocks
    let decoded = if input.ends_with(PAD) {
        BASE32.decode(input.as_bytes())
    } else {
        BASE32_NOPAD.decode(input.as_bytes())
    };
    let key = decoded.map_err(|_| OtpError::InvalidEncoding)?;

    if key.is_empty() {
        return Err(OtpError::EmptySecret);
    }

    trace!(key_len = key.len(), "decoded base32 secret");
    Ok(key)
}

/// Encode raw secret bytes as padded RFC 4648 Base32
///
/// This is the inverse of [`decode_secret`] for non-empty input and is
/// how a plain-text shared secret is turned into its canonical form.
pub fn encode_secret(raw: &[u8]) -> String {
    BASE32.encode(raw)
}
