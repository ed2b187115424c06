//! Dynamic truncation (RFC 4226 §5.3)

use crate::error::OtpError;

/// Smallest digest that can be truncated for every possible offset.
///
/// The offset is a nibble (0..=15) and four bytes are read from it, so
/// byte 18 must exist.
pub const MIN_DIGEST_LEN: usize = 19;

/// Extract a 31-bit integer from an HMAC digest
///
/// The low-order 4 bits of the last byte select the offset; the four
/// bytes starting there are read big-endian with the top bit cleared.
///
/// # Errors
///
/// Returns `OtpError::DigestTooShort` for digests under [`MIN_DIGEST_LEN`]
/// bytes instead of indexing out of bounds.
pub fn dynamic_truncate(digest: &[u8]) -> Result<u32, OtpError> {
    let len = digest.len();
    if len < MIN_DIGEST_LEN {
        return Err(OtpError::DigestTooShort { len });
    }

    let offset = (digest[len - 1] & 0x0f) as usize;

    // Strip the sign bit so the value is the same on every host
    Ok((u32::from(digest[offset] & 0x7f) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]))
}
