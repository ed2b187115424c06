//! Time-step counter derivation
//!
//! Converts Unix time into the moving factor RFC 6238 feeds to HOTP:
//! the number of whole time steps elapsed since the epoch, encoded as
//! an 8-byte big-endian buffer.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::OtpError;

/// RFC 6238 default time step in seconds
pub const DEFAULT_TIME_STEP: u64 = 30;

/// Number of whole `step`-second intervals elapsed at `unix_time`
///
/// # Errors
///
/// Returns `OtpError::InvalidTime` for times before the epoch or a zero
/// step, rather than wrapping.
pub fn time_counter(unix_time: i64, step: u64) -> Result<u64, OtpError> {
    if step == 0 {
        return Err(OtpError::InvalidTime);
    }
    let seconds = u64::try_from(unix_time).map_err(|_| OtpError::InvalidTime)?;
    Ok(seconds / step)
}

/// Encode a counter as the 8-byte big-endian HOTP message
pub fn encode_counter(counter: u64) -> [u8; 8] {
    counter.to_be_bytes()
}

/// Seconds left until the counter next changes, in `1..=step`
pub fn seconds_remaining(unix_time: i64, step: u64) -> Result<u64, OtpError> {
    if step == 0 {
        return Err(OtpError::InvalidTime);
    }
    let seconds = u64::try_from(unix_time).map_err(|_| OtpError::InvalidTime)?;
    Ok(step - seconds % step)
}

/// Current wall-clock time in whole seconds since the Unix epoch
pub fn current_unix_time() -> Result<i64, OtpError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| OtpError::InvalidTime)?;
    i64::try_from(elapsed.as_secs()).map_err(|_| OtpError::InvalidTime)
}
