//! Encode command implementation
//!
//! Turns a plain-text shared secret into the canonical Base32 form the
//! generating commands expect.

use totp_core::error::TotpgenError;
use totp_core::otp::base32::encode_secret;

use super::EncodeArgs;

/// Run the encode command
pub fn run_encode(args: EncodeArgs) -> Result<(), TotpgenError> {
    println!("{}", encode_secret(args.text.as_bytes()));
    Ok(())
}
