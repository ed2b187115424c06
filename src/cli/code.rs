//! Code command implementation
//!
//! Prints the TOTP code for one point in time, alone on stdout so the
//! output stays machine-parsable.

use chrono::DateTime;
use totp_core::error::TotpgenError;
use totp_core::otp::counter::current_unix_time;
use totp_core::otp::generate_with;

use super::CodeArgs;

/// Parse an RFC 3339 timestamp into Unix seconds
pub fn parse_rfc3339(value: &str) -> Result<i64, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.timestamp())
        .map_err(|e| format!("invalid RFC 3339 timestamp '{}': {}", value, e))
}

/// Run the code command
pub fn run_code(args: CodeArgs) -> Result<(), TotpgenError> {
    let params = args.generator.config()?.params()?;
    let secret = args.generator.secret()?;

    let at_time = match args.time.or(args.at) {
        Some(time) => time,
        None => current_unix_time()?,
    };

    let token = generate_with(&params, secret.expose(), at_time)?;

    println!("{}", token.expose());

    Ok(())
}
