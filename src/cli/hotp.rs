//! HOTP command implementation

use totp_core::error::TotpgenError;
use totp_core::otp::hotp::hotp;

use super::HotpArgs;

/// Run the hotp command
pub fn run_hotp(args: HotpArgs) -> Result<(), TotpgenError> {
    let params = args.generator.config()?.params()?;
    let key = args.generator.secret()?.decode()?;

    let token = hotp(&key, args.counter, params.algorithm, params.digits)?;

    println!("{}", token.expose());

    Ok(())
}
