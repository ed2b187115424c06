//! Config command implementation
//!
//! Shows the saved defaults, or updates them when options are given.

use totp_core::config::toml_config::{get_config_path, load_config_or_default, save_config};
use totp_core::error::TotpgenError;
use tracing::info;

use super::ConfigArgs;

/// Run the config command
pub fn run_config(args: ConfigArgs) -> Result<(), TotpgenError> {
    let mut config = load_config_or_default()?;

    if args.algorithm.is_none() && args.digits.is_none() {
        println!("Configuration file: {}", get_config_path()?.display());
        println!("algorithm = {}", config.algorithm);
        println!("digits = {}", config.digits);
        return Ok(());
    }

    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if let Some(digits) = args.digits {
        config.digits = digits;
    }

    let path = save_config(&config)?;
    info!(path = %path.display(), "Saved configuration");
    println!("✓ Saved configuration to {}", path.display());
    println!("algorithm = {}", config.algorithm);
    println!("digits = {}", config.digits);

    Ok(())
}
