//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands and
//! the argument handling they share.

pub mod code;
pub mod config;
pub mod encode;
pub mod hotp;
pub mod watch;

use std::io::BufRead;

use clap::Args;
use totp_core::config::toml_config::load_config_or_default;
use totp_core::config::TotpConfig;
use totp_core::error::TotpgenError;
use totp_core::otp::HashAlgorithm;
use totp_core::types::OtpSecret;
use tracing::debug;

/// Environment variable holding the Base32 secret
pub const SECRET_ENV: &str = "TOTPGEN_SECRET";

/// Secret and generator settings shared by the generating commands
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Base32 secret (read from stdin when neither this nor TOTPGEN_SECRET is set)
    #[arg(short, long, env = SECRET_ENV, hide_env_values = true)]
    pub secret: Option<String>,

    /// Hash algorithm: SHA1, SHA256 or SHA512 [default: from config, else SHA1]
    #[arg(short, long)]
    pub algorithm: Option<HashAlgorithm>,

    /// Number of digits: 6, 7 or 8 [default: from config, else 6]
    #[arg(short, long)]
    pub digits: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CodeArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Unix time in seconds to generate the code for [default: now]
    #[arg(long, allow_negative_numbers = true, conflicts_with = "at")]
    pub time: Option<i64>,

    /// RFC 3339 timestamp to generate the code for, e.g. 2009-02-13T23:31:30Z
    #[arg(long, value_parser = code::parse_rfc3339)]
    pub at: Option<i64>,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,
}

#[derive(Args, Debug)]
pub struct HotpArgs {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Moving counter value
    #[arg(short, long)]
    pub counter: u64,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Plain-text secret to encode
    pub text: String,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Default hash algorithm to save
    #[arg(short, long)]
    pub algorithm: Option<HashAlgorithm>,

    /// Default digit count to save
    #[arg(short, long)]
    pub digits: Option<u32>,
}

impl GeneratorArgs {
    /// Merge command-line settings over the configuration file
    ///
    /// Digit counts are not validated here so that [`TotpConfig::params`]
    /// reports them with the generator's own error.
    pub fn config(&self) -> Result<TotpConfig, TotpgenError> {
        let saved = load_config_or_default()?;
        let config = TotpConfig::new(
            self.algorithm.unwrap_or(saved.algorithm),
            self.digits.unwrap_or(saved.digits),
        );
        debug!(algorithm = %config.algorithm, digits = config.digits, "Resolved settings");
        Ok(config)
    }

    /// Take the secret from the arguments, or one line of stdin
    pub fn secret(&self) -> Result<OtpSecret, TotpgenError> {
        if let Some(secret) = &self.secret {
            return Ok(OtpSecret::new(secret.clone()));
        }

        debug!("Reading secret from stdin");
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(OtpSecret::new(strip_line_ending(line)))
    }
}

/// Remove exactly one trailing line terminator and nothing else
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(algorithm: Option<HashAlgorithm>, digits: Option<u32>) -> GeneratorArgs {
        GeneratorArgs {
            secret: None,
            algorithm,
            digits,
        }
    }

    #[test]
    fn test_config_applies_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var(
            totp_core::config::toml_config::CONFIG_DIR_ENV,
            temp_dir.path(),
        );

        assert_eq!(generator(None, None).config().unwrap(), TotpConfig::default());

        let config = generator(Some(HashAlgorithm::Sha256), Some(5)).config().unwrap();
        assert_eq!(config, TotpConfig::new(HashAlgorithm::Sha256, 5));
        assert!(config.params().is_err());

        let params = generator(None, Some(8)).config().unwrap().params().unwrap();
        assert_eq!(params.algorithm, HashAlgorithm::Sha1);
        assert_eq!(params.digits.get(), 8);

        std::env::remove_var(totp_core::config::toml_config::CONFIG_DIR_ENV);
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("ABC\n".to_string()), "ABC");
        assert_eq!(strip_line_ending("ABC\r\n".to_string()), "ABC");
        assert_eq!(strip_line_ending("ABC".to_string()), "ABC");
        // Inner and leading whitespace is the secret's own business
        assert_eq!(strip_line_ending(" ABC \n".to_string()), " ABC ");
        assert_eq!(strip_line_ending("ABC\n\n".to_string()), "ABC\n");
    }
}
