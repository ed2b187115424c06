//! totpgen - terminal TOTP generator
//!
//! Generates RFC 6238 time-based one-time passwords from a Base32 shared
//! secret, either once or continuously with a countdown.

use clap::{Parser, Subcommand};
use totp_core::error::TotpgenError;
use totp_core::init_logging;
use tracing::{error, warn};

mod cli;

use cli::{CodeArgs, ConfigArgs, EncodeArgs, HotpArgs, WatchArgs};

#[derive(Parser)]
#[command(name = "totpgen")]
#[command(about = "Generate RFC 6238 TOTP and RFC 4226 HOTP codes")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current TOTP code
    Code(CodeArgs),
    /// Show the TOTP code with a countdown, refreshing every step
    Watch(WatchArgs),
    /// Print an HOTP code for an explicit counter
    Hotp(HotpArgs),
    /// Base32-encode a plain-text secret
    Encode(EncodeArgs),
    /// Show or update the saved algorithm and digit defaults
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let result = match cli.command {
        Commands::Code(args) => cli::code::run_code(args),
        Commands::Watch(args) => cli::watch::run_watch(args),
        Commands::Hotp(args) => cli::hotp::run_hotp(args),
        Commands::Encode(args) => cli::encode::run_encode(args),
        Commands::Config(args) => cli::config::run_config(args),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration errors (exit code 2)
                TotpgenError::Config(_) | TotpgenError::Toml(_) | TotpgenError::TomlSerialize(_) => {
                    eprintln!("{}", e);
                    2
                }
                // OTP errors: log the kind, show only the generic message
                TotpgenError::Otp(ref otp_error) => {
                    if otp_error.is_user_error() {
                        warn!(kind = ?otp_error, "{}", otp_error);
                    } else {
                        error!(kind = ?otp_error, "{}", otp_error);
                    }
                    eprintln!("Error: {}", otp_error.user_message());
                    if otp_error.is_user_error() {
                        2
                    } else {
                        1
                    }
                }
                // IO errors (exit code 1 - runtime)
                TotpgenError::Io(_) => {
                    eprintln!("{}", e);
                    1
                }
            };

            std::process::exit(exit_code);
        }
    }
}
