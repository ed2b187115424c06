//! Watch command implementation
//!
//! Keeps the current code on screen with a countdown to the next time
//! step. A one-second interval drives the display; the code itself is
//! regenerated only when the time-step counter changes. Ctrl+C stops the
//! loop. The core is called synchronously on each tick and holds no state.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use tokio::time::{interval, MissedTickBehavior};
use totp_core::error::TotpgenError;
use totp_core::otp::counter::{
    current_unix_time, seconds_remaining, time_counter, DEFAULT_TIME_STEP,
};
use totp_core::otp::{generate_with, TotpParams};
use totp_core::types::OtpSecret;
use tracing::{debug, info, warn};

use super::WatchArgs;

/// Shown in place of a code when generation fails
const ERROR_DISPLAY: &str = "Error Generating TOTP";

/// Width of the countdown bar in characters
const BAR_WIDTH: usize = 30;

/// Run the watch command
pub fn run_watch(args: WatchArgs) -> Result<(), TotpgenError> {
    let params = args.generator.config()?.params()?;
    let secret = args.generator.secret()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(watch_loop(secret, params))
}

/// What one refresh tick shows
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    counter: u64,
    remaining: u64,
}

impl Frame {
    fn at(now: i64) -> Result<Self, TotpgenError> {
        Ok(Self {
            counter: time_counter(now, DEFAULT_TIME_STEP)?,
            remaining: seconds_remaining(now, DEFAULT_TIME_STEP)?,
        })
    }
}

/// Generate the text for the code line, mapping any failure to the
/// generic display string
fn render_code(secret: &OtpSecret, params: &TotpParams, now: i64) -> String {
    match generate_with(params, secret.expose(), now) {
        Ok(token) => token.expose().to_string(),
        Err(e) => {
            warn!(kind = ?e, "{}", e);
            ERROR_DISPLAY.to_string()
        }
    }
}

/// Countdown bar filled in proportion to the elapsed part of the step
fn progress_bar(remaining: u64, step: u64, width: usize) -> String {
    let elapsed = step.saturating_sub(remaining).min(step);
    let filled = (elapsed as usize * width) / step.max(1) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

async fn watch_loop(secret: OtpSecret, params: TotpParams) -> Result<(), TotpgenError> {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut last_counter: Option<u64> = None;
    let mut display = String::new();

    info!(
        algorithm = %params.algorithm,
        digits = params.digits.get(),
        "Watching TOTP codes"
    );

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                println!();
                info!("Stopped watching");
                return Ok(());
            }

            _ = ticker.tick() => {
                let now = current_unix_time()?;
                let frame = Frame::at(now)?;

                if last_counter != Some(frame.counter) {
                    debug!(counter = frame.counter, "Time step changed, regenerating");
                    display = render_code(&secret, &params, now);
                    last_counter = Some(frame.counter);
                }

                let code = if display == ERROR_DISPLAY {
                    display.red().bold()
                } else {
                    display.green().bold()
                };
                let bar = progress_bar(frame.remaining, DEFAULT_TIME_STEP, BAR_WIDTH);

                print!("\r{}  {} {:>2}s ", code, bar, frame.remaining);
                std::io::stdout().flush()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use totp_core::otp::{Digits, HashAlgorithm};

    fn params(digits: u32) -> TotpParams {
        TotpParams::new(HashAlgorithm::Sha1, Digits::new(digits).unwrap())
    }

    #[test]
    fn test_frame_at() {
        assert_eq!(
            Frame::at(59).unwrap(),
            Frame {
                counter: 1,
                remaining: 1
            }
        );
        assert_eq!(
            Frame::at(60).unwrap(),
            Frame {
                counter: 2,
                remaining: 30
            }
        );
    }

    #[test]
    fn test_render_code() {
        let secret = OtpSecret::new("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ".to_string());
        assert_eq!(render_code(&secret, &params(8), 59), "94287082");
    }

    #[test]
    fn test_render_code_failure_is_generic() {
        let secret = OtpSecret::new("not-base32".to_string());
        assert_eq!(render_code(&secret, &params(6), 59), ERROR_DISPLAY);

        let secret = OtpSecret::new("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ".to_string());
        assert_eq!(render_code(&secret, &params(6), -1), ERROR_DISPLAY);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(30, 30, 10), "[----------]");
        assert_eq!(progress_bar(15, 30, 10), "[#####-----]");
        assert_eq!(progress_bar(1, 30, 30), format!("[{}-]", "#".repeat(29)));
    }
}
