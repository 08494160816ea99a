//! # Fingerprint Subcommand
//!
//! Prints the device fingerprint for this host, or for signals given on the
//! command line. A terminal has no screen metrics, so those fall back to a
//! common desktop profile unless overridden.

use anyhow::Result;
use clap::Args;

use logieman_core::{device_fingerprint, EnvironmentProbe, EnvironmentSignals, DEFAULT_LANGUAGE};

const DEFAULT_SCREEN_WIDTH: u32 = 1920;
const DEFAULT_SCREEN_HEIGHT: u32 = 1080;
const DEFAULT_COLOR_DEPTH: u32 = 24;

/// Arguments for the `logieman fingerprint` subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct FingerprintArgs {
    /// Screen width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Screen height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Colour depth in bits.
    #[arg(long)]
    pub color_depth: Option<u32>,

    /// Minutes behind UTC (UTC+05:30 is -330).
    #[arg(long, allow_hyphen_values = true)]
    pub tz_offset: Option<i32>,

    /// BCP 47 language tag, e.g. "en-IN".
    #[arg(long)]
    pub language: Option<String>,

    /// Also print the signals that were hashed.
    #[arg(long)]
    pub explain: bool,
}

/// Reads signals from the host, with per-signal overrides.
#[derive(Debug, Clone, Default)]
pub struct HostProbe {
    overrides: FingerprintArgs,
}

impl HostProbe {
    pub fn new(overrides: FingerprintArgs) -> Self {
        Self { overrides }
    }
}

impl EnvironmentProbe for HostProbe {
    fn signals(&self) -> EnvironmentSignals {
        let o = &self.overrides;
        EnvironmentSignals {
            screen_width: o.width.unwrap_or(DEFAULT_SCREEN_WIDTH),
            screen_height: o.height.unwrap_or(DEFAULT_SCREEN_HEIGHT),
            color_depth: o.color_depth.unwrap_or(DEFAULT_COLOR_DEPTH),
            timezone_offset_minutes: o.tz_offset.unwrap_or_else(host_timezone_offset),
            language: o.language.clone().unwrap_or_else(host_language),
        }
    }
}

/// Local offset in minutes behind UTC.
fn host_timezone_offset() -> i32 {
    -(chrono::Local::now().offset().local_minus_utc() / 60)
}

fn host_language() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|raw| language_tag(&raw))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Convert a POSIX locale such as `en_IN.UTF-8` to a language tag (`en-IN`).
fn language_tag(locale: &str) -> Option<String> {
    let name = locale.split(['.', '@']).next().unwrap_or_default();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    Some(name.replace('_', "-"))
}

/// Execute the fingerprint subcommand.
pub fn run_fingerprint(args: &FingerprintArgs) -> Result<u8> {
    let signals = HostProbe::new(args.clone()).signals();
    let fingerprint = device_fingerprint(&signals);
    if args.explain {
        println!("{}", signals.canonical_string());
    }
    println!("{fingerprint}");
    Ok(0)
}
