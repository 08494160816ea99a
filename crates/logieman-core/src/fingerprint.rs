//! # Device Fingerprint
//!
//! A short, best-effort correlation key derived from four environment
//! signals: screen size, colour depth, timezone offset and language tag.
//! It links a temp load posted anonymously to the account that signs in
//! afterwards. It is NOT a credential: the hash is 32 bits wide and
//! distinct devices are expected to collide.
//!
//! ## Algorithm
//!
//! ```text
//! input  = "{width}x{height}-{color_depth}-{tz_offset}-{language}"
//! h      = 0
//! for each UTF-16 code unit c:  h = (h << 5) - h + c   (wrapping i32)
//! output = "df-" + hex(|h|) left-padded to 8 digits
//! ```
//!
//! The environment is read through [`EnvironmentProbe`] so the hash itself
//! stays a pure function of [`EnvironmentSignals`].

use serde::{Deserialize, Serialize};

/// Prefix carried by every fingerprint.
pub const FINGERPRINT_PREFIX: &str = "df-";

/// Language tag assumed when the environment reports none.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// The environment readings that feed the fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSignals {
    /// Screen width in CSS pixels.
    pub screen_width: u32,
    /// Screen height in CSS pixels.
    pub screen_height: u32,
    /// Colour depth in bits per pixel.
    pub color_depth: u32,
    /// Minutes behind UTC, browser convention (UTC+05:30 is `-330`).
    pub timezone_offset_minutes: i32,
    /// BCP 47 language tag; empty means [`DEFAULT_LANGUAGE`].
    pub language: String,
}

impl EnvironmentSignals {
    /// The delimited string that gets hashed.
    pub fn canonical_string(&self) -> String {
        let language = if self.language.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            self.language.as_str()
        };
        format!(
            "{}x{}-{}-{}-{}",
            self.screen_width,
            self.screen_height,
            self.color_depth,
            self.timezone_offset_minutes,
            language
        )
    }
}

/// Source of environment signals.
pub trait EnvironmentProbe: Send + Sync {
    /// Read the current signals.
    fn signals(&self) -> EnvironmentSignals;
}

/// A probe that always reports the same signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProbe(pub EnvironmentSignals);

impl EnvironmentProbe for StaticProbe {
    fn signals(&self) -> EnvironmentSignals {
        self.0.clone()
    }
}

/// A device fingerprint of the form `df-xxxxxxxx` (lowercase hex).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceFingerprint(String);

impl DeviceFingerprint {
    /// The fingerprint text, `df-` included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DeviceFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeviceFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the fingerprint for `signals`. Deterministic and infallible.
pub fn device_fingerprint(signals: &EnvironmentSignals) -> DeviceFingerprint {
    let hash = rolling_hash(&signals.canonical_string());
    // i64 so that |i32::MIN| does not overflow.
    let magnitude = i64::from(hash).abs();
    DeviceFingerprint(format!("{FINGERPRINT_PREFIX}{magnitude:08x}"))
}

fn rolling_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    })
}
