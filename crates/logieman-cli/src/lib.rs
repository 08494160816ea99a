//! # logieman-cli — Terminal Surface for the Load-Posting Flow
//!
//! Runs the same validator, fingerprint and controller the web form uses,
//! with form records read from JSON files.
//!
//! ## Subcommands
//!
//! - `logieman reference` — Country and load-type lists.
//! - `logieman validate <FORM.json>` — Field validation only.
//! - `logieman fingerprint` — Device fingerprint for this host or given signals.
//! - `logieman submit <FORM.json>` — Validate, fingerprint, submit, redirect.
//!
//! ```bash
//! logieman validate load.json
//! LOGIEMAN_API_BASE_URL=https://api.logieman.com logieman -v submit load.json
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when the form is invalid, the submission fails, or
//! the command cannot run.

pub mod fingerprint;
pub mod reference;
pub mod submit;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use logieman_core::LoadFormState;

/// Read a form record from a JSON file. Missing keys default to empty.
pub fn read_form(path: &Path) -> Result<LoadFormState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse form file: {}", path.display()))
}
