//! # logieman-form — Load-Submission Form Controller
//!
//! Sequences one "post a load" form from first keystroke to the dashboard
//! redirect:
//!
//! ```text
//! Editing ──submit──▶ Validating ──invalid──▶ Editing (errors + focus)
//!                          │
//!                        valid
//!                          ▼
//!                     Submitting ──ok──▶ Succeeded ──▶ redirect (if configured)
//!                          │              (terminal, record discarded)
//!                          └──err/cancel──▶ Failed (logged, form kept)
//! ```
//!
//! The controller owns the form record. Its collaborators sit behind
//! traits so the flow runs the same against the real API, a mock server,
//! or an in-process fake:
//!
//! - [`LoadSubmitter`] — posts the payload (implemented by `LoadClient`).
//! - [`Navigator`] — performs the redirect.
//! - [`EnvironmentProbe`](logieman_core::EnvironmentProbe) — feeds the
//!   fingerprint.

pub mod controller;
pub mod error;
pub mod navigator;
pub mod submitter;

pub use controller::{
    FormPhase, LoadFormController, PhaseTransition, SubmitOutcome, TRANSITION_LOG_CAPACITY,
};
pub use error::FormError;
pub use navigator::{redirect_url, Navigator};
pub use submitter::LoadSubmitter;
