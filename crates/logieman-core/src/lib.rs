#![deny(missing_docs)]

//! # logieman-core — Load Posting Domain
//!
//! The leaf crate of the Logieman load-posting workspace. It owns every pure
//! piece of the "post a load" flow and performs no I/O:
//!
//! - [`reference`] — the country and load-type lists that populate the
//!   selects and bound validation.
//! - [`form`] — `LoadFormState`, the per-field `FormField` enum and the
//!   sparse `FieldErrors` map.
//! - [`validate`] — the field validator, producing a [`ValidatedLoad`] or
//!   per-field messages.
//! - [`fingerprint`] — the device fingerprint derived from environment
//!   signals supplied through an [`EnvironmentProbe`].
//! - [`payload`] — the JSON body posted to the temp-loads API.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `logieman-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - A submission payload can only be built from a [`ValidatedLoad`].

pub mod error;
pub mod fingerprint;
pub mod form;
pub mod payload;
pub mod reference;
pub mod validate;

pub use error::CoreError;
pub use fingerprint::{
    device_fingerprint, DeviceFingerprint, EnvironmentProbe, EnvironmentSignals, StaticProbe,
    DEFAULT_LANGUAGE,
};
pub use form::{FieldErrors, FormField, LoadFormState};
pub use payload::{LoadData, SubmissionPayload};
pub use reference::{LoadTypeCode, COUNTRIES, LOAD_TYPES};
pub use validate::{validate, validate_today, ValidatedLoad};
