//! Error types for the load-posting domain.

use thiserror::Error;

/// Errors raised while parsing domain values from text.
///
/// Validation failures are not errors in this sense: they are reported as
/// [`FieldErrors`](crate::form::FieldErrors) so every failing field gets
/// its own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A form field name that is not part of `LoadFormState`.
    #[error("unknown form field: {0:?}")]
    UnknownField(String),

    /// A load-type label or code outside the fixed three.
    #[error("unknown load type: {0:?}")]
    UnknownLoadType(String),
}
