//! Controller error types.

use thiserror::Error;

/// Errors from driving the form controller.
///
/// Validation and network failures are outcomes, not errors: see
/// [`SubmitOutcome`](crate::controller::SubmitOutcome).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A submission is already outstanding; the form is frozen until it
    /// resolves.
    #[error("a load submission is already in flight")]
    SubmissionInFlight,

    /// The load was accepted and the record discarded. A mounted form posts
    /// at most once.
    #[error("the load has already been submitted")]
    AlreadySubmitted,
}
