//! # Load Form Controller
//!
//! Holds the single `LoadFormState` of a mounted form and drives it through
//! validation, fingerprinting, submission and redirect.
//!
//! ## Side-Effect Ordering
//!
//! 1. Validation and fingerprinting are pure.
//! 2. The temp-load POST is the only external call, and only a valid form
//!    reaches it.
//! 3. The redirect happens at most once, and only after a 2xx response.
//!
//! ## In-Flight Guard
//!
//! While a submission is outstanding the phase is `Submitting`. Another
//! `submit()` or any field edit in that window is rejected with
//! [`FormError::SubmissionInFlight`]. The lock over controller state is
//! never held across the network await. If the `submit()` future is dropped
//! before the request resolves, the phase falls back to `Failed` and the form
//! stays editable.
//!
//! ## Terminal Success
//!
//! `Succeeded` has no outgoing transitions. The record is discarded when the
//! load is accepted, and every later `submit()`, edit or reset is rejected
//! with [`FormError::AlreadySubmitted`].

use std::collections::VecDeque;

use chrono::NaiveDate;
use parking_lot::Mutex;
use serde::Serialize;
use url::Url;

use logieman_client::ClientError;
use logieman_core::{
    device_fingerprint, validate, DeviceFingerprint, EnvironmentProbe, FieldErrors, FormField,
    LoadFormState, SubmissionPayload,
};

use crate::error::FormError;
use crate::navigator::{redirect_url, Navigator};
use crate::submitter::LoadSubmitter;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormPhase {
    /// Accepting edits. Also the landing phase after a rejected submit.
    Editing,
    /// Running the field validator.
    Validating,
    /// The temp-load request is outstanding.
    Submitting,
    /// The API accepted the load.
    Succeeded,
    /// The request failed; the form is intact and can be resubmitted.
    Failed,
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editing => write!(f, "EDITING"),
            Self::Validating => write!(f, "VALIDATING"),
            Self::Submitting => write!(f, "SUBMITTING"),
            Self::Succeeded => write!(f, "SUCCEEDED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// One recorded phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseTransition {
    pub from: FormPhase,
    pub to: FormPhase,
}

/// Result of one `submit()` call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The validator rejected the form. No request was made.
    Invalid {
        errors: FieldErrors,
        /// The first invalid field in form-declaration order.
        focus: Option<FormField>,
    },
    /// The API stored the load.
    Succeeded {
        fingerprint: DeviceFingerprint,
        response: serde_json::Value,
        /// The URL navigated to, when a dashboard base is configured.
        redirect: Option<Url>,
    },
    /// The request failed. Nothing was redirected and the form is unchanged.
    Failed {
        fingerprint: DeviceFingerprint,
        error: ClientError,
    },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Phase changes kept in the transitions log; older entries are dropped.
pub const TRANSITION_LOG_CAPACITY: usize = 256;

#[derive(Debug)]
struct ControllerState {
    form: LoadFormState,
    errors: FieldErrors,
    focus: Option<FormField>,
    phase: FormPhase,
    transitions: VecDeque<PhaseTransition>,
}

impl ControllerState {
    fn new() -> Self {
        Self {
            form: LoadFormState::new(),
            errors: FieldErrors::new(),
            focus: None,
            phase: FormPhase::Editing,
            transitions: VecDeque::new(),
        }
    }

    fn transition(&mut self, to: FormPhase) {
        if self.transitions.len() == TRANSITION_LOG_CAPACITY {
            self.transitions.pop_front();
        }
        self.transitions.push_back(PhaseTransition {
            from: self.phase,
            to,
        });
        self.phase = to;
    }

    fn require_idle(&self) -> Result<(), FormError> {
        match self.phase {
            FormPhase::Submitting => Err(FormError::SubmissionInFlight),
            FormPhase::Succeeded => Err(FormError::AlreadySubmitted),
            _ => Ok(()),
        }
    }
}

/// Holds the `Submitting` phase for the length of one request.
///
/// Dropped while still armed (the `submit()` future was cancelled), it moves
/// the phase to `Failed` so the form is not frozen.
struct InFlight<'a> {
    state: &'a Mutex<ControllerState>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a Mutex<ControllerState>) -> Self {
        Self { state, armed: true }
    }

    fn succeed(mut self) {
        self.armed = false;
        let mut state = self.state.lock();
        state.form = LoadFormState::new();
        state.transition(FormPhase::Succeeded);
    }

    fn fail(mut self) {
        self.armed = false;
        self.state.lock().transition(FormPhase::Failed);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock();
        if state.phase == FormPhase::Submitting {
            tracing::warn!("temp load submission cancelled before it resolved");
            state.transition(FormPhase::Failed);
        }
    }
}

/// Controller for one mounted load form.
pub struct LoadFormController<S, P, N> {
    submitter: S,
    probe: P,
    navigator: N,
    redirect_base: Option<Url>,
    today: fn() -> NaiveDate,
    state: Mutex<ControllerState>,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl<S, P, N> LoadFormController<S, P, N>
where
    S: LoadSubmitter,
    P: EnvironmentProbe,
    N: Navigator,
{
    /// Mount a controller over an empty form. No redirect is configured.
    pub fn new(submitter: S, probe: P, navigator: N) -> Self {
        Self {
            submitter,
            probe,
            navigator,
            redirect_base: None,
            today: local_today,
            state: Mutex::new(ControllerState::new()),
        }
    }

    /// Redirect to `<base>/signin?...` after a successful submission.
    pub fn with_redirect_base(mut self, base: Option<Url>) -> Self {
        self.redirect_base = base;
        self
    }

    /// Replace the source of "today" used by the scheduled-date rule.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Set one field and clear its previous error.
    pub fn update(&self, field: FormField, value: impl Into<String>) -> Result<(), FormError> {
        let mut state = self.state.lock();
        state.require_idle()?;
        state.form.set(field, value);
        state.errors.clear(field);
        if state.phase != FormPhase::Editing {
            state.transition(FormPhase::Editing);
        }
        Ok(())
    }

    /// Replace the whole form, as when restoring a saved draft.
    pub fn load(&self, form: LoadFormState) -> Result<(), FormError> {
        let mut state = self.state.lock();
        state.require_idle()?;
        state.form = form;
        state.errors = FieldErrors::new();
        state.focus = None;
        if state.phase != FormPhase::Editing {
            state.transition(FormPhase::Editing);
        }
        Ok(())
    }

    /// Discard the record and start over with an empty form. Not available
    /// once the load has been accepted.
    pub fn reset(&self) -> Result<(), FormError> {
        self.load(LoadFormState::new())
    }

    /// Validate, and if valid, fingerprint, submit and redirect.
    pub async fn submit(&self) -> Result<SubmitOutcome, FormError> {
        let load = {
            let mut state = self.state.lock();
            state.require_idle()?;
            state.transition(FormPhase::Validating);

            match validate(&state.form, (self.today)()) {
                Ok(load) => {
                    state.errors = FieldErrors::new();
                    state.focus = None;
                    state.transition(FormPhase::Submitting);
                    load
                }
                Err(errors) => {
                    let focus = errors.first_invalid();
                    tracing::debug!(
                        invalid_fields = errors.len(),
                        focus = ?focus,
                        "load form rejected by validator"
                    );
                    state.errors = errors.clone();
                    state.focus = focus;
                    state.transition(FormPhase::Editing);
                    return Ok(SubmitOutcome::Invalid { errors, focus });
                }
            }
        };

        let in_flight = InFlight::new(&self.state);
        let fingerprint = device_fingerprint(&self.probe.signals());
        tracing::info!(device_hash = %fingerprint, "generated device fingerprint");
        let payload = SubmissionPayload::new(fingerprint.clone(), &load);

        match self.submitter.submit(&payload).await {
            Ok(response) => {
                tracing::info!(device_hash = %fingerprint, "temporary load saved");
                tracing::debug!(%response, "temp load saved response");
                in_flight.succeed();

                let redirect = self
                    .redirect_base
                    .as_ref()
                    .map(|base| redirect_url(base, &fingerprint));
                if let Some(url) = &redirect {
                    tracing::debug!(%url, "redirecting to dashboard sign-in");
                    self.navigator.navigate(url);
                }

                Ok(SubmitOutcome::Succeeded {
                    fingerprint,
                    response,
                    redirect,
                })
            }
            Err(error) => {
                tracing::error!(device_hash = %fingerprint, %error, "error saving temporary load");
                in_flight.fail();
                Ok(SubmitOutcome::Failed { fingerprint, error })
            }
        }
    }

    /// The current phase.
    pub fn phase(&self) -> FormPhase {
        self.state.lock().phase
    }

    /// A snapshot of the current form values.
    pub fn form(&self) -> LoadFormState {
        self.state.lock().form.clone()
    }

    /// A snapshot of the current field errors.
    pub fn errors(&self) -> FieldErrors {
        self.state.lock().errors.clone()
    }

    /// The field that should hold input focus after the last rejected submit.
    pub fn focus(&self) -> Option<FormField> {
        self.state.lock().focus
    }

    /// Recent phase changes, oldest first. Holds at most
    /// [`TRANSITION_LOG_CAPACITY`] entries.
    pub fn transitions(&self) -> Vec<PhaseTransition> {
        self.state.lock().transitions.iter().copied().collect()
    }
}
