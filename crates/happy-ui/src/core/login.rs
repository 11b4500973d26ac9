//! Login form state machine.
//!
//! # Design
//! - All mutation goes through [`LoginFormState::apply`] or the named
//!   transitions it dispatches to.
//! - Field errors are recomputed by [`LoginFormState::revalidate`] after every
//!   value change; nothing watches the values implicitly.
//! - `Submitting` carries a ticket so a stale completion cannot end a newer
//!   submission.

use crate::core::submit::{LoginPayload, SubmissionReport, SubmitError};
use crate::core::validation::{FieldError, validate_email, validate_password};

/// The two login fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    /// Email address field.
    Email,
    /// Password field.
    Password,
}

impl LoginField {
    /// Helper text shown while the field is untouched and valid.
    #[must_use]
    pub const fn helper_text(self) -> &'static str {
        match self {
            Self::Email => "Enter your email address",
            Self::Password => "Must be more than 6 characters",
        }
    }
}

/// Value, touched flag, and computed error of one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    touched: bool,
    error: Option<FieldError>,
}

impl FieldState {
    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the user has left the field or attempted a submit.
    #[must_use]
    pub const fn touched(&self) -> bool {
        self.touched
    }

    /// Computed error, regardless of `touched`.
    #[must_use]
    pub const fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// Error as shown to the user: only once the field is touched.
    #[must_use]
    pub fn displayed_error(&self) -> Option<String> {
        self.error
            .filter(|_| self.touched)
            .map(|error| error.to_string())
    }

    fn touch(&mut self) {
        self.touched = true;
    }
}

/// Submission phase of the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Ready to accept a submit attempt.
    #[default]
    Idle,
    /// A submission is in flight.
    Submitting {
        /// Ticket matching the eventual [`SubmissionReport`].
        ticket: u64,
        /// Credentials being submitted.
        payload: LoginPayload,
    },
}

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The form entered `Submitting` with this ticket.
    Started {
        /// Ticket of the new submission.
        ticket: u64,
    },
    /// A field is empty or invalid; errors are now visible.
    Invalid,
    /// A submission is already in flight; nothing changed.
    Busy,
}

/// User intents and async completions the form reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginAction {
    /// A field's value changed.
    Input(LoginField, String),
    /// A field lost focus.
    Blur(LoginField),
    /// The user asked to sign in.
    Submit,
    /// The gateway finished a submission.
    Completed(SubmissionReport),
    /// Flip password masking.
    ToggleReveal,
    /// Hide the last submission failure.
    DismissFailure,
}

/// A submission the gateway accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedIn {
    /// Ticket of the accepted submission.
    pub ticket: u64,
    /// Credentials to hand to the caller.
    pub payload: LoginPayload,
}

/// Complete login form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginFormState {
    email: FieldState,
    password: FieldState,
    submission: SubmissionState,
    reveal_password: bool,
    next_ticket: u64,
    last_failure: Option<SubmitError>,
    signed_in: Option<SignedIn>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        let mut state = Self {
            email: FieldState::default(),
            password: FieldState::default(),
            submission: SubmissionState::Idle,
            reveal_password: false,
            next_ticket: 0,
            last_failure: None,
            signed_in: None,
        };
        state.revalidate();
        state
    }
}

impl LoginFormState {
    /// Fresh, empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action.
    pub fn apply(&mut self, action: LoginAction) {
        match action {
            LoginAction::Input(field, value) => self.set_value(field, value),
            LoginAction::Blur(field) => self.blur(field),
            LoginAction::Submit => {
                self.submit();
            }
            LoginAction::Completed(report) => self.complete(report),
            LoginAction::ToggleReveal => self.toggle_reveal(),
            LoginAction::DismissFailure => self.last_failure = None,
        }
    }

    /// Replace a field's value and recompute errors.
    pub fn set_value(&mut self, field: LoginField, value: String) {
        self.field_mut(field).value = value;
        self.revalidate();
    }

    /// Recompute both fields' errors from their current values.
    pub fn revalidate(&mut self) {
        self.email.error = validate_email(&self.email.value).err().map(FieldError::from);
        self.password.error = validate_password(&self.password.value)
            .err()
            .map(FieldError::from);
    }

    /// Mark a field as touched.
    pub fn blur(&mut self, field: LoginField) {
        self.field_mut(field).touch();
    }

    /// Attempt a submission.
    ///
    /// Both fields become touched first, so existing errors show up even when
    /// the attempt is refused.
    pub fn submit(&mut self) -> SubmitAttempt {
        self.email.touch();
        self.password.touch();
        if self.is_submitting() {
            return SubmitAttempt::Busy;
        }
        if !self.is_valid() {
            return SubmitAttempt::Invalid;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.last_failure = None;
        self.submission = SubmissionState::Submitting {
            ticket,
            payload: LoginPayload {
                email: self.email.value.clone(),
                password: self.password.value.clone(),
            },
        };
        SubmitAttempt::Started { ticket }
    }

    /// Finish the in-flight submission named by `report`.
    ///
    /// Returns to `Idle` on success and failure alike. Success records the
    /// payload in [`LoginFormState::signed_in`]; failure in
    /// [`LoginFormState::last_failure`]. Reports for any other ticket are ignored.
    pub fn complete(&mut self, report: SubmissionReport) {
        let matches = matches!(
            &self.submission,
            SubmissionState::Submitting { ticket, .. } if *ticket == report.ticket
        );
        if !matches {
            return;
        }
        let SubmissionState::Submitting { ticket, payload } =
            std::mem::take(&mut self.submission)
        else {
            return;
        };
        match report.outcome {
            Ok(()) => self.signed_in = Some(SignedIn { ticket, payload }),
            Err(error) => self.last_failure = Some(error),
        }
    }

    /// Flip password masking. Touches nothing else.
    pub fn toggle_reveal(&mut self) {
        self.reveal_password = !self.reveal_password;
    }

    /// Both fields non-empty and error-free.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.email.error.is_none()
            && self.password.error.is_none()
            && !self.email.value.is_empty()
            && !self.password.value.is_empty()
    }

    /// Whether a submission is in flight; inputs and the submit control are
    /// disabled meanwhile.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting { .. })
    }

    /// Ticket and payload of the in-flight submission.
    #[must_use]
    pub const fn in_flight(&self) -> Option<(u64, &LoginPayload)> {
        match &self.submission {
            SubmissionState::Submitting { ticket, payload } => Some((*ticket, payload)),
            SubmissionState::Idle => None,
        }
    }

    /// State of one field.
    #[must_use]
    pub const fn field(&self, field: LoginField) -> &FieldState {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Helper text for a field: shown only while untouched and error-free.
    #[must_use]
    pub fn helper_text(&self, field: LoginField) -> Option<&'static str> {
        let state = self.field(field);
        (!state.touched && state.error.is_none()).then(|| field.helper_text())
    }

    /// Whether the password is shown in clear text.
    #[must_use]
    pub const fn reveal_password(&self) -> bool {
        self.reveal_password
    }

    /// Input `type` for the password field.
    #[must_use]
    pub const fn password_input_type(&self) -> &'static str {
        if self.reveal_password {
            "text"
        } else {
            "password"
        }
    }

    /// Label for the submit button.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Signing in..."
        } else {
            "Login"
        }
    }

    /// Most recent accepted submission. Its ticket changes once per success.
    #[must_use]
    pub const fn signed_in(&self) -> Option<&SignedIn> {
        self.signed_in.as_ref()
    }

    /// Failure of the most recent submission, until dismissed or retried.
    #[must_use]
    pub const fn last_failure(&self) -> Option<&SubmitError> {
        self.last_failure.as_ref()
    }

    fn field_mut(&mut self, field: LoginField) -> &mut FieldState {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{EmailError, PasswordError};

    fn filled(email: &str, password: &str) -> LoginFormState {
        let mut form = LoginFormState::new();
        form.apply(LoginAction::Input(LoginField::Email, email.to_string()));
        form.apply(LoginAction::Input(LoginField::Password, password.to_string()));
        form
    }

    fn started(attempt: &SubmitAttempt) -> u64 {
        match attempt {
            SubmitAttempt::Started { ticket } => *ticket,
            other => panic!("expected a started submission, got {other:?}"),
        }
    }

    #[test]
    fn errors_exist_before_they_are_shown() {
        let form = LoginFormState::new();
        let email = form.field(LoginField::Email);
        assert_eq!(email.error(), Some(FieldError::Email(EmailError::Required)));
        assert!(!email.touched());
        assert_eq!(email.displayed_error(), None);
    }

    #[test]
    fn blurring_empty_fields_shows_required_messages() {
        let mut form = LoginFormState::new();
        form.apply(LoginAction::Blur(LoginField::Email));
        form.apply(LoginAction::Blur(LoginField::Password));
        assert_eq!(
            form.field(LoginField::Email).displayed_error().as_deref(),
            Some("Email is required")
        );
        assert_eq!(
            form.field(LoginField::Password).displayed_error().as_deref(),
            Some("Password is required")
        );
    }

    #[test]
    fn errors_follow_every_value_change() {
        let mut form = filled("bademail", "short");
        assert_eq!(
            form.field(LoginField::Email).error(),
            Some(FieldError::Email(EmailError::MissingAt))
        );
        assert_eq!(
            form.field(LoginField::Password).error(),
            Some(FieldError::Password(PasswordError::TooShort))
        );
        form.set_value(LoginField::Email, "user@example.com".to_string());
        assert_eq!(form.field(LoginField::Email).error(), None);
        assert!(!form.is_valid());
        form.set_value(LoginField::Password, "longenough".to_string());
        assert!(form.is_valid());
    }

    #[test]
    fn touched_never_reverts() {
        let mut form = LoginFormState::new();
        form.blur(LoginField::Email);
        form.set_value(LoginField::Email, "a@b.c".to_string());
        form.set_value(LoginField::Email, String::new());
        assert!(form.field(LoginField::Email).touched());
        assert!(!form.field(LoginField::Password).touched());
    }

    #[test]
    fn invalid_submit_touches_fields_and_aborts() {
        let mut form = filled("bademail", "short");
        assert_eq!(form.submit(), SubmitAttempt::Invalid);
        assert!(form.field(LoginField::Email).touched());
        assert!(form.field(LoginField::Password).touched());
        assert!(!form.is_submitting());
        assert_eq!(
            form.field(LoginField::Email).displayed_error().as_deref(),
            Some("Email must include @")
        );
    }

    fn payload() -> LoginPayload {
        LoginPayload {
            email: "user@example.com".to_string(),
            password: "longenough".to_string(),
        }
    }

    #[test]
    fn valid_submit_runs_idle_submitting_idle_once() {
        let mut form = filled("user@example.com", "longenough");
        assert_eq!(form.submit_label(), "Login");
        let ticket = started(&form.submit());
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Signing in...");
        let (in_flight, in_flight_payload) = form.in_flight().expect("submission in flight");
        assert_eq!(in_flight, ticket);
        assert_eq!(in_flight_payload, &payload());
        assert_eq!(form.signed_in(), None);

        form.apply(LoginAction::Completed(SubmissionReport {
            ticket,
            outcome: Ok(()),
        }));
        assert_eq!(
            form.signed_in(),
            Some(&SignedIn {
                ticket,
                payload: payload(),
            })
        );
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), "Login");
        assert_eq!(form.in_flight(), None);

        let before = form.clone();
        form.complete(SubmissionReport {
            ticket,
            outcome: Ok(()),
        });
        assert_eq!(form, before);
    }

    #[test]
    fn each_success_is_recorded_under_its_own_ticket() {
        let mut form = filled("user@example.com", "longenough");
        let first = started(&form.submit());
        form.complete(SubmissionReport {
            ticket: first,
            outcome: Ok(()),
        });
        let second = started(&form.submit());
        assert_eq!(form.signed_in().map(|done| done.ticket), Some(first));
        form.complete(SubmissionReport {
            ticket: second,
            outcome: Ok(()),
        });
        assert_eq!(form.signed_in().map(|done| done.ticket), Some(second));
    }

    #[test]
    fn submit_while_submitting_is_a_no_op() {
        let mut form = filled("user@example.com", "longenough");
        let ticket = started(&form.submit());
        let before = form.clone();
        assert_eq!(form.submit(), SubmitAttempt::Busy);
        assert_eq!(form, before);
        form.complete(SubmissionReport {
            ticket,
            outcome: Ok(()),
        });
        assert_eq!(form.signed_in().map(|done| done.ticket), Some(ticket));
    }

    #[test]
    fn failure_returns_to_idle_and_is_remembered() {
        let mut form = filled("user@example.com", "longenough");
        let ticket = started(&form.submit());
        form.complete(SubmissionReport {
            ticket,
            outcome: Err(SubmitError::Unavailable),
        });
        assert_eq!(form.signed_in(), None);
        assert!(!form.is_submitting());
        assert_eq!(form.last_failure(), Some(&SubmitError::Unavailable));

        form.apply(LoginAction::DismissFailure);
        assert_eq!(form.last_failure(), None);

        form.apply(LoginAction::Completed(SubmissionReport {
            ticket,
            outcome: Err(SubmitError::Unavailable),
        }));
        assert_eq!(form.last_failure(), None);
    }

    #[test]
    fn retry_clears_the_previous_failure() {
        let mut form = filled("user@example.com", "longenough");
        let first = started(&form.submit());
        form.complete(SubmissionReport {
            ticket: first,
            outcome: Err(SubmitError::Rejected {
                reason: "locked".to_string(),
            }),
        });
        assert!(form.last_failure().is_some());
        let second = started(&form.submit());
        assert!(second > first);
        assert_eq!(form.last_failure(), None);
    }

    #[test]
    fn stale_ticket_does_not_end_current_submission() {
        let mut form = filled("user@example.com", "longenough");
        let ticket = started(&form.submit());
        form.complete(SubmissionReport {
            ticket: ticket + 1,
            outcome: Ok(()),
        });
        assert_eq!(form.signed_in(), None);
        assert!(form.is_submitting());
    }

    #[test]
    fn reveal_toggle_only_changes_masking() {
        let mut form = filled("user@example.com", "short");
        form.blur(LoginField::Password);
        let error = form.field(LoginField::Password).error();
        assert_eq!(form.password_input_type(), "password");

        form.apply(LoginAction::ToggleReveal);
        assert!(form.reveal_password());
        assert_eq!(form.password_input_type(), "text");
        assert_eq!(form.field(LoginField::Password).error(), error);
        assert!(form.field(LoginField::Password).touched());
        assert!(!form.field(LoginField::Email).touched());
        assert!(!form.is_submitting());

        form.toggle_reveal();
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn helper_text_hides_once_touched_or_invalid() {
        let mut form = LoginFormState::new();
        assert_eq!(form.helper_text(LoginField::Email), None);
        form.set_value(LoginField::Email, "user@example.com".to_string());
        assert_eq!(
            form.helper_text(LoginField::Email),
            Some("Enter your email address")
        );
        form.blur(LoginField::Email);
        assert_eq!(form.helper_text(LoginField::Email), None);
    }
}
