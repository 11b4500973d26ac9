//! Login submission seam: payload, gateway trait, and the async driver.
//!
//! # Design
//! - The gateway is the only place that would perform I/O; the UI ships a
//!   simulated one and never transmits credentials itself.
//! - Completion is delivered only while the owning component is mounted.

use crate::core::validation::password_len;
use async_trait::async_trait;
use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Latency of the simulated sign-in call.
pub const SIMULATED_LATENCY_MS: u32 = 1500;

/// Credentials handed to the caller after a successful submission.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    /// Email address as entered.
    pub email: String,
    /// Password as entered.
    pub password: String,
}

impl LoginPayload {
    /// Password replaced by one `*` per UTF-16 code unit, for logs.
    #[must_use]
    pub fn masked_password(&self) -> String {
        "*".repeat(password_len(&self.password))
    }
}

impl fmt::Debug for LoginPayload {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LoginPayload")
            .field("email", &self.email)
            .field("password", &self.masked_password())
            .finish()
    }
}

/// Why a submission failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The sign-in service refused the credentials.
    #[error("sign-in rejected: {reason}")]
    Rejected {
        /// Reason reported by the service.
        reason: String,
    },
    /// The sign-in service could not be reached.
    #[error("sign-in service unavailable")]
    Unavailable,
}

/// Destination for login payloads.
#[async_trait(?Send)]
pub trait LoginGateway {
    /// Submit the credentials.
    ///
    /// # Errors
    /// Returns [`SubmitError`] when the submission did not succeed.
    async fn submit(&self, payload: &LoginPayload) -> Result<(), SubmitError>;
}

/// Tracks whether the component that started a submission is still mounted.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    /// A guard for a freshly mounted component.
    #[must_use]
    pub fn mounted() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Mark the component as torn down. Idempotent.
    pub fn retire(&self) {
        self.0.set(false);
    }

    /// Whether the component is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::mounted()
    }
}

/// Result of one submission, tagged with the ticket that started it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionReport {
    /// Ticket issued when the form entered the submitting state.
    pub ticket: u64,
    /// Gateway outcome.
    pub outcome: Result<(), SubmitError>,
}

/// Run one submission through `gateway` and hand the report to `on_done`.
///
/// `on_done` is skipped when `guard` was retired while the call was in flight.
/// Returns whether the report was delivered.
pub async fn run_submission<G, F>(
    gateway: &G,
    guard: &MountGuard,
    ticket: u64,
    payload: &LoginPayload,
    on_done: F,
) -> bool
where
    G: LoginGateway + ?Sized,
    F: FnOnce(SubmissionReport),
{
    let outcome = gateway.submit(payload).await;
    if !guard.is_mounted() {
        return false;
    }
    on_done(SubmissionReport { ticket, outcome });
    true
}
