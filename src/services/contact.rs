//! Contact form submission flow.
//!
//! DESIGN
//! ======
//! `ContactForm` is the explicit state of one form: the four text fields and
//! a submit phase. Transitions take the clock as an argument so the banner
//! lifetime can be tested without sleeping.
//!
//! ```text
//! Idle ──begin_submit──> Submitting ──finish(Ok)──> Succeeded{at} ──5s──> Idle
//!   ^                        │
//!   └──────── finish(Err) ───┴──> Failed{message}
//! ```
//!
//! ERROR HANDLING
//! ==============
//! A failed store write is reported (phase `Failed`, fields kept) instead of
//! being shown as success.

use std::time::{Duration, Instant};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

use crate::models::{ContactField, ContactFields, ContactSubmission};
use crate::store::{self, CrudStore, StoreError};

/// How long the success banner stays visible.
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str = "Mesajınız başarıyla gönderildi. En kısa sürede size dönüş yapacağız.";
const STORE_FAILURE_MESSAGE: &str = "Mesajınız gönderilemedi. Lütfen daha sonra tekrar deneyin.";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("required field is empty: {}", .0.name())]
    MissingField(ContactField),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded { at: Instant },
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    phase: SubmitPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self { fields: ContactFields::default(), phase: SubmitPhase::Idle }
    }

    #[must_use]
    pub fn with_fields(fields: ContactFields) -> Self {
        Self { fields, phase: SubmitPhase::Idle }
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    #[must_use]
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.fields.set(field, value);
    }

    /// Package the fields into a new submission and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// `AlreadySubmitting` while a write is pending (phase unchanged);
    /// `MissingField` when a field is empty (phase becomes `Failed`).
    pub fn begin_submit(&mut self, now: OffsetDateTime) -> Result<ContactSubmission, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Some(field) = self.fields.first_missing() {
            self.phase = SubmitPhase::Failed { message: format!("\"{}\" alanı zorunludur.", field.label()) };
            return Err(ContactError::MissingField(field));
        }

        let submission = ContactSubmission {
            id: uuid::Uuid::new_v4().to_string(),
            sender_name: self.fields.sender_name.clone(),
            sender_email: self.fields.sender_email.clone(),
            subject: self.fields.subject.clone(),
            message_content: self.fields.message_content.clone(),
            submission_date_time: now.format(&Rfc3339)?,
        };
        self.phase = SubmitPhase::Submitting;
        Ok(submission)
    }

    /// Apply the outcome of the store write.
    ///
    /// Success clears the fields and starts the banner; failure keeps the
    /// fields so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns the store error back as `ContactError::Store`.
    pub fn finish_submit(&mut self, outcome: Result<(), StoreError>, now: Instant) -> Result<(), ContactError> {
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.phase = SubmitPhase::Succeeded { at: now };
                Ok(())
            }
            Err(e) => {
                self.phase = SubmitPhase::Failed { message: STORE_FAILURE_MESSAGE.to_owned() };
                Err(ContactError::Store(e))
            }
        }
    }

    /// Remaining banner lifetime, or `None` when no success banner shows.
    #[must_use]
    pub fn banner_remaining(&self, now: Instant) -> Option<Duration> {
        let SubmitPhase::Succeeded { at } = self.phase else {
            return None;
        };
        SUCCESS_BANNER_TTL
            .checked_sub(now.saturating_duration_since(at))
            .filter(|left| !left.is_zero())
    }

    #[must_use]
    pub fn success_visible_at(&self, now: Instant) -> bool {
        self.banner_remaining(now).is_some()
    }

    /// Hide an expired success banner. Field values are not touched.
    pub fn dismiss_expired(&mut self, now: Instant) {
        if matches!(self.phase, SubmitPhase::Succeeded { .. }) && !self.success_visible_at(now) {
            self.phase = SubmitPhase::Idle;
        }
    }

    /// Error text for a `Failed` phase.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Run one submit gesture: validate, stamp, write once, record the outcome.
///
/// # Errors
///
/// Returns the validation or store error; `form` reflects it either way.
pub async fn submit(
    form: &mut ContactForm,
    store: &dyn CrudStore,
    collection: &str,
) -> Result<ContactSubmission, ContactError> {
    let submission = form.begin_submit(OffsetDateTime::now_utc())?;
    let outcome = store::create_from(store, collection, &submission).await;
    if let Err(e) = &outcome {
        warn!(error = %e, id = %submission.id, "contact submission failed");
    }
    form.finish_submit(outcome, Instant::now())?;

    info!(id = %submission.id, collection, "contact submission stored");
    Ok(submission)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
