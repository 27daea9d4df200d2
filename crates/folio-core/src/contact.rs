//! Contact form model.
//!
//! Validation runs entirely client-side. Submission is simulated by the host,
//! which only needs [`SubmissionState`] to know what to render.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, ContactField};

/// Loose `local@domain.tld` shape check; no whitespace, one `@`, a dot after it.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A message typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Checks that every field is filled in and the email looks plausible.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Subject, &self.subject),
            (ContactField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Mutable access to a field by name, for generic input handlers.
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Returns true if `email` matches the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Lifecycle of a simulated form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Form is editable.
    #[default]
    Idle,
    /// Waiting on the simulated network delay.
    Submitting,
    /// Success message shown until the host resets the form.
    Submitted,
}

impl SubmissionState {
    /// Validates `message` and moves to `Submitting`.
    ///
    /// Rejected while a submission is already in flight.
    pub fn begin(&mut self, message: &ContactMessage) -> Result<(), ContactError> {
        if *self == Self::Submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        message.validate()?;
        *self = Self::Submitting;
        log::debug!("contact form submitting");
        Ok(())
    }

    /// Marks the in-flight submission as delivered.
    pub fn complete(&mut self) {
        if *self == Self::Submitting {
            *self = Self::Submitted;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    #[inline]
    pub fn is_busy(self) -> bool {
        self == Self::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Let's build something.".into(),
        }
    }

    #[test]
    fn test_valid_message() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_rejected_in_order() {
        let mut msg = filled();
        msg.subject = "   ".into();
        msg.message.clear();
        assert_eq!(
            msg.validate(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut msg = filled();
        msg.email = "ada@home".into();
        assert_eq!(msg.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_field_mut_and_clear() {
        let mut msg = ContactMessage::default();
        msg.field_mut(ContactField::Email).push_str("x@y.z");
        assert_eq!(msg.email, "x@y.z");
        assert_eq!(msg.field(ContactField::Email), "x@y.z");
        msg.clear();
        assert_eq!(msg, ContactMessage::default());
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = SubmissionState::default();
        state.begin(&filled()).unwrap();
        assert!(state.is_busy());
        assert_eq!(
            state.begin(&filled()),
            Err(ContactError::AlreadySubmitting)
        );
        state.complete();
        assert_eq!(state, SubmissionState::Submitted);
        state.reset();
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn test_invalid_message_does_not_start() {
        let mut state = SubmissionState::Idle;
        assert!(state.begin(&ContactMessage::default()).is_err());
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn test_complete_ignored_when_idle() {
        let mut state = SubmissionState::Idle;
        state.complete();
        assert_eq!(state, SubmissionState::Idle);
    }
}
