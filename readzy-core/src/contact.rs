//! Contact form with client-side validation.
//!
//! Nothing leaves the process: a valid submission is logged as structured
//! JSON and the form is cleared.

use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::notify::NotificationKind;

/// Minimum trimmed message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Why a submission was rejected. `Display` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
}

/// Result of a submit attempt, phrased as the notification to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: String,
    pub kind: NotificationKind,
    pub submission: Option<ContactSubmission>,
}

/// Editable form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Check the form without consuming it. Email is checked first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(())
    }

    /// Validate, then either reject (form untouched) or accept (form reset).
    pub fn submit(&mut self) -> Result<ContactSubmission, ValidationError> {
        self.submit_at(Utc::now())
    }

    /// [`submit`](Self::submit) with an explicit timestamp.
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<ContactSubmission, ValidationError> {
        if let Err(err) = self.validate() {
            warn!(reason = %err, "contact form rejected");
            return Err(err);
        }

        let form = std::mem::take(self);
        let submission = ContactSubmission {
            name: form.name,
            email: form.email,
            message: form.message,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        match serde_json::to_string(&submission) {
            Ok(json) => info!(submission = %json, "contact form submitted"),
            Err(e) => warn!(error = %e, "contact submission not serializable"),
        }
        Ok(submission)
    }

    /// Submit and describe the notification the host should show.
    pub fn submit_with_feedback(&mut self) -> SubmitOutcome {
        match self.submit() {
            Ok(submission) => SubmitOutcome {
                message: SUCCESS_MESSAGE.to_string(),
                kind: NotificationKind::Success,
                submission: Some(submission),
            },
            Err(err) => SubmitOutcome {
                message: err.to_string(),
                kind: NotificationKind::Error,
                submission: None,
            },
        }
    }
}
