// SPDX-License-Identifier: MPL-2.0
//! The visitor's contact draft and its client-side validation rules.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Minimum trimmed length for the sender name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum trimmed length for the message body.
pub const MIN_MESSAGE_LEN: usize = 5;

/// Maximum length for the message body.
pub const MAX_MESSAGE_LEN: usize = 800;

/// Total email length bounds. The structural pattern below handles the
/// shape; the length bounds are checked separately.
const EMAIL_LEN_RANGE: std::ops::RangeInclusive<usize> = 3..=254;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameTooShort,
    EmailInvalid,
    MessageTooShort,
    MessageTooLong,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameTooShort => {
                write!(f, "name must be at least {} characters", MIN_NAME_LEN)
            }
            ValidationError::EmailInvalid => write!(f, "email address is not valid"),
            ValidationError::MessageTooShort => {
                write!(f, "message must be at least {} characters", MIN_MESSAGE_LEN)
            }
            ValidationError::MessageTooLong => {
                write!(f, "message must be at most {} characters", MAX_MESSAGE_LEN)
            }
        }
    }
}

/// A contact-form draft.
///
/// `company` is the hidden honeypot field: humans never see it, so a
/// non-empty value marks the submission as automated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            company: String::new(),
        }
    }

    /// Checks the draft against the submission rules, reporting the first
    /// failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort);
        }
        if !email_is_valid(&self.email) {
            return Err(ValidationError::EmailInvalid);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            return Err(ValidationError::MessageTooShort);
        }
        if self.message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ValidationError::MessageTooLong);
        }
        Ok(())
    }

    /// Whether the draft may be submitted. Gates the submit control.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether the honeypot field was populated, marking the submission as
    /// automated.
    pub fn is_honeypot_tripped(&self) -> bool {
        !self.company.is_empty()
    }
}

fn email_is_valid(email: &str) -> bool {
    EMAIL_LEN_RANGE.contains(&email.chars().count()) && email_pattern().is_match(email)
}
