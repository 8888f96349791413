use crate::messages::{EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED, password_too_short};

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Credentials typed into the login view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Field-level validation messages. Both fields are checked independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Messages in form order (email first).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.email.as_deref().into_iter().chain(self.password.as_deref())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.iter().collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check both fields; returns every problem found.
    pub fn validate(&self, min_password_length: usize) -> Result<(), ValidationErrors> {
        let errors = ValidationErrors {
            email: Self::check_email(&self.email),
            password: Self::check_password(&self.password, min_password_length),
        };

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_email(email: &str) -> Option<String> {
        if email.is_empty() {
            Some(EMAIL_REQUIRED.to_string())
        } else if !EMAIL_PATTERN.is_match(email) {
            Some(EMAIL_INVALID.to_string())
        } else {
            None
        }
    }

    fn check_password(password: &str, min_length: usize) -> Option<String> {
        if password.is_empty() {
            Some(PASSWORD_REQUIRED.to_string())
        } else if password.chars().count() < min_length {
            Some(password_too_short(min_length))
        } else {
            None
        }
    }
}
