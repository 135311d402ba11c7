//! Login form state and validation.

use orthowatch_core::session::Credentials;

use crate::common::TextField;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

const PASSWORD_MIN_CHARS: usize = 6;

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Submit,
            LoginField::Submit => LoginField::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Email => LoginField::Submit,
            LoginField::Password => LoginField::Email,
            LoginField::Submit => LoginField::Password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    Editing,
    Submitting,
}

#[derive(Debug)]
pub struct LoginFormState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub show_password: bool,
    pub phase: LoginPhase,
    /// Server-side failure shown above the fields.
    pub form_error: Option<String>,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: TextField::default(),
            password: TextField::default(),
            focus: LoginField::Email,
            show_password: false,
            phase: LoginPhase::Editing,
            form_error: None,
            email_error: None,
            password_error: None,
        }
    }

    /// Validates the form, recording per-field errors.
    ///
    /// Returns credentials only when both fields pass. Field values survive
    /// a failed validation; only the error annotations change.
    pub fn validate(&mut self) -> Option<Credentials> {
        let email = self.email.text().trim();
        self.email_error = if email.is_empty() {
            Some(EMAIL_REQUIRED)
        } else if !looks_like_email(email) {
            Some(EMAIL_INVALID)
        } else {
            None
        };

        self.password_error = if self.password.text().chars().count() < PASSWORD_MIN_CHARS {
            Some(PASSWORD_TOO_SHORT)
        } else {
            None
        };

        if self.email_error.is_some() || self.password_error.is_some() {
            return None;
        }

        Some(Credentials {
            email: email.to_string(),
            password: self.password.text().to_string(),
        })
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::Submit => None,
        }
    }

    /// Resets everything, including field contents. Used after a successful
    /// login so a later logout presents a blank form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Light-weight shape check: one `@`, non-empty local part, and a domain
/// with a dot in the middle. The server remains the authority.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_required() {
        let mut form = LoginFormState::new();
        form.password.insert_str("secret1");

        assert!(form.validate().is_none());
        assert_eq!(form.email_error, Some(EMAIL_REQUIRED));
        assert!(form.password_error.is_none());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut form = LoginFormState::new();
        form.password.insert_str("secret1");

        for bad in ["no-at-sign", "@hospital.com", "user@", "user@nodot", "user@.com"] {
            form.email.clear();
            form.email.insert_str(bad);
            assert!(form.validate().is_none(), "accepted {bad:?}");
            assert_eq!(form.email_error, Some(EMAIL_INVALID), "for {bad:?}");
        }
    }

    #[test]
    fn test_short_password_rejected() {
        let mut form = LoginFormState::new();
        form.email.insert_str("clinician@hospital.com");
        form.password.insert_str("12345");

        assert!(form.validate().is_none());
        assert_eq!(form.password_error, Some(PASSWORD_TOO_SHORT));
        // Field values survive a failed validation.
        assert_eq!(form.password.text(), "12345");
    }

    #[test]
    fn test_valid_form_yields_credentials() {
        let mut form = LoginFormState::new();
        form.email.insert_str("  clinician@hospital.com  ");
        form.password.insert_str("secret1");

        let creds = form.validate().unwrap();
        assert_eq!(creds.email, "clinician@hospital.com");
        assert_eq!(creds.password, "secret1");
        assert!(form.email_error.is_none());
        assert!(form.password_error.is_none());
    }

    #[test]
    fn test_errors_clear_on_revalidation() {
        let mut form = LoginFormState::new();
        assert!(form.validate().is_none());
        assert!(form.email_error.is_some());

        form.email.insert_str("clinician@hospital.com");
        form.password.insert_str("secret1");
        assert!(form.validate().is_some());
        assert!(form.email_error.is_none());
        assert!(form.password_error.is_none());
    }
}
