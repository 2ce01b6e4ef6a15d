use thiserror::Error;

use super::email::is_valid_email;

pub const FIRST_NAME_MIN_LEN: usize = 3;
pub const FIRST_NAME_MAX_LEN: usize = 30;

/// A user-correctable input error that blocks leaving a form
///
/// The display strings are shown verbatim beneath the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both username and password.")]
    MissingCredentials,

    #[error("All fields are required.")]
    MissingFields,

    #[error("First name must be between 3 and 30 characters.")]
    FirstNameLength,

    #[error("Invalid email address.")]
    InvalidEmail,
}

/// Check the login form. Any non-empty pair is accepted.
pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Borrowed view of the registration form fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registration<'a> {
    pub first_name: &'a str,
    pub family_name: &'a str,
    pub date_of_birth: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl Registration<'_> {
    fn any_empty(&self) -> bool {
        [
            self.first_name,
            self.family_name,
            self.date_of_birth,
            self.email,
            self.password,
        ]
        .iter()
        .any(|field| field.is_empty())
    }
}

/// Check the registration form, reporting the first failing rule
pub fn validate_registration(form: &Registration<'_>) -> Result<(), ValidationError> {
    if form.any_empty() {
        return Err(ValidationError::MissingFields);
    }

    let first_name_len = form.first_name.chars().count();
    if !(FIRST_NAME_MIN_LEN..=FIRST_NAME_MAX_LEN).contains(&first_name_len) {
        return Err(ValidationError::FirstNameLength);
    }

    if !is_valid_email(form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
