//! Form rules applied before a store action is invoked.
//!
//! Stores never see input that fails these checks.

use std::fmt;

use thiserror::Error;

pub const MIN_PHONE_DIGITS: usize = 10;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const VERIFICATION_CODE_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PhoneNumber,
    Username,
    Password,
    ConfirmPassword,
    CurrentPassword,
    NewPassword,
    VerificationCode,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PhoneNumber => "phone_number",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::CurrentPassword => "current_password",
            Self::NewPassword => "new_password",
            Self::VerificationCode => "verification_code",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number must be at least 10 digits")]
    PhoneTooShort,
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please confirm your password")]
    ConfirmRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Current password is required")]
    CurrentPasswordRequired,
    #[error("New password is required")]
    NewPasswordRequired,
    #[error("New password must be at least 6 characters")]
    NewPasswordTooShort,
    #[error("Please confirm your new password")]
    ConfirmNewRequired,
    #[error("Verification code must be 6 digits")]
    InvalidCodeFormat,
}

/// Every failing field of a form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", render(.0))]
pub struct FormErrors(pub Vec<(Field, FieldError)>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, e)| e)
    }

    fn push(&mut self, field: Field, result: Result<(), FieldError>) {
        if let Err(err) = result {
            self.0.push((field, err));
        }
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn render(errors: &[(Field, FieldError)]) -> String {
    errors
        .iter()
        .map(|(field, err)| format!("{}: {}", field, err))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn phone_number(phone: &str) -> Result<(), FieldError> {
    if phone.is_empty() {
        Err(FieldError::PhoneRequired)
    } else if phone.chars().count() < MIN_PHONE_DIGITS {
        Err(FieldError::PhoneTooShort)
    } else {
        Ok(())
    }
}

pub fn username(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        Err(FieldError::UsernameRequired)
    } else if name.chars().count() < MIN_USERNAME_LEN {
        Err(FieldError::UsernameTooShort)
    } else {
        Ok(())
    }
}

pub fn password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        Err(FieldError::PasswordRequired)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Err(FieldError::PasswordTooShort)
    } else {
        Ok(())
    }
}

pub fn verification_code(code: &str) -> Result<(), FieldError> {
    if code.len() == VERIFICATION_CODE_LEN && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::InvalidCodeFormat)
    }
}

/// Sign-in only checks presence; the backend decides the rest.
pub fn sign_in(phone: &str, pass: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if phone.is_empty() {
        errors.push(Field::PhoneNumber, Err(FieldError::PhoneRequired));
    }
    if pass.is_empty() {
        errors.push(Field::Password, Err(FieldError::PasswordRequired));
    }
    errors.into_result()
}

/// `phone` is the local number, before the dial code is prepended.
pub fn sign_up(phone: &str, name: &str, pass: &str, confirm: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.push(Field::PhoneNumber, phone_number(phone));
    // Sign-up only requires a username; the length rule applies to edits.
    if name.is_empty() {
        errors.push(Field::Username, Err(FieldError::UsernameRequired));
    }
    errors.push(Field::Password, password(pass));
    let confirm_check = if confirm.is_empty() {
        Err(FieldError::ConfirmRequired)
    } else if confirm != pass {
        Err(FieldError::PasswordMismatch)
    } else {
        Ok(())
    };
    errors.push(Field::ConfirmPassword, confirm_check);
    errors.into_result()
}

pub fn change_password(current: &str, new: &str, confirm: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if current.is_empty() {
        errors.push(Field::CurrentPassword, Err(FieldError::CurrentPasswordRequired));
    }
    let new_check = if new.is_empty() {
        Err(FieldError::NewPasswordRequired)
    } else if new.chars().count() < MIN_PASSWORD_LEN {
        Err(FieldError::NewPasswordTooShort)
    } else {
        Ok(())
    };
    errors.push(Field::NewPassword, new_check);
    let confirm_check = if confirm.is_empty() {
        Err(FieldError::ConfirmNewRequired)
    } else if confirm != new {
        Err(FieldError::PasswordMismatch)
    } else {
        Ok(())
    };
    errors.push(Field::ConfirmPassword, confirm_check);
    errors.into_result()
}
