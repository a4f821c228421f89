//! Local form validation. Each check runs before any network call and
//! produces the exact message the form shows.

use uuid::Uuid;

use crate::{Error, Result};

pub const EMAIL_REQUIRED: &str = "Please enter your email address.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Please enter your password.";
pub const SIGNUP_PASSWORD_REQUIRED: &str = "Please enter a password.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const MIN_PASSWORD_LEN: usize = 8;

pub const NOTE_TITLE_REQUIRED: &str = "Please enter a title for your note.";
pub const NOTE_BODY_REQUIRED: &str = "Please write something in your note.";
pub const NOTE_CATEGORY_REQUIRED: &str = "Please select a category.";

pub fn login_form(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(Error::Validation(EMAIL_REQUIRED.into()));
    }
    if !is_valid_email(email) {
        return Err(Error::Validation(EMAIL_INVALID.into()));
    }
    if password.is_empty() {
        return Err(Error::Validation(PASSWORD_REQUIRED.into()));
    }
    Ok(())
}

pub fn signup_form(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(Error::Validation(EMAIL_REQUIRED.into()));
    }
    if !is_valid_email(email) {
        return Err(Error::Validation(EMAIL_INVALID.into()));
    }
    if password.is_empty() {
        return Err(Error::Validation(SIGNUP_PASSWORD_REQUIRED.into()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(Error::Validation(PASSWORD_TOO_SHORT.into()));
    }
    Ok(())
}

/// Returns the selected category id once title, body and category check out.
pub fn note_form(title: &str, body: &str, category_id: Option<Uuid>) -> Result<Uuid> {
    if title.trim().is_empty() {
        return Err(Error::Validation(NOTE_TITLE_REQUIRED.into()));
    }
    if body.trim().is_empty() {
        return Err(Error::Validation(NOTE_BODY_REQUIRED.into()));
    }
    category_id.ok_or_else(|| Error::Validation(NOTE_CATEGORY_REQUIRED.into()))
}

/// `local@domain.tld` shape: no whitespace, one `@`, a dot in the domain.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
