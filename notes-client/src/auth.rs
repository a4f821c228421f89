//! The login, signup, and logout flows: local validation first, then the
//! API call, then a navigation target for the caller to perform.

use crate::api::ApiClient;
use crate::guard::Target;
use crate::types::User;
use crate::{validate, Result};

pub const LOGIN_FALLBACK: &str = "Invalid credentials. Please try again.";
pub const SIGNUP_FALLBACK: &str = "Registration failed.";

/// Validates the form, logs in, and returns where to navigate.
/// On success the token is already persisted with its 7-day expiry.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<Target> {
    validate::login_form(email, password)?;

    api.login(email, password).await?;

    Ok(Target::Dashboard)
}

/// Validates the form and registers the account. The server issues a token
/// on signup, so a successful registration lands on the dashboard.
pub async fn signup(api: &ApiClient, email: &str, password: &str) -> Result<User> {
    validate::signup_form(email, password)?;

    let auth = api.signup(email, password).await?;

    Ok(auth.user)
}

/// Clears the session; the next navigation's guard check does the rest.
pub async fn logout(api: &ApiClient) -> Target {
    api.logout().await;
    Target::Login
}
