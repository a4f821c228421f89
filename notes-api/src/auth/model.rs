use serde::{Deserialize, Serialize};

pub use crate::ctx::User;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Categories every new user starts with.
pub const DEFAULT_CATEGORIES: [(&str, &str); 3] = [
    ("Random Thoughts", "#FFCCB6"),
    ("School", "#FDFD96"),
    ("Personal", "#B8E0D2"),
];
