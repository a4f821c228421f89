use chrono::{DateTime, Duration, Utc};

/// How long a stored token stays valid, matching the cookie expiry window.
pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone)]
struct StoredToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Holds the session token the way the browser cookie does: one opaque
/// value with a fixed expiry. An expired or blank token reads as absent.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    token: Option<StoredToken>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.token = None;
            return;
        }
        self.token = Some(StoredToken {
            value,
            expires_at: Utc::now() + Duration::days(TOKEN_TTL_DAYS),
        });
    }

    pub fn token(&self) -> Option<&str> {
        let stored = self.token.as_ref()?;
        if stored.expires_at <= Utc::now() {
            return None;
        }
        Some(&stored.value)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn clear(&mut self) {
        self.token = None;
    }

    #[cfg(test)]
    fn expire(&mut self) {
        if let Some(stored) = &mut self.token {
            stored.expires_at = Utc::now() - Duration::seconds(1);
        }
    }
}
