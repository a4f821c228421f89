pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Rejected locally before any network call.
    #[error("{0}")]
    Validation(String),

    /// The server rejected the request; `message` is the first error string
    /// extracted from the response body, empty when the body had none.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A 401 anywhere. The session has already been cleared.
    #[error("unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    /// The message to show the user: the local validation text, the
    /// server-reported error when one was extracted, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Validation(message) => message.clone(),
            Error::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}
