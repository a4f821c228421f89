use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("not_found")]
    NotFound(String),

    // auth
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid_token")]
    InvalidToken,
    #[error("invalid_credentials")]
    InvalidCredentials,

    // validation, DRF-style field-keyed error arrays
    #[error("validation")]
    Fields(FieldErrors),

    #[error(transparent)]
    DB(crate::db::Error),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(name.into(), vec![message.into()]);
        Self::Fields(fields)
    }
}

impl From<crate::db::Error> for Error {
    fn from(error: crate::db::Error) -> Self {
        match error {
            crate::db::Error::NotFound(msg) => Self::NotFound(msg),
            error => Self::DB(error),
        }
    }
}

/// crate::Error <--> tokio_rusqlite::Error
/// ```text
/// impl From<tokio_rusqlite::Error> for Error { }
/// impl From<Error> for tokio_rusqlite::Error { }
/// ```
pub mod db_mappers {
    use super::*;
    use crate::db::rusqlite;
    use crate::db::tokio_rusqlite;

    impl From<tokio_rusqlite::Error> for Error {
        fn from(error: tokio_rusqlite::Error) -> Self {
            match error {
                tokio_rusqlite::Error::Other(err) => {
                    if err.is::<Error>() {
                        return *err.downcast::<Error>().unwrap();
                    }
                    Error::from(crate::db::Error::from(tokio_rusqlite::Error::Other(err)))
                }
                _ => Error::from(crate::db::Error::from(error)),
            }
        }
    }

    impl From<rusqlite::Error> for Error {
        fn from(error: rusqlite::Error) -> Self {
            Error::from(crate::db::Error::from(error))
        }
    }

    impl From<Error> for tokio_rusqlite::Error {
        fn from(error: Error) -> Self {
            tokio_rusqlite::Error::Other(error.into())
        }
    }
}

// Response

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            Error::NotFound(_) => (StatusCode::NOT_FOUND, json!({ "detail": "Not found." })),
            Error::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "detail": "Authentication credentials were not provided." }),
            ),
            Error::InvalidToken => (StatusCode::UNAUTHORIZED, json!({ "detail": "Invalid token." })),
            Error::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                json!({ "non_field_errors": ["Invalid credentials"] }),
            ),
            Error::Fields(fields) => (
                StatusCode::BAD_REQUEST,
                serde_json::to_value(fields).unwrap_or_default(),
            ),
            Error::DB(_) | Error::Unexpected(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": "Unexpected error" }))
            }
        };

        let error = Arc::new(self);

        let mut res = axum::Json(body).into_response();
        res.extensions_mut().insert(error);

        *res.status_mut() = status;
        res
    }
}

pub async fn on_error(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let error = response.extensions().get::<Arc<Error>>().map(Arc::as_ref);
    if let Some(error) = error {
        tracing::error!("{:?}", error);
    }

    response
}
