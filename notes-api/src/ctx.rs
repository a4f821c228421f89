use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
    RequestPartsExt,
};
use rusqlite::params;
use serde::Serialize;
use uuid::Uuid;

use crate::{db, Error, DB};

#[derive(Clone, Debug, FromRequestParts)]
pub struct BaseParams {
    pub ctx: Ctx,
    #[from_request(via(Extension))]
    pub db: DB,
}

impl BaseParams {
    pub fn new(db: DB, ctx: Ctx) -> Self {
        Self { db, ctx }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub user: Option<User>,
}

impl Ctx {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn get_user_id(&self) -> Option<Uuid> {
        self.user.as_ref().map(|u| u.id)
    }

    /// The authenticated user, or a 401 for anonymous requests.
    pub fn require_user(&self) -> crate::Result<&User> {
        self.user.as_ref().ok_or(Error::Unauthorized)
    }

    pub fn require_user_id(&self) -> crate::Result<Uuid> {
        self.require_user().map(|u| u.id)
    }
}

impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(db) = parts
            .extract::<Extension<DB>>()
            .await
            .map_err(|e| e.into_response())?;

        let Some(key) = token_key(parts) else {
            return Ok(Self::new(None));
        };

        let user = find_user_by_token(db, key).await.map_err(|e| e.into_response())?;

        Ok(Self::new(Some(user)))
    }
}

fn token_key(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let key = header.strip_prefix("Token ")?.trim();
    if key.is_empty() {
        return None;
    }
    Some(key.to_string())
}

async fn find_user_by_token(db: DB, key: String) -> crate::Result<User> {
    db.call(move |conn| {
        let user = conn
            .query_row(
                r#"SELECT u.id, u.username, u.email FROM tokens t
                JOIN users u ON u.id = t.user_id
                WHERE t.key = ?"#,
                params![key],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        email: row.get(2)?,
                    })
                },
            )
            .map_err(db::Error::from)
            .map_err(|e| match e {
                db::Error::NotFound(_) => Error::InvalidToken,
                e => Error::from(e),
            })?;
        Ok(user)
    })
    .await
    .map_err(Error::from)
}
