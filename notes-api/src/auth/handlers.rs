use rand::Rng;
use rusqlite::params;
use uuid::Uuid;

use crate::{ctx::BaseParams, Error, Result};

use super::{password, AuthResponse, LoginRequest, SignupRequest, User, DEFAULT_CATEGORIES};

pub async fn signup(
    SignupRequest { email, password }: SignupRequest,
    BaseParams { db, .. }: BaseParams,
) -> Result<AuthResponse> {
    if email.trim().is_empty() {
        return Err(Error::field("email", "This field may not be blank."));
    }
    if password.is_empty() {
        return Err(Error::field("password", "This field may not be blank."));
    }

    let password_hash = password::hash(&password)?;

    db.call(move |conn| {
        let taken = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = ?)",
            params![email],
            |row| row.get::<_, bool>(0),
        )?;
        if taken {
            return Err(Error::field("email", "An account with this email already exists.").into());
        }

        // Email doubles as the username.
        let user = conn.query_row(
            r#"INSERT INTO users (username, email, password) VALUES (?, ?, ?)
            RETURNING id, username, email"#,
            params![email, email, password_hash],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    email: row.get(2)?,
                })
            },
        )?;

        for (name, color) in DEFAULT_CATEGORIES {
            conn.execute(
                "INSERT INTO categories (user_id, name, color) VALUES (?, ?, ?)",
                params![user.id, name, color],
            )?;
        }

        let token = get_or_create_token(conn, user.id)?;

        Ok(AuthResponse { token, user })
    })
    .await
    .map_err(Error::from)
}

pub async fn login(
    LoginRequest { email, password }: LoginRequest,
    BaseParams { db, .. }: BaseParams,
) -> Result<AuthResponse> {
    let (user, password_hash) = db
        .call(move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, email, password FROM users WHERE username = ?",
                    params![email],
                    |row| {
                        Ok((
                            User {
                                id: row.get(0)?,
                                username: row.get(1)?,
                                email: row.get(2)?,
                            },
                            row.get::<_, String>(3)?,
                        ))
                    },
                )
                .map_err(crate::db::Error::from)
                .map_err(|e| match e {
                    crate::db::Error::NotFound(_) => Error::InvalidCredentials,
                    e => Error::from(e),
                })?;
            Ok(row)
        })
        .await
        .map_err(Error::from)?;

    if !password::verify(&password, &password_hash)? {
        return Err(Error::InvalidCredentials);
    }

    let user_id = user.id;
    let token = db
        .call(move |conn| get_or_create_token(conn, user_id).map_err(|e| e.into()))
        .await
        .map_err(Error::from)?;

    tracing::info!("{} logged in", user.email);

    Ok(AuthResponse { token, user })
}

pub async fn logout(BaseParams { db, ctx }: BaseParams) -> Result<()> {
    let user_id = ctx.require_user_id()?;

    db.call(move |conn| {
        conn.execute("DELETE FROM tokens WHERE user_id = ?", params![user_id])?;
        Ok(())
    })
    .await
    .map_err(Error::from)
}

fn get_or_create_token(conn: &rusqlite::Connection, user_id: Uuid) -> rusqlite::Result<String> {
    let existing = conn
        .query_row("SELECT key FROM tokens WHERE user_id = ?", params![user_id], |row| {
            row.get::<_, String>(0)
        })
        .map(Some)
        .or_else(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Ok(None),
            e => Err(e),
        })?;

    if let Some(key) = existing {
        return Ok(key);
    }

    let key = generate_key();
    conn.execute("INSERT INTO tokens (key, user_id) VALUES (?, ?)", params![key, user_id])?;

    Ok(key)
}

fn generate_key() -> String {
    let bytes: [u8; 20] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
