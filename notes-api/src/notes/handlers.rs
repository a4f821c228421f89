use rusqlite::{named_params, params, Row};
use uuid::Uuid;

use crate::{categories::Category, ctx::BaseParams, Error, Result};

use super::{CreateNote, Note, NotesQuery, UpdateNote};

const NOTE_COLUMNS: &str = r#"n.id, n.title, n.body, n.created_at, n.updated_at, c.id, c.name, c.color"#;

impl<'a> TryFrom<&Row<'a>> for Note {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'a>) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            body: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
            category: Category {
                id: row.get(5)?,
                name: row.get(6)?,
                color: row.get(7)?,
                note_count: None,
            },
        })
    }
}

pub async fn find_notes(query: NotesQuery, BaseParams { db, ctx }: BaseParams) -> Result<Vec<Note>> {
    let user_id = ctx.require_user_id()?;

    db.call(move |conn| {
        let sql = format!(
            r#"SELECT {NOTE_COLUMNS}
            FROM notes n
            JOIN categories c ON c.id = n.category_id
            WHERE n.user_id = :user_id
              AND (:category IS NULL OR lower(c.name) = lower(:category))
              AND (:search IS NULL
                   OR instr(lower(n.title), lower(:search)) > 0
                   OR instr(lower(n.body), lower(:search)) > 0)
              AND (:date_from IS NULL OR date(n.created_at) >= date(:date_from))
              AND (:date_to IS NULL OR date(n.created_at) <= date(:date_to))
            ORDER BY n.updated_at DESC"#,
            NOTE_COLUMNS = NOTE_COLUMNS
        );

        let notes = conn
            .prepare(&sql)?
            .query_map(
                named_params! {
                    ":user_id": user_id,
                    ":category": query.category,
                    ":search": query.search,
                    ":date_from": query.date_from,
                    ":date_to": query.date_to,
                },
                |row| Note::try_from(row),
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(notes)
    })
    .await
    .map_err(Error::from)
}

pub async fn create_note(
    CreateNote {
        title,
        body,
        category_id,
    }: CreateNote,
    BaseParams { db, ctx }: BaseParams,
) -> Result<Note> {
    let user_id = ctx.require_user_id()?;

    db.call(move |conn| {
        check_category(conn, user_id, category_id)?;

        let now = chrono::Utc::now();
        let note_id: Uuid = conn.query_row(
            r#"INSERT INTO notes (user_id, category_id, title, body, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id"#,
            params![user_id, category_id, title, body, now, now],
            |row| row.get(0),
        )?;

        select_note(conn, user_id, note_id)
    })
    .await
    .map_err(Error::from)
}

pub async fn get_note(note_id: Uuid, BaseParams { db, ctx }: BaseParams) -> Result<Note> {
    let user_id = ctx.require_user_id()?;

    db.call(move |conn| select_note(conn, user_id, note_id))
        .await
        .map_err(Error::from)
}

pub async fn update_note(
    note_id: Uuid,
    UpdateNote {
        title,
        body,
        category_id,
    }: UpdateNote,
    BaseParams { db, ctx }: BaseParams,
) -> Result<Note> {
    let user_id = ctx.require_user_id()?;

    db.call(move |conn| {
        if let Some(category_id) = category_id {
            check_category(conn, user_id, category_id)?;
        }

        let updated = conn.execute(
            r#"UPDATE notes
            SET title = coalesce(?, title),
                body = coalesce(?, body),
                category_id = coalesce(?, category_id),
                updated_at = ?
            WHERE id = ? AND user_id = ?"#,
            params![title, body, category_id, chrono::Utc::now(), note_id, user_id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound("Note not found".into()).into());
        }

        select_note(conn, user_id, note_id)
    })
    .await
    .map_err(Error::from)
}

pub async fn delete_note(note_id: Uuid, BaseParams { db, ctx }: BaseParams) -> Result<()> {
    let user_id = ctx.require_user_id()?;

    db.call(move |conn| {
        let deleted = conn.execute(
            "DELETE FROM notes WHERE id = ? AND user_id = ?",
            params![note_id, user_id],
        )?;
        if deleted == 0 {
            return Err(Error::NotFound("Note not found".into()).into());
        }
        Ok(())
    })
    .await
    .map_err(Error::from)
}

fn select_note(conn: &rusqlite::Connection, user_id: Uuid, note_id: Uuid) -> tokio_rusqlite::Result<Note> {
    let sql = format!(
        r#"SELECT {NOTE_COLUMNS}
        FROM notes n
        JOIN categories c ON c.id = n.category_id
        WHERE n.id = ? AND n.user_id = ?"#,
        NOTE_COLUMNS = NOTE_COLUMNS
    );

    conn.query_row(&sql, params![note_id, user_id], |row| Note::try_from(row))
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound("Note not found".into()).into(),
            e => e.into(),
        })
}

fn check_category(conn: &rusqlite::Connection, user_id: Uuid, category_id: Uuid) -> tokio_rusqlite::Result<()> {
    let owned = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM categories WHERE id = ? AND user_id = ?)",
        params![category_id, user_id],
        |row| row.get::<_, bool>(0),
    )?;

    if !owned {
        return Err(Error::field(
            "category_id",
            "You cannot create a note in a category that does not belong to you.",
        )
        .into());
    }
    Ok(())
}
