use rusqlite::{params, Row};

use crate::{ctx::BaseParams, Error, Result};

use super::{Category, CreateCategory};

impl<'a> TryFrom<&Row<'a>> for Category {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'a>) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            color: row.get(2)?,
            note_count: row.get(3)?,
        })
    }
}

pub async fn find_categories(BaseParams { db, ctx }: BaseParams) -> Result<Vec<Category>> {
    let user_id = ctx.require_user_id()?;

    db.call(move |conn| {
        let categories = conn
            .prepare(
                r#"SELECT c.id, c.name, c.color, count(n.id) AS note_count
                FROM categories c
                LEFT JOIN notes n ON n.category_id = c.id
                WHERE c.user_id = ?
                GROUP BY c.id
                ORDER BY c.id"#,
            )?
            .query_map(params![user_id], |row| Category::try_from(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(categories)
    })
    .await
    .map_err(Error::from)
}

pub async fn create_category(
    CreateCategory { name, color }: CreateCategory,
    BaseParams { db, ctx }: BaseParams,
) -> Result<Category> {
    let user_id = ctx.require_user_id()?;

    if name.trim().is_empty() {
        return Err(Error::field("name", "This field may not be blank."));
    }

    db.call(move |conn| {
        let exists = conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM categories WHERE user_id = ? AND name = ?)",
            params![user_id, name],
            |row| row.get::<_, bool>(0),
        )?;
        if exists {
            return Err(Error::field("name", "A category with this name already exists.").into());
        }

        let category = conn.query_row(
            r#"INSERT INTO categories (user_id, name, color) VALUES (?, ?, ?)
            RETURNING id, name, color, 0"#,
            params![user_id, name, color],
            |row| Category::try_from(row),
        )?;
        Ok(category)
    })
    .await
    .map_err(Error::from)
}
