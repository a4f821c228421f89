use lazy_static::lazy_static;
use rusqlite_migration::{Migrations, M};

lazy_static! {
    pub static ref MIGRATIONS: Migrations<'static> = Migrations::new(vec![
        M::up(
            r#"
            CREATE TABLE users (
                id BLOB PRIMARY KEY CHECK(length(id) = 16) NOT NULL UNIQUE DEFAULT (uuid7_now()),
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,

                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
        "#
        ),
        M::up(
            r#"
            CREATE TABLE tokens (
                key TEXT PRIMARY KEY NOT NULL,
                user_id BLOB NOT NULL CHECK(length(user_id) = 16),

                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,

                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            );
        "#
        ),
        M::up(
            r#"
            CREATE TABLE categories (
                id BLOB PRIMARY KEY CHECK(length(id) = 16) NOT NULL UNIQUE DEFAULT (uuid7_now()),
                user_id BLOB NOT NULL CHECK(length(user_id) = 16),

                name TEXT NOT NULL,
                color TEXT NOT NULL DEFAULT '#FFFFFF',

                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,

                UNIQUE (user_id, name),
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            );
        "#
        ),
        M::up(
            r#"
            CREATE TABLE notes (
                id BLOB PRIMARY KEY CHECK(length(id) = 16) NOT NULL UNIQUE DEFAULT (uuid7_now()),
                user_id BLOB NOT NULL CHECK(length(user_id) = 16),
                category_id BLOB NOT NULL CHECK(length(category_id) = 16),

                title TEXT NOT NULL,
                body TEXT NOT NULL,

                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,

                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE,
                FOREIGN KEY (category_id) REFERENCES categories (id) ON DELETE CASCADE
            );
        "#
        ),
    ]);
}
