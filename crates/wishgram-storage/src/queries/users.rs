// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User registration and lookup.

use rusqlite::params;

use wishgram_core::{Actor, User, UserId, WishgramError, normalize_display_name};

use crate::database::Database;

/// Register the actor if unseen, otherwise refresh the profile fields.
/// The registration date is written once and never updated.
pub async fn ensure_user(db: &Database, actor: &Actor) -> Result<(), WishgramError> {
    let actor = actor.clone();
    let now = chrono::Utc::now().to_rfc3339();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO user (user_id, username, first_name, last_name, registration_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT (user_id) DO UPDATE SET
                     username = excluded.username,
                     first_name = excluded.first_name,
                     last_name = excluded.last_name",
                params![
                    actor.id.0,
                    actor.profile.username,
                    actor.profile.first_name,
                    actor.profile.last_name,
                    now,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Look up a user by display name, ignoring one leading `@`.
pub async fn find_by_username(db: &Database, name: &str) -> Result<Option<User>, WishgramError> {
    let name = normalize_display_name(name).to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, username, first_name, last_name, registration_date
                 FROM user WHERE username = ?1",
            )?;
            let result = stmt.query_row(params![name], user_from_row);
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

fn user_from_row(row: &rusqlite::Row<'_>) -> Result<User, rusqlite::Error> {
    Ok(User {
        id: UserId(row.get(0)?),
        username: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        registration_date: row.get(4)?,
    })
}
