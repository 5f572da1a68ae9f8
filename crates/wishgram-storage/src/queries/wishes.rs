// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wish CRUD and status transitions.

use std::str::FromStr;

use rusqlite::params;

use wishgram_core::{ChatId, NewWish, UserId, Wish, WishId, WishStatus, WishgramError};

use crate::database::Database;

/// Persist a new wish and return its rowid.
pub async fn create_wish(db: &Database, wish: &NewWish) -> Result<WishId, WishgramError> {
    let wish = wish.clone();
    let now = chrono::Utc::now().to_rfc3339();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO wish (user_id, chat_id, wish_text, description, status, priority, create_date, price)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    wish.user_id.0,
                    wish.chat_id.0,
                    wish.text,
                    wish.description,
                    WishStatus::Active.to_string(),
                    wish.priority,
                    now,
                    wish.price,
                ],
            )?;
            Ok(WishId(conn.last_insert_rowid()))
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a wish by id.
pub async fn get_wish(db: &Database, id: WishId) -> Result<Option<Wish>, WishgramError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT wish_id, user_id, chat_id, wish_text, description, status, priority, price, create_date, complete_date
                 FROM wish WHERE wish_id = ?1",
            )?;
            let result = stmt.query_row(params![id.0], wish_from_row);
            match result {
                Ok(wish) => Ok(Some(wish)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// All wishes owned by `user`, newest first, optionally narrowed by status.
/// The id tiebreak keeps same-timestamp rows deterministically newest first.
pub async fn list_by_user(
    db: &Database,
    user: UserId,
    status: Option<WishStatus>,
) -> Result<Vec<Wish>, WishgramError> {
    let status = status.map(|s| s.to_string());
    db.connection()
        .call(move |conn| {
            let mut wishes = Vec::new();
            match &status {
                Some(status_filter) => {
                    let mut stmt = conn.prepare(
                        "SELECT wish_id, user_id, chat_id, wish_text, description, status, priority, price, create_date, complete_date
                         FROM wish WHERE user_id = ?1 AND status = ?2
                         ORDER BY create_date DESC, wish_id DESC",
                    )?;
                    let rows = stmt.query_map(params![user.0, status_filter], wish_from_row)?;
                    for row in rows {
                        wishes.push(row?);
                    }
                }
                None => {
                    let mut stmt = conn.prepare(
                        "SELECT wish_id, user_id, chat_id, wish_text, description, status, priority, price, create_date, complete_date
                         FROM wish WHERE user_id = ?1
                         ORDER BY create_date DESC, wish_id DESC",
                    )?;
                    let rows = stmt.query_map(params![user.0], wish_from_row)?;
                    for row in rows {
                        wishes.push(row?);
                    }
                }
            }
            Ok(wishes)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete a wish. Unknown ids are a no-op.
pub async fn delete_wish(db: &Database, id: WishId) -> Result<(), WishgramError> {
    db.connection()
        .call(move |conn| {
            conn.execute("DELETE FROM wish WHERE wish_id = ?1", params![id.0])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Mark a wish completed and stamp the completion time.
pub async fn complete_wish(db: &Database, id: WishId) -> Result<(), WishgramError> {
    let now = chrono::Utc::now().to_rfc3339();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE wish SET status = ?1, complete_date = ?2 WHERE wish_id = ?3",
                params![WishStatus::Completed.to_string(), now, id.0],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Mark a wish cancelled. The completion date stays empty.
pub async fn cancel_wish(db: &Database, id: WishId) -> Result<(), WishgramError> {
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE wish SET status = ?1 WHERE wish_id = ?2",
                params![WishStatus::Cancelled.to_string(), id.0],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

fn wish_from_row(row: &rusqlite::Row<'_>) -> Result<Wish, rusqlite::Error> {
    let status_raw: String = row.get(5)?;
    let status = WishStatus::from_str(&status_raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Wish {
        id: WishId(row.get(0)?),
        user_id: UserId(row.get(1)?),
        chat_id: ChatId(row.get(2)?),
        text: row.get(3)?,
        description: row.get(4)?,
        status,
        priority: row.get(6)?,
        price: row.get(7)?,
        create_date: row.get(8)?,
        complete_date: row.get(9)?,
    })
}
