use sqlx::SqlitePool;

use super::found;
use crate::db::models::{DbUser, EntityKind};
use crate::db::patch::UserCreate;
use crate::error::MarketplaceError;

pub async fn create_user(pool: &SqlitePool, c: UserCreate) -> Result<i64, MarketplaceError> {
    let id: i64 = sqlx::query_scalar(
        r"
        INSERT INTO users (login, password_hash, first_name, last_name, phone, avatar_url)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING user_id
        ",
    )
    .bind(c.login)
    .bind(c.password_hash)
    .bind(c.first_name)
    .bind(c.last_name)
    .bind(c.phone)
    .bind(c.avatar_url)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<DbUser, MarketplaceError> {
    let row = sqlx::query_as::<_, DbUser>(
        r"
        SELECT user_id, login, password_hash, first_name, last_name, phone, avatar_url
        FROM users
        WHERE user_id = ?
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    found(row, EntityKind::User, id)
}

pub async fn find_user_by_login(
    pool: &SqlitePool,
    login: &str,
) -> Result<Option<DbUser>, MarketplaceError> {
    let row = sqlx::query_as::<_, DbUser>(
        r"
        SELECT user_id, login, password_hash, first_name, last_name, phone, avatar_url
        FROM users
        WHERE login = ?
        ",
    )
    .bind(login)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
