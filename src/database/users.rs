//! Queries against the `users` table: the mapping between Telegram ids
//! and internal numeric ids.

use sqlx::PgPool;

/// Registers a user on first /start. Re-running is a no-op; the stored
/// name is never updated afterwards.
pub async fn add_user(pool: &PgPool, telegram_id: i64, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO users (telegram_id, name) VALUES ($1, $2) ON CONFLICT (telegram_id) DO NOTHING")
        .bind(telegram_id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(())
}

/// Resolves the internal id for a Telegram id, if the user is known.
pub async fn get_user_id(pool: &PgPool, telegram_id: i64) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE telegram_id = $1")
        .bind(telegram_id)
        .fetch_optional(pool)
        .await
}
