//! Pool construction and schema bootstrap.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DbConfig;

/// Type alias for the shared connection pool.
pub type DbPool = PgPool;

pub async fn connect(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.user)
        .password(&config.password);
    PgPoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Creates the four tables when missing. The common-word pool itself is
/// seeded out-of-band; this only guarantees the shapes exist.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            telegram_id BIGINT NOT NULL UNIQUE,
            name TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS common_words (
            id SERIAL PRIMARY KEY,
            english_text TEXT NOT NULL,
            translation TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS user_words (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id),
            english_text TEXT NOT NULL,
            translation TEXT NOT NULL,
            example TEXT,
            UNIQUE (user_id, english_text)
        )",
        "CREATE TABLE IF NOT EXISTS user_progress (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id),
            word_english TEXT NOT NULL,
            word_translation TEXT NOT NULL,
            is_correct BOOLEAN NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    ];
    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
