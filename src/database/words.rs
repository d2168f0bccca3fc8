//! Queries over the vocabulary tables: the shared `common_words` pool and
//! the per-user `user_words` table.

use sqlx::PgPool;

use super::models::{QuizWord, UserWord};
use super::users;

/// One uniformly random word from the union of the common pool and the
/// user's personal words. `None` when the pool is empty (or the user is
/// unknown and the common pool is empty too).
pub async fn get_random_word(
    pool: &PgPool,
    telegram_id: i64,
) -> Result<Option<QuizWord>, sqlx::Error> {
    let user_id = users::get_user_id(pool, telegram_id).await?;
    sqlx::query_as::<_, QuizWord>(
        r#"
        SELECT english_text, translation FROM (
            SELECT english_text, translation FROM common_words
            UNION
            SELECT english_text, translation FROM user_words WHERE user_id = $1
        ) AS all_words
        ORDER BY RANDOM()
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Every distinct translation across both tables except the correct one.
/// Shuffling and truncation happen in `quiz::build_options`.
pub async fn get_wrong_answers(
    pool: &PgPool,
    correct_translation: &str,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT translation FROM common_words WHERE translation != $1
        UNION
        SELECT translation FROM user_words WHERE translation != $1
        "#,
    )
    .bind(correct_translation)
    .fetch_all(pool)
    .await
}

/// Inserts a personal word. A duplicate (user, english) pair is a silent
/// no-op; the return value tells whether a row was actually written.
pub async fn add_user_word(
    pool: &PgPool,
    telegram_id: i64,
    english_text: &str,
    translation: &str,
    example: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let Some(user_id) = users::get_user_id(pool, telegram_id).await? else {
        return Ok(false);
    };
    let result = sqlx::query(
        r#"
        INSERT INTO user_words (user_id, english_text, translation, example)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, english_text) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(english_text)
    .bind(translation)
    .bind(example)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Lists the user's personal words (for the deletion menu).
pub async fn get_user_words(pool: &PgPool, telegram_id: i64) -> Result<Vec<UserWord>, sqlx::Error> {
    let Some(user_id) = users::get_user_id(pool, telegram_id).await? else {
        return Ok(Vec::new());
    };
    sqlx::query_as::<_, UserWord>(
        "SELECT id, english_text, translation FROM user_words WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Deletes a personal word. The id must belong to the requesting user;
/// a foreign id matches no rows and reports `false`.
pub async fn delete_user_word(
    pool: &PgPool,
    telegram_id: i64,
    word_id: i32,
) -> Result<bool, sqlx::Error> {
    let Some(user_id) = users::get_user_id(pool, telegram_id).await? else {
        return Ok(false);
    };
    let result = sqlx::query("DELETE FROM user_words WHERE id = $1 AND user_id = $2")
        .bind(word_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Total learnable vocabulary for the user: common pool plus own words.
pub async fn get_user_words_count(pool: &PgPool, telegram_id: i64) -> Result<i64, sqlx::Error> {
    let user_id = users::get_user_id(pool, telegram_id).await?;
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM common_words) +
            (SELECT COUNT(*) FROM user_words WHERE user_id = $1)
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}
