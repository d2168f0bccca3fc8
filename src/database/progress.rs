//! Queries against the append-only `user_progress` log.

use sqlx::PgPool;

use super::models::{ProgressStats, QuizWord};
use super::users;

/// Appends one attempt record. The word text is snapshotted so the entry
/// survives deletion of the originating word.
pub async fn save_user_progress(
    pool: &PgPool,
    telegram_id: i64,
    word: &QuizWord,
    is_correct: bool,
) -> Result<(), sqlx::Error> {
    let Some(user_id) = users::get_user_id(pool, telegram_id).await? else {
        return Ok(());
    };
    sqlx::query(
        r#"
        INSERT INTO user_progress (user_id, word_english, word_translation, is_correct)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user_id)
    .bind(&word.english_text)
    .bind(&word.translation)
    .bind(is_correct)
    .execute(pool)
    .await?;
    Ok(())
}

/// Aggregates the user's log: attempts, correct answers, distinct words.
pub async fn get_user_stats(pool: &PgPool, telegram_id: i64) -> Result<ProgressStats, sqlx::Error> {
    let Some(user_id) = users::get_user_id(pool, telegram_id).await? else {
        return Ok(ProgressStats::default());
    };
    sqlx::query_as::<_, ProgressStats>(
        r#"
        SELECT
            COUNT(*) AS total_attempts,
            COUNT(*) FILTER (WHERE is_correct) AS correct_answers,
            COUNT(DISTINCT word_english) AS unique_words
        FROM user_progress
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}
