//! Row types shared by the database accessors.

use sqlx::FromRow;

/// One vocabulary entry eligible for a quiz, from either the common pool
/// or the user's personal words.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct QuizWord {
    pub english_text: String,
    pub translation: String,
}

/// A personal word as listed for deletion.
#[derive(FromRow, Debug, Clone)]
pub struct UserWord {
    pub id: i32,
    pub english_text: String,
    pub translation: String,
}

/// Aggregate over a user's progress log.
#[derive(FromRow, Debug, Clone, Copy, Default)]
pub struct ProgressStats {
    pub total_attempts: i64,
    pub correct_answers: i64,
    pub unique_words: i64,
}
