//! Aggregate statistics over the user's progress log.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{error, warn};

use crate::database::{progress, words};
use crate::model::AppState;
use crate::quiz;

pub async fn show(bot: &Bot, state: &Arc<AppState>, chat: ChatId, user: UserId) -> ResponseResult<()> {
    let stats = match progress::get_user_stats(&state.db, user.0 as i64).await {
        Ok(stats) => stats,
        Err(err) => {
            error!(error = ?err, "failed to load stats");
            bot.send_message(chat, "⚠️ Что-то пошло не так, попробуйте позже.")
                .await?;
            return Ok(());
        }
    };
    let total_words = words::get_user_words_count(&state.db, user.0 as i64)
        .await
        .unwrap_or_else(|err| {
            warn!(error = ?err, "failed to count words");
            0
        });
    let accuracy = quiz::accuracy(stats.correct_answers, stats.total_attempts);

    let text = format!(
        "📊 *Ваша статистика:*\n\n\
         📚 Всего слов для изучения: {total_words}\n\
         ✍️ Всего попыток: {}\n\
         ✅ Правильных ответов: {}\n\
         📈 Точность: {accuracy:.1}%\n\
         🎯 Изучено уникальных слов: {}",
        stats.total_attempts, stats.correct_answers, stats.unique_words
    );
    bot.send_message(chat, text)
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}
