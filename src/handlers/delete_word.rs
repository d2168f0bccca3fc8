//! Listing and deleting personal words.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::error;

use crate::database::words;
use crate::model::AppState;
use crate::ui::keyboards;

/// Entry from the "delete word" menu button: one inline button per word.
pub async fn list(bot: &Bot, state: &Arc<AppState>, chat: ChatId, user: UserId) -> ResponseResult<()> {
    let user_words = match words::get_user_words(&state.db, user.0 as i64).await {
        Ok(words) => words,
        Err(err) => {
            error!(error = ?err, "failed to list words");
            bot.send_message(chat, "⚠️ Что-то пошло не так, попробуйте позже.")
                .await?;
            return Ok(());
        }
    };
    if user_words.is_empty() {
        bot.send_message(chat, "У вас пока нет добавленных слов.")
            .await?;
        return Ok(());
    }
    bot.send_message(chat, "Выберите слово для удаления:")
        .reply_markup(keyboards::delete_keyboard(&user_words))
        .await?;
    Ok(())
}

/// A `delete_<id>` button press. The delete only matches rows owned by the
/// presser, so an id belonging to someone else reports failure.
pub async fn handle_delete(
    bot: &Bot,
    state: &Arc<AppState>,
    query: &CallbackQuery,
    word_id: i32,
) -> ResponseResult<()> {
    bot.answer_callback_query(query.id.clone()).await?;
    let deleted = match words::delete_user_word(&state.db, query.from.id.0 as i64, word_id).await {
        Ok(deleted) => deleted,
        Err(err) => {
            error!(error = ?err, "failed to delete word");
            false
        }
    };
    if let Some(msg) = query.message.as_ref() {
        let text = if deleted {
            "✅ Слово успешно удалено!"
        } else {
            "❌ Ошибка при удалении слова."
        };
        bot.edit_message_text(msg.chat.id, msg.id, text).await?;
    }
    Ok(())
}
